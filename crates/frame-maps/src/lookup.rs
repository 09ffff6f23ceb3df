//! Case-insensitive column-name resolution.

use std::collections::HashMap;

use polars::prelude::DataFrame;

/// Maps case-insensitive column names to their positions in a frame's
/// column order.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    positions: HashMap<String, usize>,
}

impl ColumnLookup {
    /// Index the frame's current column order. When two names collide
    /// case-insensitively, the first occurrence wins.
    pub fn new(df: &DataFrame) -> Self {
        let mut positions = HashMap::new();
        for (index, name) in df.get_column_names().iter().enumerate() {
            positions.entry(name.to_ascii_uppercase()).or_insert(index);
        }
        Self { positions }
    }

    /// Position of the named column, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_ascii_uppercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(&name.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::{NamedFrom, Series};

    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("STUDYID".into(), vec!["S1"]).into(),
            Series::new("usubjid".into(), vec!["P1"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_names_case_insensitively() {
        let lookup = ColumnLookup::new(&sample_frame());

        assert_eq!(lookup.position("studyid"), Some(0));
        assert_eq!(lookup.position("USUBJID"), Some(1));
        assert!(lookup.contains("Usubjid"));
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let lookup = ColumnLookup::new(&sample_frame());

        assert_eq!(lookup.position("DOMAIN"), None);
        assert!(!lookup.contains("DOMAIN"));
    }
}
