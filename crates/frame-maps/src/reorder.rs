//! Column reordering within a frame.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{FrameMapError, Result};
use crate::lookup::ColumnLookup;

/// Move the column at `from_index` so it ends up at `to_index`.
///
/// Remove-then-insert semantics: the name is removed from the column order
/// first, and `to_index` addresses the resulting shorter list. Moving a
/// column forward therefore lands it exactly at `to_index` of the final
/// order, not one past it. Both indices must lie inside the current column
/// order; `from_index == to_index` is a no-op.
///
/// Only the column order changes — the returned frame holds the same
/// columns with the same data.
///
/// # Example
///
/// ```
/// use frame_maps::move_column;
/// use polars::prelude::{DataFrame, NamedFrom, Series};
///
/// let df = DataFrame::new(vec![
///     Series::new("a".into(), vec![1i64]).into(),
///     Series::new("b".into(), vec![2i64]).into(),
///     Series::new("c".into(), vec![3i64]).into(),
/// ])
/// .unwrap();
///
/// let out = move_column(&df, 0, 2).unwrap();
/// let names: Vec<String> = out.get_column_names().iter().map(|s| s.to_string()).collect();
/// assert_eq!(names, vec!["b", "c", "a"]);
/// ```
pub fn move_column(df: &DataFrame, from_index: usize, to_index: usize) -> Result<DataFrame> {
    let width = df.width();
    if from_index >= width {
        return Err(FrameMapError::IndexOutOfRange {
            index: from_index,
            width,
        });
    }
    if to_index >= width {
        return Err(FrameMapError::IndexOutOfRange {
            index: to_index,
            width,
        });
    }

    let mut names = df.get_column_names_owned();
    let moved = names.remove(from_index);
    names.insert(to_index, moved);

    let out = df.select(names)?;
    debug!(from_index, to_index, "Column moved");
    Ok(out)
}

/// Move the named column so it ends up at `to_index`.
///
/// The name is resolved case-insensitively (first occurrence wins); the
/// move itself follows [`move_column`] semantics.
pub fn move_column_by_name(df: &DataFrame, name: &str, to_index: usize) -> Result<DataFrame> {
    let Some(from_index) = ColumnLookup::new(df).position(name) else {
        return Err(FrameMapError::ColumnNotFound(name.to_string()));
    };
    move_column(df, from_index, to_index)
}
