//! Mapping rule and column-shape types.
//!
//! A [`MapRule`] names the kind of transformation up front instead of
//! sniffing it from argument shapes at runtime: a finite [`LookupTable`],
//! a per-value [`Scalar`](MapRule::Scalar) function, a per-value
//! [`Fanout`](MapRule::Fanout) function producing several target values, or
//! a per-row [`Combine`](MapRule::Combine) function over several source
//! values. There is deliberately no many-to-many variant.

use std::fmt;

use polars::prelude::AnyValue;

/// One column name or an ordered list of column names.
///
/// Conversions from `&str`, `String`, vectors, and string arrays let call
/// sites pass column references directly:
///
/// ```
/// use frame_maps::ColumnSpec;
///
/// assert_eq!(ColumnSpec::from("a"), ColumnSpec::One("a".to_string()));
/// assert!(matches!(ColumnSpec::from(["y", "z"]), ColumnSpec::Many(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// A single column name.
    One(String),
    /// An ordered list of column names.
    Many(Vec<String>),
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<Vec<String>> for ColumnSpec {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl<'a> From<Vec<&'a str>> for ColumnSpec {
    fn from(names: Vec<&'a str>) -> Self {
        Self::Many(names.into_iter().map(ToString::to_string).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for ColumnSpec {
    fn from(names: [&'a str; N]) -> Self {
        Self::Many(names.iter().map(ToString::to_string).collect())
    }
}

/// A finite value-to-value mapping with a default for unmatched keys.
///
/// Keys and values are Polars [`AnyValue`]s, so a table can map any cell
/// value a column can hold. Key equality is `AnyValue` equality; key tables
/// with the column's dtype. Entries are probed in insertion order, which
/// keeps the table free of any hashing requirements on `AnyValue` — tables
/// are caller-authored constants and expected to stay small.
#[derive(Debug, Clone)]
pub struct LookupTable {
    entries: Vec<(AnyValue<'static>, AnyValue<'static>)>,
    default: AnyValue<'static>,
}

impl LookupTable {
    /// Create an empty table whose default is null.
    pub fn new() -> Self {
        Self::with_default(AnyValue::Null)
    }

    /// Create an empty table with an explicit default for unmatched keys.
    pub fn with_default(default: AnyValue<'static>) -> Self {
        Self {
            entries: Vec::new(),
            default,
        }
    }

    /// Insert a key/value pair, replacing the value of an existing equal key.
    pub fn insert(&mut self, key: AnyValue<'static>, value: AnyValue<'static>) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.0 == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a key, falling back to the table default when absent.
    pub fn get(&self, key: &AnyValue<'_>) -> &AnyValue<'static> {
        self.entries
            .iter()
            .find(|entry| entry.0 == *key)
            .map(|entry| &entry.1)
            .unwrap_or(&self.default)
    }

    /// The default value returned for unmatched keys.
    pub fn default_value(&self) -> &AnyValue<'static> {
        &self.default
    }

    /// Number of explicit entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(AnyValue<'static>, AnyValue<'static>)> for LookupTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (AnyValue<'static>, AnyValue<'static>)>,
    {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Per-value function for one-to-one mappings.
pub type ScalarFn = Box<dyn Fn(AnyValue<'static>) -> AnyValue<'static>>;

/// Per-value function for one-to-many mappings.
///
/// Must return exactly one value per declared target column, in target
/// column order, for every row.
pub type FanoutFn = Box<dyn Fn(AnyValue<'static>) -> Vec<AnyValue<'static>>>;

/// Per-row function for many-to-one mappings.
///
/// Receives the source values of one row in the declared column order.
pub type CombineFn = Box<dyn Fn(&[AnyValue<'static>]) -> AnyValue<'static>>;

/// The kind of transformation a mapping applies.
///
/// Functions are expected to be pure: output row order is input row order,
/// and a rule is invoked once per row with no other observable effects.
pub enum MapRule {
    /// Finite value lookup with a default; maps one column to one column.
    Lookup(LookupTable),
    /// Per-value function; maps one column to one column.
    Scalar(ScalarFn),
    /// Per-value function returning one value per target column.
    Fanout(FanoutFn),
    /// Per-row function over several source values returning one value.
    Combine(CombineFn),
}

impl MapRule {
    /// A [`MapRule::Lookup`] over the given table.
    pub fn lookup(table: LookupTable) -> Self {
        Self::Lookup(table)
    }

    /// A [`MapRule::Scalar`] from the given function.
    pub fn scalar<F>(function: F) -> Self
    where
        F: Fn(AnyValue<'static>) -> AnyValue<'static> + 'static,
    {
        Self::Scalar(Box::new(function))
    }

    /// A [`MapRule::Fanout`] from the given function.
    pub fn fanout<F>(function: F) -> Self
    where
        F: Fn(AnyValue<'static>) -> Vec<AnyValue<'static>> + 'static,
    {
        Self::Fanout(Box::new(function))
    }

    /// A [`MapRule::Combine`] from the given function.
    pub fn combine<F>(function: F) -> Self
    where
        F: Fn(&[AnyValue<'static>]) -> AnyValue<'static> + 'static,
    {
        Self::Combine(Box::new(function))
    }
}

impl fmt::Debug for MapRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup(table) => f.debug_tuple("Lookup").field(table).finish(),
            Self::Scalar(_) => f.write_str("Scalar(..)"),
            Self::Fanout(_) => f.write_str("Fanout(..)"),
            Self::Combine(_) => f.write_str("Combine(..)"),
        }
    }
}
