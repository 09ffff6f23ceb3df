//! Column mapping and reordering utilities for Polars DataFrames.
//!
//! This crate provides two small, stateless conveniences on top of Polars:
//!
//! - **map**: derive new columns from existing ones via a lookup table or a
//!   caller-supplied function ([`map_columns`])
//! - **reorder**: move a column to a new position by index or name
//!   ([`move_column`], [`move_column_by_name`])
//! - **rule**: the typed mapping rules and column shapes ([`MapRule`],
//!   [`LookupTable`], [`ColumnSpec`])
//! - **lookup**: case-insensitive column-name resolution ([`ColumnLookup`])
//!
//! All columnar storage and iteration belongs to Polars; these functions
//! only validate argument shapes and delegate. Inputs are read-only —
//! every operation returns a new frame.
//!
//! # Example
//!
//! ```
//! use frame_maps::{map_columns, LookupTable, MapRule};
//! use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
//!
//! let df = DataFrame::new(vec![
//!     Series::new("sex".into(), vec!["F", "M", "U"]).into(),
//! ])
//! .unwrap();
//!
//! let mut table = LookupTable::with_default(AnyValue::String("UNKNOWN"));
//! table.insert(AnyValue::String("F"), AnyValue::String("Female"));
//! table.insert(AnyValue::String("M"), AnyValue::String("Male"));
//!
//! let out = map_columns(&df, "sex", "sex_label", &MapRule::Lookup(table)).unwrap();
//! let labels = out.column("sex_label").unwrap().str().unwrap();
//! assert_eq!(labels.get(0), Some("Female"));
//! assert_eq!(labels.get(2), Some("UNKNOWN"));
//! ```

pub mod error;
pub mod lookup;
pub mod map;
pub mod reorder;
pub mod rule;

pub use error::{FrameMapError, Result};
pub use lookup::ColumnLookup;
pub use map::map_columns;
pub use reorder::{move_column, move_column_by_name};
pub use rule::{ColumnSpec, CombineFn, FanoutFn, LookupTable, MapRule, ScalarFn};
