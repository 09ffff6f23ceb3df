//! Column mapping over a frame.
//!
//! [`map_columns`] dispatches on the rule kind and the source/target column
//! shapes, then delegates the per-row work to Polars: read a cell, apply the
//! rule, collect the results, and attach them as new columns. The input
//! frame is never mutated; every mode returns a fresh frame whose row order
//! and row count match the input exactly.

use polars::prelude::{AnyValue, DataFrame, Series};
use tracing::debug;

use crate::error::{FrameMapError, Result};
use crate::rule::{ColumnSpec, CombineFn, FanoutFn, LookupTable, MapRule, ScalarFn};

/// Map values of one or more source columns into one or more target columns.
///
/// The rule kind determines which source/target shapes are accepted:
///
/// - [`MapRule::Lookup`]: one source, one target — table lookup with the
///   table default for missing keys
/// - [`MapRule::Scalar`]: one source, one target — function applied to
///   each value
/// - [`MapRule::Fanout`]: one source, many targets — function returns one
///   value per target column
/// - [`MapRule::Combine`]: many sources, one target — function over each
///   row's source values in column order
///
/// Any function rule given a list of sources *and* a list of targets fails
/// with [`FrameMapError::Unsupported`]; every other shape mismatch fails
/// with [`FrameMapError::InvalidMapping`]. Shape and column checks run
/// before any row is processed. A target name that already exists in the
/// frame has its values replaced; a new name is appended after the existing
/// columns.
///
/// # Arguments
///
/// * `df` - The frame to read from
/// * `from` - Source column name(s), in the order the rule expects them
/// * `to` - Target column name(s) to create or overwrite
/// * `rule` - The transformation to apply
///
/// # Example
///
/// ```
/// use frame_maps::{map_columns, MapRule};
/// use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
///
/// let df = DataFrame::new(vec![
///     Series::new("dose".into(), vec![10i64, 25, 50]).into(),
/// ])
/// .unwrap();
///
/// let doubled = MapRule::scalar(|value| match value {
///     AnyValue::Int64(v) => AnyValue::Int64(v * 2),
///     _ => AnyValue::Null,
/// });
/// let out = map_columns(&df, "dose", "dose_x2", &doubled).unwrap();
///
/// let col = out.column("dose_x2").unwrap().i64().unwrap();
/// assert_eq!(col.get(1), Some(50));
/// ```
pub fn map_columns(
    df: &DataFrame,
    from: impl Into<ColumnSpec>,
    to: impl Into<ColumnSpec>,
    rule: &MapRule,
) -> Result<DataFrame> {
    let from = from.into();
    let to = to.into();
    match rule {
        MapRule::Lookup(table) => match (&from, &to) {
            (ColumnSpec::One(src), ColumnSpec::One(dst)) => map_lookup(df, src, dst, table),
            (ColumnSpec::Many(_), _) => Err(FrameMapError::invalid_mapping(
                "lookup rules map a single source column, not a list of columns",
            )),
            (_, ColumnSpec::Many(_)) => Err(FrameMapError::invalid_mapping(
                "lookup rules produce a single target column, not a list of columns",
            )),
        },
        MapRule::Scalar(function) => match (&from, &to) {
            (ColumnSpec::One(src), ColumnSpec::One(dst)) => map_scalar(df, src, dst, function),
            (ColumnSpec::Many(_), ColumnSpec::Many(_)) => Err(FrameMapError::Unsupported),
            _ => Err(FrameMapError::invalid_mapping(
                "scalar rules map one source column to one target column",
            )),
        },
        MapRule::Fanout(function) => match (&from, &to) {
            (ColumnSpec::One(src), ColumnSpec::Many(dsts)) => map_fanout(df, src, dsts, function),
            (ColumnSpec::Many(_), ColumnSpec::Many(_)) => Err(FrameMapError::Unsupported),
            _ => Err(FrameMapError::invalid_mapping(
                "fanout rules map one source column to a list of target columns",
            )),
        },
        MapRule::Combine(function) => match (&from, &to) {
            (ColumnSpec::Many(srcs), ColumnSpec::One(dst)) => map_combine(df, srcs, dst, function),
            (ColumnSpec::Many(_), ColumnSpec::Many(_)) => Err(FrameMapError::Unsupported),
            _ => Err(FrameMapError::invalid_mapping(
                "combine rules map a list of source columns to one target column",
            )),
        },
    }
}

/// Look up each source value in the table, substituting the table default
/// when absent.
fn map_lookup(df: &DataFrame, src: &str, dst: &str, table: &LookupTable) -> Result<DataFrame> {
    let column = df.column(src)?;
    let mut values: Vec<AnyValue<'static>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let cell = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(table.get(&cell).clone());
    }

    let out = attach_column(df, dst, &values)?;
    debug!(rows = out.height(), source = src, target = dst, "Lookup mapping applied");
    Ok(out)
}

/// Apply the function to each source value independently.
fn map_scalar(df: &DataFrame, src: &str, dst: &str, function: &ScalarFn) -> Result<DataFrame> {
    let column = df.column(src)?;
    let mut values: Vec<AnyValue<'static>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let cell = column.get(idx).unwrap_or(AnyValue::Null).into_static();
        values.push(function(cell));
    }

    let out = attach_column(df, dst, &values)?;
    debug!(rows = out.height(), source = src, target = dst, "Scalar mapping applied");
    Ok(out)
}

/// Apply the function to each source value, unpacking result `i` into
/// target column `i`.
///
/// Fails on the first row whose result length differs from the target
/// count; no frame is returned in that case.
fn map_fanout(
    df: &DataFrame,
    src: &str,
    dsts: &[String],
    function: &FanoutFn,
) -> Result<DataFrame> {
    let column = df.column(src)?;
    let mut columns: Vec<Vec<AnyValue<'static>>> = (0..dsts.len())
        .map(|_| Vec::with_capacity(df.height()))
        .collect();
    for idx in 0..df.height() {
        let cell = column.get(idx).unwrap_or(AnyValue::Null).into_static();
        let row = function(cell);
        if row.len() != dsts.len() {
            return Err(FrameMapError::FanoutWidth {
                row: idx,
                expected: dsts.len(),
                actual: row.len(),
            });
        }
        for (slot, value) in columns.iter_mut().zip(row) {
            slot.push(value);
        }
    }

    let mut out = df.clone();
    for (name, values) in dsts.iter().zip(&columns) {
        out.with_column(Series::from_any_values(name.as_str().into(), values, false)?)?;
    }
    debug!(rows = out.height(), source = src, targets = ?dsts, "Fanout mapping applied");
    Ok(out)
}

/// Gather each row's source values in column order and apply the function
/// to the record.
fn map_combine(
    df: &DataFrame,
    srcs: &[String],
    dst: &str,
    function: &CombineFn,
) -> Result<DataFrame> {
    let mut sources = Vec::with_capacity(srcs.len());
    for name in srcs {
        sources.push(df.column(name.as_str())?);
    }

    let mut values: Vec<AnyValue<'static>> = Vec::with_capacity(df.height());
    let mut record: Vec<AnyValue<'static>> = Vec::with_capacity(sources.len());
    for idx in 0..df.height() {
        record.clear();
        for column in &sources {
            record.push(column.get(idx).unwrap_or(AnyValue::Null).into_static());
        }
        values.push(function(&record));
    }

    let out = attach_column(df, dst, &values)?;
    debug!(rows = out.height(), sources = ?srcs, target = dst, "Combine mapping applied");
    Ok(out)
}

/// Build a series from the collected values and add or overwrite it on a
/// clone of the frame.
fn attach_column(df: &DataFrame, name: &str, values: &[AnyValue<'static>]) -> Result<DataFrame> {
    let series = Series::from_any_values(name.into(), values, false)?;
    let mut out = df.clone();
    out.with_column(series)?;
    Ok(out)
}
