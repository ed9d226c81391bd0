use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::TurtleError;

/// One `when ... then ...` branch. All conditions must hold (they are AND-combined).
#[derive(Debug, Clone)]
pub struct Case {
    pub conditions: Vec<Expr>,
    pub then: Expr,
}

impl Case {
    pub fn new(condition: Expr, then: Expr) -> Self {
        Self {
            conditions: vec![condition],
            then,
        }
    }

    pub fn all<I>(conditions: I, then: Expr) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        Self {
            conditions: conditions.into_iter().collect(),
            then,
        }
    }
}

impl From<(Expr, Expr)> for Case {
    fn from((condition, then): (Expr, Expr)) -> Self {
        Self::new(condition, then)
    }
}

impl From<(Vec<Expr>, Expr)> for Case {
    fn from((conditions, then): (Vec<Expr>, Expr)) -> Self {
        Self::all(conditions, then)
    }
}

/// Columns to move, either by name (regex `^...$` allowed) or by data type, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSelector {
    Names(Vec<String>),
    DataTypes(Vec<DataType>),
}

impl ColumnSelector {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Names(names) => names.is_empty(),
            Self::DataTypes(dtypes) => dtypes.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::DataTypes(dtypes) => dtypes.len(),
        }
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        Self::Names(vec![name.to_string()])
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        Self::Names(vec![name])
    }
}

impl From<Vec<&str>> for ColumnSelector {
    fn from(names: Vec<&str>) -> Self {
        Self::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for ColumnSelector {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl<const N: usize> From<[&str; N]> for ColumnSelector {
    fn from(names: [&str; N]) -> Self {
        Self::Names(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<DataType> for ColumnSelector {
    fn from(dtype: DataType) -> Self {
        Self::DataTypes(vec![dtype])
    }
}

impl From<Vec<DataType>> for ColumnSelector {
    fn from(dtypes: Vec<DataType>) -> Self {
        Self::DataTypes(dtypes)
    }
}

impl<const N: usize> From<[DataType; N]> for ColumnSelector {
    fn from(dtypes: [DataType; N]) -> Self {
        Self::DataTypes(dtypes.to_vec())
    }
}

/// Scalar literal accepted by `bucketize_lit`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralItem {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
    Time(NaiveTime),
    Duration(TimeDelta),
}

impl LiteralItem {
    /// The dtype a round-robin over items of this kind is cast to.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::Boolean(_) => DataType::Boolean,
            Self::Int(_) => DataType::Int64,
            Self::Float(_) => DataType::Float64,
            Self::String(_) => DataType::String,
            Self::Date(_) => DataType::Date,
            Self::Datetime(_) => DataType::Datetime(TimeUnit::Microseconds, None),
            Self::Time(_) => DataType::Time,
            Self::Duration(_) => DataType::Duration(TimeUnit::Microseconds),
        }
    }

    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Datetime(_) => "datetime",
            Self::Time(_) => "time",
            Self::Duration(_) => "duration",
        }
    }

    // Temporal values go through their physical integer representation.
    pub fn to_expr(&self) -> crate::utils::error::Result<Expr> {
        let expr = match self {
            Self::Boolean(value) => lit(*value),
            Self::Int(value) => lit(*value),
            Self::Float(value) => lit(*value),
            Self::String(value) => lit(value.clone()),
            Self::Date(date) => {
                // NaiveDate::default() is 1970-01-01
                let days = date.signed_duration_since(NaiveDate::default()).num_days();
                let days = i32::try_from(days).map_err(|_| {
                    TurtleError::validation("items", date, "Date is out of range for `Date`.")
                })?;
                lit(days).cast(DataType::Date)
            }
            Self::Datetime(datetime) => {
                lit(datetime.and_utc().timestamp_micros()).cast(self.dtype())
            }
            Self::Time(time) => {
                let nanos = i64::from(time.num_seconds_from_midnight()) * 1_000_000_000
                    + i64::from(time.nanosecond());
                lit(nanos).cast(DataType::Time)
            }
            Self::Duration(delta) => {
                let micros = delta.num_microseconds().ok_or_else(|| {
                    TurtleError::validation(
                        "items",
                        delta,
                        "Duration does not fit in 64-bit microseconds.",
                    )
                })?;
                lit(micros).cast(self.dtype())
            }
        };
        Ok(expr)
    }
}

impl From<bool> for LiteralItem {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for LiteralItem {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for LiteralItem {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for LiteralItem {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for LiteralItem {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralItem {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for LiteralItem {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for LiteralItem {
    fn from(value: NaiveDateTime) -> Self {
        Self::Datetime(value)
    }
}

impl From<NaiveTime> for LiteralItem {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<TimeDelta> for LiteralItem {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecorationStyle {
    Solid,
    #[default]
    Dotted,
    None,
}

impl fmt::Display for TextDecorationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for TextDecorationStyle {
    type Err = TurtleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dotted" => Ok(Self::Dotted),
            "none" => Ok(Self::None),
            other => Err(TurtleError::validation(
                "text_decoration_style",
                other,
                "`text_decoration_style` must be one of 'none', 'solid', or 'dotted'",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkOptions {
    /// `target="_blank"` when true, `target="_self"` otherwise.
    pub new_tab: bool,
    pub name: String,
}

impl Default for HyperlinkOptions {
    fn default() -> Self {
        Self {
            new_tab: true,
            name: "hyperlink".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipOptions {
    pub text_decoration_style: TextDecorationStyle,
    /// Any CSS color; `"none"` leaves the color out of the style.
    pub color: String,
    pub name: String,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            text_decoration_style: TextDecorationStyle::Dotted,
            color: "blue".to_string(),
            name: "tooltip".to_string(),
        }
    }
}

/// Parses the dtype names accepted in recipe files.
pub fn parse_dtype(name: &str) -> crate::utils::error::Result<DataType> {
    let dtype = match name.trim().to_ascii_lowercase().as_str() {
        "boolean" | "bool" => DataType::Boolean,
        "int32" => DataType::Int32,
        "int64" => DataType::Int64,
        "uint32" => DataType::UInt32,
        "float64" => DataType::Float64,
        "string" | "str" => DataType::String,
        "date" => DataType::Date,
        "datetime" => DataType::Datetime(TimeUnit::Microseconds, None),
        "time" => DataType::Time,
        "duration" => DataType::Duration(TimeUnit::Microseconds),
        _ => {
            return Err(TurtleError::validation(
                "dtypes",
                name,
                "invalid type specifier",
            ))
        }
    };
    Ok(dtype)
}
