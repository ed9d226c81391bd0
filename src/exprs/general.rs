use polars::prelude::*;

use crate::domain::model::{ColumnSelector, LiteralItem};
use crate::exprs::common::shift;
use crate::exprs::helpers::{cast_to_item_dtype, litify, round_robin, selector_exprs};
use crate::exprs::index::row_index;
use crate::utils::error::{Result, TurtleError};
use crate::utils::validation::{
    validate_min_len, validate_non_empty_string, validate_non_negative, validate_positive,
};

pub const BUCKETIZE_NAME: &str = "bucketized";
pub const NTH_ROW_NAME: &str = "bool_nth_row";
pub const DEFAULT_PLACEHOLDER: &str = "[$X]";
pub const CONCAT_STR_NAME: &str = "literal";

/// Cycles through `exprs` by row position: row `i` gets `exprs[i % N]`.
///
/// The result is named `"bucketized"`. All expressions should resolve to
/// one dtype; set `return_dtype` when literal inference would pick a
/// different one than intended.
pub fn bucketize<I>(exprs: I, return_dtype: Option<DataType>) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    let exprs: Vec<Expr> = exprs.into_iter().collect();
    validate_min_len("exprs", exprs.len(), 2, "expressions")?;

    let expr = round_robin(exprs)?;
    Ok(match return_dtype {
        Some(dtype) => expr.cast(dtype),
        None => expr,
    })
}

/// Literal form of [`bucketize`].
///
/// Every item must be the same [`LiteralItem`] variant. Without
/// `return_dtype` the result is cast according to the kind of the first
/// item (integers to `Int64`, dates to `Date`, and so on).
pub fn bucketize_lit<I, T>(items: I, return_dtype: Option<DataType>) -> Result<Expr>
where
    I: IntoIterator<Item = T>,
    T: Into<LiteralItem>,
{
    let items: Vec<LiteralItem> = items.into_iter().map(Into::into).collect();
    validate_min_len("items", items.len(), 2, "items")?;

    let first = items[0].clone();
    if let Some(odd) = items.iter().find(|item| !item.same_kind(&first)) {
        return Err(TurtleError::validation(
            "items",
            odd.kind_name(),
            "`items` must contain only one unique type.",
        ));
    }

    let expr = round_robin(litify(&items)?)?;
    Ok(match return_dtype {
        Some(dtype) => expr.cast(dtype),
        None => cast_to_item_dtype(expr, &first),
    })
}

/// `true` on every `n`-th row starting at row `offset`, named `name`
/// (usually [`NTH_ROW_NAME`]).
///
/// `filter(is_every_nth_row(n, offset, name)?)` keeps the same rows as
/// `gather_every(n, offset)`, while `with_columns` keeps the frame intact.
/// An `offset` past the last row gives an all-`false` column.
pub fn is_every_nth_row(n: i64, offset: i64, name: &str) -> Result<Expr> {
    validate_positive("n", n)?;
    validate_non_negative("offset", offset)?;
    let n = u32::try_from(n)
        .map_err(|_| TurtleError::validation("n", n, format!("Value must be at most {}", u32::MAX)))?;

    let mask = (row_index() % lit(n)).eq(lit(0u32));
    Ok(shift(mask, offset, lit(false)).alias(name))
}

/// Rotates the rows of `expr` by `offset`; positive values move rows downward.
pub fn cycle(expr: Expr, offset: i64) -> Expr {
    if offset == 0 {
        return expr;
    }

    let length = len().cast(DataType::Int64);
    // floored modulo whatever the engine's sign convention for `%`
    let rotation = ((lit(offset) % length.clone()) + length.clone()) % length.clone();
    let split = length.clone() - rotation;

    expr.clone()
        .slice(split.clone(), length)
        .append(expr.slice(lit(0i64), split), false)
}

/// Builds a string column from `template`, replacing each `sep` with the
/// next column of `col_names`.
///
/// The separator must not occur in the fixed text of the template.
///
/// ```no_run
/// use turtle_island::{make_concat_str, DEFAULT_PLACEHOLDER};
///
/// # fn main() -> turtle_island::Result<()> {
/// let p_tag = make_concat_str(
///     r#"<p style="color: steelblue;">[$X]</p>"#,
///     ["text"],
///     DEFAULT_PLACEHOLDER,
///     "p_tag",
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn make_concat_str<I, S>(template: &str, col_names: I, sep: &str, name: &str) -> Result<Expr>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_non_empty_string("sep", sep)?;
    let col_names: Vec<S> = col_names.into_iter().collect();
    for col_name in &col_names {
        validate_non_empty_string("col_names", col_name.as_ref())?;
    }

    let segments: Vec<&str> = template.split(sep).collect();
    let placeholders = segments.len() - 1;
    if placeholders != col_names.len() {
        return Err(TurtleError::validation(
            "template",
            template,
            format!(
                "The number of placeholders in the template is {}, which does not match the number of column names ({}).",
                placeholders,
                col_names.len()
            ),
        ));
    }

    let mut parts = Vec::with_capacity(segments.len() + col_names.len());
    let mut columns = col_names.iter();
    for segment in segments {
        parts.push(lit(segment));
        if let Some(col_name) = columns.next() {
            parts.push(col(col_name.as_ref()));
        }
    }

    Ok(concat_str(parts, "", false).alias(name))
}

/// Expressions for `select` that put the selected columns first.
///
/// By name the columns come out in the order given; by dtype they keep
/// schema order. Every other column follows in its original order.
pub fn move_cols_to_start(columns: impl Into<ColumnSelector>) -> Result<Vec<Expr>> {
    let (mut selected, rest) = selector_exprs(&columns.into())?;
    selected.push(rest);
    Ok(selected)
}

/// Expressions for `select` that put the selected columns last.
pub fn move_cols_to_end(columns: impl Into<ColumnSelector>) -> Result<Vec<Expr>> {
    let (selected, rest) = selector_exprs(&columns.into())?;
    let mut exprs = Vec::with_capacity(selected.len() + 1);
    exprs.push(rest);
    exprs.extend(selected);
    Ok(exprs)
}
