use polars::prelude::*;

use crate::domain::model::Case;
use crate::exprs::index::row_index;
use crate::utils::error::{Result, TurtleError};
use crate::utils::validation::{validate_min_len, validate_non_negative};

/// Chains `when/then` branches and a fallback into a single expression.
///
/// Branches are tried top to bottom; the first one whose conditions all hold
/// supplies the value. Rows matching no branch take `otherwise`, or null when
/// no fallback is given.
///
/// ```no_run
/// use polars::prelude::*;
/// use turtle_island::{case_when, Case};
///
/// # fn main() -> turtle_island::Result<()> {
/// let size = case_when(
///     [
///         Case::new(col("x").lt(lit(2)), lit("small")),
///         Case::all([col("x").lt(lit(4)), col("y").lt(lit(8))], lit("medium")),
///     ],
///     Some(lit("large")),
/// )?
/// .alias("size");
/// # Ok(())
/// # }
/// ```
pub fn case_when<I, C>(cases: I, otherwise: Option<Expr>) -> Result<Expr>
where
    I: IntoIterator<Item = C>,
    C: Into<Case>,
{
    let cases: Vec<Case> = cases.into_iter().map(Into::into).collect();
    if cases.is_empty() {
        return Err(TurtleError::validation(
            "cases",
            0,
            "`cases` must contain at least one case.",
        ));
    }

    let mut branches = Vec::with_capacity(cases.len());
    for (position, case) in cases.into_iter().enumerate() {
        let condition = case
            .conditions
            .into_iter()
            .reduce(|acc, condition| acc.and(condition))
            .ok_or_else(|| {
                TurtleError::validation(
                    format!("cases[{}]", position),
                    "[]",
                    "Each case needs at least one condition.",
                )
            })?;
        branches.push((condition, case.then));
    }

    tracing::trace!(branches = branches.len(), "building case_when expression");

    let otherwise = otherwise.unwrap_or_else(|| lit(NULL));
    Ok(branches
        .into_iter()
        .rev()
        .fold(otherwise, |fallback, (condition, then)| {
            when(condition).then(then).otherwise(fallback)
        }))
}

/// Appends every expression to the first one, in order.
///
/// The result can be longer than the frame, so use it in `select` (or
/// `list().eval()`) rather than `with_columns`.
pub fn bulk_append<I>(exprs: I) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    let exprs: Vec<Expr> = exprs.into_iter().collect();
    validate_min_len("exprs", exprs.len(), 2, "expressions")?;

    let mut exprs = exprs.into_iter();
    let first = exprs
        .next()
        .ok_or_else(|| TurtleError::validation("exprs", 0, "At least two expressions are required."))?;
    Ok(exprs.fold(first, |acc, expr| acc.append(expr, false)))
}

/// `Expr::shift`, but the vacated rows are taken from `fill_expr`.
///
/// A positive `offset` shifts down and fills the first `offset` rows; a
/// negative one shifts up and fills the last `|offset|` rows. When
/// `|offset|` reaches the row count the whole column comes from `fill_expr`.
pub fn shift(expr: Expr, offset: i64, fill_expr: Expr) -> Expr {
    if offset == 0 {
        return expr;
    }

    let shifted = expr.shift(lit(offset));
    let index = row_index().cast(DataType::Int64);
    let keep = if offset > 0 {
        index.gt_eq(lit(offset))
    } else {
        index.lt(len().cast(DataType::Int64) + lit(offset))
    };

    when(keep).then(shifted).otherwise(fill_expr)
}

/// Prepends `offset` rows taken from `prepend_expr`, or from the leading
/// rows of `expr` itself when `None`.
///
/// At most the current row count can be prepended per call; chain calls
/// inside separate `list().eval()` steps to prepend more.
pub fn prepend(expr: Expr, offset: i64, prepend_expr: Option<Expr>) -> Result<Expr> {
    validate_non_negative("offset", offset)?;
    if offset == 0 {
        return Ok(expr);
    }

    let prepend_expr = prepend_expr.unwrap_or_else(|| expr.clone());
    let head = shift(expr.clone(), offset, prepend_expr).head(Some(offset as usize));
    Ok(head.append(expr, false))
}
