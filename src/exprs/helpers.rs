use polars::prelude::*;

use crate::domain::model::{Case, ColumnSelector, LiteralItem};
use crate::exprs::common::case_when;
use crate::exprs::index::row_index;
use crate::utils::error::{Result, TurtleError};

pub(crate) fn litify(items: &[LiteralItem]) -> Result<Vec<Expr>> {
    items.iter().map(LiteralItem::to_expr).collect()
}

pub(crate) fn cast_to_item_dtype(expr: Expr, item: &LiteralItem) -> Expr {
    expr.cast(item.dtype())
}

/// Row `i` takes `exprs[i % exprs.len()]`; the last expression is the fallback branch.
pub(crate) fn round_robin(mut exprs: Vec<Expr>) -> Result<Expr> {
    let buckets = u32::try_from(exprs.len())
        .map_err(|_| TurtleError::validation("exprs", exprs.len(), "Too many expressions"))?;
    let otherwise = exprs
        .pop()
        .ok_or_else(|| TurtleError::validation("exprs", 0, "No expressions given"))?;

    let position = row_index() % lit(buckets);
    let cases = exprs
        .into_iter()
        .enumerate()
        .map(|(bucket, expr)| Case::new(position.clone().eq(lit(bucket as u32)), expr));

    tracing::trace!(buckets, "building round-robin expression");
    Ok(case_when(cases, Some(otherwise))?.alias("bucketized"))
}

/// `(selected, rest)` for a column move; by name the selection keeps the given order.
pub(crate) fn selector_exprs(selector: &ColumnSelector) -> Result<(Vec<Expr>, Expr)> {
    if selector.is_empty() {
        return Err(TurtleError::validation(
            "columns",
            "[]",
            "At least one column name or data type must be given.",
        ));
    }

    let split = match selector {
        ColumnSelector::Names(names) => {
            let selected = names.iter().map(|name| col(name.as_str())).collect();
            (selected, all().exclude(names.clone()))
        }
        ColumnSelector::DataTypes(dtypes) => {
            (vec![dtype_cols(dtypes.clone())], all().exclude_dtype(dtypes.clone()))
        }
    };
    Ok(split)
}
