use polars::prelude::*;

use crate::utils::error::Result;
use crate::utils::validation::validate_index_offset;

pub const DEFAULT_INDEX_NAME: &str = "index";

/// Unnamed `0..len()` position of each row, as `UInt32`.
pub(crate) fn row_index() -> Expr {
    int_range(lit(0), len(), 1, DataType::UInt32)
}

/// Virtual row index starting at `offset`, named `name`.
///
/// Evaluates to the same values and dtype as `DataFrame::with_row_index`,
/// but composes inline: nothing is materialised until the expression runs,
/// and in a `list().eval()` context it counts list elements instead of rows.
///
/// ```no_run
/// use polars::prelude::*;
/// use turtle_island::make_index;
///
/// # fn main() -> turtle_island::Result<()> {
/// let df = df!("a" => [1, 3, 5])?;
/// let out = df.lazy().select([make_index("index", 0)?, all()]).collect()?;
/// # Ok(())
/// # }
/// ```
pub fn make_index(name: &str, offset: i64) -> Result<Expr> {
    let offset = validate_index_offset("offset", offset)?;
    tracing::trace!(name, offset, "building row index expression");
    Ok((row_index() + lit(offset)).alias(name))
}
