//! Expression builders. Everything here returns unevaluated Polars
//! expressions; nothing touches data until a frame is collected.

pub mod common;
pub mod general;
mod helpers;
pub mod html;
pub mod index;

pub use common::{bulk_append, case_when, prepend, shift};
pub use general::{
    bucketize, bucketize_lit, cycle, is_every_nth_row, make_concat_str, move_cols_to_end,
    move_cols_to_start, BUCKETIZE_NAME, CONCAT_STR_NAME, DEFAULT_PLACEHOLDER, NTH_ROW_NAME,
};
pub use html::{make_hyperlink, make_tooltip};
pub use index::{make_index, DEFAULT_INDEX_NAME};
