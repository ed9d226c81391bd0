//! Composable expression builders for Polars.
//!
//! Every builder returns an unevaluated [`polars::prelude::Expr`] (or a list
//! of them) meant for `select`, `with_columns`, `filter` or `list().eval()`.
//! The [`core`] and [`config`] modules add a small runner that applies a
//! TOML recipe of these expressions to a CSV file.

pub mod config;
pub mod core;
pub mod domain;
pub mod exprs;
pub mod utils;

pub use config::{recipe_config::RecipeConfig, storage::LocalStorage};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::RecipeEngine, recipe_pipeline::CsvRecipePipeline};
pub use domain::model::{
    Case, ColumnSelector, HyperlinkOptions, LiteralItem, TextDecorationStyle, TooltipOptions,
};
pub use exprs::{
    bucketize, bucketize_lit, bulk_append, case_when, cycle, is_every_nth_row, make_concat_str,
    make_hyperlink, make_index, make_tooltip, move_cols_to_end, move_cols_to_start, prepend,
    shift, DEFAULT_PLACEHOLDER, NTH_ROW_NAME,
};
pub use utils::error::{Result, TurtleError};
