use polars::prelude::{col, DataType, Expr};
use serde::{Deserialize, Serialize};

use crate::domain::model::{
    parse_dtype, ColumnSelector, HyperlinkOptions, LiteralItem, TextDecorationStyle,
    TooltipOptions,
};
use crate::exprs;
use crate::utils::error::{Result, TurtleError};

/// Scalar as written in a recipe file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeLiteral {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&RecipeLiteral> for LiteralItem {
    fn from(value: &RecipeLiteral) -> Self {
        match value {
            RecipeLiteral::Bool(v) => LiteralItem::Boolean(*v),
            RecipeLiteral::Int(v) => LiteralItem::Int(*v),
            RecipeLiteral::Float(v) => LiteralItem::Float(*v),
            RecipeLiteral::Text(v) => LiteralItem::String(v.clone()),
        }
    }
}

/// One `[[steps]]` entry of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RecipeStep {
    Index {
        #[serde(default = "default_index_name")]
        name: String,
        #[serde(default)]
        offset: i64,
    },
    BucketizeLit {
        items: Vec<RecipeLiteral>,
        #[serde(default = "default_bucketize_name")]
        name: String,
        #[serde(default)]
        return_dtype: Option<String>,
    },
    EveryNthRow {
        n: i64,
        #[serde(default)]
        offset: i64,
        #[serde(default = "default_nth_row_name")]
        name: String,
        /// Keep only the matching rows instead of adding a mask column.
        #[serde(default)]
        filter: bool,
    },
    ConcatStr {
        template: String,
        columns: Vec<String>,
        #[serde(default = "default_placeholder")]
        sep: String,
        #[serde(default = "default_concat_str_name")]
        name: String,
    },
    Hyperlink {
        text: String,
        url: String,
        #[serde(default = "default_true")]
        new_tab: bool,
        #[serde(default = "default_hyperlink_name")]
        name: String,
    },
    Tooltip {
        label: String,
        tooltip: String,
        #[serde(default)]
        text_decoration_style: TextDecorationStyle,
        #[serde(default = "default_color")]
        color: String,
        #[serde(default = "default_tooltip_name")]
        name: String,
    },
    MoveToStart {
        #[serde(default)]
        columns: Vec<String>,
        #[serde(default)]
        dtypes: Vec<String>,
    },
    MoveToEnd {
        #[serde(default)]
        columns: Vec<String>,
        #[serde(default)]
        dtypes: Vec<String>,
    },
    Shift {
        column: String,
        offset: i64,
        fill_column: String,
    },
    Cycle {
        column: String,
        offset: i64,
        #[serde(default)]
        name: Option<String>,
    },
}

fn default_index_name() -> String {
    exprs::DEFAULT_INDEX_NAME.to_string()
}

fn default_bucketize_name() -> String {
    exprs::BUCKETIZE_NAME.to_string()
}

fn default_nth_row_name() -> String {
    exprs::NTH_ROW_NAME.to_string()
}

fn default_placeholder() -> String {
    exprs::DEFAULT_PLACEHOLDER.to_string()
}

fn default_concat_str_name() -> String {
    exprs::CONCAT_STR_NAME.to_string()
}

fn default_hyperlink_name() -> String {
    HyperlinkOptions::default().name
}

fn default_tooltip_name() -> String {
    TooltipOptions::default().name
}

fn default_color() -> String {
    TooltipOptions::default().color
}

fn default_true() -> bool {
    true
}

/// How a compiled step is applied to the frame.
#[derive(Debug, Clone)]
pub enum StepPlan {
    WithColumns(Vec<Expr>),
    Select(Vec<Expr>),
    Filter(Expr),
}

impl RecipeStep {
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::Index { .. } => "index",
            Self::BucketizeLit { .. } => "bucketize_lit",
            Self::EveryNthRow { .. } => "every_nth_row",
            Self::ConcatStr { .. } => "concat_str",
            Self::Hyperlink { .. } => "hyperlink",
            Self::Tooltip { .. } => "tooltip",
            Self::MoveToStart { .. } => "move_to_start",
            Self::MoveToEnd { .. } => "move_to_end",
            Self::Shift { .. } => "shift",
            Self::Cycle { .. } => "cycle",
        }
    }

    pub fn compile(&self) -> Result<StepPlan> {
        let plan = match self {
            Self::Index { name, offset } => {
                StepPlan::WithColumns(vec![exprs::make_index(name, *offset)?])
            }
            Self::BucketizeLit {
                items,
                name,
                return_dtype,
            } => {
                let dtype = return_dtype.as_deref().map(parse_dtype).transpose()?;
                let items: Vec<LiteralItem> = items.iter().map(LiteralItem::from).collect();
                StepPlan::WithColumns(vec![exprs::bucketize_lit(items, dtype)?.alias(name)])
            }
            Self::EveryNthRow {
                n,
                offset,
                name,
                filter,
            } => {
                let mask = exprs::is_every_nth_row(*n, *offset, name)?;
                if *filter {
                    StepPlan::Filter(mask)
                } else {
                    StepPlan::WithColumns(vec![mask])
                }
            }
            Self::ConcatStr {
                template,
                columns,
                sep,
                name,
            } => StepPlan::WithColumns(vec![exprs::make_concat_str(template, columns, sep, name)?]),
            Self::Hyperlink {
                text,
                url,
                new_tab,
                name,
            } => {
                let options = HyperlinkOptions {
                    new_tab: *new_tab,
                    name: name.clone(),
                };
                StepPlan::WithColumns(vec![exprs::make_hyperlink(text, url, &options)?])
            }
            Self::Tooltip {
                label,
                tooltip,
                text_decoration_style,
                color,
                name,
            } => {
                let options = TooltipOptions {
                    text_decoration_style: *text_decoration_style,
                    color: color.clone(),
                    name: name.clone(),
                };
                StepPlan::WithColumns(vec![exprs::make_tooltip(label, tooltip, &options)?])
            }
            Self::MoveToStart { columns, dtypes } => {
                StepPlan::Select(exprs::move_cols_to_start(selector(columns, dtypes)?)?)
            }
            Self::MoveToEnd { columns, dtypes } => {
                StepPlan::Select(exprs::move_cols_to_end(selector(columns, dtypes)?)?)
            }
            Self::Shift {
                column,
                offset,
                fill_column,
            } => StepPlan::WithColumns(vec![exprs::shift(
                col(column.as_str()),
                *offset,
                col(fill_column.as_str()),
            )]),
            Self::Cycle {
                column,
                offset,
                name,
            } => {
                let cycled = exprs::cycle(col(column.as_str()), *offset);
                let cycled = match name {
                    Some(name) => cycled.alias(name),
                    None => cycled,
                };
                StepPlan::WithColumns(vec![cycled])
            }
        };
        Ok(plan)
    }

    /// One-line summary used by dry runs.
    pub fn describe(&self) -> String {
        match self {
            Self::Index { name, offset } => format!("index `{}` starting at {}", name, offset),
            Self::BucketizeLit { items, name, .. } => {
                format!("bucketize {} items into `{}`", items.len(), name)
            }
            Self::EveryNthRow {
                n, offset, filter, ..
            } => {
                let mode = if *filter { "keep" } else { "mark" };
                format!("{} every {}-th row from row {}", mode, n, offset)
            }
            Self::ConcatStr { columns, name, .. } => {
                format!("concat {} column(s) into `{}`", columns.len(), name)
            }
            Self::Hyperlink { text, url, name, .. } => {
                format!("hyperlink `{}` -> `{}` into `{}`", text, url, name)
            }
            Self::Tooltip {
                label, tooltip, name, ..
            } => format!("tooltip `{}` over `{}` into `{}`", tooltip, label, name),
            Self::MoveToStart { columns, dtypes } => {
                format!("move {:?}{:?} to start", columns, dtypes)
            }
            Self::MoveToEnd { columns, dtypes } => format!("move {:?}{:?} to end", columns, dtypes),
            Self::Shift { column, offset, .. } => format!("shift `{}` by {}", column, offset),
            Self::Cycle { column, offset, .. } => format!("cycle `{}` by {}", column, offset),
        }
    }
}

fn selector(columns: &[String], dtypes: &[String]) -> Result<ColumnSelector> {
    match (columns.is_empty(), dtypes.is_empty()) {
        (false, true) => Ok(ColumnSelector::Names(columns.to_vec())),
        (true, false) => {
            let dtypes = dtypes
                .iter()
                .map(|name| parse_dtype(name))
                .collect::<Result<Vec<DataType>>>()?;
            Ok(ColumnSelector::DataTypes(dtypes))
        }
        (false, false) => Err(TurtleError::validation(
            "columns",
            format!("{:?} + {:?}", columns, dtypes),
            "Specify either column names or data types, not both.",
        )),
        (true, true) => Err(TurtleError::validation(
            "columns",
            "[]",
            "At least one column name or data type must be given.",
        )),
    }
}
