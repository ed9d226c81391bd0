use polars::prelude::Expr;

use crate::domain::model::{HyperlinkOptions, TextDecorationStyle, TooltipOptions};
use crate::exprs::general::{make_concat_str, DEFAULT_PLACEHOLDER};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

/// `<a>` tag per row with the link text from column `text` and the target from column `url`.
pub fn make_hyperlink(text: &str, url: &str, options: &HyperlinkOptions) -> Result<Expr> {
    let target = if options.new_tab { "_blank" } else { "_self" };
    let template = format!(
        r#"<a href="{p}" target="{target}">{p}</a>"#,
        p = DEFAULT_PLACEHOLDER,
        target = target
    );
    make_concat_str(&template, [url, text], DEFAULT_PLACEHOLDER, &options.name)
}

/// `<abbr>` tag per row showing column `label`, with column `tooltip` as the hover text.
pub fn make_tooltip(label: &str, tooltip: &str, options: &TooltipOptions) -> Result<Expr> {
    validate_non_empty_string("color", &options.color)?;

    let style = tooltip_style(options.text_decoration_style, &options.color);
    let template = format!(
        r#"<abbr style="{style}" title="{p}">{p}</abbr>"#,
        style = style,
        p = DEFAULT_PLACEHOLDER
    );
    make_concat_str(&template, [tooltip, label], DEFAULT_PLACEHOLDER, &options.name)
}

fn tooltip_style(decoration: TextDecorationStyle, color: &str) -> String {
    let mut style = String::from("cursor: help; ");

    match decoration {
        TextDecorationStyle::None => style.push_str("text-decoration: none; "),
        TextDecorationStyle::Solid | TextDecorationStyle::Dotted => {
            style.push_str("text-decoration: underline; ");
            style.push_str(&format!("text-decoration-style: {}; ", decoration));
        }
    }

    if color != "none" {
        style.push_str(&format!("color: {}; ", color));
    }

    style
}
