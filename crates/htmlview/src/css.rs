//! Inline CSS shorthand parsing.
//!
//! Parses a `style` attribute string (semicolon-separated `property:value`
//! pairs) into a [`StyleRecord`]. Only the shorthand subset relevant to the
//! styled tree is recognized; unknown properties are dropped silently, and a
//! declaration whose value lacks a numeric token is dropped with a warning
//! rather than failing the conversion.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use htmlview_core::StyleRecord;

use crate::scale::Scaler;
use crate::{HtmlViewError, Result};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Extract the numeric magnitude of a value: its first contiguous digit run.
///
/// `"10px"`, `"10"`, and `"about 10"` all yield `10.0`; a value with no
/// digits is a [`HtmlViewError::MalformedStyleValue`].
pub fn px_value(value: &str) -> Result<f32> {
    DIGIT_RUN
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| HtmlViewError::MalformedStyleValue(value.to_string()))
}

/// Parse an inline `style` attribute into a style record.
///
/// Declarations are merged left to right; later declarations of the same
/// output key overwrite earlier ones.
pub fn parse_inline_style(raw: &str, scaler: &Scaler) -> StyleRecord {
    let mut style = StyleRecord::new();

    for declaration in raw.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim().to_lowercase();
        let value = value.trim();

        if let Err(err) = apply_declaration(&mut style, &name, value, scaler) {
            log::warn!("dropping inline style declaration `{name}: {value}`: {err}");
        }
    }

    style
}

fn apply_declaration(
    style: &mut StyleRecord,
    name: &str,
    value: &str,
    scaler: &Scaler,
) -> Result<()> {
    match name {
        "text-align" => style.set("textAlign", value),
        "background" | "background-color" => style.set("backgroundColor", value),
        "color" => style.set("color", value),
        "border" => {
            let tokens: SmallVec<[&str; 4]> = value.split_whitespace().collect();
            let Some(width) = tokens.first() else {
                return Err(HtmlViewError::MalformedStyleValue(value.to_string()));
            };
            style.set("borderWidth", px_value(width)?);
            if let Some(color) = tokens.get(2) {
                style.set("borderColor", *color);
            }
        }
        "padding" => box_shorthand(style, "padding", value)?,
        "margin" => box_shorthand(style, "margin", value)?,
        "font-size" => style.set("fontSize", scaler.scale(px_value(value)?)),
        // Anything else is outside the recognized shorthand subset.
        _ => {}
    }
    Ok(())
}

/// Expand `padding`/`margin` shorthand by arity:
/// 1 value → all edges, 2 → vertical/horizontal, 3 → top/horizontal/bottom,
/// 4 → top/left/right/bottom.
fn box_shorthand(style: &mut StyleRecord, prefix: &str, value: &str) -> Result<()> {
    let magnitudes: SmallVec<[f32; 4]> = value
        .split_whitespace()
        .map(px_value)
        .collect::<Result<_>>()?;

    match magnitudes.as_slice() {
        [all] => style.set(prefix, *all),
        [vertical, horizontal] => {
            style.set(format!("{prefix}Vertical"), *vertical);
            style.set(format!("{prefix}Horizontal"), *horizontal);
        }
        [top, horizontal, bottom] => {
            style.set(format!("{prefix}Top"), *top);
            style.set(format!("{prefix}Horizontal"), *horizontal);
            style.set(format!("{prefix}Bottom"), *bottom);
        }
        [top, left, right, bottom] => {
            style.set(format!("{prefix}Top"), *top);
            style.set(format!("{prefix}Left"), *left);
            style.set(format!("{prefix}Right"), *right);
            style.set(format!("{prefix}Bottom"), *bottom);
        }
        // No values or more than four: not a shorthand arity we expand.
        _ => {}
    }
    Ok(())
}
