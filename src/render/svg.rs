//! Flag SVG fragments
//!
//! Every clickable shape posts back to the swap endpoint with all hidden
//! `components` inputs and its own id as `selected`.

use std::fmt::Display;

use serde_json::json;

use super::escape::{escape_attr, htmlify_json};
use crate::domain::{Color, Component, ComponentSettings, Flag, FlagDimensions, Shape};

pub const SWAP_ENDPOINT: &str = "/swapComponent.svg";

/// Root `<svg>` element with a white background
pub fn flag(dimensions: FlagDimensions, contents: &str) -> String {
    let FlagDimensions { width, height } = dimensions;

    format!(
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" hx-target="closest svg"><rect x="0" y="0" width="{width}" height="{height}" fill="white" />{contents}</svg>"#
    )
}

pub fn circle(
    cx: impl Display,
    cy: impl Display,
    r: impl Display,
    fill: Option<&Color>,
    stroke: Option<&Color>,
    component_id: &str,
) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}"{} />"#,
        escape_attr(&cx.to_string()),
        escape_attr(&cy.to_string()),
        escape_attr(&r.to_string()),
        interactive_attrs(fill, stroke, component_id),
    )
}

pub fn rect(
    x: impl Display,
    y: impl Display,
    width: impl Display,
    height: impl Display,
    fill: Option<&Color>,
    stroke: Option<&Color>,
    component_id: &str,
) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}"{} />"#,
        escape_attr(&x.to_string()),
        escape_attr(&y.to_string()),
        escape_attr(&width.to_string()),
        escape_attr(&height.to_string()),
        interactive_attrs(fill, stroke, component_id),
    )
}

/// Wrap a shape in a group carrying its settings as a hidden input
pub fn component_container(settings: &ComponentSettings, contents: &str) -> String {
    format!(
        r#"<g><foreignObject><input type="hidden" name="components" value="{}" xmlns="http://www.w3.org/1999/xhtml" /></foreignObject>{}</g>"#,
        htmlify_json(settings),
        contents,
    )
}

/// Render a complete flag
pub fn flag_svg(model: &Flag) -> String {
    let contents = model
        .components
        .iter()
        .map(render_component)
        .collect::<String>();

    flag(model.dimensions, &contents)
}

fn render_component(component: &Component) -> String {
    let settings = &component.settings;
    let fill = settings.fill.as_ref();
    let stroke = settings.stroke.as_ref();
    let id = settings.component_id.as_str();

    let shape = match component.shape {
        Shape::Circle { cx, cy, r } => circle(cx, cy, r, fill, stroke, id),
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => rect(x, y, width, height, fill, stroke, id),
    };

    component_container(settings, &shape)
}

fn interactive_attrs(fill: Option<&Color>, stroke: Option<&Color>, component_id: &str) -> String {
    let mut attrs = String::new();

    // Absent colors fall back to SVG defaults
    if let Some(fill) = fill {
        attrs.push_str(&format!(r#" fill="{}""#, escape_attr(fill.as_str())));
    }
    if let Some(stroke) = stroke {
        attrs.push_str(&format!(r#" stroke="{}""#, escape_attr(stroke.as_str())));
    }

    attrs.push_str(&format!(
        r#" hx-post="{}" hx-trigger="click" hx-include="input" hx-vals="{}""#,
        SWAP_ENDPOINT,
        htmlify_json(&json!({ "selected": component_id })),
    ));

    attrs
}
