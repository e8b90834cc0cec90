//! SVG backend for recorded scenes
//!
//! Linked nodes become `<a href>` elements, so the browser performs the
//! navigation when a node is clicked.

use std::fmt::Write as _;

use super::scene::{DrawCommand, NodeBox, Scene, StrokeStyle};
use super::types::RenderConfig;

/// Escape text for use in XML character data and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn dash_array(style: StrokeStyle) -> Option<&'static str> {
    match style {
        StrokeStyle::Solid => None,
        StrokeStyle::Dashed => Some("4 2"),
        StrokeStyle::Dotted => Some("1 2"),
    }
}

/// Serialize a scene as a standalone SVG document
pub fn scene_to_svg(scene: &Scene, config: &RenderConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut out, scene, config);
    out
}

fn write_svg(out: &mut String, scene: &Scene, config: &RenderConfig) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width.max(0),
        h = scene.height.max(0),
    )?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        escape_xml(&scene.background)
    )?;

    for command in scene.commands() {
        match command {
            DrawCommand::Line { line, style } => {
                write!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}""#,
                    line.from.x,
                    line.from.y,
                    line.to.x,
                    line.to.y,
                    escape_xml(&config.stroke)
                )?;
                if let Some(dashes) = dash_array(*style) {
                    write!(out, r#" stroke-dasharray="{}""#, dashes)?;
                }
                writeln!(out, "/>")?;
            }
            DrawCommand::Node(node) => write_node(out, node, config)?,
        }
    }

    writeln!(out, "</svg>")
}

fn write_node(out: &mut String, node: &NodeBox, config: &RenderConfig) -> std::fmt::Result {
    let indent = if node.href.is_some() { "    " } else { "  " };
    if let Some(href) = &node.href {
        writeln!(out, r#"  <a href="{}">"#, escape_xml(href))?;
    }

    let b = node.bounds;
    writeln!(
        out,
        r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}"/>"#,
        indent,
        b.x,
        b.y,
        b.width,
        b.height,
        escape_xml(&config.node_fill),
        escape_xml(&config.stroke)
    )?;

    let color = if node.style.accent {
        &config.interface_color
    } else {
        &config.text_color
    };
    write!(
        out,
        r#"{}<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" fill="{}""#,
        indent,
        b.x + b.width / 2,
        b.y + b.height / 2,
        escape_xml(&config.font_family),
        config.font_size,
        escape_xml(color)
    )?;
    if node.style.bold {
        write!(out, r#" font-weight="bold""#)?;
    }
    if node.style.italic {
        write!(out, r#" font-style="italic""#)?;
    }
    writeln!(out, ">{}</text>", escape_xml(&node.label))?;

    if node.href.is_some() {
        writeln!(out, "  </a>")?;
    }
    Ok(())
}
