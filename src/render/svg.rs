//! SVG generation
//!
//! A thin serializer over [`Document`]: it never computes geometry, it only
//! prints the numbers the tree already resolved.

use std::fmt::Write;

use super::{DrawCommand, Document};
use crate::errors::RenderError;
use crate::types::Coords;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a number for SVG output: three decimals at most, no `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // also folds -0 into 0
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Escape text content and attribute values.
pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a rendered document to an SVG string.
pub fn to_svg(doc: &Document) -> Result<String, RenderError> {
    let mut out = String::new();
    write_document(&mut out, doc)?;
    Ok(out)
}

fn write_document(out: &mut String, doc: &Document) -> Result<(), RenderError> {
    for href in &doc.stylesheets {
        writeln!(
            out,
            "<?xml-stylesheet type=\"text/css\" href=\"{}\"?>",
            xml_escape(href)
        )?;
    }
    let vb = doc.view_box;
    writeln!(
        out,
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
        SVG_NS,
        fmt_num(doc.width),
        fmt_num(doc.height),
        fmt_num(vb.x),
        fmt_num(vb.y),
        fmt_num(vb.width),
        fmt_num(vb.height)
    )?;
    for child in &doc.children {
        write_node(out, child)?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}

fn class_attr(class: &Option<String>) -> String {
    match class {
        Some(c) if !c.is_empty() => format!(" class=\"{}\"", xml_escape(c)),
        _ => String::new(),
    }
}

fn transform_attr(x: f64, y: f64, scale: Coords) -> String {
    let mut parts = Vec::new();
    if x != 0.0 || y != 0.0 {
        parts.push(format!("translate({} {})", fmt_num(x), fmt_num(y)));
    }
    if scale != Coords::ONE {
        parts.push(format!("scale({} {})", fmt_num(scale.x), fmt_num(scale.y)));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" transform=\"{}\"", parts.join(" "))
    }
}

fn write_node(out: &mut String, node: &DrawCommand) -> Result<(), RenderError> {
    match node {
        DrawCommand::Group {
            x,
            y,
            scale,
            class,
            children,
        } => {
            writeln!(out, "<g{}{}>", class_attr(class), transform_attr(*x, *y, *scale))?;
            for child in children {
                write_node(out, child)?;
            }
            writeln!(out, "</g>")?;
        }
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
            corner_radius,
            class,
        } => {
            let rx = if *corner_radius > 0.0 {
                format!(" rx=\"{}\"", fmt_num(*corner_radius))
            } else {
                String::new()
            };
            writeln!(
                out,
                "<rect{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
                class_attr(class),
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                rx
            )?;
        }
        DrawCommand::Path {
            x,
            y,
            scale,
            d,
            class,
        } => {
            writeln!(
                out,
                "<path{}{} d=\"{}\"/>",
                class_attr(class),
                transform_attr(*x, *y, *scale),
                d
            )?;
        }
        DrawCommand::Text {
            x,
            y,
            content,
            anchor,
            upright,
            class,
        } => {
            // Counter-scaling moves the anchor too, so pre-multiply it.
            let upright_attr = if *upright != Coords::ONE {
                format!(" transform=\"scale({} {})\"", fmt_num(upright.x), fmt_num(upright.y))
            } else {
                String::new()
            };
            writeln!(
                out,
                "<text{}{} x=\"{}\" y=\"{}\" text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>",
                class_attr(class),
                upright_attr,
                fmt_num(x * upright.x),
                fmt_num(y * upright.y),
                anchor.as_str(),
                xml_escape(content)
            )?;
        }
        DrawCommand::Image {
            x,
            y,
            width,
            height,
            href,
            class,
        } => {
            writeln!(
                out,
                "<image{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\"/>",
                class_attr(class),
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                xml_escape(href)
            )?;
        }
    }
    Ok(())
}
