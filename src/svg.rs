//! SVG serialization of a frame's draw list.

use glam::Vec2;
use std::fmt::Write;

use crate::core::draw::{DrawList, DrawOp, Paint};
use crate::types::Viewport;

const GLOW_FILTER_ID: &str = "door-glow";
const GLOW_BLUR: f32 = 8.0;
const BACKDROP: &str = "#000";

const TOOLTIP_CHAR_WIDTH: f32 = 7.0;
const TOOLTIP_PADDING: f32 = 8.0;
const TOOLTIP_HEIGHT: f32 = 28.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_BACKGROUND: &str = "rgba(0, 0, 0, 0.85)";

/// Escape text for use in XML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn points_attr(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint_attrs(paint: &Paint) -> String {
    let mut attrs = format!(
        "fill=\"{}\"",
        escape(paint.fill.as_deref().unwrap_or("none"))
    );
    if let Some(stroke) = &paint.stroke {
        let _ = write!(
            attrs,
            " stroke=\"{}\" stroke-width=\"{:.2}\"",
            escape(stroke),
            paint.stroke_width
        );
    }
    if paint.opacity < 1.0 {
        let _ = write!(attrs, " opacity=\"{:.3}\"", paint.opacity);
    }
    if paint.glow {
        let _ = write!(attrs, " filter=\"url(#{GLOW_FILTER_ID})\"");
    }
    attrs
}

fn write_op(out: &mut String, op: &DrawOp, viewport: Viewport) {
    let _ = match op {
        DrawOp::Polygon { points, paint } => writeln!(
            out,
            "  <polygon points=\"{}\" {}/>",
            points_attr(points),
            paint_attrs(paint)
        ),
        DrawOp::Polyline { points, paint } => writeln!(
            out,
            "  <polyline points=\"{}\" {} stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            points_attr(points),
            paint_attrs(paint)
        ),
        DrawOp::Circle {
            center,
            radius,
            scale,
            paint,
        } => writeln!(
            out,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            center.x,
            center.y,
            radius * scale,
            paint_attrs(paint)
        ),
        DrawOp::Text {
            position,
            text,
            font_size,
            color,
        } => writeln!(
            out,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" font-family=\"monospace\" \
             font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"central\" \
             fill=\"{}\">{}</text>",
            position.x,
            position.y,
            font_size,
            escape(color),
            escape(text)
        ),
        DrawOp::Tooltip {
            anchor,
            text,
            color,
        } => {
            // bottom center sits on the anchor, box kept inside the viewport
            let width = text.chars().count() as f32 * TOOLTIP_CHAR_WIDTH + 2.0 * TOOLTIP_PADDING;
            let x = (anchor.x - width / 2.0)
                .min(viewport.width - width)
                .max(0.0);
            let y = (anchor.y - TOOLTIP_HEIGHT)
                .min(viewport.height - TOOLTIP_HEIGHT)
                .max(0.0);
            writeln!(
                out,
                "  <g class=\"tooltip\">\n    \
                 <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" \
                 fill=\"{}\" stroke=\"{}\"/>\n    \
                 <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" font-family=\"monospace\" \
                 text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\">{}</text>\n  </g>",
                x,
                y,
                width,
                TOOLTIP_HEIGHT,
                TOOLTIP_BACKGROUND,
                escape(color),
                x + width / 2.0,
                y + TOOLTIP_HEIGHT / 2.0,
                TOOLTIP_FONT_SIZE,
                escape(color),
                escape(text)
            )
        }
    };
}

/// Render a draw list as a standalone SVG document
pub fn to_svg(list: &DrawList, viewport: Viewport) -> String {
    let (w, h) = (viewport.width.max(0.0), viewport.height.max(0.0));
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">"
    );
    let _ = writeln!(
        out,
        "  <defs>\n    <filter id=\"{GLOW_FILTER_ID}\" x=\"-50%\" y=\"-50%\" width=\"200%\" \
         height=\"200%\">\n      <feGaussianBlur stdDeviation=\"{GLOW_BLUR}\"/>\n    \
         </filter>\n  </defs>"
    );
    let _ = writeln!(out, "  <rect width=\"{w}\" height=\"{h}\" fill=\"{BACKDROP}\"/>");

    for op in list.iter() {
        write_op(&mut out, op, viewport);
    }

    out.push_str("</svg>\n");
    out
}
