//! Standalone SVG serialization of a [`Scene`].

use crate::scene::{Mark, Scene, Shape, Style};
use std::fmt::Write;
use vd_utils::numbers::svg_number;

/// Escape text for use in element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn style_attrs(style: &Style) -> String {
    let mut s = String::new();
    if let Some(fill) = &style.fill {
        let _ = write!(s, r#" fill="{}""#, escape(fill));
    }
    if let Some(stroke) = &style.stroke {
        let _ = write!(s, r#" stroke="{}""#, escape(stroke));
    }
    if let Some(w) = style.stroke_width {
        let _ = write!(s, r#" stroke-width="{}""#, svg_number(w));
    }
    if let Some(o) = style.stroke_opacity {
        let _ = write!(s, r#" stroke-opacity="{}""#, svg_number(o));
    }
    if let Some(o) = style.opacity {
        let _ = write!(s, r#" opacity="{}""#, svg_number(o));
    }
    if let Some(size) = style.font_size {
        let _ = write!(s, r#" font-size="{}px""#, svg_number(size));
    }
    if style.passive {
        s.push_str(r#" pointer-events="none""#);
    } else if style.pointer {
        s.push_str(r#" cursor="pointer""#);
    }
    s
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", svg_number(*x), svg_number(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One mark as an SVG element.
pub fn mark_to_svg(mark: &Mark) -> String {
    let class = mark
        .class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();
    let style = style_attrs(&mark.style);
    let n = svg_number;
    match &mark.shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => format!(
            r#"<rect{class} x="{}" y="{}" width="{}" height="{}"{style}/>"#,
            n(*x),
            n(*y),
            n(*width),
            n(*height)
        ),
        Shape::Circle { cx, cy, r } => format!(
            r#"<circle{class} cx="{}" cy="{}" r="{}"{style}/>"#,
            n(*cx),
            n(*cy),
            n(*r)
        ),
        Shape::Line { x1, y1, x2, y2 } => format!(
            r#"<line{class} x1="{}" y1="{}" x2="{}" y2="{}"{style}/>"#,
            n(*x1),
            n(*y1),
            n(*x2),
            n(*y2)
        ),
        Shape::Path { d } => format!(r#"<path{class} d="{}"{style}/>"#, escape(d)),
        Shape::Polyline { points } => format!(
            r#"<polyline{class} points="{}"{style}/>"#,
            points_attr(points)
        ),
        Shape::Text {
            x,
            y,
            content,
            anchor,
            dy,
            rotate,
        } => {
            let mut attrs = format!(
                r#" x="{}" y="{}" text-anchor="{}""#,
                n(*x),
                n(*y),
                anchor.as_str()
            );
            if *dy != 0.0 {
                let _ = write!(attrs, r#" dy="{}em""#, n(*dy));
            }
            if *rotate != 0.0 {
                let _ = write!(
                    attrs,
                    r#" transform="rotate({},{},{})""#,
                    n(*rotate),
                    n(*x),
                    n(*y)
                );
            }
            format!(r#"<text{class}{attrs}{style}>{}</text>"#, escape(content))
        }
    }
}

/// The whole scene as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = svg_number(scene.size.width),
        h = svg_number(scene.size.height)
    );
    if !scene.gradients.is_empty() {
        out.push_str("<defs>");
        for gradient in &scene.gradients {
            let _ = write!(
                out,
                r#"<linearGradient id="{}" x1="0%" x2="100%" y1="0%" y2="0%">"#,
                escape(&gradient.id)
            );
            for stop in &gradient.stops {
                let _ = write!(
                    out,
                    r#"<stop offset="{}%" stop-color="{}"/>"#,
                    svg_number(stop.offset * 100.0),
                    escape(&stop.color)
                );
            }
            out.push_str("</linearGradient>");
        }
        out.push_str("</defs>");
    }
    for mark in &scene.marks {
        out.push_str(&mark_to_svg(mark));
    }
    out.push_str("</svg>");
    out
}
