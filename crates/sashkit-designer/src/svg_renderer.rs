//! SVG surface for window primitives
//! Serializes a primitive list into a standalone SVG document:
//! - Outlines become `<path>` elements, arcs as native elliptical arcs
//!   (or flattened polylines when requested)
//! - Dimension arrows get filled triangular heads
//! - Labels keep their rotation and anchor
//! - The window is placed at its configured position with a group transform

use sashkit_core::{Point, WindowSpec};
use tracing::debug;

use crate::primitives::{content_bounds, Outline, PathCommand, Primitive, Shape, Style, TextAnchor};

/// Surface settings for [`render_svg`]
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Canvas width when not fitting to content
    pub width: f64,
    /// Canvas height when not fitting to content
    pub height: f64,
    /// Translation applied to every primitive
    pub origin: Point,
    /// Size the view box around the drawing instead of the fixed canvas
    pub fit_to_content: bool,
    /// Space kept around the drawing when fitting
    pub padding: f64,
    /// Emit outlines as polylines instead of elliptical arcs
    pub flatten_arcs: bool,
    /// Flattening tolerance
    pub tolerance: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
            origin: Point::default(),
            fit_to_content: false,
            padding: 20.0,
            flatten_arcs: false,
            tolerance: crate::primitives::DEFAULT_TOLERANCE,
        }
    }
}

impl SvgOptions {
    /// Options that place the window at its configured position.
    pub fn for_spec(spec: &WindowSpec) -> Self {
        Self {
            origin: spec.position,
            ..Self::default()
        }
    }
}

/// Render a complete SVG document.
pub fn render_svg(primitives: &[Primitive], options: &SvgOptions) -> String {
    let (min_x, min_y, width, height) = match content_bounds(primitives) {
        Some(bounds) if options.fit_to_content => (
            bounds.x + options.origin.x - options.padding,
            bounds.y + options.origin.y - options.padding,
            bounds.width + options.padding * 2.0,
            bounds.height + options.padding * 2.0,
        ),
        _ => (0.0, 0.0, options.width, options.height),
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
        fmt_num(width),
        fmt_num(height),
        fmt_num(min_x),
        fmt_num(min_y),
        fmt_num(width),
        fmt_num(height)
    ));
    svg.push_str(&format!(
        "  <g transform=\"translate({} {})\">\n",
        fmt_num(options.origin.x),
        fmt_num(options.origin.y)
    ));
    for primitive in primitives {
        svg.push_str("    ");
        svg.push_str(&render_primitive(primitive, options));
        svg.push('\n');
    }
    svg.push_str("  </g>\n</svg>\n");

    debug!(count = primitives.len(), bytes = svg.len(), "svg rendered");
    svg
}

/// Render one primitive as an SVG element.
pub fn render_primitive(primitive: &Primitive, options: &SvgOptions) -> String {
    let style = &primitive.style;
    match &primitive.shape {
        Shape::Outline(outline) => {
            let d = if options.flatten_arcs {
                polyline_path_data(&outline.flatten(options.tolerance))
            } else {
                path_data(outline)
            };
            format!("<path d=\"{}\"{}/>", d, style_attrs(style))
        }
        Shape::FilledRect(rect) => {
            let corner = if style.corner_radius > 0.0 {
                format!(
                    " rx=\"{}\" ry=\"{}\"",
                    fmt_num(style.corner_radius),
                    fmt_num(style.corner_radius)
                )
            } else {
                String::new()
            };
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}{}/>",
                fmt_num(rect.x),
                fmt_num(rect.y),
                fmt_num(rect.width),
                fmt_num(rect.height),
                corner,
                style_attrs(style)
            )
        }
        Shape::Line { from, to } | Shape::DashedLine { from, to } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            style_attrs(style)
        ),
        Shape::Arrow {
            from,
            to,
            pointer_length,
            pointer_width,
        } => {
            let mut d = format!(
                "M {} {} L {} {}",
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y)
            );
            for head in arrow_heads(*from, *to, *pointer_length, *pointer_width) {
                d.push(' ');
                d.push_str(&polyline_path_data(&head));
            }
            format!("<path d=\"{}\"{}/>", d, style_attrs(style))
        }
        Shape::Text {
            position,
            content,
            font_size,
            rotation,
            anchor,
        } => {
            let transform = if *rotation != 0.0 {
                format!(
                    " transform=\"rotate({} {} {})\"",
                    fmt_num(*rotation),
                    fmt_num(position.x),
                    fmt_num(position.y)
                )
            } else {
                String::new()
            };
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            format!(
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\"{}{}>{}</text>",
                fmt_num(position.x),
                fmt_num(position.y),
                fmt_num(*font_size),
                anchor,
                transform,
                style_attrs(style),
                escape_text(content)
            )
        }
    }
}

/// SVG path data for an outline, with half-ellipses as arc commands.
pub fn path_data(outline: &Outline) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Option<Point> = None;

    for command in &outline.commands {
        match *command {
            PathCommand::MoveTo { to } => {
                parts.push(format!("M {} {}", fmt_num(to.x), fmt_num(to.y)));
                current = Some(to);
            }
            PathCommand::LineTo { to } => {
                parts.push(format!("L {} {}", fmt_num(to.x), fmt_num(to.y)));
                current = Some(to);
            }
            PathCommand::Ellipse {
                center,
                radius_x,
                radius_y,
            } => {
                let start = Point::new(center.x - radius_x, center.y);
                let end = Point::new(center.x + radius_x, center.y);
                if current != Some(start) {
                    parts.push(format!("L {} {}", fmt_num(start.x), fmt_num(start.y)));
                }
                // Sweep flag 1 runs clockwise on screen: left, over the top, right
                parts.push(format!(
                    "A {} {} 0 0 1 {} {}",
                    fmt_num(radius_x),
                    fmt_num(radius_y),
                    fmt_num(end.x),
                    fmt_num(end.y)
                ));
                current = Some(end);
            }
            PathCommand::Close => parts.push("Z".to_string()),
        }
    }

    parts.join(" ")
}

/// Closed polyline path data.
pub fn polyline_path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push_str(&format!(
            "{} {} {}",
            if i == 0 { "M" } else { "L" },
            fmt_num(p.x),
            fmt_num(p.y)
        ));
    }
    if !points.is_empty() {
        d.push_str(" Z");
    }
    d
}

/// Triangular heads at both ends of an arrow.
fn arrow_heads(from: Point, to: Point, length: f64, width: f64) -> Vec<[Point; 3]> {
    let span = from.distance_to(&to);
    if span <= 0.0 || !span.is_finite() {
        return Vec::new();
    }
    let (dx, dy) = ((to.x - from.x) / span, (to.y - from.y) / span);
    let (nx, ny) = (-dy * width / 2.0, dx * width / 2.0);

    let head = |tip: Point, back: f64| {
        let base = Point::new(tip.x - dx * back, tip.y - dy * back);
        [
            tip,
            Point::new(base.x + nx, base.y + ny),
            Point::new(base.x - nx, base.y - ny),
        ]
    };
    vec![head(to, length), head(from, -length)]
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = String::new();
    attrs.push_str(&format!(
        " fill=\"{}\"",
        style.fill.as_deref().map(escape_text).unwrap_or_else(|| "none".to_string())
    ));
    if let Some(stroke) = &style.stroke {
        attrs.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"{}\"",
            escape_text(stroke),
            fmt_num(style.stroke_width)
        ));
    }
    if let Some(dash) = &style.dash {
        let pattern: Vec<String> = dash.iter().map(|d| fmt_num(*d)).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", pattern.join(" ")));
    }
    attrs
}

/// Format a coordinate with at most three decimals.
fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
