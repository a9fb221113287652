//! Frame and glazing geometry
//!
//! Arched windows are drawn as outlines: up the left side to the arc's start
//! height, over the half-ellipse, down the right side and closed along the
//! bottom. Rectangular windows are plain filled rectangles.

use sashkit_core::{Point, Rect, WindowSpec};

use crate::layout::WindowLayout;
use crate::primitives::{Outline, Primitive, Role, Style};

/// Stroke width of the glazing edge on arched windows.
pub const ARCHED_GLAZING_STROKE: f64 = 1.0;

/// Stroke width of the corner miter lines.
pub const MITER_STROKE: f64 = 1.0;

/// Outline of an arched shape with its top-left corner at `(x, y)`.
///
/// The straight sides end `arc_height` below the top, where the half-ellipse
/// of horizontal radius `width / 2` takes over.
pub fn arched_outline(x: f64, y: f64, width: f64, height: f64, arc_height: f64) -> Outline {
    let bottom = y + height;
    let spring = y + arc_height;
    Outline::new()
        .move_to(Point::new(x, bottom))
        .line_to(Point::new(x, spring))
        .upper_half_ellipse(Point::new(x + width / 2.0, spring), width / 2.0, arc_height)
        .line_to(Point::new(x + width, bottom))
        .close()
}

/// Outer frame.
pub fn frame(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let style = Style::filled(&spec.palette.frame, &spec.palette.stroke, spec.stroke_width);
    if layout.profile.is_flat() {
        return vec![Primitive::rect(Role::Frame, layout.frame_rect(), style)];
    }
    let outline = arched_outline(
        0.0,
        0.0,
        layout.width,
        layout.height,
        layout.profile.arc_height,
    );
    vec![Primitive::outline(Role::Frame, outline, style)]
}

/// Glazing, inset by the margin and shortened by the base panel.
pub fn glazing(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let boundary = layout.boundary();
    if layout.profile.is_flat() {
        let rect = Rect::new(
            layout.margin,
            layout.margin,
            layout.inner_width,
            layout.glazing_height,
        );
        let style = Style::filled(
            &spec.palette.glazing,
            &spec.palette.glazing_stroke,
            spec.stroke_width,
        );
        return vec![Primitive::rect(Role::Glazing, rect, style)];
    }

    let outline = arched_outline(
        layout.margin,
        layout.margin,
        layout.inner_width,
        layout.glazing_height,
        boundary.arc_height(),
    );
    let style = Style::filled(
        &spec.palette.glazing,
        &spec.palette.glazing_stroke,
        ARCHED_GLAZING_STROKE,
    );
    vec![Primitive::outline(Role::Glazing, outline, style)]
}

/// Thin lines joining outer frame corners to the matching glazing corners.
///
/// Arched windows only get the bottom two; the top is a curve.
pub fn miter_lines(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let m = layout.margin;
    let (w, h) = (layout.width, layout.height);
    let inner_right = m + layout.inner_width;
    let inner_bottom = m + layout.inner_height;

    let mut pairs = vec![
        (Point::new(0.0, h), Point::new(m, inner_bottom)),
        (Point::new(w, h), Point::new(inner_right, inner_bottom)),
    ];
    if layout.profile.is_flat() {
        pairs.push((Point::new(0.0, 0.0), Point::new(m, m)));
        pairs.push((Point::new(w, 0.0), Point::new(inner_right, m)));
    }

    pairs
        .into_iter()
        .map(|(outer, inner)| {
            Primitive::line(
                Role::Miter,
                outer,
                inner,
                Style::stroked(&spec.palette.stroke, MITER_STROKE),
            )
        })
        .collect()
}
