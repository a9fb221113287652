//! Opening indicators
//!
//! Dashed diagonals show how a sash opens: they start at the hinge side and
//! converge on the side that moves. Casement (horizontal) openings also get a
//! handle glyph on the frame band opposite the hinge.

use sashkit_core::{HorizontalOpening, Point, Rect, VerticalOpening, WindowSpec};

use crate::layout::WindowLayout;
use crate::primitives::{Primitive, Role, Style};

/// Dash pattern of the indicator diagonals.
pub const OPENING_DASH: [f64; 2] = [7.0, 7.0];

/// Stroke width of the indicator diagonals.
pub const OPENING_STROKE: f64 = 0.4;

/// Vertical position of the handle: midway down the glazing below the arc.
pub fn handle_y(layout: &WindowLayout) -> f64 {
    layout.boundary().baseline_y() + layout.usable_glazing_height() / 2.0
}

/// Handle rectangle on the frame band for a casement opening.
pub fn handle_rect(direction: HorizontalOpening, layout: &WindowLayout) -> Option<Rect> {
    let m = layout.margin;
    let x = match direction {
        HorizontalOpening::None => return None,
        HorizontalOpening::Right => layout.width - m,
        HorizontalOpening::Left => 0.0,
    };
    Some(Rect::new(x, handle_y(layout) - m / 2.0, m, m))
}

fn dashed(spec: &WindowSpec, from: Point, to: Point) -> Primitive {
    Primitive::dashed_line(
        Role::Opening,
        from,
        to,
        Style::stroked(&spec.palette.stroke, OPENING_STROKE).with_dash(&OPENING_DASH),
    )
}

fn horizontal(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let m = layout.margin;
    let (hinge_x, free_x) = match spec.opening.horizontal {
        HorizontalOpening::None => return Vec::new(),
        HorizontalOpening::Right => (m, m + layout.inner_width),
        HorizontalOpening::Left => (m + layout.inner_width, m),
    };

    let top = layout.boundary().baseline_y();
    let bottom = layout.glazing_bottom();
    let converge = Point::new(free_x, handle_y(layout));

    let mut primitives = vec![
        dashed(spec, Point::new(hinge_x, top), converge),
        dashed(spec, Point::new(hinge_x, bottom), converge),
    ];

    if let Some(rect) = handle_rect(spec.opening.horizontal, layout) {
        primitives.push(Primitive::rect(
            Role::Handle,
            rect,
            Style::fill_only(&spec.palette.handle).with_corner_radius(m / 4.0),
        ));
    }
    primitives
}

fn vertical(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let boundary = layout.boundary();
    let left = layout.margin;
    let right = layout.margin + layout.inner_width;
    let mid = boundary.center_x();
    let bottom = layout.glazing_bottom();

    match spec.opening.vertical {
        VerticalOpening::None => Vec::new(),
        VerticalOpening::Down => {
            let target = Point::new(mid, bottom);
            vec![
                dashed(spec, Point::new(left, boundary.arc_y(left, 0.0)), target),
                dashed(spec, Point::new(right, boundary.arc_y(right, 0.0)), target),
            ]
        }
        VerticalOpening::Up => {
            let target = Point::new(mid, boundary.apex_y());
            vec![
                dashed(spec, Point::new(left, bottom), target),
                dashed(spec, Point::new(right, bottom), target),
            ]
        }
    }
}

/// Render stage: opening diagonals and handle.
pub fn opening_indicators(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    if !layout.has_glazing() {
        return Vec::new();
    }
    let mut primitives = horizontal(spec, layout);
    primitives.extend(vertical(spec, layout));
    primitives
}
