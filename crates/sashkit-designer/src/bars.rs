//! Bar layout engine
//!
//! Two families of glazing dividers share one spacing law and one arc
//! boundary:
//! - muntins are single strokes
//! - traverses are bordered bars, drawn as an outer quad with a
//!   background-colored core, plus patches where two bars cross
//!
//! Bars are spread evenly over the glazing: `count` bars across a span `S`
//! sit at `start + S / (count + 1) * (k + 1)`.

use sashkit_core::types::clamp_span;
use sashkit_core::{Point, Rect, WindowSpec};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arc::ArcBoundary;
use crate::layout::WindowLayout;
use crate::primitives::{Outline, Primitive, Role, Style};

/// Border drawn on each side of a traverse.
pub const TRAVERSE_BORDER: f64 = 2.0;

/// Stroke width of the traverse outline.
pub const TRAVERSE_STROKE: f64 = 1.0;

/// Orientation of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarAxis {
    /// Runs top to bottom, placed along the inner width
    Vertical,
    /// Runs left to right, placed along the glazing height
    Horizontal,
}

/// One muntin or traverse instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub axis: BarAxis,
    pub index: u32,
    pub count: u32,
    pub thickness: f64,
}

impl BarSpec {
    /// Center of this bar across a span starting at `start`.
    pub fn center(&self, start: f64, span: f64) -> f64 {
        start + clamp_span(span) / (self.count as f64 + 1.0) * (self.index as f64 + 1.0)
    }

    /// Every bar of one family along `axis`.
    pub fn family(axis: BarAxis, count: u32, thickness: f64) -> Vec<BarSpec> {
        (0..count)
            .map(|index| BarSpec {
                axis,
                index,
                count,
                thickness: clamp_span(thickness),
            })
            .collect()
    }
}

/// Evenly spaced bar centers strictly inside `(start, start + span)`.
///
/// An empty span has no interior, so it carries no bars.
pub fn bar_centers(start: f64, span: f64, count: u32) -> Vec<f64> {
    if clamp_span(span) <= 0.0 || !start.is_finite() {
        return Vec::new();
    }
    BarSpec::family(BarAxis::Vertical, count, 0.0)
        .iter()
        .map(|bar| bar.center(start, span))
        .collect()
}

fn vertical_centers(layout: &WindowLayout, count: u32) -> Vec<f64> {
    bar_centers(layout.margin, layout.inner_width, count)
}

fn horizontal_centers(layout: &WindowLayout, count: u32) -> Vec<f64> {
    bar_centers(layout.margin, layout.glazing_height, count)
}

/// Render stage: single-stroke muntins.
pub fn muntins(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let options = &spec.muntins;
    if !options.enabled {
        return Vec::new();
    }
    let boundary = layout.boundary();
    let bottom = layout.glazing_bottom();
    let style = Style::stroked(&spec.palette.muntin, options.stroke_width);
    let mut primitives = Vec::new();

    for x in vertical_centers(layout, options.count_x) {
        let top = boundary.arc_y(x, 0.0);
        if top < bottom {
            primitives.push(Primitive::line(
                Role::Muntin,
                Point::new(x, top),
                Point::new(x, bottom),
                style.clone(),
            ));
        }
    }

    for y in horizontal_centers(layout, options.count_y) {
        if let Some((left, right)) = boundary.span_at_y(y) {
            primitives.push(Primitive::line(
                Role::Muntin,
                Point::new(left, y),
                Point::new(right, y),
                style.clone(),
            ));
        }
    }

    debug!(count = primitives.len(), "muntins laid out");
    primitives
}

/// Quad of a horizontal bar centered on `center_y`.
///
/// The bar is cut to the glazing: its top stops at the apex and its bottom
/// at `bottom`. Under a flat top it spans the full inner width; under an arc
/// it is a trapezoid whose edges are each clipped to the arc width at their
/// height. `None` when nothing of the bar lies inside the glazing.
pub fn horizontal_bar_quad(
    boundary: &ArcBoundary,
    center_y: f64,
    thickness: f64,
    bottom: f64,
) -> Option<[Point; 4]> {
    let half = clamp_span(thickness) / 2.0;
    let top = (center_y - half).max(boundary.apex_y());
    let bottom = (center_y + half).min(bottom);
    if !(top < bottom) {
        return None;
    }

    if boundary.is_flat() {
        if boundary.inner_width() <= 0.0 {
            return None;
        }
        let left = boundary.margin();
        let right = left + boundary.inner_width();
        return Some([
            Point::new(left, bottom),
            Point::new(right, bottom),
            Point::new(right, top),
            Point::new(left, top),
        ]);
    }

    let top_width = boundary.arc_width_at_y(top);
    let bottom_width = boundary.arc_width_at_y(bottom);
    if top_width <= 0.0 && bottom_width <= 0.0 {
        return None;
    }
    let cx = boundary.center_x();
    Some([
        Point::new(cx - bottom_width / 2.0, bottom),
        Point::new(cx + bottom_width / 2.0, bottom),
        Point::new(cx + top_width / 2.0, top),
        Point::new(cx - top_width / 2.0, top),
    ])
}

/// Quad of a vertical bar centered on `center_x`, running down to `bottom`.
///
/// Each top corner sits on the arc, but never below `bottom`; the bottom
/// edge is flat.
pub fn vertical_bar_quad(
    boundary: &ArcBoundary,
    center_x: f64,
    thickness: f64,
    bottom: f64,
) -> Option<[Point; 4]> {
    let half = clamp_span(thickness) / 2.0;
    let left = center_x - half;
    let right = center_x + half;
    let top_left = boundary.arc_y(left, 0.0);
    let top_right = boundary.arc_y(right, 0.0);
    if !(top_left < bottom) && !(top_right < bottom) {
        return None;
    }
    Some([
        Point::new(left, top_left.min(bottom)),
        Point::new(right, top_right.min(bottom)),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ])
}

/// Size of the patch that hides borders where two traverses cross.
pub fn crossing_patch_size(thickness: f64) -> (f64, f64) {
    let t = clamp_span(thickness);
    (t + TRAVERSE_BORDER * 2.0 + 2.0, t + TRAVERSE_BORDER)
}

/// Patches at every grid intersection that falls inside the glazing.
pub fn crossing_patches(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Rect> {
    let options = &spec.traverses;
    if options.count_x == 0 || options.count_y == 0 {
        return Vec::new();
    }
    let boundary = layout.boundary();
    let (patch_w, patch_h) = crossing_patch_size(options.width);
    let xs = vertical_centers(layout, options.count_x);
    let ys = horizontal_centers(layout, options.count_y);

    let mut patches = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            if boundary.contains(x, y) {
                patches.push(Rect::new(
                    x - patch_w / 2.0,
                    y - patch_h / 2.0,
                    patch_w,
                    patch_h,
                ));
            }
        }
    }
    patches
}

/// Render stage: bordered traverses and their crossings.
///
/// Horizontal bars first, then vertical bars over them, then the patches.
pub fn traverses(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    let options = &spec.traverses;
    if !options.enabled {
        return Vec::new();
    }
    let boundary = layout.boundary();
    let palette = &spec.palette;
    let thickness = clamp_span(options.width);
    let bordered = thickness + TRAVERSE_BORDER * 2.0;

    let outer_style = Style::filled(&palette.frame, &palette.stroke, TRAVERSE_STROKE);
    let core_style = Style::filled(&palette.background, &palette.background, 1.0);
    let mut primitives = Vec::new();

    let mut push_bar = |outer: Option<[Point; 4]>, core: Option<[Point; 4]>| {
        if let Some(quad) = outer {
            primitives.push(Primitive::outline(
                Role::Traverse,
                Outline::polygon(&quad),
                outer_style.clone(),
            ));
            if let Some(quad) = core {
                primitives.push(Primitive::outline(
                    Role::TraverseCore,
                    Outline::polygon(&quad),
                    core_style.clone(),
                ));
            }
        }
    };

    let bottom = layout.glazing_bottom();
    for y in horizontal_centers(layout, options.count_y) {
        push_bar(
            horizontal_bar_quad(boundary, y, bordered, bottom),
            horizontal_bar_quad(boundary, y, thickness, bottom),
        );
    }

    for x in vertical_centers(layout, options.count_x) {
        push_bar(
            vertical_bar_quad(boundary, x, bordered, bottom),
            vertical_bar_quad(boundary, x, thickness, bottom),
        );
    }

    for patch in crossing_patches(spec, layout) {
        primitives.push(Primitive::rect(
            Role::Crossing,
            patch,
            Style::filled(&palette.background, &palette.background, 1.0),
        ));
    }

    debug!(count = primitives.len(), "traverses laid out");
    primitives
}
