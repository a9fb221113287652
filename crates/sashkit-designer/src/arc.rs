//! Elliptical arc boundary
//!
//! The arched top of a window is the upper half of an ellipse. The outer frame
//! uses the full arc height; everything inside the frame (glazing, bars,
//! openings) is clipped against the inner boundary, which is the same ellipse
//! shrunk by the inner margin.
//!
//! All queries are total: a zero-width or zero-height arc degrades to a flat
//! baseline instead of dividing by zero.

use sashkit_core::types::clamp_span;
use sashkit_core::{ArcType, WindowSpec};
use serde::{Deserialize, Serialize};

/// Outer arc height for a window of the given size.
///
/// Semicircular arcs rise half the width, shallow arcs
/// `min(height * 0.15, width * 0.25)`. The result is clamped to `[0, height]`.
pub fn arc_height_for(width: f64, height: f64, arc_type: ArcType) -> f64 {
    let width = clamp_span(width);
    let height = clamp_span(height);
    let rise = match arc_type {
        ArcType::Semicircular => width / 2.0,
        ArcType::Shallow => (height * 0.15).min(width * 0.25),
    };
    rise.clamp(0.0, height)
}

/// Inner (glazing-side) arc evaluator.
///
/// The ellipse is centered horizontally on the glazing and its vertical center
/// sits on the baseline `margin + arc_height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcBoundary {
    margin: f64,
    inner_width: f64,
    arc_height: f64,
}

impl ArcBoundary {
    pub fn new(margin: f64, inner_width: f64, arc_height: f64) -> Self {
        Self {
            margin: clamp_span(margin),
            inner_width: clamp_span(inner_width),
            arc_height: clamp_span(arc_height),
        }
    }

    /// Boundary of a rectangular window: the baseline is the glazing top.
    pub fn flat(margin: f64, inner_width: f64) -> Self {
        Self::new(margin, inner_width, 0.0)
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    pub fn arc_height(&self) -> f64 {
        self.arc_height
    }

    pub fn is_flat(&self) -> bool {
        self.arc_height <= 0.0
    }

    pub fn center_x(&self) -> f64 {
        self.margin + self.inner_width / 2.0
    }

    pub fn half_width(&self) -> f64 {
        self.inner_width / 2.0
    }

    /// Topmost point of the glazing.
    pub fn apex_y(&self) -> f64 {
        self.margin
    }

    /// Vertical center of the ellipse, where the arc meets the straight sides.
    pub fn baseline_y(&self) -> f64 {
        self.margin + self.arc_height
    }

    /// Vertical position of the boundary at `x`, shifted by `offset`.
    ///
    /// Outside the ellipse footprint (including a zero-width arc) this is the
    /// flat baseline.
    pub fn arc_y(&self, x: f64, offset: f64) -> f64 {
        let ratio = (x - self.center_x()).abs() / self.half_width();
        // NaN ratios (0/0 or NaN x) land here too
        if !(ratio < 1.0) {
            return self.baseline_y() + offset;
        }
        let rise = self.arc_height * (1.0 - ratio * ratio).sqrt();
        self.baseline_y() - rise + offset
    }

    /// Horizontal extent of the glazing at height `y`.
    ///
    /// Full inner width at or below the baseline, shrinking to zero at the apex
    /// and above it.
    pub fn arc_width_at_y(&self, y: f64) -> f64 {
        if y >= self.baseline_y() {
            return self.inner_width;
        }
        if self.is_flat() {
            return 0.0;
        }
        let ratio = (y - self.baseline_y()).abs() / self.arc_height;
        if !(ratio < 1.0) {
            return 0.0;
        }
        self.inner_width * (1.0 - ratio * ratio).sqrt()
    }

    /// Left and right glazing edges at height `y`, centered on the arc.
    ///
    /// `None` when the glazing has no extent at that height.
    pub fn span_at_y(&self, y: f64) -> Option<(f64, f64)> {
        let width = self.arc_width_at_y(y);
        if width <= 0.0 {
            return None;
        }
        let center = self.center_x();
        Some((center - width / 2.0, center + width / 2.0))
    }

    /// Whether `(x, y)` lies inside the glazing footprint at that height.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self.span_at_y(y) {
            Some((left, right)) => x >= left && x <= right,
            None => false,
        }
    }
}

/// Arc geometry derived from a window specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcProfile {
    /// Rise of the outer frame arc, zero for rectangular windows
    pub arc_height: f64,
    /// Horizontal semi-axis of the outer frame arc
    pub radius_x: f64,
    /// Glazing-side boundary
    pub boundary: ArcBoundary,
}

impl ArcProfile {
    pub fn from_spec(spec: &WindowSpec) -> Self {
        let width = clamp_span(spec.width);
        let margin = spec.margin();
        let inner_width = spec.inner_width();

        if !spec.is_arched() {
            return Self {
                arc_height: 0.0,
                radius_x: width / 2.0,
                boundary: ArcBoundary::flat(margin, inner_width),
            };
        }

        let arc_height = arc_height_for(width, spec.height, spec.arc_type);
        // The inner rise never drops below the margin, and never leaves the glazing.
        let inner_arc_height = (arc_height - margin).max(margin).min(spec.inner_height());

        Self {
            arc_height,
            radius_x: width / 2.0,
            boundary: ArcBoundary::new(margin, inner_width, inner_arc_height),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.arc_height <= 0.0
    }

    pub fn inner_arc_height(&self) -> f64 {
        self.boundary.arc_height()
    }
}
