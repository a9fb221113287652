//! Render pipeline
//!
//! A window is rendered by running a fixed sequence of stages over the same
//! [`WindowSpec`] and [`WindowLayout`]. Each stage is a pure function that
//! returns zero or more primitives; later stages draw on top of earlier ones.

use sashkit_core::{GeometryError, WindowSpec};
use tracing::{debug, warn};

use crate::layout::WindowLayout;
use crate::primitives::Primitive;
use crate::{bars, base_panel, dimensions, frame, opening};

pub type Stage = fn(&WindowSpec, &WindowLayout) -> Vec<Primitive>;

/// Stages in drawing order.
pub const STAGES: [(&str, Stage); 8] = [
    ("frame", frame::frame),
    ("glazing", frame::glazing),
    ("base_panel", base_panel::base_panel),
    ("muntins", bars::muntins),
    ("traverses", bars::traverses),
    ("miter_lines", frame::miter_lines),
    ("openings", opening::opening_indicators),
    ("dimensions", dimensions::dimensions),
];

/// Render a window into an ordered primitive list.
///
/// Never fails: degenerate input is clamped and reported through
/// [`diagnose`] and `warn!` events.
#[tracing::instrument(level = "debug", skip_all, fields(width = spec.width, height = spec.height))]
pub fn render_window(spec: &WindowSpec) -> Vec<Primitive> {
    for issue in diagnose(spec) {
        warn!(%issue, "clamping window geometry");
    }

    let layout = WindowLayout::from_spec(spec);
    let mut primitives = Vec::new();
    for (name, stage) in STAGES {
        let emitted = stage(spec, &layout);
        debug!(stage = name, count = emitted.len(), "stage rendered");
        primitives.extend(emitted);
    }
    primitives
}

/// Degenerate conditions the pipeline will clamp.
pub fn diagnose(spec: &WindowSpec) -> Vec<GeometryError> {
    let mut issues = Vec::new();

    let numbers = [
        ("width", spec.width),
        ("height", spec.height),
        ("inner_margin", spec.inner_margin),
        ("base.height", spec.base.height),
        ("traverses.width", spec.traverses.width),
    ];
    for (name, value) in numbers {
        if !value.is_finite() {
            issues.push(GeometryError::NonFinite {
                name: name.to_string(),
            });
        }
    }

    let margin = spec.margin();
    for (axis, span) in [("width", spec.width), ("height", spec.height)] {
        if span.is_finite() && margin * 2.0 >= span {
            issues.push(GeometryError::InvalidDimension {
                axis: axis.to_string(),
                span,
                margin,
            });
        }
    }

    if spec.is_arched() && spec.inner_width() <= 0.0 {
        issues.push(GeometryError::DegenerateArc {
            inner_width: spec.inner_width(),
        });
    }

    issues
}
