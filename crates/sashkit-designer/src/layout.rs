//! Derived spans shared by every render stage
//!
//! [`WindowLayout`] is computed once per render from the [`WindowSpec`]. All
//! spans are clamped, so downstream stages never see a negative or
//! non-finite extent.

use sashkit_core::types::clamp_span;
use sashkit_core::{Rect, WindowSpec};

use crate::arc::{ArcBoundary, ArcProfile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Height of the base panel band, zero when absent
    pub base_height: f64,
    /// Inner height left to the glazing once the base panel is removed
    pub glazing_height: f64,
    pub profile: ArcProfile,
}

impl WindowLayout {
    pub fn from_spec(spec: &WindowSpec) -> Self {
        Self {
            width: clamp_span(spec.width),
            height: clamp_span(spec.height),
            margin: spec.margin(),
            inner_width: spec.inner_width(),
            inner_height: spec.inner_height(),
            base_height: spec.base_height(),
            glazing_height: spec.glazing_height(),
            profile: ArcProfile::from_spec(spec),
        }
    }

    pub fn boundary(&self) -> &ArcBoundary {
        &self.profile.boundary
    }

    /// Outer frame rectangle in window-local coordinates.
    pub fn frame_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Bottom edge of the glazing (top of the base panel, if any).
    pub fn glazing_bottom(&self) -> f64 {
        self.margin + self.glazing_height
    }

    /// Glazing span below the arc, used to place the handle.
    pub fn usable_glazing_height(&self) -> f64 {
        clamp_span(self.glazing_bottom() - self.boundary().baseline_y())
    }

    pub fn has_glazing(&self) -> bool {
        self.inner_width > 0.0 && self.glazing_height > 0.0
    }
}
