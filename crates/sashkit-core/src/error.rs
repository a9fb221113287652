//! Error handling for SashKit
//!
//! The geometry engine never fails a render: it clamps degenerate input and
//! reports what it clamped as [`GeometryError`] diagnostics.

use thiserror::Error;

/// Geometry error type
///
/// Describes a configuration the geometry engine had to clamp or skip.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The margins consume the whole span on one axis
    #[error("Invalid dimension: {axis} span {span} leaves no room for margin {margin}")]
    InvalidDimension {
        /// The axis name ("width" or "height").
        axis: String,
        /// The outer span on that axis.
        span: f64,
        /// The margin applied on both sides.
        margin: f64,
    },

    /// The arc has no horizontal extent
    #[error("Degenerate arc: inner width {inner_width} cannot carry an arc")]
    DegenerateArc {
        /// The inner (glazing) width the arc would span.
        inner_width: f64,
    },

    /// A numeric input was NaN or infinite
    #[error("Non-finite value for {name}")]
    NonFinite {
        /// The parameter name.
        name: String,
    },
}
