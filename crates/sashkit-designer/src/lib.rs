//! # SashKit Designer
//!
//! Geometry engine for window diagrams. Given a resolved
//! [`WindowSpec`](sashkit_core::WindowSpec) it derives every outline, line,
//! clipping boundary and annotation needed to draw the window, and emits them
//! as an ordered list of [`Primitive`]s.
//!
//! ## Components
//!
//! - **Arc**: elliptical boundary of the arched top, forward and inverse queries
//! - **Frame**: outer frame, inset glazing and corner miter lines
//! - **Base panel**: margined, solid or glazed band beneath the glazing
//! - **Bars**: muntins and bordered traverses, clipped against the arc
//! - **Opening**: dashed hinge diagonals and the handle glyph
//! - **Dimensions**: extension lines, arrows and labels
//! - **SVG renderer**: serializes a primitive list into an SVG document
//!
//! ## Architecture
//!
//! ```text
//! WindowSpec
//!   └── WindowLayout (arc profile, inner spans)
//!         ├── frame      ├── base_panel
//!         ├── bars       ├── opening
//!         └── dimensions
//!               └── Vec<Primitive> ──> svg_renderer / JSON
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sashkit_core::WindowSpec;
//! use sashkit_designer::{render_svg, render_window, SvgOptions};
//!
//! let spec = WindowSpec::default();
//! let primitives = render_window(&spec);
//! let svg = render_svg(&primitives, &SvgOptions::for_spec(&spec));
//! ```

pub mod arc;
pub mod bars;
pub mod base_panel;
pub mod dimensions;
pub mod frame;
pub mod layout;
pub mod opening;
pub mod pipeline;
pub mod primitives;
pub mod svg_renderer;

pub use arc::{arc_height_for, ArcBoundary, ArcProfile};
pub use bars::{bar_centers, BarAxis, BarSpec, TRAVERSE_BORDER};
pub use base_panel::BasePanel;
pub use dimensions::{Dimension, DimensionAxis};
pub use layout::WindowLayout;
pub use pipeline::{diagnose, render_window};
pub use primitives::{Outline, PathCommand, Primitive, Role, Shape, Style, TextAnchor};
pub use svg_renderer::{render_svg, SvgOptions};
