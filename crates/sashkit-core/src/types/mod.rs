//! Value types shared by the geometry engine and the settings layer.
//!
//! ## Modules
//!
//! - [`geometry`]: `Point` and the clamping `Rect`
//! - [`window`]: the resolved `WindowSpec` and its option enums

pub mod geometry;
pub mod window;

pub use geometry::*;
pub use window::*;
