//! # SashKit Core
//!
//! Core types, units, and errors shared by every SashKit crate.
//! Provides the geometric value types, the fully resolved window
//! specification consumed by the geometry engine, and the error model.

pub mod error;
pub mod types;
pub mod units;

pub use error::GeometryError;

pub use types::{
    ArcType, BaseOptions, BaseType, DimensionOptions, HorizontalOpening, MuntinOptions,
    OpeningOptions, Palette, Point, Rect, TraverseOptions, VerticalOpening, WindowSpec,
    WindowType,
};

pub use units::MeasurementSystem;
