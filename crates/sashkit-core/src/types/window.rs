//! Resolved window specification
//!
//! A [`WindowSpec`] is the fully populated configuration the geometry engine
//! consumes. It is built once per render request (see `sashkit-settings`) and
//! never mutated by the engine.

use serde::{Deserialize, Serialize};

use super::geometry::{clamp_span, Point};
use crate::units::MeasurementSystem;

/// Window outline family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// Plain rectangular frame
    Normal,
    /// Rectangle capped by a half-ellipse
    #[default]
    Arched,
}

/// Shape of the arched top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcType {
    /// Segmental arc: `min(height * 0.15, width * 0.25)`
    #[default]
    Shallow,
    /// Full half-circle: `width / 2`
    Semicircular,
}

/// Base panel variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    #[default]
    None,
    /// Solid band with a recessed inset
    Margined,
    /// Solid band, inset margin forced to zero
    Solid,
    /// Glass band with a solid strip along its top
    Glazed,
}

/// Horizontal opening (hinge) direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalOpening {
    #[default]
    None,
    Left,
    Right,
}

/// Vertical opening direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalOpening {
    #[default]
    None,
    Up,
    Down,
}

/// Base panel options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseOptions {
    pub kind: BaseType,
    /// Band height, measured inside the frame
    pub height: f64,
    /// Inset margin for the margined variant
    pub margin: f64,
    /// Strip height for the glazed variant
    pub glazed_margin: f64,
    /// Stroke width for the margined variant
    pub stroke_width: f64,
}

impl BaseOptions {
    pub fn is_present(&self) -> bool {
        self.kind != BaseType::None
    }

    /// Inset margin after the variant rules are applied.
    pub fn effective_margin(&self) -> f64 {
        match self.kind {
            BaseType::Margined => clamp_span(self.margin),
            BaseType::None | BaseType::Solid | BaseType::Glazed => 0.0,
        }
    }

    /// Solid and glazed panels are drawn with a hairline stroke.
    pub fn effective_stroke_width(&self) -> f64 {
        match self.kind {
            BaseType::Solid | BaseType::Glazed => 1.0,
            BaseType::None | BaseType::Margined => self.stroke_width,
        }
    }
}

impl Default for BaseOptions {
    fn default() -> Self {
        Self {
            kind: BaseType::None,
            height: 80.0,
            margin: 15.0,
            glazed_margin: 10.0,
            stroke_width: 2.0,
        }
    }
}

/// Muntin (single-stroke divider) options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuntinOptions {
    pub enabled: bool,
    pub count_x: u32,
    pub count_y: u32,
    pub stroke_width: f64,
}

impl Default for MuntinOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            count_x: 2,
            count_y: 2,
            stroke_width: 2.0,
        }
    }
}

/// Traverse (bordered glazing bar) options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseOptions {
    pub enabled: bool,
    pub count_x: u32,
    pub count_y: u32,
    /// Bar thickness, excluding the border on each side
    pub width: f64,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            count_x: 1,
            count_y: 1,
            width: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningOptions {
    pub horizontal: HorizontalOpening,
    pub vertical: VerticalOpening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOptions {
    pub show_width: bool,
    pub show_height: bool,
}

impl Default for DimensionOptions {
    fn default() -> Self {
        Self {
            show_width: true,
            show_height: true,
        }
    }
}

/// Colors passed through untouched to the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub frame: String,
    pub stroke: String,
    pub glazing_stroke: String,
    pub glazing: String,
    pub base: String,
    pub muntin: String,
    pub handle: String,
    /// Fill used by traverse cut-throughs and crossing patches
    pub background: String,
    pub annotation: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            frame: "#ffffff".to_string(),
            stroke: "#000000".to_string(),
            glazing_stroke: "#000000".to_string(),
            glazing: "#cceeff".to_string(),
            base: "#ffffff".to_string(),
            muntin: "#000000".to_string(),
            handle: "#888888".to_string(),
            background: "#ffffff".to_string(),
            annotation: "#000000".to_string(),
        }
    }
}

/// Fully resolved window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub window_type: WindowType,
    pub width: f64,
    pub height: f64,
    pub inner_margin: f64,
    pub arc_type: ArcType,
    pub stroke_width: f64,
    pub base: BaseOptions,
    pub muntins: MuntinOptions,
    pub traverses: TraverseOptions,
    pub opening: OpeningOptions,
    pub dimensions: DimensionOptions,
    pub units: MeasurementSystem,
    /// Top-left frame corner on the rendering surface
    pub position: Point,
    pub palette: Palette,
}

impl WindowSpec {
    pub fn is_arched(&self) -> bool {
        self.window_type == WindowType::Arched
    }

    /// Margin clamped to a usable, non-negative value.
    pub fn margin(&self) -> f64 {
        clamp_span(self.inner_margin)
    }

    pub fn inner_width(&self) -> f64 {
        clamp_span(self.width - self.margin() * 2.0)
    }

    pub fn inner_height(&self) -> f64 {
        clamp_span(self.height - self.margin() * 2.0)
    }

    /// Base panel height, zero when absent and never taller than the inner height.
    pub fn base_height(&self) -> f64 {
        if self.base.is_present() {
            clamp_span(self.base.height).min(self.inner_height())
        } else {
            0.0
        }
    }

    /// Vertical span available to the glazing, bars and openings.
    pub fn glazing_height(&self) -> f64 {
        clamp_span(self.inner_height() - self.base_height())
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            window_type: WindowType::Arched,
            width: 350.0,
            height: 400.0,
            inner_margin: 10.0,
            arc_type: ArcType::Shallow,
            stroke_width: 2.0,
            base: BaseOptions::default(),
            muntins: MuntinOptions::default(),
            traverses: TraverseOptions::default(),
            opening: OpeningOptions::default(),
            dimensions: DimensionOptions::default(),
            units: MeasurementSystem::Metric,
            position: Point::new(250.0, 100.0),
            palette: Palette::default(),
        }
    }
}
