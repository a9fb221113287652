//! Window configuration for SashKit
//!
//! A [`WindowConfig`] is the raw record a user edits: every section is
//! optional in the file and falls back to the preview defaults. Loading
//! rejects values the engine cannot use (NaN, infinities, negative sizes);
//! values outside the configurator's ranges are only warned about.
//!
//! Configuration is organized into sections:
//! - Outline (type, size, margin, arc)
//! - Base panel
//! - Muntins and bars (traverses)
//! - Opening directions, dimensions, units
//! - Placement and colors

use sashkit_core::{
    ArcType, BaseOptions, BaseType, DimensionOptions, MeasurementSystem, MuntinOptions,
    OpeningOptions, Palette, Point, TraverseOptions, WindowSpec, WindowType,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Largest width offered by the configurator.
pub const MAX_WIDTH: f64 = 540.0;
/// Largest height offered by the configurator.
pub const MAX_HEIGHT: f64 = 430.0;
/// Largest bar count per axis offered by the configurator.
pub const MAX_COUNT: i64 = 10;
/// Bar width range offered by the configurator.
pub const BAR_WIDTH_RANGE: (f64, f64) = (2.0, 20.0);
/// Counts are clamped to this when resolving.
pub const HARD_COUNT_LIMIT: i64 = 100;

const CONFIG_DIR_NAME: &str = "sashkit";
const CONFIG_FILE_NAME: &str = "window.toml";

/// Base panel section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    #[serde(rename = "type")]
    pub kind: BaseType,
    pub height: f64,
    pub margin: f64,
    pub glazed_margin: f64,
    pub stroke_width: f64,
}

impl Default for BaseSettings {
    fn default() -> Self {
        let base = BaseOptions::default();
        Self {
            kind: base.kind,
            height: base.height,
            margin: base.margin,
            glazed_margin: base.glazed_margin,
            stroke_width: base.stroke_width,
        }
    }
}

/// Muntin section. Counts are signed so negative input can be clamped
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuntinSettings {
    pub enabled: bool,
    pub count_x: i64,
    pub count_y: i64,
    pub stroke_width: f64,
}

impl Default for MuntinSettings {
    fn default() -> Self {
        let muntins = MuntinOptions::default();
        Self {
            enabled: muntins.enabled,
            count_x: muntins.count_x as i64,
            count_y: muntins.count_y as i64,
            stroke_width: muntins.stroke_width,
        }
    }
}

/// Bar (traverse) section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    pub enabled: bool,
    pub count_x: i64,
    pub count_y: i64,
    pub width: f64,
}

impl Default for BarSettings {
    fn default() -> Self {
        let bars = TraverseOptions::default();
        Self {
            enabled: bars.enabled,
            count_x: bars.count_x as i64,
            count_y: bars.count_y as i64,
            width: bars.width,
        }
    }
}

/// Where the top-left frame corner lands on the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionSettings {
    pub x: f64,
    pub y: f64,
}

impl Default for PositionSettings {
    fn default() -> Self {
        let position = WindowSpec::default().position;
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

/// Raw window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub window_type: WindowType,
    pub width: f64,
    pub height: f64,
    pub inner_margin: f64,
    pub arc_type: ArcType,
    pub stroke_width: f64,
    pub base: BaseSettings,
    pub muntins: MuntinSettings,
    pub bars: BarSettings,
    pub opening: OpeningOptions,
    pub show_width_dimension: bool,
    pub show_height_dimension: bool,
    pub units: MeasurementSystem,
    pub position: PositionSettings,
    pub colors: Palette,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let spec = WindowSpec::default();
        Self {
            window_type: spec.window_type,
            width: spec.width,
            height: spec.height,
            inner_margin: spec.inner_margin,
            arc_type: spec.arc_type,
            stroke_width: spec.stroke_width,
            base: BaseSettings::default(),
            muntins: MuntinSettings::default(),
            bars: BarSettings::default(),
            opening: spec.opening,
            show_width_dimension: spec.dimensions.show_width,
            show_height_dimension: spec.dimensions.show_height,
            units: spec.units,
            position: PositionSettings::default(),
            colors: spec.palette,
        }
    }
}

/// Default config location: `<config_dir>/sashkit/window.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl WindowConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML, by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                )
                .into())
            }
        };

        debug!(path = %path.display(), "loaded window config");
        Ok(config)
    }

    /// Load `path`, or the default location when it exists, or defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn numbers(&self) -> [(&'static str, f64); 12] {
        [
            ("width", self.width),
            ("height", self.height),
            ("inner_margin", self.inner_margin),
            ("stroke_width", self.stroke_width),
            ("base.height", self.base.height),
            ("base.margin", self.base.margin),
            ("base.glazed_margin", self.base.glazed_margin),
            ("base.stroke_width", self.base.stroke_width),
            ("muntins.stroke_width", self.muntins.stroke_width),
            ("bars.width", self.bars.width),
            // Positions may be negative, but must be finite
            ("position.x", self.position.x),
            ("position.y", self.position.y),
        ]
    }

    /// Reject values the geometry engine cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, value) in self.numbers() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(key.to_string()));
            }
            if !key.starts_with("position.") && value < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Values outside the configurator's ranges. These still render.
    pub fn range_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.width > MAX_WIDTH {
            warnings.push(format!("width {} exceeds {}", self.width, MAX_WIDTH));
        }
        if self.height > MAX_HEIGHT {
            warnings.push(format!("height {} exceeds {}", self.height, MAX_HEIGHT));
        }
        if self.inner_margin * 2.0 >= self.width || self.inner_margin * 2.0 >= self.height {
            warnings.push(format!(
                "inner_margin {} leaves no room for glazing",
                self.inner_margin
            ));
        }

        let counts = [
            ("muntins.count_x", self.muntins.count_x),
            ("muntins.count_y", self.muntins.count_y),
            ("bars.count_x", self.bars.count_x),
            ("bars.count_y", self.bars.count_y),
        ];
        for (key, count) in counts {
            if !(0..=MAX_COUNT).contains(&count) {
                warnings.push(format!("{} {} outside 0..={}", key, count, MAX_COUNT));
            }
        }

        let (min_bar, max_bar) = BAR_WIDTH_RANGE;
        if self.bars.width < min_bar || self.bars.width > max_bar {
            warnings.push(format!(
                "bars.width {} outside {}..={}",
                self.bars.width, min_bar, max_bar
            ));
        }

        warnings
    }

    /// Resolve into the engine's fully populated specification.
    pub fn resolve(&self) -> WindowSpec {
        for warning in self.range_warnings() {
            warn!("{}", warning);
        }

        WindowSpec {
            window_type: self.window_type,
            width: self.width,
            height: self.height,
            inner_margin: self.inner_margin,
            arc_type: self.arc_type,
            stroke_width: self.stroke_width,
            base: BaseOptions {
                kind: self.base.kind,
                height: self.base.height,
                margin: self.base.margin,
                glazed_margin: self.base.glazed_margin,
                stroke_width: self.base.stroke_width,
            },
            muntins: MuntinOptions {
                enabled: self.muntins.enabled,
                count_x: resolve_count(self.muntins.count_x),
                count_y: resolve_count(self.muntins.count_y),
                stroke_width: self.muntins.stroke_width,
            },
            traverses: TraverseOptions {
                enabled: self.bars.enabled,
                count_x: resolve_count(self.bars.count_x),
                count_y: resolve_count(self.bars.count_y),
                width: self.bars.width,
            },
            opening: self.opening,
            dimensions: DimensionOptions {
                show_width: self.show_width_dimension,
                show_height: self.show_height_dimension,
            },
            units: self.units,
            position: Point::new(self.position.x, self.position.y),
            palette: self.colors.clone(),
        }
    }
}

/// Negative counts mean no bars.
fn resolve_count(count: i64) -> u32 {
    count.clamp(0, HARD_COUNT_LIMIT) as u32
}
