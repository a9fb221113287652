//! Unit conversion utilities
//!
//! Window dimensions are always carried in millimetres. These helpers turn a
//! millimetre length into the text shown on dimension annotations.

use serde::{Deserialize, Serialize};

const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

/// Convert a millimetre length into the given system
pub fn convert_length(value_mm: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => value_mm,
        MeasurementSystem::Imperial => value_mm / MM_PER_INCH,
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

/// Format a length as a dimension label: rounded integer plus unit suffix
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_dimension(value_mm: f64, system: MeasurementSystem) -> String {
    let value = convert_length(value_mm, system);
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    // -0.0 would print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{} {}", rounded as i64, get_unit_label(system))
}
