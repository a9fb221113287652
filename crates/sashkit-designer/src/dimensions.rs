//! Dimension annotations
//!
//! A dimension measures one edge of a rectangle: two extension lines leave
//! the measured ends, a double-headed arrow spans between them, and a label
//! shows the rounded length. Widths are drawn below the rectangle, heights to
//! its left with the label reading upward.

use sashkit_core::units::format_dimension;
use sashkit_core::{MeasurementSystem, Point, Rect, WindowSpec};
use serde::{Deserialize, Serialize};

use crate::base_panel::BasePanel;
use crate::layout::WindowLayout;
use crate::primitives::{Primitive, Role, Shape, Style, TextAnchor};

/// Gap between the arrow tips and the extension lines.
pub const ARROW_INSET: f64 = 5.0;
pub const POINTER_LENGTH: f64 = 10.0;
pub const POINTER_WIDTH: f64 = 10.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;
/// Distance from the arrow to the label baseline.
pub const LABEL_GAP: f64 = 8.0;
pub const DIMENSION_STROKE: f64 = 1.0;

/// Offsets for the outer frame: `(height dimension x, width dimension y)`.
pub const FRAME_OFFSETS: (f64, f64) = (80.0, 60.0);
/// Offsets for the base panel band.
pub const BASE_OFFSETS: (f64, f64) = (50.0, 40.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionAxis {
    Width,
    Height,
}

/// One measured edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub rect: Rect,
    pub axis: DimensionAxis,
    /// Distance of the arrow from the measured edge
    pub offset: f64,
}

impl Dimension {
    pub fn width(rect: Rect, offset: f64) -> Self {
        Self {
            rect,
            axis: DimensionAxis::Width,
            offset,
        }
    }

    pub fn height(rect: Rect, offset: f64) -> Self {
        Self {
            rect,
            axis: DimensionAxis::Height,
            offset,
        }
    }

    pub fn length(&self) -> f64 {
        match self.axis {
            DimensionAxis::Width => self.rect.width,
            DimensionAxis::Height => self.rect.height,
        }
    }

    /// Extension lines, arrow and label for this edge.
    pub fn annotate(&self, units: MeasurementSystem, color: &str) -> Vec<Primitive> {
        let r = self.rect;
        let style = Style::stroked(color, DIMENSION_STROKE);

        let (ext_a, ext_b, arrow, label_at, rotation) = match self.axis {
            DimensionAxis::Width => {
                let y = r.bottom() + self.offset;
                (
                    (Point::new(r.x, r.bottom()), Point::new(r.x, y)),
                    (Point::new(r.right(), r.bottom()), Point::new(r.right(), y)),
                    (
                        Point::new(r.x + ARROW_INSET, y),
                        Point::new(r.right() - ARROW_INSET, y),
                    ),
                    Point::new(r.x + r.width / 2.0, y - LABEL_GAP),
                    0.0,
                )
            }
            DimensionAxis::Height => {
                let x = r.x - self.offset;
                (
                    (Point::new(r.x, r.y), Point::new(x, r.y)),
                    (Point::new(r.x, r.bottom()), Point::new(x, r.bottom())),
                    (
                        Point::new(x, r.y + ARROW_INSET),
                        Point::new(x, r.bottom() - ARROW_INSET),
                    ),
                    Point::new(x - LABEL_GAP, r.y + r.height / 2.0),
                    -90.0,
                )
            }
        };

        let mut primitives = vec![
            Primitive::line(Role::Dimension, ext_a.0, ext_a.1, style.clone()),
            Primitive::line(Role::Dimension, ext_b.0, ext_b.1, style.clone()),
        ];

        // Too short to fit an arrow between the insets
        if self.length() > ARROW_INSET * 2.0 {
            primitives.push(Primitive::new(
                Role::Dimension,
                Shape::Arrow {
                    from: arrow.0,
                    to: arrow.1,
                    pointer_length: POINTER_LENGTH,
                    pointer_width: POINTER_WIDTH,
                },
                Style {
                    fill: Some(color.to_string()),
                    ..style
                },
            ));
        }

        primitives.push(Primitive::new(
            Role::Dimension,
            Shape::Text {
                position: label_at,
                content: format_dimension(self.length(), units),
                font_size: LABEL_FONT_SIZE,
                rotation,
                anchor: TextAnchor::Middle,
            },
            Style::fill_only(color),
        ));

        primitives
    }
}

/// Dimensions drawn for a window: the outer frame, and the base band if any.
pub fn window_dimensions(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Dimension> {
    let mut subjects = vec![(layout.frame_rect(), FRAME_OFFSETS)];
    if let Some(panel) = BasePanel::build(spec, layout) {
        subjects.push((panel.band, BASE_OFFSETS));
    }

    let mut dimensions = Vec::new();
    for (rect, (offset_x, offset_y)) in subjects {
        if spec.dimensions.show_width {
            dimensions.push(Dimension::width(rect, offset_y));
        }
        if spec.dimensions.show_height {
            dimensions.push(Dimension::height(rect, offset_x));
        }
    }
    dimensions
}

/// Render stage: dimension annotations.
pub fn dimensions(spec: &WindowSpec, layout: &WindowLayout) -> Vec<Primitive> {
    window_dimensions(spec, layout)
        .iter()
        .flat_map(|dimension| dimension.annotate(spec.units, &spec.palette.annotation))
        .collect()
}
