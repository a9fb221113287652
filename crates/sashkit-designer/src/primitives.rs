//! Drawing primitives
//!
//! Every render stage emits [`Primitive`]s: a tagged [`Shape`] in
//! window-local coordinates, the [`Role`] it plays in the diagram, and an
//! opaque [`Style`] the drawing surface applies as-is.

use lyon::geom::euclid::default::{Box2D, Point2D};
use lyon::geom::{point as lyon_point, vector as lyon_vector, Angle, Arc};
use sashkit_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tolerance used when flattening arcs.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

const MIN_TOLERANCE: f64 = 1e-3;

/// One step of an outline path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    /// Upper half of an ellipse, traced from `center.x - radius_x` through the
    /// apex to `center.x + radius_x`
    Ellipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
    },
    Close,
}

/// Closed path made of straight segments and half-ellipse arcs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    pub commands: Vec<PathCommand>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo { to });
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    pub fn upper_half_ellipse(mut self, center: Point, radius_x: f64, radius_y: f64) -> Self {
        self.commands.push(PathCommand::Ellipse {
            center,
            radius_x,
            radius_y,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Point]) -> Self {
        let mut outline = Self::new();
        for (i, point) in points.iter().enumerate() {
            outline = if i == 0 {
                outline.move_to(*point)
            } else {
                outline.line_to(*point)
            };
        }
        if points.is_empty() {
            outline
        } else {
            outline.close()
        }
    }

    /// Approximate the outline with straight segments.
    ///
    /// Half-ellipse commands are flattened with `lyon` so that every point is
    /// within `tolerance` of the true curve.
    pub fn flatten(&self, tolerance: f64) -> Vec<Point> {
        let tolerance = if tolerance.is_finite() {
            tolerance.max(MIN_TOLERANCE)
        } else {
            DEFAULT_TOLERANCE
        };
        let mut points: Vec<Point> = Vec::new();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => points.push(to),
                PathCommand::Ellipse {
                    center,
                    radius_x,
                    radius_y,
                } => {
                    let start = Point::new(center.x - radius_x, center.y);
                    if points.last() != Some(&start) {
                        points.push(start);
                    }
                    if radius_x > 0.0 && radius_y > 0.0 && center.is_finite() {
                        let arc = upper_half_arc(center, radius_x, radius_y);
                        points.extend(arc.flattened(tolerance).map(|p| Point::new(p.x, p.y)));
                    } else {
                        points.push(Point::new(center.x + radius_x, center.y));
                    }
                }
                PathCommand::Close => {}
            }
        }

        points
    }

    /// Exact bounding box, arcs included.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points: Vec<Point2D<f64>> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => {
                    points.push(lyon_point(to.x, to.y))
                }
                PathCommand::Ellipse {
                    center,
                    radius_x,
                    radius_y,
                } => {
                    points.push(lyon_point(center.x - radius_x, center.y));
                    points.push(lyon_point(center.x + radius_x, center.y));
                    if radius_x > 0.0 && radius_y > 0.0 && center.is_finite() {
                        let bb = upper_half_arc(center, radius_x, radius_y).bounding_box();
                        points.extend([bb.min, bb.max]);
                    }
                }
                PathCommand::Close => {}
            }
        }
        box_bounds(&points)
    }

    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match command {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => to.is_finite(),
            PathCommand::Ellipse {
                center,
                radius_x,
                radius_y,
            } => center.is_finite() && radius_x.is_finite() && radius_y.is_finite(),
            PathCommand::Close => true,
        })
    }
}

fn upper_half_arc(center: Point, radius_x: f64, radius_y: f64) -> Arc<f64> {
    // y grows downward, so sweeping +PI from PI passes the apex at 3PI/2
    Arc {
        center: lyon_point(center.x, center.y),
        radii: lyon_vector(radius_x, radius_y),
        start_angle: Angle::radians(PI),
        sweep_angle: Angle::radians(PI),
        x_rotation: Angle::radians(0.0),
    }
}

fn bounds_of(points: &[Point]) -> Option<Rect> {
    let points: Vec<Point2D<f64>> = points.iter().map(|p| lyon_point(p.x, p.y)).collect();
    box_bounds(&points)
}

fn box_bounds(points: &[Point2D<f64>]) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }
    let bb = Box2D::from_points(points);
    Some(Rect::new(bb.min.x, bb.min.y, bb.width(), bb.height()))
}

/// Horizontal alignment of a text label around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// Geometry of a primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Outline(Outline),
    FilledRect(Rect),
    Line {
        from: Point,
        to: Point,
    },
    DashedLine {
        from: Point,
        to: Point,
    },
    /// Double-headed arrow
    Arrow {
        from: Point,
        to: Point,
        pointer_length: f64,
        pointer_width: f64,
    },
    Text {
        position: Point,
        content: String,
        font_size: f64,
        /// Rotation in degrees around `position`
        rotation: f64,
        anchor: TextAnchor,
    },
}

/// What a primitive depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Frame,
    Glazing,
    BasePanel,
    BaseInset,
    Muntin,
    /// Bordered outer body of a traverse
    Traverse,
    /// Background-colored cut-through inside a traverse
    TraverseCore,
    /// Patch hiding traverse borders where two bars cross
    Crossing,
    Miter,
    Opening,
    Handle,
    Dimension,
}

/// Paint attributes, passed through to the surface untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f64>>,
    #[serde(default)]
    pub corner_radius: f64,
}

impl Style {
    pub fn filled(fill: &str, stroke: &str, stroke_width: f64) -> Self {
        Self {
            fill: Some(fill.to_string()),
            stroke: Some(stroke.to_string()),
            stroke_width,
            ..Self::default()
        }
    }

    pub fn fill_only(fill: &str) -> Self {
        Self {
            fill: Some(fill.to_string()),
            ..Self::default()
        }
    }

    pub fn stroked(stroke: &str, stroke_width: f64) -> Self {
        Self {
            stroke: Some(stroke.to_string()),
            stroke_width,
            ..Self::default()
        }
    }

    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = Some(dash.to_vec());
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub role: Role,
    pub shape: Shape,
    pub style: Style,
}

impl Primitive {
    pub fn new(role: Role, shape: Shape, style: Style) -> Self {
        Self { role, shape, style }
    }

    pub fn outline(role: Role, outline: Outline, style: Style) -> Self {
        Self::new(role, Shape::Outline(outline), style)
    }

    pub fn rect(role: Role, rect: Rect, style: Style) -> Self {
        Self::new(role, Shape::FilledRect(rect), style)
    }

    pub fn line(role: Role, from: Point, to: Point, style: Style) -> Self {
        Self::new(role, Shape::Line { from, to }, style)
    }

    pub fn dashed_line(role: Role, from: Point, to: Point, style: Style) -> Self {
        Self::new(role, Shape::DashedLine { from, to }, style)
    }

    /// Axis-aligned box covering the primitive's geometry.
    ///
    /// Text contributes only its anchor point.
    pub fn bounds(&self) -> Option<Rect> {
        match &self.shape {
            Shape::Outline(outline) => outline.bounds(),
            Shape::FilledRect(rect) => Some(*rect),
            Shape::Line { from, to }
            | Shape::DashedLine { from, to }
            | Shape::Arrow { from, to, .. } => bounds_of(&[*from, *to]),
            Shape::Text { position, .. } => bounds_of(&[*position]),
        }
    }

    pub fn is_finite(&self) -> bool {
        match &self.shape {
            Shape::Outline(outline) => outline.is_finite(),
            Shape::FilledRect(rect) => {
                rect.x.is_finite()
                    && rect.y.is_finite()
                    && rect.width.is_finite()
                    && rect.height.is_finite()
            }
            Shape::Line { from, to } | Shape::DashedLine { from, to } => {
                from.is_finite() && to.is_finite()
            }
            Shape::Arrow {
                from,
                to,
                pointer_length,
                pointer_width,
            } => {
                from.is_finite()
                    && to.is_finite()
                    && pointer_length.is_finite()
                    && pointer_width.is_finite()
            }
            Shape::Text {
                position,
                font_size,
                rotation,
                ..
            } => position.is_finite() && font_size.is_finite() && rotation.is_finite(),
        }
    }
}

/// Union of the bounds of every primitive.
pub fn content_bounds(primitives: &[Primitive]) -> Option<Rect> {
    let corners: Vec<Point> = primitives
        .iter()
        .filter_map(Primitive::bounds)
        .flat_map(|r| [Point::new(r.x, r.y), Point::new(r.right(), r.bottom())])
        .collect();
    bounds_of(&corners)
}

/// Serialize a primitive list as pretty-printed JSON.
pub fn to_json(primitives: &[Primitive]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(primitives)
}
