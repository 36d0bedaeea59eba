//! Shape dispatch
//!
//! Routes a shape descriptor to the closed-form point generator for
//! primitive shapes or to the path parser for `path` shapes, and serializes
//! point sequences back to path data. Groups convert recursively and keep
//! their nesting: a `g` of shapes yields a list of point sequences and a
//! list of path strings, never a concatenation.
//!
//! Conversion is one-directional: points serialize to path data only, never
//! back to a primitive descriptor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::model::{Circle, Ellipse, Group, Line, PathShape, Point, Polygon, Polyline, Rect, Shape};
use crate::path::points_to_path;

/// A shape's geometry: one point sequence, or a group's worth of them,
/// nested the way the descriptor was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapePoints {
    Single(Vec<Point>),
    Group(Vec<ShapePoints>),
}

/// Path data mirroring a [`ShapePoints`] nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapePaths {
    Single(String),
    Group(Vec<ShapePaths>),
}

impl ShapePoints {
    /// Serialize every point sequence, preserving the nesting.
    pub fn to_paths(&self) -> ShapePaths {
        match self {
            ShapePoints::Single(points) => ShapePaths::Single(points_to_path(points)),
            ShapePoints::Group(children) => {
                ShapePaths::Group(children.iter().map(ShapePoints::to_paths).collect())
            }
        }
    }

    /// The sequence itself, when this is a single shape's geometry.
    pub fn as_single(&self) -> Option<&[Point]> {
        match self {
            ShapePoints::Single(points) => Some(points),
            ShapePoints::Group(_) => None,
        }
    }
}

impl Shape {
    /// Convert a descriptor into its point geometry.
    pub fn to_points(&self) -> Result<ShapePoints> {
        let points = match self {
            Shape::Circle(s) => ShapePoints::Single(s.to_points()),
            Shape::Ellipse(s) => ShapePoints::Single(s.to_points()),
            Shape::Line(s) => ShapePoints::Single(s.to_points()),
            Shape::Rect(s) => ShapePoints::Single(s.to_points()),
            Shape::Polygon(s) => ShapePoints::Single(s.to_points()),
            Shape::Polyline(s) => ShapePoints::Single(s.to_points()),
            Shape::Path(s) => ShapePoints::Single(s.to_points()?),
            Shape::G(group) => ShapePoints::Group(
                group
                    .shapes
                    .iter()
                    .map(Shape::to_points)
                    .collect::<Result<_>>()?,
            ),
        };
        Ok(points)
    }

    /// Convert a descriptor straight to path data.
    pub fn to_path(&self) -> Result<ShapePaths> {
        Ok(self.to_points()?.to_paths())
    }

    /// Build a descriptor from a loosely typed JSON object.
    ///
    /// This is the entry point for duck-typed descriptors coming over a
    /// JSON boundary: an unrecognized or absent `type` fails with
    /// [`ConvertError::UnsupportedShapeType`], an absent required attribute
    /// with [`ConvertError::MissingRequiredAttribute`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let shape_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ConvertError::UnsupportedShapeType {
                shape_type: "<none>".to_string(),
            })?;

        let shape = match shape_type {
            "circle" => Shape::Circle(Circle::new(
                require_number(value, "circle", "cx")?,
                require_number(value, "circle", "cy")?,
                require_number(value, "circle", "r")?,
            )),
            "ellipse" => Shape::Ellipse(Ellipse::new(
                require_number(value, "ellipse", "cx")?,
                require_number(value, "ellipse", "cy")?,
                require_number(value, "ellipse", "rx")?,
                require_number(value, "ellipse", "ry")?,
            )),
            "line" => Shape::Line(Line::new(
                require_number(value, "line", "x1")?,
                require_number(value, "line", "y1")?,
                require_number(value, "line", "x2")?,
                require_number(value, "line", "y2")?,
            )),
            "rect" => Shape::Rect(Rect {
                x: require_number(value, "rect", "x")?,
                y: require_number(value, "rect", "y")?,
                width: require_number(value, "rect", "width")?,
                height: require_number(value, "rect", "height")?,
                rx: value.get("rx").and_then(Value::as_f64),
                ry: value.get("ry").and_then(Value::as_f64),
            }),
            "polygon" => Shape::Polygon(Polygon::new(require_string(value, "polygon", "points")?)),
            "polyline" => {
                Shape::Polyline(Polyline::new(require_string(value, "polyline", "points")?))
            }
            "path" => Shape::Path(PathShape::new(require_string(value, "path", "d")?)),
            "g" => {
                let children = value.get("shapes").and_then(Value::as_array).ok_or_else(|| {
                    ConvertError::MissingRequiredAttribute {
                        shape: "g".to_string(),
                        attribute: "shapes".to_string(),
                    }
                })?;
                Shape::G(Group {
                    shapes: children.iter().map(Shape::from_json).collect::<Result<_>>()?,
                })
            }
            other => {
                return Err(ConvertError::UnsupportedShapeType {
                    shape_type: other.to_string(),
                })
            }
        };
        Ok(shape)
    }
}

fn require_number(value: &Value, shape: &str, attribute: &str) -> Result<f64> {
    value
        .get(attribute)
        .and_then(Value::as_f64)
        .ok_or_else(|| ConvertError::MissingRequiredAttribute {
            shape: shape.to_string(),
            attribute: attribute.to_string(),
        })
}

fn require_string(value: &Value, shape: &str, attribute: &str) -> Result<String> {
    value
        .get(attribute)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ConvertError::MissingRequiredAttribute {
            shape: shape.to_string(),
            attribute: attribute.to_string(),
        })
}
