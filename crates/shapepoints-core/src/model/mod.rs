//! Shape descriptors and the annotated point data model
//!
//! A shape's geometry is an ordered list of [`Point`]s. The first point of a
//! subpath carries `move_to`; a point may carry a [`Curve`] describing how
//! the segment ending at it is drawn. Points are produced by the closed-form
//! generators in this module (circle, ellipse, line, rect, polygon,
//! polyline) or by the path parser, and consumed by the path serializer.

use serde::{Deserialize, Serialize};

mod circle;
mod ellipse;
mod line;
mod path;
mod polygon;
mod polyline;
mod rect;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use path::PathShape;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rect::Rect;

/// One point of a shape's geometry.
///
/// `move_to` marks the first point of an independently positioned subpath
/// (pen lifted before drawing to it). `curve` describes the segment ending
/// at this point; `None` means a straight line, or no segment at all for a
/// subpath's first point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(
        default,
        rename = "moveTo",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub move_to: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

impl Point {
    /// A plain line-to point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            move_to: false,
            curve: None,
        }
    }

    /// The first point of a subpath.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            move_to: true,
            curve: None,
        }
    }

    /// A point reached along `curve`.
    pub fn curve_to(x: f64, y: f64, curve: Curve) -> Self {
        Self {
            x,
            y,
            move_to: false,
            curve: Some(curve),
        }
    }
}

/// How the segment ending at a point is drawn.
///
/// Adding a variant here must break the serializer's command selection at
/// compile time, so both parser and serializer match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Curve {
    /// Elliptical arc. The optional fields default to zero, which is the
    /// absent form; the serializer still emits them positionally since the
    /// arc command requires all seven parameters.
    #[serde(rename_all = "camelCase")]
    Arc {
        rx: f64,
        ry: f64,
        #[serde(default, skip_serializing_if = "is_zero_f64")]
        x_axis_rotation: f64,
        #[serde(default, skip_serializing_if = "is_zero_u8")]
        large_arc_flag: u8,
        #[serde(default, skip_serializing_if = "is_zero_u8")]
        sweep_flag: u8,
    },
    /// Cubic Bezier with two absolute control points.
    Cubic { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Quadratic Bezier with one absolute control point.
    Quadratic { x1: f64, y1: f64 },
}

impl Curve {
    /// An arc with all optional fields at their zero defaults.
    pub fn arc(rx: f64, ry: f64) -> Self {
        Curve::Arc {
            rx,
            ry,
            x_axis_rotation: 0.0,
            large_arc_flag: 0,
            sweep_flag: 0,
        }
    }

    /// An arc drawn in the positive-angle direction.
    pub fn arc_sweep(rx: f64, ry: f64) -> Self {
        Curve::Arc {
            rx,
            ry,
            x_axis_rotation: 0.0,
            large_arc_flag: 0,
            sweep_flag: 1,
        }
    }
}

fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}

fn is_zero_u8(v: &u8) -> bool {
    *v == 0
}

/// A shape descriptor, tagged the way the SVG element set is.
///
/// `G` holds an ordered list of child shapes and converts recursively,
/// preserving child order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Rect(Rect),
    Polygon(Polygon),
    Polyline(Polyline),
    Path(PathShape),
    G(Group),
}

impl Shape {
    /// The descriptor type name, as it appears in the tagged form.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Line(_) => "line",
            Shape::Rect(_) => "rect",
            Shape::Polygon(_) => "polygon",
            Shape::Polyline(_) => "polyline",
            Shape::Path(_) => "path",
            Shape::G(_) => "g",
        }
    }
}

/// A group of shapes, converted child by child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub shapes: Vec<Shape>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_wire_format() {
        let p = Point::move_to(50.0, 30.0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 50.0, "y": 30.0, "moveTo": true }));

        let p = Point::new(50.0, 70.0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 50.0, "y": 70.0 }));
    }

    #[test]
    fn test_arc_zero_fields_absent_on_wire() {
        let c = Curve::arc_sweep(5.0, 10.0);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "arc", "rx": 5.0, "ry": 10.0, "sweepFlag": 1 })
        );
    }

    #[test]
    fn test_curve_roundtrips_through_json() {
        let c = Curve::Cubic {
            x1: 70.0,
            y1: 45.0,
            x2: 80.0,
            y2: 40.0,
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: Curve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
