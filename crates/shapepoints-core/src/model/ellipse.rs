use serde::{Deserialize, Serialize};

use super::{Curve, Point};

/// `<ellipse>` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }

    /// Two half-ellipse arcs from the topmost point, down and back.
    pub fn to_points(&self) -> Vec<Point> {
        vec![
            Point::move_to(self.cx, self.cy - self.ry),
            Point::curve_to(self.cx, self.cy + self.ry, Curve::arc(self.rx, self.ry)),
            Point::curve_to(self.cx, self.cy - self.ry, Curve::arc(self.rx, self.ry)),
        ]
    }
}
