use serde::{Deserialize, Serialize};

use super::{Curve, Point};

/// `<circle>` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    /// Two half-circle arcs from the topmost point, down and back.
    pub fn to_points(&self) -> Vec<Point> {
        vec![
            Point::move_to(self.cx, self.cy - self.r),
            Point::curve_to(self.cx, self.cy + self.r, Curve::arc(self.r, self.r)),
            Point::curve_to(self.cx, self.cy - self.r, Curve::arc(self.r, self.r)),
        ]
    }
}
