use serde::{Deserialize, Serialize};

use super::Point;

/// `<line>` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn to_points(&self) -> Vec<Point> {
        vec![
            Point::move_to(self.x1, self.y1),
            Point::new(self.x2, self.y2),
        ]
    }
}
