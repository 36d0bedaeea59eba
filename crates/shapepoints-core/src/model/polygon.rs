use serde::{Deserialize, Serialize};

use super::{polyline::parse_coordinate_pairs, Point};

/// `<polygon>` descriptor.
///
/// The `points` attribute is a whitespace/comma-separated run of numbers
/// consumed pairwise. A polygon closes itself: a plain copy of the first
/// point is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: String,
}

impl Polygon {
    pub fn new(points: impl Into<String>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn to_points(&self) -> Vec<Point> {
        let mut points = parse_coordinate_pairs(&self.points);
        if let Some(first) = points.first() {
            points.push(Point::new(first.x, first.y));
        }
        points
    }
}
