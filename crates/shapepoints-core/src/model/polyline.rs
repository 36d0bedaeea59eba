use serde::{Deserialize, Serialize};

use super::Point;

/// `<polyline>` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: String,
}

impl Polyline {
    pub fn new(points: impl Into<String>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn to_points(&self) -> Vec<Point> {
        parse_coordinate_pairs(&self.points)
    }
}

/// Parse a `points` attribute into `(x, y)` pairs, first point marked as the
/// subpath start. Unparseable runs and a dangling odd coordinate are dropped.
pub(super) fn parse_coordinate_pairs(attr: &str) -> Vec<Point> {
    let numbers: Vec<f64> = attr
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();

    let mut points: Vec<Point> = numbers
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();

    if let Some(first) = points.first_mut() {
        first.move_to = true;
    }
    points
}
