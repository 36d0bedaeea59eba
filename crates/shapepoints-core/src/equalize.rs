//! Point-density equalization
//!
//! Resamples point sequences so two shapes of different structural
//! complexity can be paired index by index for interpolation:
//! [`add_points`] upsamples by inserting straight-segment midpoints,
//! [`remove_points`] drops collinear and duplicate points.

use tracing::debug;

use crate::model::Point;

/// Grow `points` to exactly `target` points by midpoint insertion.
///
/// Scans adjacent pairs left to right and splices the midpoint into every
/// pair whose second point is not a curve, skipping past the inserted point
/// so a gap is only subdivided once per pass. Passes repeat until the target
/// is reached. When a pass inserts nothing (every segment is a curve, or
/// there is only one point), plain copies of the first point pad the front.
///
/// Targets at or below the current length return the sequence unchanged.
pub fn add_points(points: &[Point], target: usize) -> Vec<Point> {
    let mut p = points.to_vec();
    if p.is_empty() {
        return p;
    }

    while p.len() < target {
        let len_before = p.len();

        let mut i = 1;
        while i < p.len() {
            if p[i].curve.is_some() {
                i += 1;
                continue;
            }
            let mid = straight_midpoint(&p[i - 1], &p[i]);
            p.insert(i, mid);
            if p.len() == target {
                return p;
            }
            i += 2;
        }

        if p.len() == len_before {
            // Nothing subdividable left; pad the front instead.
            let first = Point::new(p[0].x, p[0].y);
            debug!(padding = target - p.len(), "no straight segments to split");
            while p.len() < target {
                p.insert(0, first.clone());
            }
        }
    }

    p
}

/// Midpoint of a straight segment.
///
/// Written to keep `a`'s coordinate bit-exact when the segment is axis
/// aligned, so repeated subdivision never drifts off the shared axis.
fn straight_midpoint(a: &Point, b: &Point) -> Point {
    let x = if a.x == b.x {
        a.x
    } else if a.x < b.x {
        a.x + (b.x - a.x) / 2.0
    } else {
        a.x - (a.x - b.x) / 2.0
    };
    let y = if a.y == b.y {
        a.y
    } else if a.y < b.y {
        a.y + (b.y - a.y) / 2.0
    } else {
        a.y - (a.y - b.y) / 2.0
    };
    Point::new(x, y)
}

/// Drop points that contribute nothing to the shape.
///
/// A point is redundant when it lies exactly on the straight segment
/// between the last kept point and the next point, with the projection
/// falling inside the segment; exact duplicates satisfy both tests
/// trivially. Curve-carrying points, and points whose following point
/// carries a curve, are never removed.
pub fn remove_points(points: &[Point]) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(points.len());

    for (i, current) in points.iter().enumerate() {
        let redundant = match (result.last(), points.get(i + 1)) {
            (Some(prev), Some(next)) => is_between(prev, next, current),
            _ => false,
        };
        if !redundant {
            result.push(current.clone());
        }
    }

    if result.len() < points.len() {
        debug!(removed = points.len() - result.len(), "dropped redundant points");
    }
    result
}

/// Does `candidate` lie on the segment from `a` to `next`?
fn is_between(a: &Point, next: &Point, candidate: &Point) -> bool {
    if next.curve.is_some() || candidate.curve.is_some() {
        return false;
    }

    let cross = (candidate.y - a.y) * (next.x - a.x) - (candidate.x - a.x) * (next.y - a.y);
    if cross.abs() > f64::EPSILON {
        return false;
    }

    let dot = (candidate.x - a.x) * (next.x - a.x) + (candidate.y - a.y) * (next.y - a.y);
    if dot < 0.0 {
        return false;
    }

    let squared_length = (next.x - a.x) * (next.x - a.x) + (next.y - a.y) * (next.y - a.y);
    dot <= squared_length
}
