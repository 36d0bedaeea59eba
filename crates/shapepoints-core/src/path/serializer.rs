//! Path data serializer
//!
//! Emits the most compact legal command per segment: `M` for subpath
//! starts, `A`/`C`/`Q` for curve points, `H`/`V` when an axis is shared
//! with the previous point, `L` otherwise, and `Z` when a plain point lands
//! back on its subpath start. Consecutive commands with the same letter are
//! collapsed into one implicit-repetition run.

use std::fmt::Write;

use crate::model::{Curve, Point};

/// Serialize one point sequence into a path data string.
///
/// Subpaths concatenate directly since each begins with its own `M`. A
/// `move_to` point at the very end of the sequence draws nothing and is
/// omitted.
pub fn points_to_path(points: &[Point]) -> String {
    let mut out = String::new();
    let mut last_letter: Option<char> = None;
    let mut subpath_start = (0.0, 0.0);

    for (i, point) in points.iter().enumerate() {
        if i == 0 || point.move_to {
            if i + 1 == points.len() {
                break;
            }
            subpath_start = (point.x, point.y);
            // A new subpath always restates its own letter.
            last_letter = None;
            emit(&mut out, &mut last_letter, 'M', &[point.x, point.y]);
            continue;
        }

        let prev = &points[i - 1];
        let closes = (point.x, point.y) == subpath_start
            && (i + 1 == points.len() || points[i + 1].move_to);

        match point.curve {
            Some(Curve::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc_flag,
                sweep_flag,
            }) => emit(
                &mut out,
                &mut last_letter,
                'A',
                &[
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc_flag as f64,
                    sweep_flag as f64,
                    point.x,
                    point.y,
                ],
            ),
            Some(Curve::Cubic { x1, y1, x2, y2 }) => emit(
                &mut out,
                &mut last_letter,
                'C',
                &[x1, y1, x2, y2, point.x, point.y],
            ),
            Some(Curve::Quadratic { x1, y1 }) => emit(
                &mut out,
                &mut last_letter,
                'Q',
                &[x1, y1, point.x, point.y],
            ),
            None if closes => {
                out.push('Z');
                last_letter = Some('Z');
                continue;
            }
            None if point.y == prev.y => emit(&mut out, &mut last_letter, 'H', &[point.x]),
            None if point.x == prev.x => emit(&mut out, &mut last_letter, 'V', &[point.y]),
            None => emit(&mut out, &mut last_letter, 'L', &[point.x, point.y]),
        }

        // A curve that lands back on the subpath start still closes.
        if point.curve.is_some() && closes {
            out.push('Z');
            last_letter = Some('Z');
        }
    }

    out
}

/// Append one command, folding it into the previous run when the letter
/// repeats.
fn emit(out: &mut String, last_letter: &mut Option<char>, letter: char, params: &[f64]) {
    if *last_letter == Some(letter) {
        out.push(',');
    } else {
        out.push(letter);
        *last_letter = Some(letter);
    }
    for (i, value) in params.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // f64 Display drops trailing zeros: 50 and 12.5, never 50.0.
        let _ = write!(out, "{value}");
    }
}
