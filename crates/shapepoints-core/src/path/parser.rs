//! Path data parser
//!
//! Scans the command letters of a path data string left to right, splits
//! each parameter run with the tokenizer, and folds the resulting command
//! repetitions into an ordered point sequence. The previous point and the
//! current subpath start are carried explicitly through the fold; there is
//! no ambient cursor state.

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::model::{Curve, Point};

use super::tokenizer::tokenize_parameters;

/// One command letter together with its tokenized parameter run.
#[derive(Debug)]
struct RawCommand {
    letter: char,
    args: Vec<f64>,
}

/// Parameter count for one repetition of a command.
fn arity(letter: char) -> Option<usize> {
    match letter.to_ascii_lowercase() {
        'm' | 'l' | 't' => Some(2),
        'h' | 'v' => Some(1),
        'c' => Some(6),
        's' | 'q' => Some(4),
        'a' => Some(7),
        'z' => Some(0),
        _ => None,
    }
}

/// Parse a path data string into an ordered point sequence.
///
/// A command letter followed by several argument groups repeats the command
/// once per group. Lowercase commands are relative to the previous point;
/// the first `M`/`m` always establishes an absolute position.
pub fn parse_path(d: &str) -> Result<Vec<Point>> {
    let commands = scan_commands(d)?;
    if commands.is_empty() {
        return Err(ConvertError::MalformedPathCommand {
            reason: "path data contains no commands".to_string(),
        });
    }

    let mut points: Vec<Point> = Vec::new();
    let mut subpath_start: Option<(f64, f64)> = None;

    for command in &commands {
        apply_command(command, &mut points, &mut subpath_start)?;
    }

    debug!(
        commands = commands.len(),
        points = points.len(),
        "parsed path data"
    );
    Ok(points)
}

/// Split path data into `(letter, parameters)` runs.
fn scan_commands(d: &str) -> Result<Vec<RawCommand>> {
    let mut commands: Vec<RawCommand> = Vec::new();
    let mut run_start: Option<(char, usize)> = None;

    for (index, ch) in d.char_indices() {
        if !ch.is_ascii_alphabetic() {
            continue;
        }
        if arity(ch).is_none() {
            // Letters inside a parameter run would silently corrupt the
            // number stream, so any stray letter fails the parse.
            return Err(ConvertError::MalformedPathCommand {
                reason: format!("unrecognized command letter `{ch}`"),
            });
        }
        if let Some((letter, start)) = run_start.take() {
            commands.push(RawCommand {
                letter,
                args: tokenize_parameters(&d[start..index]),
            });
        }
        run_start = Some((ch, index + ch.len_utf8()));
    }
    if let Some((letter, start)) = run_start {
        commands.push(RawCommand {
            letter,
            args: tokenize_parameters(&d[start..]),
        });
    }

    Ok(commands)
}

fn apply_command(
    command: &RawCommand,
    points: &mut Vec<Point>,
    subpath_start: &mut Option<(f64, f64)>,
) -> Result<()> {
    let letter = command.letter;
    let arity = arity(letter).unwrap_or(0);

    if arity == 0 {
        return close_subpath(points, *subpath_start);
    }
    if command.args.len() % arity != 0 {
        return Err(ConvertError::MalformedPathCommand {
            reason: format!(
                "command `{letter}` takes {arity} parameters per repetition, got {}",
                command.args.len()
            ),
        });
    }

    for group in command.args.chunks(arity) {
        let point = resolve_group(letter, group, points.last(), points.is_empty())?;
        if point.move_to {
            *subpath_start = Some((point.x, point.y));
        }
        points.push(point);
    }
    Ok(())
}

/// Produce the point for one repetition of `letter` over `group`.
fn resolve_group(
    letter: char,
    group: &[f64],
    prev: Option<&Point>,
    is_first: bool,
) -> Result<Point> {
    let relative = letter.is_ascii_lowercase() && !is_first;
    let prev = match prev {
        Some(prev) => prev,
        None if letter.eq_ignore_ascii_case(&'m') => {
            return Ok(Point::move_to(group[0], group[1]));
        }
        None => {
            return Err(ConvertError::MalformedPathCommand {
                reason: format!("command `{letter}` requires a preceding point"),
            });
        }
    };
    // Relative offsets add to the previous point; absolute commands use the
    // offsets as-is.
    let (ox, oy) = if relative { (prev.x, prev.y) } else { (0.0, 0.0) };

    let point = match letter.to_ascii_lowercase() {
        'm' => Point::move_to(ox + group[0], oy + group[1]),
        'l' => Point::new(ox + group[0], oy + group[1]),
        'h' => Point::new(ox + group[0], prev.y),
        'v' => Point::new(prev.x, oy + group[0]),
        'a' => Point::curve_to(
            ox + group[5],
            oy + group[6],
            Curve::Arc {
                rx: group[0],
                ry: group[1],
                x_axis_rotation: group[2],
                large_arc_flag: group[3] as u8,
                sweep_flag: group[4] as u8,
            },
        ),
        'c' => Point::curve_to(
            ox + group[4],
            oy + group[5],
            Curve::Cubic {
                x1: ox + group[0],
                y1: oy + group[1],
                x2: ox + group[2],
                y2: oy + group[3],
            },
        ),
        's' => shorthand_cubic(prev, ox + group[0], oy + group[1], ox + group[2], oy + group[3]),
        'q' => Point::curve_to(
            ox + group[2],
            oy + group[3],
            Curve::Quadratic {
                x1: ox + group[0],
                y1: oy + group[1],
            },
        ),
        't' => shorthand_quadratic(prev, ox + group[0], oy + group[1]),
        _ => unreachable!("scan_commands only passes recognized letters"),
    };
    Ok(point)
}

/// `S`/`s`: the first control point is inferred rather than given.
///
/// When the previous segment was a cubic, its second control point is
/// reflected through the previous point. Otherwise a legacy fallback derives
/// the control point from the distance between the new end point and the
/// explicit second control point; its x and y sign conventions differ, and
/// are preserved exactly since existing morphing output depends on them.
fn shorthand_cubic(prev: &Point, x2: f64, y2: f64, x: f64, y: f64) -> Point {
    let (x1, y1) = match prev.curve {
        Some(Curve::Cubic {
            x2: prev_x2,
            y2: prev_y2,
            ..
        }) => (2.0 * prev.x - prev_x2, 2.0 * prev.y - prev_y2),
        _ => {
            let dx = (x - x2).abs();
            let dy = (y - y2).abs();
            let x1 = if x < x2 { prev.x - dx } else { prev.x + dx };
            let y1 = if y < y2 { prev.y + dy } else { prev.y - dy };
            (x1, y1)
        }
    };
    Point::curve_to(x, y, Curve::Cubic { x1, y1, x2, y2 })
}

/// `T`/`t`: reflect the previous quadratic control point through the
/// previous point, or fall back to the previous point itself.
fn shorthand_quadratic(prev: &Point, x: f64, y: f64) -> Point {
    let (x1, y1) = match prev.curve {
        Some(Curve::Quadratic {
            x1: prev_x1,
            y1: prev_y1,
        }) => (2.0 * prev.x - prev_x1, 2.0 * prev.y - prev_y1),
        _ => (prev.x, prev.y),
    };
    Point::curve_to(x, y, Curve::Quadratic { x1, y1 })
}

/// `Z`/`z`: draw back to the subpath start.
///
/// The close is represented structurally, as a plain point on the subpath
/// start. When the previous point already sits exactly on the start (a
/// curve-closed subpath), no extra point is pushed, keeping
/// serialize-then-parse lossless.
fn close_subpath(points: &mut Vec<Point>, subpath_start: Option<(f64, f64)>) -> Result<()> {
    let (x, y) = subpath_start.ok_or_else(|| ConvertError::MalformedPathCommand {
        reason: "close command with no open subpath".to_string(),
    })?;
    let already_closed = points
        .last()
        .is_some_and(|last| last.x == x && last.y == y);
    if !already_closed {
        points.push(Point::new(x, y));
    }
    Ok(())
}
