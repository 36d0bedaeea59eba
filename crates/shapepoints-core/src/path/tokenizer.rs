//! Parameter-run tokenization
//!
//! Path data packs numbers tightly: a separator is only required where the
//! boundary would otherwise be ambiguous. The scanner below implements the
//! number grammar directly as state transitions instead of leaning on
//! regex backtracking:
//! - whitespace and `,` separate numbers;
//! - `-` always terminates the current number and begins the next;
//! - `.` begins a new number when the current run already holds a `.`.

use tracing::trace;

/// Split a parameter run into numeric values, left to right.
///
/// Runs that fail to parse as a number are dropped.
pub fn tokenize_parameters(input: &str) -> Vec<f64> {
    let mut values = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String, values: &mut Vec<f64>| {
        if current.is_empty() {
            return;
        }
        match current.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => trace!(token = current.as_str(), "dropping unparseable token"),
        }
        current.clear();
    };

    for ch in input.chars() {
        match ch {
            c if c.is_whitespace() || c == ',' => flush(&mut current, &mut values),
            '-' => {
                flush(&mut current, &mut values);
                current.push('-');
            }
            '.' if current.contains('.') => {
                flush(&mut current, &mut values);
                current.push('.');
            }
            c => current.push(c),
        }
    }
    flush(&mut current, &mut values);

    values
}
