use serde::{Deserialize, Serialize};

use super::{Curve, Point};

/// `<rect>` descriptor, with optional rounded corners.
///
/// A zero corner radius counts as unset. When only one of `rx`/`ry` is set,
/// the other defaults to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ry: Option<f64>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: None,
            ry: None,
        }
    }

    pub fn rounded(x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: Some(rx),
            ry: Some(ry),
        }
    }

    pub fn to_points(&self) -> Vec<Point> {
        let rx = self.rx.filter(|v| *v != 0.0);
        let ry = self.ry.filter(|v| *v != 0.0);

        match (rx, ry) {
            (None, None) => self.corner_points(),
            (rx, ry) => self.rounded_points(rx.or(ry).unwrap(), ry.or(rx).unwrap()),
        }
    }

    /// Four corners clockwise from the origin corner, plus the closing point.
    fn corner_points(&self) -> Vec<Point> {
        let Rect {
            x,
            y,
            width,
            height,
            ..
        } = *self;
        vec![
            Point::move_to(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
            Point::new(x, y),
        ]
    }

    /// Eight edge endpoints with a sweeping arc at each corner.
    fn rounded_points(&self, rx: f64, ry: f64) -> Vec<Point> {
        let Rect {
            x,
            y,
            width,
            height,
            ..
        } = *self;
        vec![
            Point::move_to(x + rx, y),
            Point::new(x + width - rx, y),
            Point::curve_to(x + width, y + ry, Curve::arc_sweep(rx, ry)),
            Point::new(x + width, y + height - ry),
            Point::curve_to(x + width - rx, y + height, Curve::arc_sweep(rx, ry)),
            Point::new(x + rx, y + height),
            Point::curve_to(x, y + height - ry, Curve::arc_sweep(rx, ry)),
            Point::new(x, y + ry),
            Point::curve_to(x + rx, y, Curve::arc_sweep(rx, ry)),
        ]
    }
}
