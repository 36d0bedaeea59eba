//! # Shapepoints Core
//!
//! Converts between three representations of 2-D vector shapes:
//!
//! - **Shape descriptors**: circle, ellipse, line, rect (optionally with
//!   rounded corners), polygon, polyline, path, and groups thereof
//! - **Point sequences**: a canonical ordered list of points annotated with
//!   optional curve metadata, the common currency of this crate
//! - **Path data strings**: the compact textual mini-language used to draw
//!   lines and curves
//!
//! It also provides point-count normalization so two shapes of different
//! structural complexity can be resampled to the same number of points and
//! paired index by index for interpolation or morphing.
//!
//! ## Architecture
//!
//! ```text
//! Shape descriptor
//!   └── adapter (dispatch)
//!         ├── model (closed-form generators for primitive shapes)
//!         └── path::parser ── path::tokenizer
//!               │
//!               ▼
//!         Point sequence ──(optional)── equalize (add/remove points)
//!               │
//!               ▼
//!         path::serializer ──▶ path data string
//! ```
//!
//! The reverse direction stops at path data: point sequences never convert
//! back to primitive descriptors.
//!
//! ## Usage
//!
//! ```
//! use shapepoints_core::{Circle, Shape, ShapePaths};
//!
//! let shape = Shape::Circle(Circle::new(50.0, 50.0, 20.0));
//! let path = shape.to_path().unwrap();
//! assert_eq!(
//!     path,
//!     ShapePaths::Single("M50,30A20,20,0,0,0,50,70,20,20,0,0,0,50,30Z".to_string())
//! );
//! ```
//!
//! All operations are synchronous, pure transformations over immutable
//! inputs; no component retains cross-call state, so every entry point is
//! safe to call concurrently without coordination.

pub mod adapter;
pub mod equalize;
pub mod error;
pub mod model;
pub mod path;

pub use adapter::{ShapePaths, ShapePoints};
pub use equalize::{add_points, remove_points};
pub use error::{ConvertError, Result};
pub use model::{
    Circle, Curve, Ellipse, Group, Line, PathShape, Point, Polygon, Polyline, Rect, Shape,
};
pub use path::{parse_path, points_to_path};
