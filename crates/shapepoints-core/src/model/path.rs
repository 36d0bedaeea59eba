use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::parse_path;

use super::Point;

/// `<path>` descriptor holding raw path data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub d: String,
}

impl PathShape {
    pub fn new(d: impl Into<String>) -> Self {
        Self { d: d.into() }
    }

    pub fn to_points(&self) -> Result<Vec<Point>> {
        parse_path(&self.d)
    }
}
