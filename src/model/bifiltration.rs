//! Bifiltered point input, where each point appears at a pair of grades.

use super::point::Point;
use crate::error::RivetError;

/// Points whose appearance is exactly an (x, y) grade pair.
#[derive(Clone, Debug)]
pub struct Bifiltration {
    x_label: String,
    y_label: String,
    points: Vec<Point>,
}

impl Bifiltration {
    /// Creates a bifiltration, failing on the first point without a two-value
    /// appearance. The error does not name the point.
    pub fn new(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        points: Vec<Point>,
    ) -> Result<Self, RivetError> {
        if points.iter().any(|p| p.appearance().as_pair().is_none()) {
            return Err(RivetError::BifiltrationAppearance);
        }

        Ok(Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            points,
        })
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
