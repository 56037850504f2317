//! Point cloud input, optionally filtered by a second parameter.

use super::point::Point;
use crate::error::RivetError;

/// A validated set of points of equal dimension.
///
/// Without a second parameter the cloud is written in "no function" mode and
/// point appearances are ignored.
#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<Point>,
    second_param: Option<String>,
    comments: Option<String>,
    dimension: usize,
    max_dist: f64,
}

impl PointCloud {
    /// Creates a point cloud, failing on the first point whose dimension
    /// differs from the first point's.
    pub fn new(points: Vec<Point>) -> Result<Self, RivetError> {
        let first = points.first().ok_or(RivetError::EmptyPointCloud)?;
        let dimension = first.dimension();

        for (index, point) in points.iter().enumerate() {
            if point.dimension() != dimension {
                return Err(RivetError::DimensionMismatch {
                    expected: dimension,
                    index,
                    found: point.dimension(),
                });
            }
        }

        let max_dist = span_of_coords(&points);
        Ok(Self {
            points,
            second_param: None,
            comments: None,
            dimension,
            max_dist,
        })
    }

    /// Names the second parameter; every point must then carry a scalar
    /// appearance. An empty name leaves the cloud in "no function" mode.
    pub fn with_second_param(mut self, name: impl Into<String>) -> Result<Self, RivetError> {
        let name = name.into();
        if name.is_empty() {
            self.second_param = None;
            return Ok(self);
        }

        if let Some(index) = self
            .points
            .iter()
            .position(|p| p.appearance().as_scalar().is_none())
        {
            return Err(RivetError::AppearanceNotScalar { index });
        }
        self.second_param = Some(name);
        Ok(self)
    }

    /// Attaches a free-form comment, written as `# ` lines.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Overrides the computed scale bound. Zero counts as unset and restores
    /// the computed span.
    pub fn with_max_dist(mut self, max_dist: f64) -> Self {
        self.max_dist = if max_dist == 0.0 {
            span_of_coords(&self.points)
        } else {
            max_dist
        };
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn second_param(&self) -> Option<&str> {
        self.second_param.as_deref()
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn max_dist(&self) -> f64 {
        self.max_dist
    }
}

/// Crude global scale: the spread of all coordinates, with the running
/// minimum and maximum both starting at zero. Not a true diameter.
fn span_of_coords(points: &[Point]) -> f64 {
    let (lo, hi) = points
        .iter()
        .flat_map(|p| p.coords().iter().copied())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), c| (lo.min(c), hi.max(c)));
    (hi - lo).abs()
}
