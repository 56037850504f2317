//! Finite metric space input given as a distance matrix.

use ndarray::Array2;

use crate::error::RivetError;

/// Per-point grades for the second parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct AppearanceValues {
    pub label: String,
    pub values: Vec<f64>,
}

/// A metric space over `n` points.
///
/// Only the strict upper triangle of the distance matrix is written to the
/// engine. Without appearance values the space is multi-critical and the
/// input is written in "no function" mode.
#[derive(Clone, Debug)]
pub struct MetricSpace {
    distance_label: String,
    distances: Array2<f64>,
    appearance: Option<AppearanceValues>,
    comment: Option<String>,
}

impl MetricSpace {
    /// Creates a multi-critical metric space from a square distance matrix.
    pub fn new(
        distance_label: impl Into<String>,
        distances: Array2<f64>,
    ) -> Result<Self, RivetError> {
        let (rows, cols) = distances.dim();
        if rows != cols || rows == 0 {
            return Err(RivetError::DistanceMatrixShape { rows, cols });
        }

        Ok(Self {
            distance_label: distance_label.into(),
            distances,
            appearance: None,
            comment: None,
        })
    }

    /// Attaches one appearance value per point.
    pub fn with_appearance(
        mut self,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, RivetError> {
        if values.len() != self.len() {
            return Err(RivetError::AppearanceCount {
                expected: self.len(),
                found: values.len(),
            });
        }
        self.appearance = Some(AppearanceValues {
            label: label.into(),
            values,
        });
        Ok(self)
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    /// Always false; construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn distance_label(&self) -> &str {
        &self.distance_label
    }

    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }

    pub fn appearance(&self) -> Option<&AppearanceValues> {
        self.appearance.as_ref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Largest entry over the whole matrix, including the lower triangle.
    pub fn max_dist(&self) -> f64 {
        self.distances
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
