//! Points tagged with the grade at which they appear.

/// The grade(s) at which a point enters the filtration.
///
/// Point clouds with a named second parameter carry one [`Appearance::Scalar`]
/// per point. Bifiltrations carry exactly two values per point.
#[derive(Clone, Debug, PartialEq)]
pub enum Appearance {
    Scalar(f64),
    Multi(Vec<f64>),
}

impl Appearance {
    /// Returns the scalar value, if this is a scalar appearance.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Appearance::Scalar(value) => Some(*value),
            Appearance::Multi(_) => None,
        }
    }

    /// Returns the two grades, if this appearance holds exactly two values.
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Appearance::Multi(values) if values.len() == 2 => Some((values[0], values[1])),
            _ => None,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance::Scalar(0.0)
    }
}

impl From<f64> for Appearance {
    fn from(value: f64) -> Self {
        Appearance::Scalar(value)
    }
}

impl From<(f64, f64)> for Appearance {
    fn from((a, b): (f64, f64)) -> Self {
        Appearance::Multi(vec![a, b])
    }
}

impl From<[f64; 2]> for Appearance {
    fn from([a, b]: [f64; 2]) -> Self {
        Appearance::Multi(vec![a, b])
    }
}

impl From<Vec<f64>> for Appearance {
    fn from(values: Vec<f64>) -> Self {
        Appearance::Multi(values)
    }
}

/// A coordinate tuple with its appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    appearance: Appearance,
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from an appearance and its coordinates.
    pub fn new(appearance: impl Into<Appearance>, coords: impl Into<Vec<f64>>) -> Self {
        Self {
            appearance: appearance.into(),
            coords: coords.into(),
        }
    }

    /// Builds one point per coordinate tuple, all sharing `appearance`.
    pub fn many<I, C>(tuples: I, appearance: impl Into<Appearance>) -> Vec<Point>
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<f64>>,
    {
        let appearance = appearance.into();
        tuples
            .into_iter()
            .map(|coords| Point::new(appearance.clone(), coords))
            .collect()
    }

    #[inline]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_counts_coordinates() {
        let p = Point::new(1.5, vec![1.0, 2.0, 3.0]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.appearance().as_scalar(), Some(1.5));
    }

    #[test]
    fn many_shares_appearance() {
        let points = Point::many([[0.0, 1.0], [2.0, 3.0]], 0.0);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].coords(), &[2.0, 3.0]);
        assert!(points.iter().all(|p| p.appearance() == &Appearance::Scalar(0.0)));
    }

    #[test]
    fn as_pair_requires_two_values() {
        assert_eq!(Appearance::from((1.0, 2.0)).as_pair(), Some((1.0, 2.0)));
        assert_eq!(Appearance::from(vec![1.0, 2.0, 3.0]).as_pair(), None);
        assert_eq!(Appearance::from(1.0).as_pair(), None);
    }
}
