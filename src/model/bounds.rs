//! Parameter-space bounds of a two-parameter persistence module.

use serde::{Deserialize, Serialize};

/// The lower left and upper right corners of the rectangle that captures the
/// parameter range of a module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower_left: (f64, f64),
    pub upper_right: (f64, f64),
}

impl Bounds {
    #[inline]
    pub fn new(lower_left: (f64, f64), upper_right: (f64, f64)) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Returns the minimal bounds enclosing both `self` and `other`.
    ///
    /// Useful for putting several modules on one common grid before
    /// comparing them.
    pub fn common_bounds(&self, other: &Bounds) -> Bounds {
        Bounds {
            lower_left: (
                self.lower_left.0.min(other.lower_left.0),
                self.lower_left.1.min(other.lower_left.1),
            ),
            upper_right: (
                self.upper_right.0.max(other.upper_right.0),
                self.upper_right.1.max(other.upper_right.1),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_bounds_encloses_both() {
        let a = Bounds::new((0.0, 1.0), (2.0, 3.0));
        let b = Bounds::new((-1.0, 2.0), (1.0, 5.0));
        let c = a.common_bounds(&b);
        assert_eq!(c, Bounds::new((-1.0, 1.0), (2.0, 5.0)));
        // inputs are untouched
        assert_eq!(a, Bounds::new((0.0, 1.0), (2.0, 3.0)));
    }

    #[test]
    fn default_is_origin_rectangle() {
        assert_eq!(Bounds::default(), Bounds::new((0.0, 0.0), (0.0, 0.0)));
    }
}
