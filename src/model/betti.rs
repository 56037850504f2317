//! Multi-graded Betti numbers over the module's grade grid.

use num_rational::BigRational;
use serde::{Deserialize, Serialize};

/// The discrete x and y grades of a bigraded module.
///
/// Grades are exact and unbounded. They serialize as strings such as
/// `"3/4"` or `"2"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(with = "grade_strings")]
    pub x_grades: Vec<BigRational>,
    #[serde(with = "grade_strings")]
    pub y_grades: Vec<BigRational>,
}

impl Dimensions {
    pub fn new(x_grades: Vec<BigRational>, y_grades: Vec<BigRational>) -> Self {
        Self { x_grades, y_grades }
    }
}

/// One sparse entry of a Betti function: grid indices and the value there.
pub type BettiEntry = (i64, i64, i64);

/// The three multi-graded Betti number functions xi_0, xi_1 and xi_2.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiBetti {
    pub dimensions: Dimensions,
    pub xi_0: Vec<BettiEntry>,
    pub xi_1: Vec<BettiEntry>,
    pub xi_2: Vec<BettiEntry>,
}

impl MultiBetti {
    pub fn new(
        dimensions: Dimensions,
        xi_0: Vec<BettiEntry>,
        xi_1: Vec<BettiEntry>,
        xi_2: Vec<BettiEntry>,
    ) -> Self {
        Self {
            dimensions,
            xi_0,
            xi_1,
            xi_2,
        }
    }

    /// Returns xi_`index`, or `None` when `index > 2`.
    pub fn xi(&self, index: usize) -> Option<&[BettiEntry]> {
        match index {
            0 => Some(&self.xi_0),
            1 => Some(&self.xi_1),
            2 => Some(&self.xi_2),
            _ => None,
        }
    }
}

mod grade_strings {
    use num_rational::BigRational;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        grades: &[BigRational],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(grades.iter().map(ToString::to_string))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<BigRational>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|raw| raw.parse::<BigRational>().map_err(serde::de::Error::custom))
            .collect()
    }
}
