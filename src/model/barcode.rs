//! Barcodes along one-dimensional slices of a module.

use serde::{Deserialize, Serialize};

/// A persistence interval with its multiplicity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub birth: f64,
    pub death: f64,
    pub multiplicity: u32,
}

impl Bar {
    #[inline]
    pub fn new(birth: f64, death: f64, multiplicity: u32) -> Self {
        Self {
            birth,
            death,
            multiplicity,
        }
    }
}

/// The bars of one slice, in engine output order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Barcode {
    bars: Vec<Bar>,
}

impl Barcode {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Number of intervals once multiplicities are expanded.
    pub fn total_multiplicity(&self) -> u64 {
        self.bars.iter().map(|bar| u64::from(bar.multiplicity)).sum()
    }
}

impl<'a> IntoIterator for &'a Barcode {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

/// A slice line in parameter space, given as (angle, offset).
pub type SliceKey = (f64, f64);
