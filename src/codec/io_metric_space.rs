//! Metric space input writer.
//!
//! Only the strict upper triangle of the distance matrix is written, one row
//! per line, so row `i` of an `n`-point space carries `n - i - 1` values and
//! the last row is an empty line.

use std::io::{Seek, SeekFrom, Write};

use super::numeric::Fixed;
use super::{RewritableStream, Saveable};
use crate::error::RivetError;
use crate::model::MetricSpace;

const NO_FUNCTION: &str = "no function";

impl Saveable for MetricSpace {
    fn save<S: RewritableStream>(&self, out: &mut S) -> Result<(), RivetError> {
        write_metric_space(out, self)
    }
}

/// Writes a metric space in the engine's `metric` input format.
///
/// The stream is rewound and truncated first, so it must be readable and
/// writable rather than append-only.
pub fn write_metric_space<S: RewritableStream>(
    out: &mut S,
    space: &MetricSpace,
) -> Result<(), RivetError> {
    out.seek(SeekFrom::Start(0))?;
    out.truncate_at_position()?;

    writeln!(out, "metric")?;
    if let Some(comment) = space.comment().filter(|c| !c.is_empty()) {
        writeln!(out, "#{}", comment.replace('\n', "\n#"))?;
    }

    match space.appearance() {
        Some(appearance) => {
            writeln!(out, "{}", appearance.label)?;
            let tokens: Vec<String> = appearance
                .values
                .iter()
                .map(|v| format!("{} ", Fixed(*v)))
                .collect();
            writeln!(out, "{}", tokens.join(" "))?;
        }
        None => {
            writeln!(out, "{NO_FUNCTION}")?;
            writeln!(out, "{}", space.len())?;
        }
    }

    writeln!(out, "{}", space.distance_label())?;
    writeln!(out, "{}", Fixed(space.max_dist()))?;

    let distances = space.distances();
    let n = space.len();
    for row in 0..n {
        for col in row + 1..n {
            write!(out, "{} ", Fixed(distances[[row, col]]))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Writes a metric space to a string.
pub fn to_metric_space_string(space: &MetricSpace) -> Result<String, RivetError> {
    space.to_input_string()
}
