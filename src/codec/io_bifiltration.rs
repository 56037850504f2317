//! Bifiltration input writer.
//!
//! Every value on a point line is followed by two spaces, matching what the
//! engine's reader has always been fed:
//!
//! ```text
//! bifiltration
//! scale
//! density
//! 1.000000  2.000000  0.000000  0.500000
//!
//! ```

use std::io::Write;

use super::numeric::Fixed;
use super::{RewritableStream, Saveable};
use crate::error::RivetError;
use crate::model::Bifiltration;

impl Saveable for Bifiltration {
    fn save<S: RewritableStream>(&self, out: &mut S) -> Result<(), RivetError> {
        write_bifiltration(out, self)
    }
}

/// Writes a bifiltration in the engine's `bifiltration` input format.
pub fn write_bifiltration<W: Write>(out: &mut W, bif: &Bifiltration) -> Result<(), RivetError> {
    writeln!(out, "bifiltration")?;
    writeln!(out, "{}", bif.x_label())?;
    writeln!(out, "{}", bif.y_label())?;

    for point in bif.points() {
        for c in point.coords() {
            write!(out, "{}  ", Fixed(*c))?;
        }
        // Construction guarantees a pair.
        if let Some((x, y)) = point.appearance().as_pair() {
            write!(out, "{}  {}  ", Fixed(x), Fixed(y))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Writes a bifiltration to a string.
pub fn to_bifiltration_string(bif: &Bifiltration) -> Result<String, RivetError> {
    bif.to_input_string()
}
