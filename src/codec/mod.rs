//! Text codecs for the engine's input and output formats.
//!
//! # Input formats
//!
//! The three input representations are written line by line, fields
//! separated by spaces and floats in six-decimal fixed notation:
//!
//! - point cloud: `[# comment]`, `points`, `<dim>`, `<max_dist>`,
//!   `<second parameter | no function>`, one line of coordinates per point
//! - bifiltration: `bifiltration`, `<x label>`, `<y label>`, one line of
//!   coordinates plus two grades per point
//! - metric space: `metric`, `[#comment]`, `<label>` + values or
//!   `no function` + count, `<distance label>`, `<max_dist>`, then the upper
//!   triangle of the distance matrix row by row
//!
//! # Output formats
//!
//! The engine answers `--bounds`, `--betti` and `--barcodes` queries with
//! UTF-8 text, parsed by [`io_bounds`], [`io_betti`] and [`io_slices`].
//! Every parser takes an iterator of byte lines so engine stdout can be fed
//! straight in, plus `from_*_str` and `from_*_slice` conveniences.

pub mod io_betti;
pub mod io_bifiltration;
pub mod io_bounds;
pub mod io_metric_space;
pub mod io_point_cloud;
pub mod io_slices;
mod numeric;
mod stream;

use std::io::{self, Cursor};

pub use stream::RewritableStream;

#[cfg(feature = "fuzzing")]
pub use numeric::fuzz_parse_rational;

use crate::error::RivetError;

/// An input representation the engine can read.
pub trait Saveable {
    /// Writes the engine input text to `out`. The stream is not closed.
    fn save<S: RewritableStream>(&self, out: &mut S) -> Result<(), RivetError>;

    /// Renders the engine input text into a string.
    ///
    /// Useful for testing without file I/O.
    fn to_input_string(&self) -> Result<String, RivetError> {
        let mut cursor = Cursor::new(Vec::new());
        self.save(&mut cursor)?;
        String::from_utf8(cursor.into_inner())
            .map_err(|e| RivetError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Splits raw engine output into byte lines.
pub(crate) fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split(|b| *b == b'\n')
}

/// Decodes one output line and strips surrounding whitespace.
pub(crate) fn decode_line(raw: &[u8]) -> Result<&str, String> {
    std::str::from_utf8(raw)
        .map(str::trim)
        .map_err(|e| format!("invalid UTF-8: {e}"))
}
