//! Barcode slice queries and the engine's `--barcodes` output.
//!
//! A slice query file lists one `<angle> <offset>` pair per line. The engine
//! answers with one line per slice:
//!
//! ```text
//! 45.0 0.5: 1.0 2.0 m1, 3.0 4.0 m2,
//! ```
//!
//! Each bar is `<birth> <death> m<multiplicity>`; a trailing comma is
//! tolerated.

use std::io::Write;

use super::{decode_line, split_lines};
use crate::error::RivetError;
use crate::model::{Bar, Barcode, SliceKey};

/// Writes a slice query file, one `<angle> <offset>` line per slice.
///
/// Floats use their shortest round-trip form and always keep a decimal
/// point (`45.0`), which is what the engine has always been given.
pub fn write_slices<W: Write>(out: &mut W, slices: &[SliceKey]) -> Result<(), RivetError> {
    for (angle, offset) in slices {
        writeln!(out, "{angle:?} {offset:?}")?;
    }
    Ok(())
}

/// Parses one barcode per non-blank line, preserving line order.
pub fn parse_slices<I, L>(lines: I) -> Result<Vec<(SliceKey, Barcode)>, RivetError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut slices = Vec::new();

    for (line_idx, raw) in lines.into_iter().enumerate() {
        let line_num = line_idx + 1;
        let raw = raw.as_ref();
        let line = decode_line(raw).map_err(|message| RivetError::SliceParse {
            line: line_num,
            content: String::from_utf8_lossy(raw).into_owned(),
            message,
        })?;
        if line.is_empty() {
            continue;
        }

        let slice = parse_slice_line(line).map_err(|message| RivetError::SliceParse {
            line: line_num,
            content: line.to_string(),
            message,
        })?;
        slices.push(slice);
    }

    Ok(slices)
}

/// Parses barcodes from a string.
pub fn from_slices_str(text: &str) -> Result<Vec<(SliceKey, Barcode)>, RivetError> {
    from_slices_slice(text.as_bytes())
}

/// Parses barcodes from raw engine stdout.
pub fn from_slices_slice(bytes: &[u8]) -> Result<Vec<(SliceKey, Barcode)>, RivetError> {
    parse_slices(split_lines(bytes))
}

fn parse_slice_line(line: &str) -> Result<(SliceKey, Barcode), String> {
    let (header, body) = line
        .split_once(':')
        .ok_or_else(|| "missing ':' after slice header".to_string())?;

    let (angle, offset) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| format!("expected '<angle> <offset>', found '{}'", header.trim()))?;
    let angle = parse_f64(angle, "angle")?;
    let offset = parse_f64(offset, "offset")?;

    let bars = body
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_bar)
        .collect::<Result<Vec<Bar>, String>>()?;

    Ok(((angle, offset), Barcode::new(bars)))
}

fn parse_bar(part: &str) -> Result<Bar, String> {
    let tokens: Vec<&str> = part.split_whitespace().take(4).collect();
    let [birth, death, mult] = tokens.as_slice() else {
        return Err(format!(
            "expected '<birth> <death> m<multiplicity>', found '{part}'"
        ));
    };

    let multiplicity = mult
        .strip_prefix('m')
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| format!("invalid multiplicity '{mult}'"))?;

    Ok(Bar::new(
        parse_f64(birth, "birth")?,
        parse_f64(death, "death")?,
        multiplicity,
    ))
}

fn parse_f64(raw: &str, field_name: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid {field_name} '{}'", raw.trim()))
}
