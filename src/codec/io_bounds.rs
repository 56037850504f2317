//! Parser for the engine's `--bounds` output.
//!
//! ```text
//! low: 0.5,1
//! high: 3.25,10
//! ```
//!
//! Lines other than `low:` and `high:` are ignored. A corner that never
//! appears defaults to `(0, 0)`, and the last occurrence of a corner wins.

use super::{decode_line, split_lines};
use crate::error::RivetError;
use crate::model::Bounds;

/// Parses bounds from engine output lines.
pub fn parse_bounds<I, L>(lines: I) -> Result<Bounds, RivetError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut bounds = Bounds::default();

    for (line_idx, raw) in lines.into_iter().enumerate() {
        let line_num = line_idx + 1;
        let raw = raw.as_ref();
        let line = decode_line(raw).map_err(|message| RivetError::BoundsParse {
            line: line_num,
            content: String::from_utf8_lossy(raw).into_owned(),
            message,
        })?;

        if line.starts_with("low:") {
            bounds.lower_left = parse_corner(line, 5, line_num)?;
        }
        if line.starts_with("high:") {
            bounds.upper_right = parse_corner(line, 6, line_num)?;
        }
    }

    Ok(bounds)
}

/// Parses bounds from a string.
pub fn from_bounds_str(text: &str) -> Result<Bounds, RivetError> {
    from_bounds_slice(text.as_bytes())
}

/// Parses bounds from raw engine stdout.
pub fn from_bounds_slice(bytes: &[u8]) -> Result<Bounds, RivetError> {
    parse_bounds(split_lines(bytes))
}

/// Parses the comma-separated pair that starts `skip` bytes into `line`.
fn parse_corner(line: &str, skip: usize, line_num: usize) -> Result<(f64, f64), RivetError> {
    let error = |message: String| RivetError::BoundsParse {
        line: line_num,
        content: line.to_string(),
        message,
    };

    let rest = line.get(skip..).unwrap_or("");
    let values = rest
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| error(format!("invalid coordinate '{}'", part.trim())))
        })
        .collect::<Result<Vec<f64>, RivetError>>()?;

    match values.as_slice() {
        [x, y] => Ok((*x, *y)),
        _ => Err(error(format!(
            "expected 2 coordinates, found {}",
            values.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_corners() {
        let bounds = parse_bounds([b"low: 1.0,2.0".as_slice(), b"high: 3.0,4.0".as_slice()]).unwrap();
        assert_eq!(bounds.lower_left, (1.0, 2.0));
        assert_eq!(bounds.upper_right, (3.0, 4.0));
    }

    #[test]
    fn empty_input_yields_origin() {
        let bounds = parse_bounds(Vec::<Vec<u8>>::new()).unwrap();
        assert_eq!(bounds, Bounds::new((0.0, 0.0), (0.0, 0.0)));
    }

    #[test]
    fn ignores_other_lines_and_keeps_last_occurrence() {
        let text = "RIVET bounds\nhigh: 9,9\n  low: -1.5, 0  \nx-grades\nhigh: 5,6\n";
        let bounds = from_bounds_str(text).unwrap();
        assert_eq!(bounds.lower_left, (-1.5, 0.0));
        assert_eq!(bounds.upper_right, (5.0, 6.0));
    }

    #[test]
    fn order_of_corners_does_not_matter() {
        let bounds = from_bounds_str("high: 3,4\nlow: 1,2").unwrap();
        assert_eq!(bounds, Bounds::new((1.0, 2.0), (3.0, 4.0)));
    }

    #[test]
    fn rejects_malformed_corner() {
        let err = from_bounds_str("low: 1.0;2.0").unwrap_err();
        assert!(matches!(err, RivetError::BoundsParse { line: 1, .. }));

        let err = from_bounds_str("\nhigh: 1,2,3").unwrap_err();
        assert!(matches!(err, RivetError::BoundsParse { line: 2, .. }));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = from_bounds_slice(b"low: 1,2\n\xff\xfe").unwrap_err();
        assert!(matches!(err, RivetError::BoundsParse { line: 2, .. }));
    }
}
