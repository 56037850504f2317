//! Point cloud input writer and reader.
//!
//! ```text
//! # optional comment
//! points
//! 2
//! 3.000000
//! density
//! 0.000000 1.000000 0.500000
//! 3.000000 2.000000 1.000000
//!
//! ```
//!
//! The appearance column is only present when a second parameter is named;
//! otherwise the fifth line reads `no function`.

use std::io::Write;

use super::numeric::Fixed;
use super::{RewritableStream, Saveable};
use crate::error::RivetError;
use crate::model::{Point, PointCloud};

const HEADER: &str = "points";
const NO_FUNCTION: &str = "no function";

impl Saveable for PointCloud {
    fn save<S: RewritableStream>(&self, out: &mut S) -> Result<(), RivetError> {
        write_point_cloud(out, self)
    }
}

/// Writes a point cloud in the engine's `points` input format.
pub fn write_point_cloud<W: Write>(out: &mut W, cloud: &PointCloud) -> Result<(), RivetError> {
    if let Some(comments) = cloud.comments().filter(|c| !c.is_empty()) {
        for line in comments.split('\n') {
            writeln!(out, "# {line}")?;
        }
    }

    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", cloud.dimension())?;
    writeln!(out, "{}", Fixed(cloud.max_dist()))?;
    writeln!(out, "{}", cloud.second_param().unwrap_or(NO_FUNCTION))?;

    for point in cloud.points() {
        for c in point.coords() {
            write!(out, "{} ", Fixed(*c))?;
        }
        if cloud.second_param().is_some() {
            // Construction guarantees scalar appearances in this mode.
            let appearance = point.appearance().as_scalar().unwrap_or_default();
            write!(out, "{} ", Fixed(appearance))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Writes a point cloud to a string.
pub fn to_point_cloud_string(cloud: &PointCloud) -> Result<String, RivetError> {
    cloud.to_input_string()
}

/// Reads a point cloud back from the `points` input format.
///
/// Comment lines are collected back into the comment block, and the point
/// list ends at the first blank line or at end of input.
pub fn from_point_cloud_str(text: &str) -> Result<PointCloud, RivetError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let mut comments = Vec::new();
    let (header_num, header) = loop {
        match lines.next() {
            Some((_, line)) if line.starts_with('#') => {
                let body = line.strip_prefix("# ").unwrap_or(&line[1..]);
                comments.push(body);
            }
            Some(entry) => break entry,
            None => return Err(parse_error(0, "", "missing 'points' header")),
        }
    };
    if header.trim() != HEADER {
        return Err(parse_error(header_num, header, "expected 'points' header"));
    }

    let (dim_num, dim_line) = next_line(&mut lines, "dimension")?;
    let dimension: usize = dim_line
        .trim()
        .parse()
        .map_err(|_| parse_error(dim_num, dim_line, "invalid dimension"))?;

    let (dist_num, dist_line) = next_line(&mut lines, "max distance")?;
    let max_dist: f64 = dist_line
        .trim()
        .parse()
        .map_err(|_| parse_error(dist_num, dist_line, "invalid max distance"))?;

    let (_, param_line) = next_line(&mut lines, "second parameter")?;
    let second_param = match param_line.trim() {
        "" | NO_FUNCTION => None,
        name => Some(name.to_string()),
    };

    let mut points = Vec::new();
    for (line_num, line) in lines {
        if line.trim().is_empty() {
            break;
        }
        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| parse_error(line_num, line, &format!("invalid number: {e}")))?;

        let expected = dimension.saturating_add(usize::from(second_param.is_some()));
        if values.len() != expected {
            return Err(parse_error(
                line_num,
                line,
                &format!("expected {expected} value(s), found {}", values.len()),
            ));
        }

        let point = if second_param.is_some() {
            Point::new(values[dimension], values[..dimension].to_vec())
        } else {
            Point::new(0.0, values)
        };
        points.push(point);
    }

    let mut cloud = PointCloud::new(points)?.with_max_dist(max_dist);
    if let Some(name) = second_param {
        cloud = cloud.with_second_param(name)?;
    }
    if !comments.is_empty() {
        cloud = cloud.with_comments(comments.join("\n"));
    }
    Ok(cloud)
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> Result<(usize, &'a str), RivetError> {
    lines
        .next()
        .ok_or_else(|| parse_error(0, "", &format!("missing {what} line")))
}

fn parse_error(line: usize, content: &str, message: &str) -> RivetError {
    RivetError::PointCloudParse {
        line,
        content: content.to_string(),
        message: message.to_string(),
    }
}
