//! Parser for the engine's `--betti` output.
//!
//! The output is a sequence of blank-line terminated sections:
//!
//! ```text
//! x-grades
//! 1/2
//! 1
//!
//! y-grades
//! 1
//! 2
//!
//! xi_0
//! (0,0,1)
//!
//! xi_1
//! (1,1,1)
//!
//! ```
//!
//! Grades are exact rationals. Lines that match no section are ignored.

use log::trace;
use num_rational::BigRational;

use super::numeric::parse_rational;
use super::{decode_line, split_lines};
use crate::error::RivetError;
use crate::model::{BettiEntry, Dimensions, MultiBetti};

/// Which grade list the parser is currently filling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GradeList {
    X,
    Y,
}

/// Parser state: the open grade list and the open xi list, tracked
/// independently and both closed by a blank line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct BettiState {
    grades: Option<GradeList>,
    xi: Option<usize>,
}

/// What a single line means in a given state.
#[derive(Debug, PartialEq, Eq)]
enum BettiAction<'a> {
    OpenGrades(GradeList),
    Close,
    PushGrade(GradeList, &'a str),
    OpenXi(&'a str),
    PushXi(usize, &'a str),
    Ignore,
}

impl BettiState {
    fn classify<'a>(&self, line: &'a str) -> BettiAction<'a> {
        if line == "x-grades" {
            BettiAction::OpenGrades(GradeList::X)
        } else if line == "y-grades" {
            BettiAction::OpenGrades(GradeList::Y)
        } else if line.is_empty() {
            BettiAction::Close
        } else if let Some(list) = self.grades {
            BettiAction::PushGrade(list, line)
        } else if let Some(index) = line.strip_prefix("xi_") {
            BettiAction::OpenXi(index)
        } else if let Some(xi) = self.xi {
            BettiAction::PushXi(xi, line)
        } else {
            BettiAction::Ignore
        }
    }
}

/// Parses multi-graded Betti numbers from engine output lines.
pub fn parse_betti<I, L>(lines: I) -> Result<MultiBetti, RivetError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut state = BettiState::default();
    let mut x_grades: Vec<BigRational> = Vec::new();
    let mut y_grades: Vec<BigRational> = Vec::new();
    let mut xi: [Vec<BettiEntry>; 3] = Default::default();

    for (line_idx, raw) in lines.into_iter().enumerate() {
        let line_num = line_idx + 1;
        let raw = raw.as_ref();
        let line = decode_line(raw).map_err(|message| RivetError::BettiParse {
            line: line_num,
            content: String::from_utf8_lossy(raw).into_owned(),
            message,
        })?;
        let error = |message: String| RivetError::BettiParse {
            line: line_num,
            content: line.to_string(),
            message,
        };

        match state.classify(line) {
            BettiAction::OpenGrades(list) => state.grades = Some(list),
            BettiAction::Close => state = BettiState::default(),
            BettiAction::PushGrade(list, text) => {
                let grade = parse_rational(text).map_err(error)?;
                match list {
                    GradeList::X => x_grades.push(grade),
                    GradeList::Y => y_grades.push(grade),
                }
            }
            BettiAction::OpenXi(suffix) => {
                // Only the digit right after `xi_` counts; trailing text such
                // as a colon is ignored.
                let index = suffix
                    .chars()
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .and_then(|d| usize::try_from(d).ok())
                    .filter(|i| *i < xi.len())
                    .ok_or_else(|| error(format!("unknown Betti function 'xi_{suffix}'")))?;
                state.xi = Some(index);
            }
            BettiAction::PushXi(index, text) => {
                xi[index].push(parse_entry(text).map_err(error)?);
            }
            BettiAction::Ignore => trace!("ignoring betti output line {line_num}: {line}"),
        }
    }

    let [xi_0, xi_1, xi_2] = xi;
    Ok(MultiBetti::new(
        Dimensions::new(x_grades, y_grades),
        xi_0,
        xi_1,
        xi_2,
    ))
}

/// Parses Betti numbers from a string.
pub fn from_betti_str(text: &str) -> Result<MultiBetti, RivetError> {
    from_betti_slice(text.as_bytes())
}

/// Parses Betti numbers from raw engine stdout.
pub fn from_betti_slice(bytes: &[u8]) -> Result<MultiBetti, RivetError> {
    parse_betti(split_lines(bytes))
}

/// Parses a bracketed triple such as `(3,1,2)`. The first and last characters
/// are taken as delimiters whatever they are.
fn parse_entry(text: &str) -> Result<BettiEntry, String> {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    let inner = chars.as_str();

    let values = inner
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid integer '{}'", part.trim()))
        })
        .collect::<Result<Vec<i64>, String>>()?;

    match values.as_slice() {
        [x, y, value] => Ok((*x, *y, *value)),
        _ => Err(format!("expected 3 integers, found {}", values.len())),
    }
}
