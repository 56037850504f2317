use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rivet-io operations.
#[derive(Debug, Error)]
pub enum RivetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A point cloud needs at least one point")]
    EmptyPointCloud,

    #[error(
        "Expected points of dimension {expected}, but point at position {index} has dimension {found}"
    )]
    DimensionMismatch {
        expected: usize,
        index: usize,
        found: usize,
    },

    #[error("Point at position {index} needs a scalar appearance when a second parameter is named")]
    AppearanceNotScalar { index: usize },

    #[error("For a bifiltration, points must have a 2-tuple in the appearance field")]
    BifiltrationAppearance,

    #[error("Distance matrix must be square and non-empty, got {rows}x{cols}")]
    DistanceMatrixShape { rows: usize, cols: usize },

    #[error("Expected {expected} appearance value(s), one per point, got {found}")]
    AppearanceCount { expected: usize, found: usize },

    #[error("Failed to parse point cloud at line {line} ('{content}'): {message}")]
    PointCloudParse {
        line: usize,
        content: String,
        message: String,
    },

    #[error("Failed to parse bounds at line {line} ('{content}'): {message}")]
    BoundsParse {
        line: usize,
        content: String,
        message: String,
    },

    #[error("Failed to parse Betti numbers at line {line} ('{content}'): {message}")]
    BettiParse {
        line: usize,
        content: String,
        message: String,
    },

    #[error("Failed to parse barcodes at line {line} ('{content}'): {message}")]
    SliceParse {
        line: usize,
        content: String,
        message: String,
    },

    #[error("Failed to launch engine {executable}: {source}")]
    EngineLaunch {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine {executable} exited with {}: {stderr}", exit_code_label(.code))]
    EngineFailed {
        executable: PathBuf,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Module bytes are empty")]
    EmptyModule,

    #[error("Verification of engine output failed: {message}")]
    VerificationFailed { message: String },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
