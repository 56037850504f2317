//! rivet-io: data interchange with the RIVET two-parameter persistence engine.
//!
//! RIVET computes two-parameter persistent homology. This crate handles
//! everything on the host side of that computation: it writes point clouds,
//! bifiltrations and metric spaces in the engine's text input format, runs
//! `rivet_console`, and parses the bounds, multi-graded Betti numbers and
//! barcodes it prints back into typed values.
//!
//! # Modules
//!
//! - [`model`]: Input and output types (PointCloud, MultiBetti, Barcode, etc.)
//! - [`codec`]: Input encoders and output parsers
//! - [`engine`]: Subprocess invocation and staging directories
//! - [`error`]: Error types for rivet-io operations
//!
//! # Example
//!
//! ```
//! use rivet_io::codec::io_slices::from_slices_str;
//! use rivet_io::codec::Saveable;
//! use rivet_io::model::{Point, PointCloud};
//!
//! let cloud = PointCloud::new(Point::many([[0.0, 0.0], [1.0, 0.0]], 0.0))?;
//! assert!(cloud.to_input_string()?.starts_with("points\n2\n1.000000\nno function\n"));
//!
//! let slices = from_slices_str("45.0 0.0: 0.5 1.5 m2,\n")?;
//! assert_eq!(slices[0].1.total_multiplicity(), 2);
//! # Ok::<(), rivet_io::RivetError>(())
//! ```

pub mod codec;
pub mod engine;
pub mod error;
pub mod model;

pub use codec::Saveable;
pub use engine::{ComputeParams, Engine, EngineConfig};
pub use error::RivetError;
