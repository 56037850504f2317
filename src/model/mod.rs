//! In-memory model for RIVET inputs and outputs.
//!
//! Inputs ([`PointCloud`], [`Bifiltration`], [`MetricSpace`]) validate their
//! invariants at construction and fail on the first offending element, so a
//! value that exists can always be written. Outputs ([`Bounds`],
//! [`MultiBetti`], [`Barcode`]) are plain values produced by the parsers in
//! [`crate::codec`].
//!
//! # Example
//!
//! ```
//! use rivet_io::model::{Point, PointCloud};
//!
//! let cloud = PointCloud::new(Point::many([[0.0, 0.0], [1.0, 2.0]], 0.0))?
//!     .with_comments("two points");
//! assert_eq!(cloud.dimension(), 2);
//! assert_eq!(cloud.max_dist(), 2.0);
//! # Ok::<(), rivet_io::RivetError>(())
//! ```

mod barcode;
mod betti;
mod bifiltration;
mod bounds;
mod metric_space;
mod point;
mod point_cloud;

pub use barcode::{Bar, Barcode, SliceKey};
pub use betti::{BettiEntry, Dimensions, MultiBetti};
pub use bifiltration::Bifiltration;
pub use bounds::Bounds;
pub use metric_space::{AppearanceValues, MetricSpace};
pub use point::{Appearance, Point};
pub use point_cloud::PointCloud;
