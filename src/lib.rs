//! Vertical cross-sections of easting/northing/depth point clouds.
//!
//! A [`Slice`] is cut along a line from anchor `A` to anchor `A′`. With a
//! half-width it keeps only points inside the rectangular corridor around
//! that line; either way every kept point gets an along-line coordinate
//! (`newx`, zero at `A`) paired with its depth.

pub mod cloud;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod slice;

pub use cloud::PointCloud;
pub use error::{CloudError, GeometryError, RenderError, Result, SectionError};
pub use geometry::{Corridor, LineSegment};
pub use operations::{BuildCorridor, ContainmentFilter, ContainmentParams, ProjectToLine, Section};
pub use slice::{Slice, SliceParams};
