//! Plume Core Geometry
//!
//! Foundational primitives for the Plume vector-graphics stack:
//!
//! - **Points & transforms**: component-wise point arithmetic with scalar
//!   broadcast, rectangles, 2D affine matrices
//! - **Segments**: path vertices as anchor + control-handle offsets
//! - **Paths**: ordered segment sequences with in-place geometric transforms

pub mod geometry;
pub mod path;
pub mod segment;

pub use geometry::{Matrix, Point, Rect};
pub use path::Path;
pub use segment::Segment;
