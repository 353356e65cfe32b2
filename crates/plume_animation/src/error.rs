//! Animation errors

use thiserror::Error;

/// Recoverable failures of the animation configuration surface.
///
/// The fluent API swallows these (logging a warning) to keep chaining
/// intact; the `try_` variants surface them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimateError {
    /// A replacement shape cannot morph into the item because the two
    /// segment sequences have different lengths.
    #[error("segment count mismatch: item has {item} segments, replacement has {replacement}")]
    SegmentCountMismatch { item: usize, replacement: usize },
}
