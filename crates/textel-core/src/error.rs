//! Error types for textel-core.

use thiserror::Error;

/// Errors that can occur when constructing a canvas.
///
/// Drawing operations never fail: out-of-bounds geometry is clipped, so the
/// only failure mode in this crate is restoring a canvas from a buffer whose
/// length disagrees with the stated dimensions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Persisted buffer length does not match `width * height`.
    #[error("buffer has {actual} cells, expected {expected} ({width}x{height})")]
    ShapeMismatch {
        /// Stated canvas width.
        width: u16,
        /// Stated canvas height.
        height: u16,
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
