//! Error types for textel-store.

use textel_core::CanvasError;
use thiserror::Error;

/// Errors from the store and from caller-side validation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the backing file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Restoring a canvas from a persisted record failed.
    ///
    /// Unrecoverable for that session; the owner must re-initialize.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Width or height below 1.
    #[error("width and height must both be at least 1")]
    ZeroDimension,

    /// Estimated rendering exceeds the transport's message-size ceiling.
    #[error("canvas would render to ~{estimated} characters (limit {limit})")]
    DimensionsTooLarge {
        /// Estimated rendered length, `width * height * background length`.
        estimated: usize,
        /// The configured ceiling.
        limit: usize,
    },

    /// Glyph rejected by the allow-list validator.
    #[error("glyph {0:?} is not allowed")]
    GlyphNotAllowed(String),
}
