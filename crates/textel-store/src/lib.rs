//! Persisted canvas state for Textel.
//!
//! The canvas engine in `textel-core` is a pure value object; this crate is
//! the storage collaborator around it:
//! - [`CanvasRecord`]: the per-owner persisted-state record
//! - [`CanvasStore`]: keyed load/save/delete, with [`MemoryStore`] and
//!   [`JsonFileStore`] backends
//! - Caller-side validation the canvas deliberately does not do:
//!   [`validate_dimensions`] (positivity and the render-size ceiling) and
//!   [`validate_glyph`] (allow-list for untrusted glyph input)

mod error;
mod record;
mod store;

pub use error::StoreError;
pub use record::{validate_dimensions, validate_glyph, CanvasRecord, DEFAULT_RENDER_LIMIT};
pub use store::{CanvasStore, JsonFileStore, MemoryStore};
