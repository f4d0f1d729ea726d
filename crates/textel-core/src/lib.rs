//! Core glyph-grid canvas engine for Textel.
//!
//! This crate provides the [`Canvas`]: a fixed-size, row-major grid of opaque
//! glyph strings with a handful of deterministic drawing primitives
//! ([`Canvas::rect`], [`Canvas::draw_image`], [`Canvas::add_borders`]) and a
//! reproducible string serialization ([`Canvas::render`]).
//!
//! The canvas is a leaf value object: it performs no I/O, knows nothing about
//! commands or storage, and every operation is synchronous and total —
//! out-of-bounds geometry is clipped, never an error. The only failure mode
//! is [`Canvas::from_state`] with a buffer of the wrong length.
//!
//! # Example
//!
//! ```
//! use textel_core::Canvas;
//!
//! let mut canvas = Canvas::new(3, 2, ".");
//! canvas.rect("#", 1, 0, 1, 1, 0, " ");
//! assert_eq!(canvas.render(), ".#.\n...");
//! ```

mod canvas;
mod error;

pub use canvas::{Canvas, Glyph};
pub use error::CanvasError;
