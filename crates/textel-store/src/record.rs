//! The persisted-state record bridging canvases to storage.

use serde::{Deserialize, Serialize};
use textel_core::{Canvas, Glyph};

use crate::error::StoreError;

/// Default message-size ceiling, matching the reference deployment's
/// transport limit.
pub const DEFAULT_RENDER_LIMIT: usize = 2000;

/// One owner's persisted canvas state.
///
/// The canvas itself performs no I/O; callers load a record, restore a
/// [`Canvas`] from it, mutate, and write the updated buffer and borders back
/// before persisting. One record per owner key, one logical session at a
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasRecord {
    /// Opaque identity of the session owner.
    pub owner: String,
    /// Canvas width.
    pub width: u16,
    /// Canvas height.
    pub height: u16,
    /// Background glyph used at creation.
    pub background: String,
    /// Row-major glyph buffer, `width * height` entries.
    pub cells: Vec<Glyph>,
    /// Horizontal border glyph, empty when unset.
    #[serde(default)]
    pub x_border: String,
    /// Vertical border glyph, empty when unset.
    #[serde(default)]
    pub y_border: String,
}

impl CanvasRecord {
    /// Create the record of a freshly initialized canvas.
    #[must_use]
    pub fn fresh(owner: &str, width: u16, height: u16, background: &str) -> Self {
        let canvas = Canvas::new(width, height, background);
        Self {
            owner: owner.to_string(),
            width,
            height,
            background: background.to_string(),
            cells: canvas.into_cells(),
            x_border: String::new(),
            y_border: String::new(),
        }
    }

    /// Restore the canvas this record describes.
    ///
    /// Surfaces `ShapeMismatch` when the stored buffer disagrees with the
    /// stored dimensions (a corrupt record); callers must treat that as
    /// unrecoverable for the session.
    pub fn to_canvas(&self) -> Result<Canvas, StoreError> {
        let canvas = Canvas::from_state(
            self.width,
            self.height,
            &self.background,
            self.cells.clone(),
            &self.x_border,
            &self.y_border,
        )?;
        Ok(canvas)
    }

    /// Write a mutated canvas's buffer and borders back into the record.
    pub fn absorb(&mut self, canvas: &Canvas) {
        self.cells = canvas.cells().to_vec();
        self.x_border = canvas.x_border().to_string();
        self.y_border = canvas.y_border().to_string();
    }
}

/// Validate canvas dimensions against positivity and the render-size ceiling.
///
/// The estimate is `width * height * background glyph length` in characters,
/// the same upper bound the reference deployment checked before creating a
/// canvas. Dimension validation lives here, outside the canvas, which
/// assumes positive dimensions by contract.
pub fn validate_dimensions(
    width: u16,
    height: u16,
    background: &str,
    limit: usize,
) -> Result<(), StoreError> {
    if width == 0 || height == 0 {
        return Err(StoreError::ZeroDimension);
    }
    let estimated = (width as usize) * (height as usize) * background.chars().count();
    if estimated > limit {
        return Err(StoreError::DimensionsTooLarge { estimated, limit });
    }
    Ok(())
}

/// Allow-list validation for glyphs arriving from untrusted input.
///
/// The canvas stores any string verbatim; this is the calling layer's
/// sanitization step. Rejects empty glyphs, glyphs containing control
/// characters (including newlines, which would corrupt the line-oriented
/// rendering), and whitespace runs other than a single space.
pub fn validate_glyph(glyph: &str) -> Result<(), StoreError> {
    let rejected = glyph.is_empty()
        || glyph.chars().any(char::is_control)
        || (glyph.trim().is_empty() && glyph != " ");
    if rejected {
        return Err(StoreError::GlyphNotAllowed(glyph.to_string()));
    }
    Ok(())
}
