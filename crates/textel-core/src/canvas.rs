//! Glyph-grid canvas with clipped drawing primitives.
//!
//! Uses `CompactString` to inline small glyphs (≤24 bytes), avoiding heap
//! allocations for typical content (single characters, emoji shortcodes).

use compact_str::CompactString;

use crate::error::CanvasError;

/// A single canvas cell.
///
/// Glyphs are opaque strings: the canvas never parses or interprets them,
/// and every glyph occupies exactly one cell regardless of its byte length.
pub type Glyph = CompactString;

/// Fixed-size grid of glyphs with row-major flat storage.
///
/// All drawing operations are synchronous and total: out-of-bounds geometry
/// is silently clipped, never an error. The buffer is the sole mutable state;
/// borders are composited only at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// The glyph storage, row-major: index `y * width + x`.
    cells: Vec<Glyph>,
    /// Canvas width, fixed at construction.
    width: u16,
    /// Canvas height, fixed at construction.
    height: u16,
    /// Default fill glyph for fresh and cleared cells.
    background: Glyph,
    /// Horizontal rule glyph, empty means no top/bottom rule.
    x_border: Glyph,
    /// Row flank glyph, empty means no side flanks.
    y_border: Glyph,
}

impl Canvas {
    /// Create a new canvas filled with the background glyph.
    ///
    /// Callers guarantee `width >= 1` and `height >= 1`; dimension
    /// validation belongs to the layer constructing the canvas.
    #[must_use]
    pub fn new(width: u16, height: u16, background: &str) -> Self {
        let size = (width as usize) * (height as usize);
        let background = CompactString::new(background);
        Self {
            cells: vec![background.clone(); size],
            width,
            height,
            background,
            x_border: CompactString::default(),
            y_border: CompactString::default(),
        }
    }

    /// Restore a canvas verbatim from persisted state.
    ///
    /// The buffer is taken as-is, not re-filled. Fails with
    /// [`CanvasError::ShapeMismatch`] when the buffer length disagrees with
    /// `width * height`; that failure leaves nothing partially constructed.
    pub fn from_state(
        width: u16,
        height: u16,
        background: &str,
        cells: Vec<Glyph>,
        x_border: &str,
        y_border: &str,
    ) -> Result<Self, CanvasError> {
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(CanvasError::ShapeMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
            background: CompactString::new(background),
            x_border: CompactString::new(x_border),
            y_border: CompactString::new(y_border),
        })
    }

    /// Get the canvas width.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the canvas height.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the background glyph.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Get the horizontal border glyph (empty when unset).
    #[must_use]
    pub fn x_border(&self) -> &str {
        &self.x_border
    }

    /// Get the vertical border glyph (empty when unset).
    #[must_use]
    pub fn y_border(&self) -> &str {
        &self.y_border
    }

    /// Get total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the canvas has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the glyph buffer slice.
    #[must_use]
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Take ownership of the glyph buffer, consuming the canvas.
    #[must_use]
    pub fn into_cells(self) -> Vec<Glyph> {
        self.cells
    }

    /// Convert (x, y) to linear index.
    #[must_use]
    pub const fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Convert linear index to (x, y).
    #[must_use]
    pub const fn coords(&self, idx: usize) -> (u16, u16) {
        let x = (idx % (self.width as usize)) as u16;
        let y = (idx / (self.width as usize)) as u16;
        (x, y)
    }

    /// Get the glyph at (x, y), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&str> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a single cell, silently skipping out-of-bounds coordinates.
    pub fn set(&mut self, x: i32, y: i32, glyph: &str) {
        if (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y) {
            let idx = self.index(x as u16, y as u16);
            self.cells[idx] = CompactString::new(glyph);
        }
    }

    /// Refill every cell with the background glyph.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clone_from(&self.background);
        }
    }

    /// Fill a sub-rectangle, optionally with an inset border band.
    ///
    /// `(x, y)` is the top-left corner in 0-based column/row coordinates;
    /// cells within `line_width` of any of the rectangle's four edges get
    /// `line_glyph` instead of `fill` (the band takes precedence, so a
    /// 1-wide rectangle with `line_width = 1` is all border). Cells falling
    /// outside the canvas are silently skipped, which makes partially or
    /// fully off-canvas rectangles safe.
    pub fn rect(
        &mut self,
        fill: &str,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        line_width: u32,
        line_glyph: &str,
    ) {
        for row in 0..height {
            for col in 0..width {
                let cx = i64::from(x) + i64::from(col);
                let cy = i64::from(y) + i64::from(row);
                if cx < 0 || cy < 0 || cx >= i64::from(self.width) || cy >= i64::from(self.height)
                {
                    continue;
                }
                let in_band = line_width > 0
                    && (col < line_width
                        || row < line_width
                        || width - 1 - col < line_width
                        || height - 1 - row < line_width);
                let glyph = if in_band { line_glyph } else { fill };
                let idx = self.index(cx as u16, cy as u16);
                self.cells[idx] = CompactString::new(glyph);
            }
        }
    }

    /// Fill a sub-rectangle without a border band.
    pub fn fill_rect(&mut self, fill: &str, x: i32, y: i32, width: u32, height: u32) {
        self.rect(fill, x, y, width, height, 0, " ");
    }

    /// Blit a 2-D glyph array with its top-left corner at (x, y).
    ///
    /// Rows may be jagged; each source cell lands at `(x + col, y + row)`
    /// and out-of-bounds targets are silently dropped. Glyph content is
    /// stored verbatim, never interpreted.
    pub fn draw_image<Row, G>(&mut self, x: i32, y: i32, image: &[Row])
    where
        Row: AsRef<[G]>,
        G: AsRef<str>,
    {
        for (row, line) in image.iter().enumerate() {
            for (col, glyph) in line.as_ref().iter().enumerate() {
                let cx = i64::from(x) + col as i64;
                let cy = i64::from(y) + row as i64;
                if cx < 0 || cy < 0 || cx >= i64::from(self.width) || cy >= i64::from(self.height)
                {
                    continue;
                }
                let idx = self.index(cx as u16, cy as u16);
                self.cells[idx] = CompactString::new(glyph.as_ref());
            }
        }
    }

    /// Set the border glyphs composited at render time.
    ///
    /// The buffer itself is untouched; empty strings for both restore
    /// unframed rendering.
    pub fn add_borders(&mut self, x_border: &str, y_border: &str) {
        self.x_border = CompactString::new(x_border);
        self.y_border = CompactString::new(y_border);
    }

    /// Serialize the canvas to a framed string.
    ///
    /// The top and bottom rules are `x_border` repeated `width` times and
    /// are omitted entirely when `x_border` is empty; each row is its
    /// glyphs concatenated with no separator, flanked by `y_border` on both
    /// sides. Lines are joined by a single newline with no trailing
    /// terminator. Output is deterministic: the same buffer and borders
    /// always produce identical bytes.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.height as usize + 2);
        if !self.x_border.is_empty() {
            lines.push(self.x_border.repeat(self.width as usize));
        }
        for row in 0..self.height as usize {
            let mut line = String::new();
            line.push_str(&self.y_border);
            for cell in &self.cells[row * self.width as usize..(row + 1) * self.width as usize] {
                line.push_str(cell);
            }
            line.push_str(&self.y_border);
            lines.push(line.into());
        }
        if !self.x_border.is_empty() {
            lines.push(self.x_border.repeat(self.width as usize));
        }
        lines.join("\n")
    }

    /// String-producing variant of [`render`](Self::render).
    ///
    /// Same algorithm, second entry point for callers that distinguish
    /// formatted display from a plain value (e.g. wrapping in a code block).
    #[must_use]
    pub fn render_value(&self) -> String {
        self.render()
    }
}
