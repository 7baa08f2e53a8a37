//! Cursor/Viewport Model
//!
//! Pure coordinate arithmetic between the on-screen cursor, the scroll offsets and the absolute
//! document position. Nothing here touches the line store; bounds are restored afterwards by
//! [`crate::scroll::reconcile`].

/// A (line, byte column) location inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsolutePosition {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based byte column; `column == line.len()` is the end-of-line insertion point.
    pub column: usize,
}

impl AbsolutePosition {
    /// Create a new absolute position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// On-screen cursor, relative to the top-left cell of the text area.
///
/// Signed on purpose: movement may step outside the window and the reconciler pulls it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Screen row.
    pub row: isize,
    /// Screen column.
    pub col: isize,
}

impl Cursor {
    /// Create a cursor at the given screen cell.
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Move by a relative amount. The result may be out of range.
    pub fn move_by(&mut self, delta_row: isize, delta_col: isize) {
        self.row = self.row.saturating_add(delta_row);
        self.col = self.col.saturating_add(delta_col);
    }
}

/// Number of lines and columns scrolled past the document origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Lines scrolled off the top.
    pub row_offset: usize,
    /// Columns scrolled off the left.
    pub col_offset: usize,
}

impl Viewport {
    /// Create a viewport with explicit offsets.
    pub fn new(row_offset: usize, col_offset: usize) -> Self {
        Self {
            row_offset,
            col_offset,
        }
    }

    /// Scroll by a relative amount, saturating at the document origin.
    pub fn scroll(&mut self, delta_row: isize, delta_col: isize) {
        self.row_offset = self.row_offset.saturating_add_signed(delta_row);
        self.col_offset = self.col_offset.saturating_add_signed(delta_col);
    }
}

/// Size of the text area in cells. Never zero in either dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    rows: usize,
    cols: usize,
}

impl WindowSize {
    /// Create a window size; zero dimensions are raised to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Text-area size for a whole terminal: one row is reserved for the status line.
    pub fn for_terminal(height: u16, width: u16) -> Self {
        Self::new(usize::from(height).saturating_sub(1), usize::from(width))
    }

    /// Visible text rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Visible text columns.
    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

/// Map a cursor and viewport to an absolute document position.
///
/// Negative sums saturate at 0; callers only rely on the result after reconciliation.
pub fn absolute_position(cursor: Cursor, viewport: Viewport) -> AbsolutePosition {
    AbsolutePosition {
        line: viewport.row_offset.saturating_add_signed(cursor.row),
        column: viewport.col_offset.saturating_add_signed(cursor.col),
    }
}
