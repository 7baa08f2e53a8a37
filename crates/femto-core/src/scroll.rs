//! Scroll Reconciler
//!
//! Restores the visibility invariant after any cursor or viewport change:
//!
//! - `0 <= cursor.row < rows` and `0 <= cursor.col < cols`
//! - `row_offset + cursor.row` is an existing line
//! - `col_offset + cursor.col <= len(line)`
//!
//! Vertical reconciliation runs first, horizontal is then evaluated against the line the cursor
//! ended up on. Both prefer moving the offset (the document scrolls) over clamping the cursor,
//! until the offset reaches its bound.

use crate::storage::LineStore;
use crate::viewport::{Cursor, Viewport, WindowSize};

/// Run both reconciliation passes.
pub fn reconcile(
    cursor: &mut Cursor,
    viewport: &mut Viewport,
    window: WindowSize,
    store: &LineStore,
) {
    let before = (*cursor, *viewport);

    reconcile_vertical(cursor, viewport, window, store.line_count());
    let line = viewport.row_offset + to_usize(cursor.row);
    reconcile_horizontal(cursor, viewport, window, store.line_len(line));

    if before != (*cursor, *viewport) {
        tracing::trace!(
            row = cursor.row,
            col = cursor.col,
            row_offset = viewport.row_offset,
            col_offset = viewport.col_offset,
            "cursor reconciled"
        );
    }
}

/// Keep the cursor row inside the window and on an existing line.
pub fn reconcile_vertical(
    cursor: &mut Cursor,
    viewport: &mut Viewport,
    window: WindowSize,
    line_count: usize,
) {
    let rows = window.rows();
    let max_offset = line_count.saturating_sub(rows);

    // Lines were removed under the viewport: pull it back, keeping the absolute row.
    if viewport.row_offset > max_offset {
        cursor.row += to_isize(viewport.row_offset - max_offset);
        viewport.row_offset = max_offset;
    }

    let (row, offset) = settle(cursor.row, viewport.row_offset, rows, max_offset);
    cursor.row = row;
    viewport.row_offset = offset;

    let last_line = line_count.saturating_sub(1);
    if viewport.row_offset + to_usize(cursor.row) > last_line {
        cursor.row = to_isize(last_line.saturating_sub(viewport.row_offset));
    }
}

/// Keep the cursor column inside the window and within `line_len`.
pub fn reconcile_horizontal(
    cursor: &mut Cursor,
    viewport: &mut Viewport,
    window: WindowSize,
    line_len: usize,
) {
    let cols = window.cols();
    // One extra cell so the end-of-line insertion point stays reachable.
    let max_offset = (line_len + 1).saturating_sub(cols);

    if viewport.col_offset > max_offset {
        cursor.col += to_isize(viewport.col_offset - max_offset);
        viewport.col_offset = max_offset;
    }

    let (col, offset) = settle(cursor.col, viewport.col_offset, cols, max_offset);
    cursor.col = col;
    viewport.col_offset = offset;

    if viewport.col_offset + to_usize(cursor.col) > line_len {
        cursor.col = to_isize(line_len.saturating_sub(viewport.col_offset));
    }
}

/// Shift `offset` toward `pos` until `pos` fits in `[0, extent)` or the offset hits
/// `[0, max_offset]`, then clamp `pos`.
fn settle(pos: isize, offset: usize, extent: usize, max_offset: usize) -> (isize, usize) {
    let extent = to_isize(extent);
    if pos < 0 {
        let shift = pos.unsigned_abs().min(offset);
        let pos = (pos + to_isize(shift)).max(0);
        (pos, offset - shift)
    } else if pos >= extent {
        let overflow = to_usize(pos - extent + 1);
        let shift = overflow.min(max_offset.saturating_sub(offset));
        let pos = (pos - to_isize(shift)).min(extent - 1);
        (pos, offset + shift)
    } else {
        (pos, offset)
    }
}

fn to_usize(value: isize) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
