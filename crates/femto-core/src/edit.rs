//! Edit Operations
//!
//! Buffer mutations at the cursor. Each operation moves the cursor the way the key would and
//! finishes with a reconciliation pass, so the cursor may scroll the view.

use crate::session::{EditorSession, signed_delta};
use crate::storage::{CoreError, Line};
use crate::viewport::AbsolutePosition;

impl EditorSession {
    /// Insert `byte` at the cursor and advance one column.
    pub fn insert_byte(&mut self, byte: u8) -> Result<(), CoreError> {
        let position = self.editable_position();
        self.store.insert_byte(position, byte)?;
        self.cursor.move_by(0, 1);
        self.modified = true;
        self.reconcile();
        Ok(())
    }

    /// Split the line at the cursor; the cursor lands on column 0 of the new line.
    pub fn split_line(&mut self) -> Result<(), CoreError> {
        let position = self.editable_position();
        self.store.split_line(position)?;
        self.cursor.row += 1;
        self.cursor.col = signed_delta(0, self.viewport.col_offset);
        self.modified = true;
        self.reconcile();
        Ok(())
    }

    /// Delete the byte before the cursor. At column 0 the current line is joined onto the
    /// previous one and the cursor lands on the seam. At the document origin nothing happens.
    pub fn backspace(&mut self) -> Result<(), CoreError> {
        let position = self.editable_position();
        if position.column > 0 {
            self.store.remove_byte(position)?;
            self.cursor.move_by(0, -1);
        } else if position.line > 0 {
            let seam = self.store.join_line(position.line)?;
            self.cursor.row -= 1;
            self.cursor.col = signed_delta(seam, self.viewport.col_offset);
        } else {
            return Ok(());
        }
        self.modified = true;
        self.reconcile();
        Ok(())
    }

    /// Absolute cursor position, guaranteed to name an existing line and a valid column.
    ///
    /// A cursor past the last line (a view scrolled beyond the end) gets empty lines appended
    /// up to it.
    fn editable_position(&mut self) -> AbsolutePosition {
        let mut position = self.absolute_position();
        while position.line >= self.store.line_count() {
            self.store.append_line(Line::new());
        }
        position.column = position.column.min(self.store.line_len(position.line));
        position
    }
}

#[cfg(test)]
mod tests {
    use crate::viewport::{Cursor, Viewport, WindowSize};
    use crate::EditorSession;

    #[test]
    fn test_typing_past_last_line_appends_it() {
        let mut s = EditorSession::from_lines("t", ["a"], WindowSize::new(5, 10));
        s.cursor = Cursor::new(2, 0);
        s.viewport = Viewport::default();
        s.insert_byte(b'z').unwrap();
        assert_eq!(s.lines().line_count(), 3);
        assert_eq!(s.lines().line(2).unwrap().as_bytes(), b"z");
        assert_eq!(s.cursor(), Cursor::new(2, 1));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut s = EditorSession::from_lines("t", ["ab"], WindowSize::new(5, 10));
        s.backspace().unwrap();
        assert_eq!(s.lines().line(0).unwrap().as_bytes(), b"ab");
        assert!(!s.is_modified());
    }

    #[test]
    fn test_split_resets_horizontal_scroll() {
        let mut s = EditorSession::from_lines("t", ["0123456789abc"], WindowSize::new(5, 5));
        s.move_to(crate::AbsolutePosition::new(0, 12));
        assert!(s.viewport().col_offset > 0);
        s.split_line().unwrap();
        assert_eq!(s.viewport().col_offset, 0);
        assert_eq!(s.cursor(), Cursor::new(1, 0));
        assert_eq!(s.lines().line(1).unwrap().as_bytes(), b"c");
    }

    #[test]
    fn test_join_lands_on_seam_even_when_scrolled() {
        let long = "x".repeat(30);
        let mut s = EditorSession::from_lines("t", [long.as_str(), "tail"], WindowSize::new(5, 10));
        s.move_to(crate::AbsolutePosition::new(1, 0));
        s.backspace().unwrap();
        assert_eq!(s.absolute_position(), crate::AbsolutePosition::new(0, 30));
        assert_eq!(s.viewport().col_offset, 21);
        assert_eq!(s.cursor(), Cursor::new(0, 9));
    }
}
