//! Headless render snapshot
//!
//! Everything the renderer needs to paint one frame, already clipped to the window: the visible
//! slice of each line, filler rows past the end of the document, the status line text and the
//! cursor's screen cell. The renderer does no coordinate arithmetic of its own.

use crate::mode::Mode;
use crate::session::EditorSession;
use crate::viewport::AbsolutePosition;

/// Marker painted on rows below the last line.
pub const FILLER: &str = "+";

/// One text-area row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleRow<'a> {
    /// Bytes of a document line within `[col_offset, col_offset + cols)`.
    Text(&'a [u8]),
    /// Row beyond the last line.
    Filler,
}

/// A frame's worth of render data borrowed from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Exactly `window.rows()` rows, top to bottom.
    pub rows: Vec<VisibleRow<'a>>,
    /// Status line, exactly `window.cols()` characters wide.
    pub status: String,
    /// Cursor cell (row, col) inside the text area.
    pub cursor: (usize, usize),
    /// Mode at the time of the snapshot.
    pub mode: Mode,
}

impl EditorSession {
    /// Build the render data for the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let window = self.window();
        let viewport = self.viewport();
        let rows = (0..window.rows())
            .map(|row| match self.lines().line(viewport.row_offset + row) {
                Some(line) => {
                    let bytes = line.as_bytes();
                    let start = viewport.col_offset.min(bytes.len());
                    let end = (viewport.col_offset + window.cols()).min(bytes.len());
                    VisibleRow::Text(&bytes[start..end])
                }
                None => VisibleRow::Filler,
            })
            .collect();

        let path = self.path().display().to_string();
        let trailer = match self.status_message() {
            Some(message) => message.to_string(),
            None if self.is_modified() => format!("{path} [+]"),
            None => path,
        };
        let status = status_line(self.mode(), self.absolute_position(), &trailer, window.cols());

        let cursor = self.cursor();
        Snapshot {
            rows,
            status,
            cursor: (
                usize::try_from(cursor.row).unwrap_or(0),
                usize::try_from(cursor.col).unwrap_or(0),
            ),
            mode: self.mode(),
        }
    }
}

/// Format the status line: `[[ mode ]] row:col trailer`, positions 1-based, padded or cut to
/// exactly `width` characters. A trailer that would overflow is cut and ends in `...`.
pub fn status_line(mode: Mode, position: AbsolutePosition, trailer: &str, width: usize) -> String {
    let mut line = format!(
        "[[ {} ]] {}:{} ",
        mode.name(),
        position.line + 1,
        position.column + 1
    );
    let prefix_len = line.chars().count();
    let trailer_len = trailer.chars().count();

    if prefix_len + trailer_len < width {
        line.push_str(trailer);
    } else {
        let room = width.saturating_sub(prefix_len).saturating_sub(3);
        line.extend(trailer.chars().take(room));
        line.push_str("...");
    }

    let len = line.chars().count();
    if len > width {
        line = line.chars().take(width).collect();
    } else {
        line.extend(std::iter::repeat_n(' ', width - len));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::WindowSize;

    #[test]
    fn test_status_line_fits() {
        let line = status_line(Mode::Navigation, AbsolutePosition::new(0, 0), "a.txt", 30);
        assert_eq!(line, format!("{:<30}", "[[ normal ]] 1:1 a.txt"));
    }

    #[test]
    fn test_status_line_truncates_path_with_ellipsis() {
        let line = status_line(Mode::Edit, AbsolutePosition::new(4, 2), "some/long/path.txt", 24);
        assert_eq!(line, "[[ edit ]] 5:3 some/l...");
        assert_eq!(line.chars().count(), 24);
    }

    #[test]
    fn test_status_line_never_exceeds_tiny_width() {
        let line = status_line(Mode::Navigation, AbsolutePosition::new(0, 0), "p", 5);
        assert_eq!(line, "[[ no");
    }

    #[test]
    fn test_snapshot_clips_and_fills() {
        let mut session =
            EditorSession::from_lines("f.txt", ["hello world", "hi"], WindowSize::new(4, 5));
        session.move_to(AbsolutePosition::new(0, 7));
        let snap = session.snapshot();
        assert_eq!(session.viewport().col_offset, 3);
        assert_eq!(
            snap.rows,
            vec![
                VisibleRow::Text(b"lo wo"),
                VisibleRow::Text(b""),
                VisibleRow::Filler,
                VisibleRow::Filler,
            ]
        );
        assert_eq!(snap.cursor, (0, 4));
        assert_eq!(snap.status.chars().count(), 5);
    }

    #[test]
    fn test_snapshot_marks_modified_buffer() {
        let mut session = EditorSession::from_lines("f.txt", ["x"], WindowSize::new(2, 40));
        session.insert_byte(b'y').unwrap();
        let snap = session.snapshot();
        assert!(snap.status.starts_with("[[ normal ]] 1:2 f.txt [+]"));
    }
}
