//! Line Store
//!
//! The document is an ordered list of independently growable byte lines. Lines never contain
//! the `'\n'` separator; it only exists in the persisted file.

use crate::viewport::AbsolutePosition;
use thiserror::Error;

/// A single line of text, stored as raw bytes without its trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte length of the line.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the line holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw content of the line.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.contains(&b'\n'), "line content must not contain a newline");
        Self { bytes }
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

/// Precondition violations reported by [`LineStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A line index outside the range the operation accepts.
    #[error("invalid line index {index} (line count {count})")]
    InvalidLine {
        /// Offending line index.
        index: usize,
        /// Line count at the time of the call.
        count: usize,
    },
    /// A byte column outside `[0, line.len()]` (or `[1, line.len()]` for removals).
    #[error("invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Line index of the position.
        line: usize,
        /// Byte column of the position.
        column: usize,
    },
    /// The newline byte cannot be stored inside a line; use [`LineStore::split_line`].
    #[error("newline byte cannot be inserted into a line")]
    NewlineByte,
}

/// Ordered, mutable sequence of [`Line`]s in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
}

impl LineStore {
    /// Create a store holding no lines.
    ///
    /// A running editor never works on an empty store; see [`LineStore::with_empty_line`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding exactly one empty line (a new, empty document).
    pub fn with_empty_line() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Build a store from already split lines. An empty iterator yields one empty line.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        let lines: Vec<Line> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            Self::with_empty_line()
        } else {
            Self { lines }
        }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the store holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if it exists.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Byte length of line `index`, or 0 when the line does not exist.
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, Line::len)
    }

    /// Iterate over all lines in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Insert `content` as a new line at `index`, shifting later lines down.
    pub fn insert_line(&mut self, index: usize, content: impl Into<Line>) -> Result<(), CoreError> {
        if index > self.lines.len() {
            return Err(CoreError::InvalidLine {
                index,
                count: self.lines.len(),
            });
        }
        self.lines.insert(index, content.into());
        Ok(())
    }

    /// Append `content` as the last line.
    pub fn append_line(&mut self, content: impl Into<Line>) {
        self.lines.push(content.into());
    }

    /// Remove the line at `index`, shifting later lines up. Returns the removed line.
    pub fn remove_line(&mut self, index: usize) -> Result<Line, CoreError> {
        self.check_line(index)?;
        Ok(self.lines.remove(index))
    }

    /// Insert a single byte at `position`, growing that line by one byte.
    pub fn insert_byte(&mut self, position: AbsolutePosition, value: u8) -> Result<(), CoreError> {
        if value == b'\n' {
            return Err(CoreError::NewlineByte);
        }
        let line = self.line_mut_at(position, 0)?;
        line.bytes.insert(position.column, value);
        Ok(())
    }

    /// Remove the byte immediately before `position.column` (backspace semantics).
    pub fn remove_byte(&mut self, position: AbsolutePosition) -> Result<u8, CoreError> {
        let line = self.line_mut_at(position, 1)?;
        Ok(line.bytes.remove(position.column - 1))
    }

    /// Split the line at `position`: the line keeps `position.column` bytes and the suffix becomes
    /// a new line right after it.
    pub fn split_line(&mut self, position: AbsolutePosition) -> Result<(), CoreError> {
        let line = self.line_mut_at(position, 0)?;
        let tail = line.bytes.split_off(position.column);
        self.lines.insert(position.line + 1, Line { bytes: tail });
        Ok(())
    }

    /// Append line `index` onto line `index - 1` and remove it.
    ///
    /// Returns the length the previous line had before the join, i.e. the column where the
    /// two halves meet.
    pub fn join_line(&mut self, index: usize) -> Result<usize, CoreError> {
        if index == 0 || index >= self.lines.len() {
            return Err(CoreError::InvalidLine {
                index,
                count: self.lines.len(),
            });
        }
        let tail = self.lines.remove(index);
        let prev = &mut self.lines[index - 1];
        let seam = prev.bytes.len();
        prev.bytes.extend_from_slice(&tail.bytes);
        Ok(seam)
    }

    fn check_line(&self, index: usize) -> Result<(), CoreError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(CoreError::InvalidLine {
                index,
                count: self.lines.len(),
            })
        }
    }

    /// Mutable line for `position`, validating `min_column <= column <= len`.
    fn line_mut_at(
        &mut self,
        position: AbsolutePosition,
        min_column: usize,
    ) -> Result<&mut Line, CoreError> {
        self.check_line(position.line)?;
        let line = &mut self.lines[position.line];
        if position.column < min_column || position.column > line.bytes.len() {
            return Err(CoreError::InvalidPosition {
                line: position.line,
                column: position.column,
            });
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize, column: usize) -> AbsolutePosition {
        AbsolutePosition::new(line, column)
    }

    fn contents(store: &LineStore) -> Vec<String> {
        store
            .iter()
            .map(|line| String::from_utf8_lossy(line.as_bytes()).into_owned())
            .collect()
    }

    #[test]
    fn test_from_no_lines_yields_one_empty_line() {
        let store = LineStore::from_lines(Vec::<Line>::new());
        assert_eq!(store.line_count(), 1);
        assert!(store.line(0).is_some_and(Line::is_empty));
    }

    #[test]
    fn test_insert_and_remove_line() {
        let mut store = LineStore::from_lines(["a", "c"]);
        store.insert_line(1, "b").unwrap();
        assert_eq!(contents(&store), vec!["a", "b", "c"]);

        let removed = store.remove_line(0).unwrap();
        assert_eq!(removed.as_bytes(), b"a");
        assert_eq!(contents(&store), vec!["b", "c"]);
    }

    #[test]
    fn test_insert_line_past_end_is_rejected() {
        let mut store = LineStore::with_empty_line();
        assert_eq!(
            store.insert_line(2, "x"),
            Err(CoreError::InvalidLine { index: 2, count: 1 })
        );
        store.insert_line(1, "x").unwrap();
        assert_eq!(store.line_count(), 2);
    }

    #[test]
    fn test_insert_byte_in_middle_and_at_end() {
        let mut store = LineStore::from_lines(["ac"]);
        store.insert_byte(pos(0, 1), b'b').unwrap();
        store.insert_byte(pos(0, 3), b'd').unwrap();
        assert_eq!(store.line(0).unwrap().as_bytes(), b"abcd");
    }

    #[test]
    fn test_insert_byte_rejects_newline_and_bad_column() {
        let mut store = LineStore::from_lines(["ab"]);
        assert_eq!(store.insert_byte(pos(0, 1), b'\n'), Err(CoreError::NewlineByte));
        assert_eq!(
            store.insert_byte(pos(0, 3), b'x'),
            Err(CoreError::InvalidPosition { line: 0, column: 3 })
        );
    }

    #[test]
    fn test_remove_byte_removes_before_column() {
        let mut store = LineStore::from_lines(["abc"]);
        assert_eq!(store.remove_byte(pos(0, 1)), Ok(b'a'));
        assert_eq!(store.line(0).unwrap().as_bytes(), b"bc");
        assert!(store.remove_byte(pos(0, 0)).is_err());
    }

    #[test]
    fn test_split_at_edges() {
        let mut store = LineStore::from_lines(["ab"]);
        store.split_line(pos(0, 2)).unwrap();
        store.split_line(pos(0, 0)).unwrap();
        assert_eq!(contents(&store), vec!["", "ab", ""]);
    }

    #[test]
    fn test_join_returns_seam_column() {
        let mut store = LineStore::from_lines(["ab", "cd"]);
        assert_eq!(store.join_line(1), Ok(2));
        assert_eq!(contents(&store), vec!["abcd"]);
        assert!(store.join_line(0).is_err());
        assert!(store.join_line(1).is_err());
    }
}
