//! Editor session
//!
//! [`EditorSession`] is the single mutable owner of the buffer, cursor, viewport and mode.
//! The host feeds it one decoded [`Input`] at a time; every input runs to completion and ends
//! with a scroll reconciliation pass before the next one is read.

use crate::commands::{Command, CommandError, CommandResult, EditCommand, NavCommand};
use crate::file_io::{self, FileError};
use crate::input::Input;
use crate::mode::Mode;
use crate::scroll;
use crate::storage::{Line, LineStore};
use crate::viewport::{self, AbsolutePosition, Cursor, Viewport, WindowSize};
use std::path::{Path, PathBuf};

/// One open document plus its on-screen state.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub(crate) store: LineStore,
    pub(crate) cursor: Cursor,
    pub(crate) viewport: Viewport,
    pub(crate) mode: Mode,
    pub(crate) window: WindowSize,
    pub(crate) modified: bool,
    path: PathBuf,
    status_message: Option<String>,
}

impl EditorSession {
    /// Create a session over an already loaded store. An empty store gets one empty line.
    pub fn new(path: impl Into<PathBuf>, store: LineStore, window: WindowSize) -> Self {
        let store = if store.is_empty() {
            LineStore::with_empty_line()
        } else {
            store
        };
        Self {
            store,
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            mode: Mode::default(),
            window,
            modified: false,
            path: path.into(),
            status_message: None,
        }
    }

    /// Load `path` (or start an empty document if it does not exist).
    pub fn open(path: impl Into<PathBuf>, window: WindowSize) -> Result<Self, FileError> {
        let path = path.into();
        let store = file_io::load(&path)?;
        Ok(Self::new(path, store, window))
    }

    /// Convenience constructor from in-memory lines.
    pub fn from_lines<I, L>(path: impl Into<PathBuf>, lines: I, window: WindowSize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        Self::new(path, LineStore::from_lines(lines), window)
    }

    /// The document.
    pub fn lines(&self) -> &LineStore {
        &self.store
    }

    /// On-screen cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Scroll offsets.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Text-area size.
    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// File the session reads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the buffer changed since it was loaded or last saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Message from the last command, cleared by the next input.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Cursor position in document coordinates.
    pub fn absolute_position(&self) -> AbsolutePosition {
        viewport::absolute_position(self.cursor, self.viewport)
    }

    /// Handle one decoded input event.
    pub fn handle_input(&mut self, input: Input) -> Result<CommandResult, CommandError> {
        self.status_message = None;
        let Input::Byte(byte) = input else {
            return Ok(CommandResult::Continue);
        };
        match self.mode.command_for(byte) {
            Some(command) => self.execute(command),
            None => Ok(CommandResult::Continue),
        }
    }

    /// Run a single command and reconcile the cursor afterwards.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        let result = match command {
            Command::Navigation(nav) => self.execute_navigation(nav),
            Command::Edit(edit) => self.execute_edit(edit),
        };
        self.reconcile();
        result
    }

    fn execute_navigation(&mut self, command: NavCommand) -> Result<CommandResult, CommandError> {
        match command {
            NavCommand::MoveUp => self.cursor.move_by(-1, 0),
            NavCommand::MoveDown => self.cursor.move_by(1, 0),
            NavCommand::MoveLeft => self.cursor.move_by(0, -1),
            NavCommand::MoveRight => self.cursor.move_by(0, 1),
            NavCommand::EnterEdit => self.set_mode(Mode::Edit),
            NavCommand::Save => {
                return match self.save() {
                    Ok(lines) => {
                        self.status_message = Some(format!("wrote {lines} lines"));
                        Ok(CommandResult::Saved { lines })
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "save failed");
                        self.status_message = Some(format!("save failed: {err}"));
                        Err(err.into())
                    }
                };
            }
            NavCommand::Quit => return Ok(CommandResult::Quit),
        }
        Ok(CommandResult::Continue)
    }

    fn execute_edit(&mut self, command: EditCommand) -> Result<CommandResult, CommandError> {
        match command {
            EditCommand::Insert(byte) => self.insert_byte(byte)?,
            EditCommand::SplitLine => self.split_line()?,
            EditCommand::Backspace => self.backspace()?,
            EditCommand::LeaveEdit => self.set_mode(Mode::Navigation),
        }
        Ok(CommandResult::Continue)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = self.mode.name(), to = mode.name(), "mode switch");
            self.mode = mode;
        }
    }

    /// Write the buffer to [`EditorSession::path`]. Returns the number of lines written.
    pub fn save(&mut self) -> Result<usize, FileError> {
        let lines = file_io::save(&self.path, &self.store)?;
        self.modified = false;
        Ok(lines)
    }

    /// Change the text-area size and pull the cursor back into view.
    pub fn resize(&mut self, window: WindowSize) {
        self.window = window;
        self.reconcile();
    }

    /// Put the cursor on `position`, scrolling as needed. Out-of-range positions are clamped.
    pub fn move_to(&mut self, position: AbsolutePosition) {
        self.cursor = Cursor::new(
            signed_delta(position.line, self.viewport.row_offset),
            signed_delta(position.column, self.viewport.col_offset),
        );
        self.reconcile();
    }

    pub(crate) fn reconcile(&mut self) {
        scroll::reconcile(
            &mut self.cursor,
            &mut self.viewport,
            self.window,
            &self.store,
        );
    }
}

/// `target - origin` as a signed screen delta.
pub(crate) fn signed_delta(target: usize, origin: usize) -> isize {
    if target >= origin {
        isize::try_from(target - origin).unwrap_or(isize::MAX)
    } else {
        isize::try_from(origin - target).map_or(isize::MIN, |d| -d)
    }
}
