//! Command Interface Layer
//!
//! Every key the session reacts to is first translated into a [`Command`] by the current
//! [`Mode`](crate::Mode), then run through [`EditorSession::execute`](crate::EditorSession::execute).
//! Hosts and tests can also build commands directly.
//!
//! # Example
//!
//! ```rust
//! use femto_core::{Command, EditCommand, EditorSession, NavCommand, WindowSize};
//!
//! let mut session = EditorSession::from_lines("notes.txt", ["ab"], WindowSize::new(9, 40));
//! session.execute(Command::Navigation(NavCommand::EnterEdit)).unwrap();
//! session.execute(Command::Edit(EditCommand::Insert(b'x'))).unwrap();
//!
//! assert_eq!(session.lines().line(0).unwrap().as_bytes(), b"xab");
//! ```

use crate::file_io::FileError;
use crate::storage::CoreError;
use thiserror::Error;

/// Commands available in navigation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Move the cursor one row up.
    MoveUp,
    /// Move the cursor one row down.
    MoveDown,
    /// Move the cursor one column left.
    MoveLeft,
    /// Move the cursor one column right.
    MoveRight,
    /// Switch to edit mode.
    EnterEdit,
    /// Write the buffer back to its file.
    Save,
    /// Stop the run loop.
    Quit,
}

/// Commands available in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert one byte at the cursor.
    Insert(u8),
    /// Split the current line at the cursor (Enter).
    SplitLine,
    /// Delete the byte before the cursor, or join with the previous line at column 0.
    Backspace,
    /// Switch back to navigation mode.
    LeaveEdit,
}

/// Unified command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Navigation-mode command.
    Navigation(NavCommand),
    /// Edit-mode command.
    Edit(EditCommand),
}

/// What the host loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Keep reading input.
    Continue,
    /// The buffer was written to disk.
    Saved {
        /// Number of lines written.
        lines: usize,
    },
    /// Leave the run loop.
    Quit,
}

/// Command error type
#[derive(Debug, Error)]
pub enum CommandError {
    /// A line store precondition was violated.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// Writing the file failed.
    #[error(transparent)]
    File(#[from] FileError),
}
