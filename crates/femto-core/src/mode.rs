//! Mode State Machine
//!
//! `Navigation` is the initial state. `e` enters `Edit`, Escape leaves it. Quitting is a
//! navigation command; the state machine itself has no terminal state.

use crate::commands::{Command, EditCommand, NavCommand};
use crate::input::{self, CTRL_H, DEL, ESC};

/// Input mode of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys move the cursor or run whole-document commands.
    #[default]
    Navigation,
    /// Keys are inserted as document content.
    Edit,
}

impl Mode {
    /// Lowercase name shown on the status line.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Navigation => "normal",
            Mode::Edit => "edit",
        }
    }

    /// Translate one input byte into a command for this mode. Unbound bytes yield `None`.
    pub fn command_for(self, byte: u8) -> Option<Command> {
        match self {
            Mode::Navigation => navigation_command(byte).map(Command::Navigation),
            Mode::Edit => edit_command(byte).map(Command::Edit),
        }
    }
}

fn navigation_command(byte: u8) -> Option<NavCommand> {
    let command = match byte {
        b'w' => NavCommand::MoveUp,
        b's' => NavCommand::MoveDown,
        b'a' => NavCommand::MoveLeft,
        b'd' => NavCommand::MoveRight,
        b'e' => NavCommand::EnterEdit,
        b'f' => NavCommand::Save,
        b'q' => NavCommand::Quit,
        _ => return None,
    };
    Some(command)
}

fn edit_command(byte: u8) -> Option<EditCommand> {
    match byte {
        ESC => Some(EditCommand::LeaveEdit),
        b'\n' | b'\r' => Some(EditCommand::SplitLine),
        DEL | CTRL_H => Some(EditCommand::Backspace),
        b if input::is_insertable(b) => Some(EditCommand::Insert(b)),
        _ => None,
    }
}
