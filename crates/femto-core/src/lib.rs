#![warn(missing_docs)]
//! femto-core - headless engine of the femto terminal editor
//!
//! # Overview
//!
//! `femto-core` holds the whole editing model of a single file loaded into memory. It does not
//! touch the terminal: the host reads raw input, hands it to an [`EditorSession`], and paints the
//! [`Snapshot`] the session produces.
//!
//! Columns are byte offsets. Content is never decoded.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Session (mode dispatch, commands, save)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Snapshot (visible rows, status line)       │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Edit Operations                            │  ← Buffer Mutation
//! ├─────────────────────────────────────────────┤
//! │  Scroll Reconciler                          │  ← Visibility Invariant
//! ├─────────────────────────────────────────────┤
//! │  Cursor / Viewport Model                    │  ← Coordinates
//! ├─────────────────────────────────────────────┤
//! │  Line Store                                 │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use femto_core::{AbsolutePosition, EditorSession, Input, WindowSize};
//!
//! let mut session = EditorSession::from_lines("demo.txt", ["ab"], WindowSize::new(9, 80));
//! session.move_to(AbsolutePosition::new(0, 1));
//!
//! // `e` enters edit mode, `\r` splits the line.
//! session.handle_input(Input::Byte(b'e')).unwrap();
//! session.handle_input(Input::Byte(b'\r')).unwrap();
//!
//! assert_eq!(session.lines().line_count(), 2);
//! assert_eq!(session.absolute_position(), AbsolutePosition::new(1, 0));
//! ```
//!
//! # Key Map
//!
//! | Mode       | Key           | Action                          |
//! |------------|---------------|---------------------------------|
//! | navigation | `w` `a` `s` `d` | move up / left / down / right |
//! | navigation | `e`           | enter edit mode                 |
//! | navigation | `f`           | save                            |
//! | navigation | `q`           | quit                            |
//! | edit       | printable     | insert byte                     |
//! | edit       | Enter         | split line                      |
//! | edit       | Backspace     | delete byte / join lines        |
//! | edit       | Esc           | back to navigation              |

pub mod commands;
mod edit;
pub mod file_io;
pub mod input;
pub mod mode;
pub mod scroll;
pub mod session;
pub mod snapshot;
pub mod storage;
pub mod viewport;

pub use commands::{Command, CommandError, CommandResult, EditCommand, NavCommand};
pub use file_io::FileError;
pub use input::{Input, decode};
pub use mode::Mode;
pub use session::EditorSession;
pub use snapshot::{Snapshot, VisibleRow, status_line};
pub use storage::{CoreError, Line, LineStore};
pub use viewport::{AbsolutePosition, Cursor, Viewport, WindowSize, absolute_position};
