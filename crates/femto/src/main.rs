//! femto - minimal modal terminal text editor
//!
//! # Usage
//!
//! ```bash
//! cargo run -p femto -- <file_path>
//! ```
//!
//! # Keys
//!
//! Navigation mode (initial):
//! - w / a / s / d: move up / left / down / right
//! - e: enter edit mode
//! - f: save the file
//! - q: quit
//!
//! Edit mode:
//! - printable keys: insert
//! - Enter: split line
//! - Backspace: delete before cursor / join with previous line
//! - Esc: back to navigation mode
//!
//! Arrow keys and other multi-byte sequences are read and ignored.

mod cli;
mod keys;
mod logging;
mod terminal;

use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use femto_core::{CommandResult, EditorSession, VisibleRow, WindowSize, snapshot::FILLER};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Position},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, stdout};
use std::process::ExitCode;

use crate::cli::CliArgs;
use crate::terminal::RawModeGuard;

/// Application state
struct App {
    /// The single open document
    session: EditorSession,
    /// Set by the quit command
    should_quit: bool,
}

impl App {
    fn new(session: EditorSession) -> Self {
        Self {
            session,
            should_quit: false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let bytes = keys::key_to_bytes(key);
        let input = femto_core::decode(&bytes);
        match self.session.handle_input(input) {
            Ok(CommandResult::Quit) => self.should_quit = true,
            Ok(CommandResult::Saved { lines }) => {
                tracing::info!(path = %self.session.path().display(), lines, "saved");
            }
            Ok(CommandResult::Continue) => {}
            // Already on the status line; keep editing.
            Err(err) => tracing::error!(error = %err, "command failed"),
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.session.resize(WindowSize::for_terminal(height, width));
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let window = WindowSize::for_terminal(size.height, size.width);
        if window != self.session.window() {
            self.session.resize(window);
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // text area
                Constraint::Length(1), // status line
            ])
            .split(size);

        let snapshot = self.session.snapshot();

        let lines: Vec<Line> = snapshot
            .rows
            .iter()
            .map(|row| match row {
                VisibleRow::Text(bytes) => Line::raw(display_text(bytes)),
                VisibleRow::Filler => Line::raw(FILLER),
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let status = Paragraph::new(snapshot.status)
            .style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(status, chunks[1]);

        let (row, col) = snapshot.cursor;
        frame.set_cursor_position(Position::new(
            chunks[0].x + u16::try_from(col).unwrap_or(u16::MAX),
            chunks[0].y + u16::try_from(row).unwrap_or(u16::MAX),
        ));
    }
}

/// Line bytes as paintable text: invalid UTF-8 is replaced, control bytes become spaces so
/// every ASCII byte still takes exactly one cell.
fn display_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => {
            // --help / --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };
    let config = args.into_config();
    let _logging = logging::init(config.log_file.as_deref());

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let session = match EditorSession::open(&config.path, WindowSize::for_terminal(height, width)) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(error = %err, "could not open file");
            eprintln!("[Error]: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(session);
    match run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[Error]: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(app: &mut App) -> io::Result<()> {
    let guard = RawModeGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, app);

    // Restore before anything is printed to stderr.
    drop(guard);
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        // One blocking read per iteration; no timers.
        match event::read()? {
            Event::Key(key) => app.handle_key_event(key),
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }
    }

    Ok(())
}
