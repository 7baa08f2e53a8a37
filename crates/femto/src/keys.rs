//! Key events back to terminal bytes.
//!
//! crossterm decodes input into key events; the editor core works on the raw bytes a terminal
//! sends. This maps each event to that byte sequence so the core decides what is recognized.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use femto_core::input::{DEL, ESC};

/// Bytes a VT100-style terminal would send for `key`. Unknown keys map to an empty sequence.
pub fn key_to_bytes(key: KeyEvent) -> Vec<u8> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii() => {
            vec![control_byte(c as u8)]
        }
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            c.encode_utf8(&mut buf).as_bytes().to_vec()
        }
        KeyCode::Enter => vec![b'\r'],
        KeyCode::Tab => vec![b'\t'],
        KeyCode::Backspace => vec![DEL],
        KeyCode::Esc => vec![ESC],
        KeyCode::Up => b"\x1b[A".to_vec(),
        KeyCode::Down => b"\x1b[B".to_vec(),
        KeyCode::Right => b"\x1b[C".to_vec(),
        KeyCode::Left => b"\x1b[D".to_vec(),
        KeyCode::Home => b"\x1b[H".to_vec(),
        KeyCode::End => b"\x1b[F".to_vec(),
        KeyCode::Delete => b"\x1b[3~".to_vec(),
        KeyCode::PageUp => b"\x1b[5~".to_vec(),
        KeyCode::PageDown => b"\x1b[6~".to_vec(),
        _ => Vec::new(),
    }
}

fn control_byte(byte: u8) -> u8 {
    byte.to_ascii_uppercase() & 0x1f
}
