//! Input decoding
//!
//! One blocking read from the terminal yields a short raw byte sequence. Only a sequence of
//! exactly one byte is acted upon; anything longer (arrow keys, function keys, multi-byte
//! paste chunks) is read and dropped.

/// Escape, leaves edit mode.
pub const ESC: u8 = 0x1b;
/// Delete, sent by most terminals for the Backspace key.
pub const DEL: u8 = 0x7f;
/// Ctrl-H, the other Backspace encoding.
pub const CTRL_H: u8 = 0x08;

/// Upper bound on a single raw read.
pub const MAX_SEQUENCE_LEN: usize = 8;

/// A decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Exactly one byte was read.
    Byte(u8),
    /// Empty or multi-byte read; ignored by the editor.
    Unrecognized,
}

/// Decode one raw read.
pub fn decode(raw: &[u8]) -> Input {
    match raw {
        [byte] => Input::Byte(*byte),
        _ => Input::Unrecognized,
    }
}

/// Whether `byte` is stored verbatim when typed in edit mode.
///
/// Control bytes other than tab are rejected; bytes `>= 0x80` are accepted so raw UTF-8
/// arrives intact one byte at a time.
pub fn is_insertable(byte: u8) -> bool {
    matches!(byte, b'\t' | 0x20..=0x7e | 0x80..=0xff)
}
