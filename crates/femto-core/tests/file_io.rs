use femto_core::file_io::{self, FileError};
use femto_core::{CommandError, CommandResult, EditorSession, Input, WindowSize};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_load_then_save_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let content: &[u8] = b"first\n\n  indented\ttab\nbytes \xff\xfe\r\nlast\n";
    fs::write(&path, content).unwrap();

    let store = file_io::load(&path).unwrap();
    assert_eq!(store.line_count(), 5);
    file_io::save(&path, &store).unwrap();

    assert_eq!(fs::read(&path).unwrap(), content);
}

#[test]
fn test_missing_trailing_newline_is_added_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, b"a\nb").unwrap();

    let store = file_io::load(&path).unwrap();
    file_io::save(&path, &store).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"a\nb\n");
}

#[test]
fn test_directory_is_not_a_regular_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = file_io::load(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::NotRegularFile { .. }), "{err}");
    assert!(err.to_string().contains("is not a regular file"));
}

#[test]
fn test_empty_existing_file_has_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, b"").unwrap();

    let store = file_io::load(&path).unwrap();
    assert_eq!(store.line_count(), 1);
    assert_eq!(store.line_len(0), 0);
}

#[test]
fn test_save_command_writes_edits_and_clears_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");
    let mut session = EditorSession::open(&path, WindowSize::default()).unwrap();

    for &key in b"ehi\rthere\x1b" {
        session.handle_input(Input::Byte(key)).unwrap();
    }
    assert!(session.is_modified());

    let result = session.handle_input(Input::Byte(b'f')).unwrap();
    assert_eq!(result, CommandResult::Saved { lines: 2 });
    assert!(!session.is_modified());
    assert_eq!(session.status_message(), Some("wrote 2 lines"));
    assert_eq!(fs::read(&path).unwrap(), b"hi\nthere\n");

    // The message only lasts until the next key.
    session.handle_input(Input::Byte(b'w')).unwrap();
    assert_eq!(session.status_message(), None);
}

#[test]
fn test_failed_save_is_reported_and_session_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("doc.txt");
    let mut session = EditorSession::from_lines(&path, ["keep"], WindowSize::default());

    let err = session.handle_input(Input::Byte(b'f')).unwrap_err();
    assert!(matches!(err, CommandError::File(FileError::Write { .. })));
    assert!(session.status_message().is_some_and(|m| m.starts_with("save failed")));

    session.handle_input(Input::Byte(b'e')).unwrap();
    session.handle_input(Input::Byte(b'!')).unwrap();
    assert_eq!(session.lines().line(0).unwrap().as_bytes(), b"!keep");
}
