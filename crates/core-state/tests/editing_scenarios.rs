use core_state::{
    Boundary, CapturePolicy, EditError, EditorState, HistoryDirection, StateOptions,
};
use core_text::{Buffer, Cursor, Position};
use pretty_assertions::assert_eq;
use tracing::Level;
use tracing::subscriber::with_default;

fn state(lines: &[&str]) -> EditorState {
    let mut st = EditorState::new(Buffer::new());
    st.load(lines.iter().map(|s| s.to_string()).collect());
    st
}

#[test]
fn undo_restores_cursor_captured_with_snapshot() {
    let mut st = state(&["a", "b", "c"]);
    st.to_line(1).unwrap();
    st.modify(2, "C").unwrap();
    st.to_beginning();
    st.undo().unwrap();
    assert_eq!(st.buffer().lines(), &["a", "b", "c"]);
    assert_eq!(st.cursor(), Cursor::Line(1));
    st.redo().unwrap();
    assert_eq!(st.buffer().lines(), &["a", "b", "C"]);
    assert_eq!(st.cursor(), Cursor::Line(0));
}

#[test]
fn uncaptured_edits_are_swept_away_by_undo() {
    // Only modify snapshots by default: an insert made after it is lost on undo.
    let mut st = state(&["a"]);
    st.modify(0, "A").unwrap();
    st.insert(1, "b").unwrap();
    st.undo().unwrap();
    assert_eq!(st.buffer().lines(), &["a"]);
    st.redo().unwrap();
    assert_eq!(st.buffer().lines(), &["A", "b"]);
}

#[test]
fn explicit_capture_makes_any_edit_undoable() {
    let opts = StateOptions {
        capture: CapturePolicy::Never,
        ..StateOptions::default()
    };
    let mut st = EditorState::with_options(Buffer::new(), opts);
    st.load(vec!["keep".into(), "drop".into()]);
    st.modify(0, "no snapshot").unwrap();
    assert_eq!(st.undo_depth(), 0);

    st.capture();
    st.delete_current().unwrap();
    assert_eq!(st.buffer().lines(), &["no snapshot"]);
    st.undo().unwrap();
    assert_eq!(st.buffer().lines(), &["no snapshot", "drop"]);
}

#[test]
fn redo_on_fresh_state_is_empty_history() {
    let mut st = state(&["x"]);
    assert_eq!(
        st.redo(),
        Err(EditError::EmptyHistory(HistoryDirection::Redo))
    );
}

#[test]
fn bounded_history_limits_undo_depth() {
    let opts = StateOptions {
        history_depth: Some(2),
        ..StateOptions::default()
    };
    let mut st = EditorState::with_options(Buffer::new(), opts);
    st.load(vec!["0".into()]);
    for i in 1..=4 {
        st.modify(0, i.to_string()).unwrap();
    }
    assert_eq!(st.undo_depth(), 2);
    st.undo().unwrap();
    st.undo().unwrap();
    assert!(st.undo().is_err());
    assert_eq!(st.at(0), Some("2"));
}

#[test]
fn search_then_edit_flow() {
    let mut st = state(&["fn main() {", "    let x = 1;", "    let y = x;", "}"]);
    st.to_beginning();
    assert_eq!(st.find_from_current("let"), Ok(Position::new(1, 4)));
    st.replace_in_current_line("x", "value").unwrap();
    assert_eq!(st.current_line(), Some("    let value = 1;"));
    st.next_line().unwrap();
    assert_eq!(st.find_from_current("x"), Ok(Position::new(2, 12)));
    st.to_end();
    assert_eq!(st.next_line(), Err(EditError::AtBoundary(Boundary::Last)));
}

#[test]
fn failed_operations_leave_state_untouched() {
    let mut st = state(&["a", "b"]);
    st.modify(0, "A").unwrap();
    let lines = st.buffer().lines().to_vec();
    let cursor = st.cursor();
    let depth = (st.undo_depth(), st.redo_depth());

    assert!(st.insert(9, "z").is_err());
    assert!(st.modify(2, "z").is_err());
    assert!(st.to_line(5).is_err());
    assert!(st.find_from_current("nope").is_err());
    assert!(st.modify(0, "bad\nline").is_err());

    assert_eq!(st.buffer().lines(), lines.as_slice());
    assert_eq!(st.cursor(), cursor);
    assert_eq!((st.undo_depth(), st.redo_depth()), depth);
}

#[test]
fn snapshot_lifecycle_logs_under_undo_target() {
    // Cloned handles share one file offset, so events land in order.
    let log = tempfile::NamedTempFile::new().unwrap();
    let sink = log.as_file().try_clone().unwrap();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(move || sink.try_clone().expect("log file handle"))
        .finish();

    with_default(subscriber, || {
        let mut st = state(&["a"]);
        st.modify(0, "b").unwrap();
        st.undo().unwrap();
        st.discard();
    });

    let out = std::fs::read_to_string(log.path()).unwrap();
    assert!(out.contains("state.undo"));
    assert!(out.contains("push_snapshot"));
    assert!(out.contains("undo_pop"));
    assert!(out.contains("history_discarded"));
}
