//! Property-based tests for snapshot undo/redo.

use core_state::{EditError, EditorState, HistoryDirection};
use core_text::{Buffer, Cursor};
use proptest::prelude::*;

fn loaded(lines: Vec<String>) -> EditorState {
    let mut st = EditorState::new(Buffer::new());
    st.load(lines);
    st
}

fn line_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,8}"
}

fn state_of(st: &EditorState) -> (Vec<String>, Cursor) {
    (st.buffer().lines().to_vec(), st.cursor())
}

proptest! {
    // A single undo restores exactly the state before the latest modify; redo re-applies it.
    #[test]
    fn undo_then_redo_round_trips(
        initial in prop::collection::vec(line_text(), 1..8),
        edits in prop::collection::vec((0usize..16, line_text()), 1..12),
    ) {
        let mut st = loaded(initial);
        let mut before_last = state_of(&st);
        for (raw_idx, text) in edits {
            let idx = raw_idx % st.size();
            before_last = state_of(&st);
            st.modify(idx, text).unwrap();
        }
        let after_last = state_of(&st);

        st.undo().unwrap();
        prop_assert_eq!(state_of(&st), before_last);
        st.redo().unwrap();
        prop_assert_eq!(state_of(&st), after_last);
    }

    // Any modify issued after an undo invalidates redo history.
    #[test]
    fn modify_after_undo_clears_redo(
        initial in prop::collection::vec(line_text(), 1..6),
        first in line_text(),
        second in line_text(),
        raw_idx in 0usize..16,
    ) {
        let mut st = loaded(initial);
        let idx = raw_idx % st.size();
        st.modify(idx, first).unwrap();
        st.undo().unwrap();
        prop_assert_eq!(st.redo_depth(), 1);
        st.modify(idx, second).unwrap();
        prop_assert_eq!(st.redo(), Err(EditError::EmptyHistory(HistoryDirection::Redo)));
    }

    // Undo depth tracks modify count; undoing everything returns to the loaded lines.
    #[test]
    fn undo_all_returns_to_loaded_content(
        initial in prop::collection::vec(line_text(), 1..6),
        edits in prop::collection::vec((0usize..16, line_text()), 0..10),
    ) {
        let mut st = loaded(initial.clone());
        let n = edits.len();
        for (raw_idx, text) in edits {
            let idx = raw_idx % st.size();
            st.modify(idx, text).unwrap();
        }
        prop_assert_eq!(st.undo_depth(), n);
        for _ in 0..n {
            st.undo().unwrap();
        }
        prop_assert_eq!(st.buffer().lines(), initial.as_slice());
        prop_assert_eq!(st.undo(), Err(EditError::EmptyHistory(HistoryDirection::Undo)));
    }
}
