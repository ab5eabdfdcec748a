//! Undo / Redo handling.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState) -> DispatchResult {
    let before = state.size();
    match state.undo() {
        Ok(()) => {
            tracing::trace!(target: "actions.dispatch", op = "undo", line_count_changed = (before != state.size()), "undo");
            DispatchResult::ok("Undo successful")
        }
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_redo(state: &mut EditorState) -> DispatchResult {
    let before = state.size();
    match state.redo() {
        Ok(()) => {
            tracing::trace!(target: "actions.dispatch", op = "redo", line_count_changed = (before != state.size()), "redo");
            DispatchResult::ok("Redo successful")
        }
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}
