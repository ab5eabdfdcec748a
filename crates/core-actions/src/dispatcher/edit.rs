//! Text mutation commands.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn handle_insert(state: &mut EditorState, line: usize, text: String) -> DispatchResult {
    match state.insert(line, text) {
        Ok(()) => DispatchResult::ok(format!("New line has been inserted at line {line}")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_delete(state: &mut EditorState) -> DispatchResult {
    let index = state.cursor().raw();
    match state.delete_current() {
        Ok(_) => DispatchResult::ok(format!("Line {index} has been deleted")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_modify(state: &mut EditorState, line: usize, text: String) -> DispatchResult {
    match state.modify(line, text) {
        Ok(_) => DispatchResult::ok(format!("Line {line} has been modified")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_replace(
    state: &mut EditorState,
    target: &str,
    replacement: &str,
) -> DispatchResult {
    match state.replace_in_current_line(target, replacement) {
        Ok(0) => DispatchResult::ok(format!("No occurrence of {target:?} in the current line")),
        Ok(1) => DispatchResult::ok("Replaced 1 occurrence"),
        Ok(n) => DispatchResult::ok(format!("Replaced {n} occurrences")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}
