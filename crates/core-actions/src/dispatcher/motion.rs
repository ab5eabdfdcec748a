//! Cursor movement and forward search commands.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn handle_next(state: &mut EditorState) -> DispatchResult {
    match state.next_line() {
        Ok(idx) => DispatchResult::ok(format!("Moved to the next line (line {idx})")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_previous(state: &mut EditorState) -> DispatchResult {
    match state.previous_line() {
        Ok(idx) => DispatchResult::ok(format!("Moved to the previous line (line {idx})")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_beginning(state: &mut EditorState) -> DispatchResult {
    let cursor = state.to_beginning();
    DispatchResult::ok(format!(
        "Moved to the beginning of the buffer (line {})",
        cursor.raw()
    ))
}

pub(crate) fn handle_end(state: &mut EditorState) -> DispatchResult {
    let cursor = state.to_end();
    DispatchResult::ok(format!(
        "Moved to the end of the buffer (line {})",
        cursor.raw()
    ))
}

pub(crate) fn handle_goto(state: &mut EditorState, line: usize) -> DispatchResult {
    match state.to_line(line) {
        Ok(()) => DispatchResult::ok(format!("Cursor has been moved to line {line}")),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}

pub(crate) fn handle_find(state: &mut EditorState, target: &str) -> DispatchResult {
    match state.find_from_current(target) {
        Ok(pos) => DispatchResult::ok(format!(
            "Target string found in line {} at position {}",
            pos.line, pos.byte
        )),
        Err(e) => DispatchResult::failed(e.to_string()),
    }
}
