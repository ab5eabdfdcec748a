//! File and session commands (R, W, V, s, Help).
//!
//! IO failures become failed `DispatchResult`s; the `io_ops` helpers already
//! guarantee buffer and history are untouched on error.

use super::DispatchResult;
use crate::io_ops::{SaveEnding, open_file, write_file};
use core_state::EditorState;
use std::path::Path;

pub const HELP_TEXT: &str = "\
Command List:
R <file>            Read a file
W [file]            Write to a file (clears undo history)
I <line> <text>     Insert a new line
D                   Delete current line
M <line> <text>     Modify a line
C <target> <repl>   Replace a string in the current line
F <target>          Find a target string from the current line
N                   Move to the next line
P                   Move to the previous line
B                   Move to the beginning of the buffer
E                   Move to the end of the buffer
G <line>            Go to a specific line
V                   View the entire buffer content
s                   Show current line number
U                   Undo
Z                   Redo
Help or ?           Display this help
Q                   Quit the editor";

pub(crate) fn handle_read(state: &mut EditorState, path: &Path) -> DispatchResult {
    match open_file(state, path) {
        Ok(summary) => {
            let mut msg = format!(
                "Read {} lines from {}",
                summary.lines,
                summary.path.display()
            );
            if summary.lossy {
                msg.push_str(" (invalid UTF-8 replaced)");
            }
            DispatchResult::ok(msg)
        }
        Err(e) => DispatchResult::failed(format!("{e:#}")),
    }
}

pub(crate) fn handle_write(
    state: &mut EditorState,
    target: Option<&Path>,
    ending: SaveEnding,
) -> DispatchResult {
    match write_file(state, target, ending) {
        Ok(summary) => DispatchResult::ok(format!(
            "Wrote {} lines ({} bytes) to {}",
            summary.lines,
            summary.bytes,
            summary.path.display()
        )),
        Err(e) => {
            tracing::error!(target: "io", error = %format!("{e:#}"), "file_write_error");
            DispatchResult::failed(format!("{e:#}"))
        }
    }
}

pub(crate) fn handle_view(state: &EditorState) -> DispatchResult {
    if state.size() == 0 {
        return DispatchResult::ok("(buffer is empty)");
    }
    let current = state.cursor().within(state.size());
    let listing = state
        .buffer()
        .lines()
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let marker = if current == Some(idx) { '>' } else { ' ' };
            format!("{idx:>4}{marker} {line}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    DispatchResult::ok(listing)
}

pub(crate) fn handle_show(state: &EditorState) -> DispatchResult {
    let mut msg = format!("Current line is {}", state.cursor().raw());
    if state.dirty {
        msg.push_str(" (modified)");
    }
    DispatchResult::ok(msg)
}
