//! Dispatcher applying a `ParsedCommand` to the editing session.
//!
//! Sub-modules by concern:
//! * `motion`  - cursor movement and forward search
//! * `edit`    - insert / delete / modify / replace
//! * `undo`    - undo / redo
//! * `command` - file read/write, buffer views, help, quit
//!
//! Every outcome, success or failure, comes back as a `DispatchResult`
//! carrying a human-readable message; nothing here aborts the session.

use crate::Session;

mod command;
pub mod command_parser;
mod edit;
mod motion;
mod undo;

pub use command::HELP_TEXT;
pub use command_parser::{CommandError, CommandParser, ParsedCommand};

/// Result of dispatching a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub ok: bool,
    pub quit: bool,
    pub message: String,
}

impl DispatchResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            quit: false,
            message: message.into(),
        }
    }
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            quit: false,
            message: message.into(),
        }
    }
    pub fn quit() -> Self {
        Self {
            ok: true,
            quit: true,
            message: String::from("Bye"),
        }
    }
}

/// Apply a parsed command to the session.
pub fn dispatch(command: ParsedCommand, session: &mut Session) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?command, "dispatch");
    let state = &mut session.state;
    let result = match command {
        ParsedCommand::Insert { line, text } => edit::handle_insert(state, line, text),
        ParsedCommand::Delete => edit::handle_delete(state),
        ParsedCommand::Modify { line, text } => edit::handle_modify(state, line, text),
        ParsedCommand::Replace {
            target,
            replacement,
        } => edit::handle_replace(state, &target, &replacement),
        ParsedCommand::Next => motion::handle_next(state),
        ParsedCommand::Previous => motion::handle_previous(state),
        ParsedCommand::Beginning => motion::handle_beginning(state),
        ParsedCommand::End => motion::handle_end(state),
        ParsedCommand::Goto(line) => motion::handle_goto(state, line),
        ParsedCommand::Find(target) => motion::handle_find(state, &target),
        ParsedCommand::Undo => undo::handle_undo(state),
        ParsedCommand::Redo => undo::handle_redo(state),
        ParsedCommand::Read(path) => command::handle_read(state, &path),
        ParsedCommand::Write(path) => {
            command::handle_write(state, path.as_deref(), session.save_ending)
        }
        ParsedCommand::View => command::handle_view(state),
        ParsedCommand::Show => command::handle_show(state),
        ParsedCommand::Help => DispatchResult::ok(HELP_TEXT),
        ParsedCommand::Quit => DispatchResult::quit(),
    };
    if !result.ok {
        tracing::debug!(target: "actions.dispatch", message = %result.message, "command_failed");
    }
    result
}
