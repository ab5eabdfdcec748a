#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{CommandParser, DispatchResult, Session, dispatch};
use core_state::EditorState;
use core_text::Buffer;

pub fn session_with(lines: &[&str]) -> Session {
    let mut state = EditorState::new(Buffer::new());
    state.load(lines.iter().map(|s| s.to_string()).collect());
    Session::new(state)
}

/// Parse and dispatch one command line, panicking on a parse error.
pub fn exec(session: &mut Session, raw: &str) -> DispatchResult {
    let cmd = CommandParser::parse(raw).unwrap_or_else(|e| panic!("parse {raw:?}: {e}"));
    dispatch(cmd, session)
}

/// Dispatch each command, asserting it succeeded.
pub fn exec_all(session: &mut Session, script: &[&str]) {
    for raw in script {
        let res = exec(session, raw);
        assert!(res.ok, "{raw:?} failed: {}", res.message);
    }
}

pub fn lines(session: &Session) -> Vec<String> {
    session.state.buffer().lines().to_vec()
}
