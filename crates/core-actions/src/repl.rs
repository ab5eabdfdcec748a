//! Prompt / read / dispatch / print loop.
//!
//! Generic over the reader and writer so the binary drives it with stdin and
//! stdout while tests feed scripted input. Blank lines re-prompt; undecodable
//! lines, parse errors and failed commands are printed and the loop continues.
//! The loop ends on a quit command or end of input.

use crate::Session;
use crate::dispatcher::{CommandParser, dispatch};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "Enter a command (type Help or ? for help): ";
const INVALID_INPUT: &str = "Invalid input: command line is not valid UTF-8";

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    EndOfInput,
}

pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<LoopExit> {
    let mut bytes = Vec::new();
    let mut commands = 0u64;
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            writeln!(out)?;
            info!(target: "runtime", commands, "input_closed");
            return Ok(LoopExit::EndOfInput);
        }
        let Ok(line) = std::str::from_utf8(&bytes) else {
            warn!(target: "runtime", len = bytes.len(), "invalid_utf8_input");
            writeln!(out, "{INVALID_INPUT}")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        commands += 1;
        let result = match CommandParser::parse(line) {
            Ok(command) => dispatch(command, session),
            Err(e) => {
                debug!(target: "actions.dispatch", error = %e, "parse_failed");
                writeln!(out, "{e}")?;
                continue;
            }
        };
        writeln!(out, "{}", result.message)?;
        if result.quit {
            info!(target: "runtime", commands, "quit");
            return Ok(LoopExit::Quit);
        }
    }
}
