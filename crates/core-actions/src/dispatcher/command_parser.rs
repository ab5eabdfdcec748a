//! Structured command line parsing.
//!
//! Converts one raw input line into a `ParsedCommand`. A command is a single
//! word (mostly one letter) followed by its arguments. Free-text arguments
//! (`I`/`M` line content) keep their interior and trailing spacing: only the
//! single space separating them from the preceding argument is consumed.
//!
//! No side effects here; pure classification.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Read(PathBuf),
    Write(Option<PathBuf>),
    Insert { line: usize, text: String },
    Delete,
    Modify { line: usize, text: String },
    Replace { target: String, replacement: String },
    Find(String),
    Next,
    Previous,
    Beginning,
    End,
    Goto(usize),
    View,
    Show,
    Undo,
    Redo,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{command}: invalid line number {value:?}")]
    InvalidLineNumber { command: &'static str, value: String },
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> Result<ParsedCommand, CommandError> {
        let line = raw.trim_end_matches(['\n', '\r']).trim_start();
        let (word, rest) = split_word(line);
        match word {
            "R" => Ok(ParsedCommand::Read(PathBuf::from(required(
                "R",
                "file name",
                rest.trim(),
            )?))),
            "W" => {
                let name = rest.trim();
                Ok(ParsedCommand::Write(
                    (!name.is_empty()).then(|| PathBuf::from(name)),
                ))
            }
            "I" => {
                let (line, text) = line_and_text("I", rest)?;
                Ok(ParsedCommand::Insert { line, text })
            }
            "M" => {
                let (line, text) = line_and_text("M", rest)?;
                Ok(ParsedCommand::Modify { line, text })
            }
            "C" => {
                let (target, replacement) = split_word(rest.trim_start());
                let target = required("C", "target string", target)?;
                let replacement = required("C", "replacement string", replacement.trim())?;
                Ok(ParsedCommand::Replace {
                    target: target.to_string(),
                    replacement: replacement.to_string(),
                })
            }
            "F" => Ok(ParsedCommand::Find(
                required("F", "target string", rest.trim())?.to_string(),
            )),
            "G" => Ok(ParsedCommand::Goto(line_number("G", rest.trim())?)),
            "D" => Ok(ParsedCommand::Delete),
            "N" => Ok(ParsedCommand::Next),
            "P" => Ok(ParsedCommand::Previous),
            "B" => Ok(ParsedCommand::Beginning),
            "E" => Ok(ParsedCommand::End),
            "V" => Ok(ParsedCommand::View),
            "s" => Ok(ParsedCommand::Show),
            "U" => Ok(ParsedCommand::Undo),
            "Z" => Ok(ParsedCommand::Redo),
            "Help" | "?" => Ok(ParsedCommand::Help),
            "Q" | "q" => Ok(ParsedCommand::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited word; the remainder starts after
/// the single separating whitespace character.
fn split_word(s: &str) -> (&str, &str) {
    match s.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => (&s[..i], &s[i + c.len_utf8()..]),
        None => (s, ""),
    }
}

fn required<'a>(
    command: &'static str,
    what: &'static str,
    value: &'a str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(value)
    }
}

fn line_number(command: &'static str, value: &str) -> Result<usize, CommandError> {
    let value = required(command, "line number", value)?;
    value
        .parse()
        .map_err(|_| CommandError::InvalidLineNumber {
            command,
            value: value.to_string(),
        })
}

fn line_and_text(command: &'static str, rest: &str) -> Result<(usize, String), CommandError> {
    let (number, text) = split_word(rest.trim_start());
    Ok((line_number(command, number)?, text.to_string()))
}
