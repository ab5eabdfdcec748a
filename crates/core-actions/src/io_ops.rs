//! File IO helpers used by the dispatcher.
//!
//! Synchronous and minimal. Loading splits text on any line terminator and
//! records the majority style; saving writes every line followed by a
//! terminator and then discards undo history, making the write a commit point.
//! Lines are opaque text: bytes that are not UTF-8 are replaced on load rather
//! than refusing the file. A failed read or write leaves buffer and history as
//! they were.

use anyhow::{Context, Result, bail};
use core_state::EditorState;
use core_text::{LineEnding, normalize_line_endings};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Terminator policy for writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveEnding {
    /// Reuse the style detected when the file was opened.
    #[default]
    Preserve,
    Fixed(LineEnding),
}

impl SaveEnding {
    pub fn resolve(self, detected: LineEnding) -> LineEnding {
        match self {
            SaveEnding::Preserve => detected,
            SaveEnding::Fixed(ending) => ending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSummary {
    pub path: PathBuf,
    pub lines: usize,
    pub line_ending: LineEnding,
    pub mixed_line_endings: bool,
    /// Undecodable bytes were replaced with U+FFFD.
    pub lossy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub lines: usize,
    pub bytes: usize,
}

/// Read `path` into the session buffer. History is not touched.
pub fn open_file(state: &mut EditorState, path: &Path) -> Result<OpenSummary> {
    let bytes =
        std::fs::read(path).with_context(|| format!("unable to read {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);
    let lossy = matches!(content, Cow::Owned(_));
    if lossy {
        tracing::warn!(target: "io", file = %path.display(), "invalid_utf8_replaced");
    }
    let norm = normalize_line_endings(&content);
    if norm.mixed {
        tracing::warn!(target: "io", file = %path.display(), "mixed_line_endings_detected");
    }
    let lines = state.load(norm.lines);
    state.file_name = Some(path.to_path_buf());
    state.line_ending = norm.original;
    tracing::debug!(target: "io", file = %path.display(), size_bytes = content.len(), lines, "file_read_ok");
    Ok(OpenSummary {
        path: path.to_path_buf(),
        lines,
        line_ending: norm.original,
        mixed_line_endings: norm.mixed,
        lossy,
    })
}

/// Serialize the buffer to `target` (or the session's file name), then
/// discard undo history and clear the dirty flag.
pub fn write_file(
    state: &mut EditorState,
    target: Option<&Path>,
    ending: SaveEnding,
) -> Result<WriteSummary> {
    let path = match (target, state.file_name.as_ref()) {
        (Some(p), _) => p.to_path_buf(),
        (None, Some(existing)) => existing.clone(),
        (None, None) => bail!("no file name; use W <file>"),
    };
    let terminator = ending.resolve(state.line_ending).as_str();
    let mut content = String::new();
    for line in state.buffer().lines() {
        content.push_str(line);
        content.push_str(terminator);
    }
    std::fs::write(&path, content.as_bytes())
        .with_context(|| format!("unable to write {}", path.display()))?;

    state.discard();
    state.dirty = false;
    state.file_name = Some(path.clone());
    let lines = state.size();
    tracing::debug!(target: "io", file = %path.display(), lines, size_bytes = content.len(), "file_write_ok");
    Ok(WriteSummary {
        path,
        lines,
        bytes: content.len(),
    })
}
