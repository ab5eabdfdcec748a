//! Editing session state: the line buffer, its undo history, and file metadata.
//!
//! `EditorState` is the single mutable object an editing session owns. Every
//! operation runs synchronously to completion and reports failure as an
//! `EditError`; a failed operation leaves buffer, cursor, and history untouched.
//!
//! Operations are grouped by concern:
//! - `edit`   - insert / delete / modify / replace-in-line
//! - `nav`    - cursor-only movement, never touches line content or history
//! - `search` - forward substring lookup from the current line
//! - `undo`   - snapshot stacks (`UndoEngine`)
//!
//! History capture is a policy, not a side effect baked into particular edits:
//! `CapturePolicy` names which `EditKind`s snapshot automatically and
//! `EditorState::capture` lets callers snapshot explicitly. The default,
//! `ModifyOnly`, snapshots only before line modification.

use core_text::{Buffer, Cursor, LineEnding};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, trace};

mod edit;
mod nav;
mod search;
pub mod undo;

pub use undo::{EditSnapshot, UndoEngine};

/// Which end of the buffer a navigation ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Last,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::First => f.write_str("first"),
            Boundary::Last => f.write_str("last"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

impl fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryDirection::Undo => f.write_str("undo"),
            HistoryDirection::Redo => f.write_str("redo"),
        }
    }
}

/// Recoverable failure of an editing operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("invalid line number {index} (buffer has {len} lines)")]
    InvalidIndex { index: usize, len: usize },

    #[error("buffer is empty")]
    EmptyBuffer,

    #[error("nothing to {0}")]
    EmptyHistory(HistoryDirection),

    #[error("already at the {0} line")]
    AtBoundary(Boundary),

    #[error("target string {0:?} not found")]
    NotFound(String),

    #[error("buffer is empty or the current line is out of range")]
    EmptyOrInvalidCursor,

    #[error("line text may not contain a line terminator")]
    EmbeddedNewline,
}

/// Kinds of content mutation, used to decide automatic history capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
    Modify,
    Replace,
}

/// Which edits snapshot the buffer before mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePolicy {
    /// Only `modify` captures.
    #[default]
    ModifyOnly,
    EveryEdit,
    /// No automatic capture; callers use `EditorState::capture` themselves.
    Never,
}

impl CapturePolicy {
    pub fn captures(self, kind: EditKind) -> bool {
        match self {
            CapturePolicy::ModifyOnly => kind == EditKind::Modify,
            CapturePolicy::EveryEdit => true,
            CapturePolicy::Never => false,
        }
    }
}

/// Where the cursor lands after `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadCursor {
    /// Last loaded line.
    #[default]
    LastLine,
    /// One past the last loaded line (the loaded line count).
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateOptions {
    pub capture: CapturePolicy,
    pub load_cursor: LoadCursor,
    /// Maximum snapshots kept per history stack; `None` is unbounded.
    pub history_depth: Option<usize>,
}

pub struct EditorState {
    buffer: Buffer,
    undo: UndoEngine,
    options: StateOptions,
    /// Path last opened or written.
    pub file_name: Option<PathBuf>,
    /// Terminator detected at load; used when saving with a preserving policy.
    pub line_ending: LineEnding,
    /// Content changed since the last load or save.
    pub dirty: bool,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self::with_options(buffer, StateOptions::default())
    }

    pub fn with_options(buffer: Buffer, options: StateOptions) -> Self {
        Self {
            buffer,
            undo: UndoEngine::with_max_depth(options.history_depth),
            options,
            file_name: None,
            line_ending: LineEnding::default(),
            dirty: false,
        }
    }

    pub fn options(&self) -> StateOptions {
        self.options
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn at(&self, idx: usize) -> Option<&str> {
        self.buffer.line(idx)
    }

    pub fn current_line(&self) -> Option<&str> {
        self.buffer.current_line()
    }

    pub fn cursor(&self) -> Cursor {
        self.buffer.cursor()
    }

    /// Replace all lines. An empty sequence becomes a single empty line.
    /// History is left alone; only a save discards it.
    pub fn load(&mut self, lines: Vec<String>) -> usize {
        let count = self.buffer.load(lines);
        if self.options.load_cursor == LoadCursor::LastLine {
            let last = self.buffer.len() - 1;
            self.buffer.set_cursor(Cursor::Line(last));
        }
        self.dirty = false;
        debug!(target: "state.edit", count, cursor = self.cursor().raw(), "load");
        count
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }

    /// Snapshot the current lines and cursor onto the undo stack, clearing redo.
    pub fn capture(&mut self) {
        self.undo.push_snapshot(&self.buffer);
    }

    pub(crate) fn capture_for(&mut self, kind: EditKind) {
        if self.options.capture.captures(kind) {
            trace!(target: "state.undo", ?kind, "auto_capture");
            self.capture();
        }
    }

    pub fn undo(&mut self) -> Result<(), EditError> {
        if self.undo.undo(&mut self.buffer) {
            self.dirty = true;
            Ok(())
        } else {
            Err(EditError::EmptyHistory(HistoryDirection::Undo))
        }
    }

    pub fn redo(&mut self) -> Result<(), EditError> {
        if self.undo.redo(&mut self.buffer) {
            self.dirty = true;
            Ok(())
        } else {
            Err(EditError::EmptyHistory(HistoryDirection::Redo))
        }
    }

    /// Drop both history stacks (commit point).
    pub fn discard(&mut self) {
        self.undo.discard();
    }
}

fn check_line_text(text: &str) -> Result<(), EditError> {
    if text.contains(['\n', '\r']) {
        Err(EditError::EmbeddedNewline)
    } else {
        Ok(())
    }
}
