//! Line-sequence text buffer.
//!
//! A `Buffer` is an ordered list of opaque lines (no embedded terminators)
//! plus the cursor naming "the current line". Methods here are primitives:
//! they validate bounds and report failure through `Option`/`bool`, leaving
//! error taxonomy and history policy to `core-state`.

pub mod ending;
pub mod search;

pub use ending::{LineEnding, NormalizedText, normalize_line_endings};
pub use search::{find_forward, replace_resuming};

/// A location inside a buffer expressed as (line index, byte offset within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
}

/// Index of the current line.
///
/// `Line(n)` is not guaranteed to be in range: `to_beginning` on an empty
/// buffer and the one-past-end load placement both produce `Line(len)`.
/// `Detached` is the "before the first line" value produced by moving to the
/// end of an empty buffer; its raw form is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Detached,
    Line(usize),
}

impl Cursor {
    /// Build from a signed index; anything negative is `Detached`.
    pub fn from_raw(raw: isize) -> Self {
        if raw < 0 {
            Cursor::Detached
        } else {
            Cursor::Line(raw as usize)
        }
    }

    pub fn raw(self) -> isize {
        match self {
            Cursor::Detached => -1,
            Cursor::Line(n) => n as isize,
        }
    }

    pub fn line(self) -> Option<usize> {
        match self {
            Cursor::Detached => None,
            Cursor::Line(n) => Some(n),
        }
    }

    /// The line index if it addresses an existing line of a buffer with `len` lines.
    pub fn within(self, len: usize) -> Option<usize> {
        self.line().filter(|&n| n < len)
    }
}

/// Ordered sequence of lines plus the current-line cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Buffer {
    /// An empty buffer (zero lines, detached cursor).
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a buffer from raw text split on any line terminator.
    ///
    /// The result goes through `load`, so the cursor rests one past the last
    /// loaded line.
    pub fn from_text(content: &str) -> Self {
        let mut buf = Self::new();
        buf.load(normalize_line_endings(content).lines);
        buf
    }

    /// Replace every line. The cursor is set to the number of lines supplied,
    /// one past the last valid index. Zero lines normalize to a single empty
    /// line (cursor then sits on it, at 0). Returns the supplied count.
    pub fn load(&mut self, lines: Vec<String>) -> usize {
        let count = lines.len();
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        self.cursor = Cursor::Line(count);
        count
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Text of the line under the cursor, if the cursor addresses one.
    pub fn current_line(&self) -> Option<&str> {
        self.cursor.within(self.len()).and_then(|i| self.line(i))
    }

    /// Insert `text` as a new line at `idx` (`idx == len` appends).
    pub fn insert_line(&mut self, idx: usize, text: String) -> bool {
        if idx > self.lines.len() {
            return false;
        }
        self.lines.insert(idx, text);
        true
    }

    pub fn remove_line(&mut self, idx: usize) -> Option<String> {
        if idx < self.lines.len() {
            Some(self.lines.remove(idx))
        } else {
            None
        }
    }

    /// Overwrite the line at `idx`, returning its previous text.
    pub fn replace_line(&mut self, idx: usize, text: String) -> Option<String> {
        self.lines
            .get_mut(idx)
            .map(|slot| std::mem::replace(slot, text))
    }

    pub fn line_mut(&mut self, idx: usize) -> Option<&mut String> {
        self.lines.get_mut(idx)
    }

    /// Swap in a whole (lines, cursor) state, handing back the previous one.
    pub fn swap_state(&mut self, lines: Vec<String>, cursor: Cursor) -> (Vec<String>, Cursor) {
        let old_lines = std::mem::replace(&mut self.lines, lines);
        let old_cursor = std::mem::replace(&mut self.cursor, cursor);
        (old_lines, old_cursor)
    }
}
