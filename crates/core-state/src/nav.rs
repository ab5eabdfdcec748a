//! Cursor movement. Never touches line content or history.

use crate::{Boundary, EditError, EditorState};
use core_text::Cursor;
use tracing::{trace, warn};

impl EditorState {
    /// Move down one line, returning the new index.
    pub fn next_line(&mut self) -> Result<usize, EditError> {
        let raw = self.cursor().raw();
        if raw < self.size() as isize - 1 {
            let idx = (raw + 1) as usize;
            self.buffer.set_cursor(Cursor::Line(idx));
            trace!(target: "state.nav", op = "next_line", cursor = idx, "motion");
            Ok(idx)
        } else {
            Err(EditError::AtBoundary(Boundary::Last))
        }
    }

    /// Move up one line, returning the new index.
    pub fn previous_line(&mut self) -> Result<usize, EditError> {
        let raw = self.cursor().raw();
        if raw > 0 {
            let idx = (raw - 1) as usize;
            self.buffer.set_cursor(Cursor::Line(idx));
            trace!(target: "state.nav", op = "previous_line", cursor = idx, "motion");
            Ok(idx)
        } else {
            Err(EditError::AtBoundary(Boundary::First))
        }
    }

    /// Jump to line 0 unconditionally; on an empty buffer this leaves the
    /// cursor equal to `size()`.
    pub fn to_beginning(&mut self) -> Cursor {
        self.buffer.set_cursor(Cursor::Line(0));
        if self.size() == 0 {
            warn!(target: "state.nav", "cursor_out_of_range_after_to_beginning");
        }
        Cursor::Line(0)
    }

    /// Jump to `size() - 1` unconditionally; on an empty buffer this yields
    /// `Cursor::Detached` (raw `-1`).
    pub fn to_end(&mut self) -> Cursor {
        let cursor = Cursor::from_raw(self.size() as isize - 1);
        self.buffer.set_cursor(cursor);
        if cursor == Cursor::Detached {
            warn!(target: "state.nav", "cursor_detached_after_to_end");
        }
        cursor
    }

    pub fn to_line(&mut self, index: usize) -> Result<(), EditError> {
        let len = self.size();
        if index >= len {
            return Err(EditError::InvalidIndex { index, len });
        }
        self.buffer.set_cursor(Cursor::Line(index));
        trace!(target: "state.nav", op = "goto", cursor = index, "motion");
        Ok(())
    }
}
