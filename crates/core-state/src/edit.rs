//! Line-level content mutation.
//!
//! Each operation validates first and mutates only on success. Automatic
//! history capture goes through `EditorState::capture_for`, which consults the
//! configured `CapturePolicy`.

use crate::{EditError, EditKind, EditorState, check_line_text};
use core_text::{Cursor, replace_resuming};
use tracing::debug;

impl EditorState {
    /// Insert `text` as a new line at `index` (`index == size()` appends) and
    /// move the cursor onto it.
    pub fn insert(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditError> {
        let text = text.into();
        let len = self.size();
        if index > len {
            return Err(EditError::InvalidIndex { index, len });
        }
        check_line_text(&text)?;
        self.capture_for(EditKind::Insert);
        self.buffer.insert_line(index, text);
        self.buffer.set_cursor(Cursor::Line(index));
        self.dirty = true;
        debug!(target: "state.edit", op = "insert", index, lines = self.size(), "edit");
        Ok(())
    }

    /// Remove the line under the cursor and return its text. Deleting the
    /// last line moves the cursor up to the new last line (or `Detached` once
    /// the buffer is empty).
    pub fn delete_current(&mut self) -> Result<String, EditError> {
        let len = self.size();
        if len == 0 {
            return Err(EditError::EmptyBuffer);
        }
        let idx = self
            .cursor()
            .within(len)
            .ok_or(EditError::EmptyOrInvalidCursor)?;
        self.capture_for(EditKind::Delete);
        let removed = self
            .buffer
            .remove_line(idx)
            .ok_or(EditError::InvalidIndex { index: idx, len })?;
        let remaining = self.size();
        if idx >= remaining {
            self.buffer
                .set_cursor(Cursor::from_raw(remaining as isize - 1));
        }
        self.dirty = true;
        debug!(target: "state.edit", op = "delete", index = idx, lines = remaining, cursor = self.cursor().raw(), "edit");
        Ok(removed)
    }

    /// Overwrite the line at `index`, returning the previous text. The cursor
    /// does not move.
    pub fn modify(&mut self, index: usize, text: impl Into<String>) -> Result<String, EditError> {
        let text = text.into();
        let len = self.size();
        if index >= len {
            return Err(EditError::InvalidIndex { index, len });
        }
        check_line_text(&text)?;
        self.capture_for(EditKind::Modify);
        let previous = self
            .buffer
            .replace_line(index, text)
            .ok_or(EditError::InvalidIndex { index, len })?;
        self.dirty = true;
        debug!(target: "state.edit", op = "modify", index, "edit");
        Ok(previous)
    }

    /// Replace occurrences of `target` in the current line, resuming each scan
    /// just past the inserted replacement. Returns the replacement count.
    pub fn replace_in_current_line(
        &mut self,
        target: &str,
        replacement: &str,
    ) -> Result<usize, EditError> {
        let len = self.size();
        if len == 0 {
            return Err(EditError::EmptyBuffer);
        }
        check_line_text(replacement)?;
        let idx = self
            .cursor()
            .within(len)
            .ok_or(EditError::EmptyOrInvalidCursor)?;
        let has_match = !target.is_empty()
            && self
                .buffer
                .line(idx)
                .is_some_and(|line| line.contains(target));
        if !has_match {
            return Ok(0);
        }
        self.capture_for(EditKind::Replace);
        let line = self
            .buffer
            .line_mut(idx)
            .ok_or(EditError::EmptyOrInvalidCursor)?;
        let count = replace_resuming(line, target, replacement);
        self.dirty = true;
        debug!(target: "state.edit", op = "replace", index = idx, count, "edit");
        Ok(count)
    }
}
