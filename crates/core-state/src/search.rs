//! Forward-only substring search from the current line.

use crate::{EditError, EditorState};
use core_text::{Cursor, Position, find_forward};
use tracing::debug;

impl EditorState {
    /// Look for `target` on the current line, then on each following line.
    ///
    /// A hit on the current line leaves the cursor where it is; a hit further
    /// down moves the cursor to that line. The scan never wraps to lines above
    /// the starting point.
    pub fn find_from_current(&mut self, target: &str) -> Result<Position, EditError> {
        let start = self
            .cursor()
            .within(self.size())
            .ok_or(EditError::EmptyOrInvalidCursor)?;
        match find_forward(self.buffer.lines(), start, target) {
            Some(pos) => {
                if pos.line != start {
                    self.buffer.set_cursor(Cursor::Line(pos.line));
                }
                debug!(target: "state.search", start, line = pos.line, byte = pos.byte, "found");
                Ok(pos)
            }
            None => {
                debug!(target: "state.search", start, "not_found");
                Err(EditError::NotFound(target.to_string()))
            }
        }
    }
}
