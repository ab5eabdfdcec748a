use core_text::{Buffer, Cursor};
use std::collections::VecDeque;
use tracing::trace;

/// Point-in-time copy of the buffer's lines and cursor.
///
/// Owns its lines outright; later edits to the live buffer never reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    pub lines: Vec<String>,
    pub cursor: Cursor,
}

impl EditSnapshot {
    pub fn capture(buffer: &Buffer) -> Self {
        Self {
            lines: buffer.lines().to_vec(),
            cursor: buffer.cursor(),
        }
    }
}

/// Undo and redo stacks of full-buffer snapshots.
///
/// Unbounded unless constructed with a max depth, in which case each stack
/// keeps only its newest `max_depth` snapshots (oldest dropped first), which
/// caps how far back undo can reach.
#[derive(Debug, Default)]
pub struct UndoEngine {
    undo_stack: VecDeque<EditSnapshot>,
    redo_stack: VecDeque<EditSnapshot>,
    max_depth: Option<usize>,
}

impl UndoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(0)` is treated as unbounded.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth: max_depth.filter(|&d| d > 0),
            ..Self::default()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record the buffer's current state as an undo point. Any redo history
    /// is invalidated.
    pub fn push_snapshot(&mut self, buffer: &Buffer) {
        let snap = EditSnapshot::capture(buffer);
        push_bounded(&mut self.undo_stack, snap, self.max_depth);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), lines = buffer.len(), "push_snapshot");
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Restore the newest undo snapshot, moving the pre-undo state onto the
    /// redo stack. Returns false when there is nothing to undo.
    pub fn undo(&mut self, buffer: &mut Buffer) -> bool {
        let Some(last) = self.undo_stack.pop_back() else {
            return false;
        };
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        let (lines, cursor) = buffer.swap_state(last.lines, last.cursor);
        push_bounded(
            &mut self.redo_stack,
            EditSnapshot { lines, cursor },
            self.max_depth,
        );
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), "redo_push_from_undo");
        true
    }

    /// Mirror of `undo`.
    pub fn redo(&mut self, buffer: &mut Buffer) -> bool {
        let Some(next) = self.redo_stack.pop_back() else {
            return false;
        };
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), undo_depth = self.undo_stack.len(), "redo_pop");
        let (lines, cursor) = buffer.swap_state(next.lines, next.cursor);
        push_bounded(
            &mut self.undo_stack,
            EditSnapshot { lines, cursor },
            self.max_depth,
        );
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "undo_push_from_redo");
        true
    }

    pub fn discard(&mut self) {
        let (undo_depth, redo_depth) = (self.undo_stack.len(), self.redo_stack.len());
        self.undo_stack.clear();
        self.redo_stack.clear();
        trace!(target: "state.undo", undo_depth, redo_depth, "history_discarded");
    }
}

fn push_bounded(stack: &mut VecDeque<EditSnapshot>, snap: EditSnapshot, max: Option<usize>) {
    stack.push_back(snap);
    if let Some(max) = max
        && stack.len() > max
    {
        stack.pop_front();
        trace!(target: "state.undo", max, "stack_trimmed");
    }
}
