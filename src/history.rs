use crate::stroke::StrokeRef;

/// Undo/redo log of completed strokes for the live canvas.
///
/// Both stacks are stored oldest-first and pushed/popped at the end, so
/// replay can iterate `strokes()` directly without any copy-then-reverse.
pub struct StrokeHistory {
    /// Strokes currently on the canvas, oldest first.
    undo_stack: Vec<StrokeRef>,
    /// Strokes removed by undo, available for redo.
    redo_stack: Vec<StrokeRef>,
}

impl StrokeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Push a completed stroke onto the undo stack.
    ///
    /// Deliberately does NOT clear the redo stack: redo is invalidated at
    /// gesture *start* (see [`clear_redo`](Self::clear_redo)), before any
    /// preview pixels hit the buffer.
    pub fn push(&mut self, stroke: StrokeRef) {
        self.undo_stack.push(stroke);
    }

    /// Drop any pending redo history. Called the moment a new gesture begins
    /// and whenever a stored history is loaded.
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Move the most recent stroke onto the redo stack. Returns false (and
    /// changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(stroke) = self.undo_stack.pop() {
            self.redo_stack.push(stroke);
            true
        } else {
            false
        }
    }

    /// Exact inverse of [`undo`](Self::undo). Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(stroke) = self.redo_stack.pop() {
            self.undo_stack.push(stroke);
            true
        } else {
            false
        }
    }

    /// The strokes currently on the canvas, oldest first — the replay order.
    pub fn strokes(&self) -> &[StrokeRef] {
        &self.undo_stack
    }

    /// Replace the whole history with a stored stroke sequence (gallery
    /// restore). Any pending redo is lost.
    pub fn replace(&mut self, strokes: Vec<StrokeRef>) {
        self.undo_stack = strokes;
        self.redo_stack.clear();
    }

    /// An independent copy of the undo stack for a gallery slot. The strokes
    /// themselves are immutable and shared; only the vector is new, which is
    /// all the isolation the stacks need.
    pub fn snapshot(&self) -> Vec<StrokeRef> {
        self.undo_stack.clone()
    }

    /// Returns true if there are strokes that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are strokes that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for StrokeHistory {
    fn default() -> Self {
        Self::new()
    }
}
