//! Linear undo/redo history.
//!
//! The log is append-only: moving back and forth only shifts a cursor, and
//! recording after an undo appends past the end instead of truncating.

/// Ordered log of visited states with an undo cursor.
///
/// `cursor` counts how many steps back from the end of the log the machine
/// currently sits. Redo is only allowed while the redo flag is set, which
/// happens on a successful step back and is cleared by any new record.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::History;
///
/// let mut history = History::new("a");
/// history.record("b");
///
/// assert_eq!(history.step_back(), Some("a"));
/// assert_eq!(history.step_forward(), Some("b"));
/// assert_eq!(history.step_forward(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
    redo_available: bool,
}

impl History {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            redo_available: false,
        }
    }

    /// Append a state and disable redo.
    ///
    /// The cursor is left where it is.
    pub fn record(&mut self, state: impl Into<String>) {
        self.entries.push(state.into());
        self.redo_available = false;
    }

    /// Whether [`step_back`](Self::step_back) would succeed.
    pub fn can_step_back(&self) -> bool {
        self.entries.len().saturating_sub(self.cursor) > 1
    }

    /// Whether [`step_forward`](Self::step_forward) would succeed.
    pub fn can_step_forward(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0 && self.redo_available
    }

    /// Move one entry further back and return it.
    ///
    /// Returns `None` without changing anything when no older entry is left.
    pub fn step_back(&mut self) -> Option<&str> {
        if !self.can_step_back() {
            return None;
        }
        self.cursor += 1;
        self.redo_available = true;
        self.entry_at_cursor()
    }

    /// Move one entry towards the end and return it.
    ///
    /// Returns `None` without changing anything unless the last forward
    /// motion was preceded by a step back.
    pub fn step_forward(&mut self) -> Option<&str> {
        if !self.can_step_forward() {
            return None;
        }
        let index = self.entries.len().checked_sub(self.cursor)?;
        self.entries.get(index)?;
        self.cursor -= 1;
        self.entry_at_cursor()
    }

    /// Drop every entry. Cursor and redo flag are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Steps back from the end of the log.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn redo_available(&self) -> bool {
        self.redo_available
    }

    fn entry_at_cursor(&self) -> Option<&str> {
        let index = self.entries.len().checked_sub(self.cursor + 1)?;
        self.entries.get(index).map(String::as_str)
    }
}
