//! Slot State
//!
//! Per-dataset view state. A slot starts `Empty` and settles exactly once
//! into `Ready` or `Failed`.

/// View state of one dataset
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    /// Fetch not yet settled
    Empty,
    /// Fetch succeeded
    Ready(T),
    /// Fetch failed; holds the user-facing message
    Failed(String),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<T> Slot<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Slot::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Slot::Failed(_))
    }

    pub fn is_settled(&self) -> bool {
        !self.is_empty()
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Slot::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Empty => Slot::Empty,
            Slot::Ready(value) => Slot::Ready(value),
            Slot::Failed(message) => Slot::Failed(message.clone()),
        }
    }

    /// Move an empty slot into `settled`.
    ///
    /// Returns `false` and leaves the slot untouched if it has already
    /// settled or `settled` is itself `Empty`.
    pub fn settle(&mut self, settled: Slot<T>) -> bool {
        if self.is_settled() || settled.is_empty() {
            return false;
        }
        *self = settled;
        true
    }
}
