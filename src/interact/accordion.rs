//! One-open-or-none accordion state.

/// Open/closed state for an FAQ accordion.
///
/// At most one entry is open. Toggling the open entry closes it;
/// toggling another entry switches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    /// Creates an accordion with every entry closed.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    /// Creates an accordion with one entry open. Out-of-range indexes
    /// leave everything closed.
    #[must_use]
    pub const fn with_open(len: usize, index: usize) -> Self {
        let open = if index < len { Some(index) } else { None };
        Self { open, len }
    }

    /// The open entry, if any.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when the given entry is open.
    #[must_use]
    pub const fn is_open(&self, index: usize) -> bool {
        match self.open {
            Some(open) => open == index,
            None => false,
        }
    }

    /// Toggles an entry. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}
