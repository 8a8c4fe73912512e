//! Open/closed state and the highlight cursor.

/// Where the list is, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open(usize),
}

/// Open flag and highlighted row of a select.
///
/// Owned by the widget. Only the event router mutates it; everything
/// outside the crate gets read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    is_open: bool,
    highlighted: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Highlighted row. Kept while closed; reset on the next open.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn phase(&self) -> Phase {
        if self.is_open {
            Phase::Open(self.highlighted)
        } else {
            Phase::Closed
        }
    }

    /// Open the list. Entering the open state always highlights the first row.
    /// Returns true if the state changed.
    pub(crate) fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.highlighted = 0;
        true
    }

    /// Close the list, leaving the highlight where it is.
    /// Returns true if the state changed.
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        was_open
    }

    pub(crate) fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the highlight to `index` if it names a row.
    /// Returns true if the highlight moved.
    pub(crate) fn highlight(&mut self, index: usize, len: usize) -> bool {
        if index >= len || index == self.highlighted {
            return false;
        }
        self.highlighted = index;
        true
    }

    /// Pull the highlight back into range after the options shrank.
    pub(crate) fn clamp(&mut self, len: usize) {
        let max = len.saturating_sub(1);
        if self.highlighted > max {
            self.highlighted = max;
        }
    }
}
