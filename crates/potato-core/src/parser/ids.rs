//! Box identifiers.

use std::collections::HashSet;

/// Hands out `<frame>-intern-<n>` ids and remembers explicit ids.
#[derive(Debug, Clone, Default)]
pub(crate) struct BoxIds {
    user_ids: HashSet<String>,
    counter: usize,
}

impl BoxIds {
    /// Start numbering a new frame. Explicit ids stay reserved document-wide.
    pub(crate) fn reset_counter(&mut self) {
        self.counter = 0;
    }

    /// Id for the next box in `frame_id` if it has none of its own.
    pub(crate) fn generate(&self, frame_id: &str) -> String {
        format!("{frame_id}-intern-{}", self.counter)
    }

    /// Count a box added to the current frame.
    pub(crate) fn advance(&mut self) {
        self.counter += 1;
    }

    /// Reserve an explicit id. Returns false if it was already taken.
    pub(crate) fn register(&mut self, id: &str) -> bool {
        self.user_ids.insert(id.to_string())
    }
}
