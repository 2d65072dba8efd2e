//! Search input.
//!
//! Typing updates the table's search term live; the buffer only tracks the
//! editing session.

/// Search input state.
#[derive(Debug, Default)]
pub struct SearchInput {
    is_active: bool,
    buffer: String,
}

impl SearchInput {
    /// Create a new search input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the input is being edited.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Start editing, seeded with the current term.
    pub fn start(&mut self, current: &str) {
        self.is_active = true;
        self.buffer = current.to_string();
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Finish editing, keeping the term.
    pub fn submit(&mut self) -> String {
        self.is_active = false;
        self.buffer.clone()
    }

    /// Abort editing and clear the term.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.buffer.clear();
    }

    /// Current buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_session() {
        let mut search = SearchInput::new();
        search.start("am");
        search.input('a');
        search.input('z');
        search.backspace();
        assert_eq!(search.buffer(), "ama");
        assert_eq!(search.submit(), "ama");
        assert!(!search.is_active());
    }

    #[test]
    fn cancel_clears() {
        let mut search = SearchInput::new();
        search.start("");
        search.input('x');
        search.cancel();
        assert!(search.buffer().is_empty());
        assert!(!search.is_active());
    }
}
