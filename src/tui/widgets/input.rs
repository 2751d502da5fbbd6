//! Text input widget
//!
//! A text input field with cursor support. Rendering is done by the
//! dialogs themselves (label + value + cursor span); this type only owns
//! the editing state.

/// A simple text input
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position as a byte offset, always on a char boundary
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder: String::new(),
            label: String::new(),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// The content as it would be after inserting `c` at the cursor
    ///
    /// Lets callers veto an edit before applying it (the split-bill form's
    /// clamp-on-type check).
    pub fn preview_insert(&self, c: char) -> String {
        let mut candidate = self.content.clone();
        candidate.insert(self.cursor, c);
        candidate
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.content.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('4');
        input.insert('0');
        assert_eq!(input.value(), "40");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_insert_mid_content() {
        let mut input = TextInput::new().content("10");
        input.move_left();
        input.insert('5');
        assert_eq!(input.value(), "150");
    }

    #[test]
    fn test_preview_insert_does_not_mutate() {
        let input = TextInput::new().content("4");
        assert_eq!(input.preview_insert('0'), "40");
        assert_eq!(input.value(), "4");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new().content("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "b");

        // Backspace at start is a no-op
        input.move_start();
        input.backspace();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "José".chars() {
            input.insert(c);
        }
        input.insert('s');
        assert_eq!(input.value(), "Josés");
        assert_eq!(input.cursor, input.value().len());

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "Jos");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = TextInput::new().content("Zoë");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "Zobë");

        input.move_right();
        assert_eq!(input.cursor, input.value().len());

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "obë");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("abc");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }
}
