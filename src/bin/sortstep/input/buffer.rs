use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text field. The cursor is a byte offset that always sits on
/// a grapheme boundary.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_str(&mut self, value: &str) {
        let value: String = value.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        let pos = self.cursor.min(self.text.len());
        self.text.insert_str(pos, &value);
        self.cursor = pos + value.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        let pos = self.cursor.min(self.text.len());
        self.text.insert(pos, ch);
        self.cursor = pos + ch.len_utf8();
    }

    /// Returns whether the text changed.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_grapheme_start() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    /// Returns whether the text changed.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_grapheme_start() else {
            return false;
        };
        self.text.replace_range(self.cursor..next, "");
        true
    }

    /// Returns whether the text changed.
    pub fn clear(&mut self) -> bool {
        self.cursor = 0;
        !std::mem::take(&mut self.text).is_empty()
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_grapheme_start() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_grapheme_start() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }

    fn prev_grapheme_start(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_grapheme_start(&self) -> Option<usize> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let remaining = &self.text[self.cursor..];
        remaining
            .grapheme_indices(true)
            .nth(1)
            .map(|(idx, _)| self.cursor + idx)
            .or(Some(self.text.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_cursor_at_end() {
        let mut buffer = InputBuffer::new("AB");
        buffer.insert_char('C');
        assert_eq!(buffer.text(), "ABC");
        assert_eq!(buffer.cursor_column(), 3);
    }

    #[test]
    fn edits_around_cursor() {
        let mut buffer = InputBuffer::new("ACD");
        buffer.move_home();
        buffer.move_right();
        buffer.insert_char('B');
        assert_eq!(buffer.text(), "ABCD");
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "ABD");
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "AD");
        buffer.move_end();
        assert!(!buffer.delete());
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buffer = InputBuffer::new("ae\u{301}");
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "a");
        buffer.move_home();
        assert!(!buffer.backspace());
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("SO\nRT\r\n");
        assert_eq!(buffer.text(), "SORT");
        assert_eq!(buffer.cursor_column(), 4);
    }

    #[test]
    fn wide_characters_take_two_columns() {
        let buffer = InputBuffer::new("日本");
        assert_eq!(buffer.cursor_column(), 4);
    }

    #[test]
    fn clear_reports_change() {
        let mut buffer = InputBuffer::new("X");
        assert!(buffer.clear());
        assert!(!buffer.clear());
        assert!(buffer.is_empty());
    }
}
