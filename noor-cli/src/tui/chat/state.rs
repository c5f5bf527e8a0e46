//! Chat view state
//!
//! Wraps the core [`Session`] with everything the renderer needs: the input
//! buffer, cursor, scroll position, theme flag, and spinner frame. All of it
//! is transient; nothing survives process exit.

use noor_core::Session;

/// Suggestion prompts shown on the empty-state screen
pub const SUGGESTIONS: [&str; 4] = [
    "حديث عن الصدق والأمانة",
    "ما هي أركان الإيمان؟",
    "آية تدعو للمحبة والتسامح",
    "كيف أطور من نفسي دينياً؟",
];

pub struct ChatState {
    /// Conversation store and submission state machine
    pub session: Session,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor_pos: usize,
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Whether the dark palette is active
    pub dark_mode: bool,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Transient status text (command feedback)
    pub status_message: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            dark_mode: false,
            loading_frame: 0,
            status_message: None,
        }
    }

    /// Whether a response is currently awaited
    pub fn is_loading(&self) -> bool {
        self.session.is_awaiting()
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.input.insert(byte_pos, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = self.byte_pos();
            self.input.remove(byte_pos);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_count() {
            let byte_pos = self.byte_pos();
            self.input.remove(byte_pos);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_count();
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Pin the viewport to the newest entry. The renderer clamps this to
    /// the real maximum based on content height.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    /// Flip the theme. Pure state change; the renderer picks the palette.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.status_message = Some(
            if self.dark_mode {
                "النمط الداكن"
            } else {
                "النمط الفاتح"
            }
            .to_string(),
        );
    }

    /// Wipe the conversation. The message list is cleared wholesale, never
    /// partially.
    pub fn clear_conversation(&mut self) {
        self.session.clear();
        self.scroll_offset = 0;
        self.status_message = Some("تم مسح المحادثة".to_string());
    }

    /// Copy a suggestion prompt into the input field
    pub fn apply_suggestion(&mut self, index: usize) {
        if let Some(text) = SUGGESTIONS.get(index) {
            self.input = (*text).to_string();
            self.cursor_pos = self.char_count();
        }
    }

    /// Whether the suggestion shortcuts are active (empty screen, empty input)
    pub fn suggestions_active(&self) -> bool {
        self.session.messages().is_empty() && self.input.is_empty() && !self.is_loading()
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.is_loading() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/')
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_pos(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
