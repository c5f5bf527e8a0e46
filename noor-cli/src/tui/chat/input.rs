//! Chat input handling

use super::state::ChatState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Execute a command
    Command(String),
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle keyboard input and update state. While a response is awaited the
/// input field is frozen; only exit remains available.
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    if state.is_loading() {
        if let Event::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
                return InputAction::Exit;
            }
        }
        return InputAction::None;
    }

    match event {
        Event::Key(key) => handle_key(state, key),
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => return InputAction::Exit,
            KeyCode::Char('c') => {
                state.input.clear();
                state.cursor_pos = 0;
                return InputAction::None;
            }
            KeyCode::Char('t') => return InputAction::Command("/theme".to_string()),
            KeyCode::Char('l') => return InputAction::Command("/clear".to_string()),
            KeyCode::Char('u') => return InputAction::ScrollTop,
            KeyCode::Char('d') => return InputAction::ScrollBottom,
            _ => return InputAction::None,
        }
    }

    match key.code {
        KeyCode::Enter => {
            if state.input.is_empty() {
                return InputAction::None;
            }
            if state.is_command() {
                let cmd = state.take_input();
                return InputAction::Command(cmd);
            }
            InputAction::Submit
        }
        KeyCode::Esc => {
            state.input.clear();
            state.cursor_pos = 0;
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char(c) => {
            // Digits pick a suggestion on the empty-state screen
            if state.suggestions_active() {
                if let Some(index) = c.to_digit(10) {
                    let index = index as usize;
                    if (1..=4).contains(&index) {
                        state.apply_suggestion(index - 1);
                        return InputAction::None;
                    }
                }
            }
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Parse a slash command
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches('/');
    let name = cmd.split_whitespace().next().unwrap_or("");

    match name.to_ascii_lowercase().as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "clear" | "new" => CommandResult::Clear,
        "theme" => CommandResult::ToggleTheme,
        "exit" | "quit" | "bye" => CommandResult::Exit,
        other => CommandResult::Unknown(other.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    Clear,
    ToggleTheme,
    Exit,
    Unknown(String),
}

/// Apply a command to the view state. Command feedback goes to the status
/// line, never into the conversation. Returns `true` when the chat should
/// exit.
pub fn handle_command(state: &mut ChatState, input: &str) -> bool {
    match parse_command(input) {
        CommandResult::None => false,
        CommandResult::ShowHelp => {
            state.status_message = Some(
                "/clear مسح المحادثة │ /theme تبديل النمط │ /exit خروج".to_string(),
            );
            false
        }
        CommandResult::Clear => {
            state.clear_conversation();
            false
        }
        CommandResult::ToggleTheme => {
            state.toggle_theme();
            false
        }
        CommandResult::Exit => true,
        CommandResult::Unknown(cmd) => {
            state.status_message = Some(format!("أمر غير معروف: /{cmd} — جرّب /help"));
            false
        }
    }
}
