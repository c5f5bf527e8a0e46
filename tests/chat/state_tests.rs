//! ChatState tests

use noor_cli::tui::chat::{ChatState, SUGGESTIONS};

#[test]
fn test_chat_state_new() {
    let state = ChatState::new();

    assert!(state.session.messages().is_empty());
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, 0);
    assert!(!state.dark_mode);
    assert!(!state.is_loading());
    assert!(state.status_message.is_none());
}

#[test]
fn test_insert_and_take_input() {
    let mut state = ChatState::new();

    state.insert_char('م');
    state.insert_char('ر');
    state.insert_char('ح');

    assert_eq!(state.input, "مرح");
    assert_eq!(state.cursor_pos, 3);

    let taken = state.take_input();
    assert_eq!(taken, "مرح");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_insert_mid_string_multibyte() {
    let mut state = ChatState::new();
    state.input = "سلام".to_string();
    state.cursor_pos = 2;

    state.insert_char('ـ');

    assert_eq!(state.input, "سلـام");
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_delete_char_multibyte() {
    let mut state = ChatState::new();
    state.input = "سلام".to_string();
    state.cursor_pos = 4;

    state.delete_char();

    assert_eq!(state.input, "سلا");
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_delete_char_at_start_is_noop() {
    let mut state = ChatState::new();
    state.input = "نص".to_string();
    state.cursor_pos = 0;

    state.delete_char();

    assert_eq!(state.input, "نص");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_delete_char_forward() {
    let mut state = ChatState::new();
    state.input = "نص".to_string();
    state.cursor_pos = 0;

    state.delete_char_forward();

    assert_eq!(state.input, "ص");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_cursor_movement_clamps() {
    let mut state = ChatState::new();
    state.input = "أبج".to_string();
    state.cursor_pos = 0;

    state.move_cursor_left();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 3);

    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 3);

    state.move_cursor_home();
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_toggle_theme() {
    let mut state = ChatState::new();
    assert!(!state.dark_mode);

    state.toggle_theme();
    assert!(state.dark_mode);
    assert!(state.status_message.is_some());

    state.toggle_theme();
    assert!(!state.dark_mode);
}

#[test]
fn test_clear_conversation() {
    let mut state = ChatState::new();
    state.session.begin_submit("سؤال").unwrap();
    state.scroll_offset = 12;

    state.clear_conversation();

    assert!(state.session.messages().is_empty());
    assert_eq!(state.scroll_offset, 0);
    assert!(state.status_message.is_some());
}

#[test]
fn test_apply_suggestion() {
    let mut state = ChatState::new();

    state.apply_suggestion(1);

    assert_eq!(state.input, SUGGESTIONS[1]);
    assert_eq!(state.cursor_pos, SUGGESTIONS[1].chars().count());
}

#[test]
fn test_apply_suggestion_out_of_range_is_noop() {
    let mut state = ChatState::new();

    state.apply_suggestion(9);

    assert!(state.input.is_empty());
}

#[test]
fn test_suggestions_active_only_on_empty_screen() {
    let mut state = ChatState::new();
    assert!(state.suggestions_active());

    state.insert_char('س');
    assert!(!state.suggestions_active());

    state.take_input();
    state.session.begin_submit("سؤال").unwrap();
    assert!(!state.suggestions_active());
}

#[test]
fn test_loading_tick_wraps() {
    let mut state = ChatState::new();
    state.session.begin_submit("سؤال").unwrap();
    state.loading_frame = 0;

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);

    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_tick_does_nothing_when_idle() {
    let mut state = ChatState::new();
    state.loading_frame = 2;

    state.tick_loading();

    assert_eq!(state.loading_frame, 2);
}
