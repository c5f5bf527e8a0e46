//! Chat runner - main event loop coordinator

use super::input::{handle_command, handle_input, InputAction};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::tui::terminal::{init_terminal, restore_terminal, Tui};
use crossterm::event;
use noor_core::{GatewayReply, ResponseGateway};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Result of a chat session
pub enum ChatResult {
    Exit,
}

/// Run the TUI chat interface
pub async fn run_chat<G>(
    gateway: Arc<G>,
    model: &str,
    dark_mode: bool,
) -> Result<ChatResult, Box<dyn Error>>
where
    G: ResponseGateway + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();
    state.dark_mode = dark_mode;

    let result = run_chat_loop(&mut terminal, &mut state, gateway, model).await;

    restore_terminal()?;
    result
}

/// Internal chat loop. Draw, drain completed responses, poll input. At most
/// one gateway call is in flight; the session phase gates new submissions.
async fn run_chat_loop<G>(
    terminal: &mut Tui,
    state: &mut ChatState,
    gateway: Arc<G>,
    model: &str,
) -> Result<ChatResult, Box<dyn Error>>
where
    G: ResponseGateway + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<GatewayReply>(1);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, model);
        })?;

        while let Ok(reply) = response_rx.try_recv() {
            state.session.complete(reply);
            state.scroll_to_bottom();
        }

        let timeout = if state.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_input(state, event) {
                InputAction::Exit => {
                    return Ok(ChatResult::Exit);
                }

                InputAction::Submit => {
                    let text = state.take_input();
                    match state.session.begin_submit(&text) {
                        Some(prompt) => {
                            state.status_message = None;
                            state.scroll_to_bottom();
                            let gateway = gateway.clone();
                            let tx = response_tx.clone();

                            // The call runs to completion; there is no cancel
                            // or timeout path, so a hung call keeps the view
                            // waiting.
                            tokio::spawn(async move {
                                let reply = gateway.respond(&prompt).await;
                                let _ = tx.send(reply).await;
                            });
                        }
                        None => {
                            // Rejected submission keeps the typed text
                            state.input = text;
                            state.move_cursor_end();
                        }
                    }
                }

                InputAction::Command(cmd) => {
                    if handle_command(state, &cmd) {
                        return Ok(ChatResult::Exit);
                    }
                }

                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(),
                InputAction::ScrollTop => state.scroll_offset = 0,
                InputAction::ScrollBottom => state.scroll_to_bottom(),

                InputAction::None => {}
            }
        } else if state.is_loading() {
            state.tick_loading();
        }
    }
}
