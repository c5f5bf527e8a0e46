//! TUI chat interface module
//!
//! - state.rs: view state on top of the core session
//! - input.rs: keyboard handling and slash commands
//! - ui.rs: rendering
//! - markdown.rs: assistant markdown to styled lines
//! - runner.rs: event loop coordinating the components

pub mod input;
pub mod markdown;
pub mod runner;
pub mod state;
pub mod ui;

pub use runner::{run_chat, ChatResult};
pub use state::{ChatState, SUGGESTIONS};
