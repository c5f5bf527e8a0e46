//! Ratatui interface for the chat client

pub mod chat;
pub mod terminal;
pub mod theme;
