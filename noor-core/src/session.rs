//! Conversation session - message store and submission state machine

use crate::gateway::{GatewayReply, ResponseGateway};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single exchanged message
#[derive(Debug, Clone)]
pub struct Message {
    /// Unique message id
    pub id: String,
    pub role: MessageRole,
    /// Markdown for assistant messages, plain text for user messages
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Submission phase. `begin_submit` is the only Idle → Awaiting transition
/// and `complete` the only Awaiting → Idle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Awaiting,
}

/// In-memory conversation state. Messages are append-only and never mutated;
/// the list is only ever cleared wholesale.
#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<Message>,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.phase == Phase::Awaiting
    }

    /// Accept a user submission. Returns the trimmed prompt to send, or
    /// `None` when the text is blank or a response is already awaited —
    /// a rejected submission leaves the session untouched.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if self.phase == Phase::Awaiting {
            return None;
        }
        let prompt = text.trim();
        if prompt.is_empty() {
            return None;
        }
        self.messages.push(Message::user(prompt));
        self.phase = Phase::Awaiting;
        Some(prompt.to_string())
    }

    /// Record the gateway reply for the outstanding submission. The reply is
    /// always plain text (the gateway never yields an error), so this is the
    /// only way an assistant message enters the session.
    pub fn complete(&mut self, reply: GatewayReply) {
        self.messages.push(Message::assistant(reply.text));
        self.phase = Phase::Idle;
    }

    /// Drop all messages. Idempotent; does not touch the phase.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// One full round trip: append the user message, await the gateway,
    /// append the assistant message. No-op when the submission is rejected;
    /// returns whether the exchange happened.
    pub async fn submit<G: ResponseGateway + ?Sized>(&mut self, gateway: &G, text: &str) -> bool {
        let Some(prompt) = self.begin_submit(text) else {
            return false;
        };
        let reply = gateway.respond(&prompt).await;
        self.complete(reply);
        true
    }
}
