//! Session store and submission state machine tests

use async_trait::async_trait;
use noor_core::{GatewayReply, MessageRole, Phase, ResponseGateway, Session};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway double that counts calls and returns a fixed reply
struct CountingGateway {
    calls: AtomicUsize,
    reply: GatewayReply,
}

impl CountingGateway {
    fn new(reply: GatewayReply) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseGateway for CountingGateway {
    async fn respond(&self, _prompt: &str) -> GatewayReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

#[test]
fn new_session_is_idle_and_empty() {
    let session = Session::new();
    assert!(session.messages().is_empty());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(!session.is_awaiting());
}

#[test]
fn begin_submit_appends_user_message_and_awaits() {
    let mut session = Session::new();

    let prompt = session.begin_submit("  ما هي أركان الإيمان؟  ");

    assert_eq!(prompt.as_deref(), Some("ما هي أركان الإيمان؟"));
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, MessageRole::User);
    assert_eq!(session.messages()[0].content, "ما هي أركان الإيمان؟");
    assert_eq!(session.phase(), Phase::Awaiting);
}

#[test]
fn blank_submission_is_a_noop() {
    let mut session = Session::new();

    assert!(session.begin_submit("").is_none());
    assert!(session.begin_submit("   \t\n").is_none());

    assert!(session.messages().is_empty());
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn submission_while_awaiting_is_rejected_not_queued() {
    let mut session = Session::new();
    session.begin_submit("سؤال أول").unwrap();

    assert!(session.begin_submit("سؤال ثانٍ").is_none());
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.phase(), Phase::Awaiting);
}

#[test]
fn complete_appends_assistant_message_and_returns_to_idle() {
    let mut session = Session::new();
    session.begin_submit("سؤال").unwrap();

    session.complete(GatewayReply::answer("جواب"));

    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].role, MessageRole::Assistant);
    assert_eq!(session.messages()[1].content, "جواب");
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn message_ids_are_unique() {
    let mut session = Session::new();
    session.begin_submit("أ").unwrap();
    session.complete(GatewayReply::answer("ب"));

    assert_ne!(session.messages()[0].id, session.messages()[1].id);
}

#[test]
fn clear_empties_messages_regardless_of_prior_state() {
    let mut session = Session::new();
    session.begin_submit("سؤال").unwrap();
    session.complete(GatewayReply::answer("جواب"));
    assert_eq!(session.messages().len(), 2);

    session.clear();
    assert!(session.messages().is_empty());

    // Idempotent
    session.clear();
    assert!(session.messages().is_empty());
}

#[test]
fn clear_does_not_touch_the_phase() {
    let mut session = Session::new();
    session.begin_submit("سؤال").unwrap();

    session.clear();

    assert_eq!(session.phase(), Phase::Awaiting);
    session.complete(GatewayReply::answer("جواب"));
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn submit_runs_exactly_one_round_trip() {
    let gateway = CountingGateway::new(GatewayReply::answer("جواب"));
    let mut session = Session::new();

    assert!(session.submit(&gateway, "سؤال").await);

    assert_eq!(gateway.calls(), 1);
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn rejected_submit_never_reaches_the_gateway() {
    let gateway = CountingGateway::new(GatewayReply::answer("جواب"));
    let mut session = Session::new();

    assert!(!session.submit(&gateway, "   ").await);

    assert_eq!(gateway.calls(), 0);
    assert!(session.messages().is_empty());
}
