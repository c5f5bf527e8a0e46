//! End-to-end conversation scenarios with a mocked gateway

use async_trait::async_trait;
use noor_core::constants::FALLBACK_ERROR;
use noor_core::gateway::GatewayError;
use noor_core::{GatewayReply, MessageRole, ResponseGateway, Session};

/// Gateway double that answers every prompt with a fixed text
struct AnsweringGateway(&'static str);

#[async_trait]
impl ResponseGateway for AnsweringGateway {
    async fn respond(&self, _prompt: &str) -> GatewayReply {
        GatewayReply::answer(self.0)
    }
}

/// Gateway double whose transport always fails. The failure is converted to
/// a reply inside the gateway, exactly as the real implementation does.
struct FailingGateway;

#[async_trait]
impl ResponseGateway for FailingGateway {
    async fn respond(&self, _prompt: &str) -> GatewayReply {
        GatewayReply::from_result(Err(GatewayError::invalid_response("simulated failure")))
    }
}

#[tokio::test]
async fn successful_exchange_produces_user_then_assistant() {
    let gateway = AnsweringGateway("الإيمان له ستة أركان...");
    let mut session = Session::new();

    assert!(session.submit(&gateway, "ما هي أركان الإيمان؟").await);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "ما هي أركان الإيمان؟");
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[1].content, "الإيمان له ستة أركان...");
    assert!(!session.is_awaiting());
}

#[tokio::test]
async fn failed_exchange_shows_error_fallback_as_assistant_message() {
    let gateway = FailingGateway;
    let mut session = Session::new();

    assert!(session.submit(&gateway, "ما هي أركان الإيمان؟").await);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[1].content, FALLBACK_ERROR);
    assert!(!session.is_awaiting());
}

#[tokio::test]
async fn consecutive_exchanges_accumulate_in_order() {
    let gateway = AnsweringGateway("جواب");
    let mut session = Session::new();

    session.submit(&gateway, "سؤال أول").await;
    session.submit(&gateway, "سؤال ثانٍ").await;

    let messages = session.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].content, "سؤال أول");
    assert_eq!(messages[2].content, "سؤال ثانٍ");
    assert!(messages
        .iter()
        .zip([
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant
        ])
        .all(|(m, role)| m.role == role));
}
