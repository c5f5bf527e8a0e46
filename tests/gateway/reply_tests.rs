//! Gateway reply conversion tests
//!
//! The gateway's contract is that every failure mode becomes a fixed display
//! string. These tests pin the exact strings, not just non-emptiness.

use noor_core::constants::{FALLBACK_EMPTY, FALLBACK_ERROR};
use noor_core::gateway::{GatewayError, GatewayReply};

#[test]
fn answer_carries_model_text_verbatim() {
    let reply = GatewayReply::answer("الإيمان له ستة أركان...");
    assert!(reply.ok);
    assert_eq!(reply.text, "الإيمان له ستة أركان...");
}

#[test]
fn empty_response_maps_to_exact_empty_fallback() {
    let reply = GatewayReply::from_result(Err(GatewayError::EmptyResponse));
    assert!(!reply.ok);
    assert_eq!(reply.text, FALLBACK_EMPTY);
    assert_eq!(reply.text, "عذراً، لم أتمكن من العثور على إجابة حالياً.");
}

#[test]
fn missing_api_key_maps_to_exact_error_fallback() {
    let reply = GatewayReply::from_result(Err(GatewayError::MissingApiKey("GEMINI_API_KEY")));
    assert!(!reply.ok);
    assert_eq!(reply.text, FALLBACK_ERROR);
    assert_eq!(
        reply.text,
        "حدث خطأ أثناء الاتصال بالخادم. يرجى المحاولة مرة أخرى لاحقاً."
    );
}

#[test]
fn malformed_response_maps_to_error_fallback() {
    let reply = GatewayReply::from_result(Err(GatewayError::invalid_response("missing text")));
    assert!(!reply.ok);
    assert_eq!(reply.text, FALLBACK_ERROR);
}

#[test]
fn ok_result_passes_through_unchanged() {
    let reply = GatewayReply::from_result(Ok("نص الجواب".to_string()));
    assert_eq!(reply, GatewayReply::answer("نص الجواب"));
}

#[test]
fn fallback_constructors_match_from_result() {
    assert_eq!(
        GatewayReply::empty_fallback(),
        GatewayReply::from_result(Err(GatewayError::EmptyResponse))
    );
    assert_eq!(
        GatewayReply::error_fallback(),
        GatewayReply::from_result(Err(GatewayError::invalid_response("x")))
    );
}
