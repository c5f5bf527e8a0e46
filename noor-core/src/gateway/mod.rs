//! Response gateway - the single outbound call to the hosted model
//!
//! The gateway owns the only network interaction in the system and converts
//! every failure mode into a plain display string. Callers never see an
//! error type; they see a [`GatewayReply`].

mod gemini;
mod types;

pub use gemini::GeminiGateway;
pub use types::{GatewayError, GatewayReply};

use async_trait::async_trait;

/// Seam between the view and the hosted model. Implementations must uphold
/// the never-fails contract: all failures become a fallback reply.
#[async_trait]
pub trait ResponseGateway: Send + Sync {
    /// Translate one prompt into one response string.
    async fn respond(&self, prompt: &str) -> GatewayReply;
}
