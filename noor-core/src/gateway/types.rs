//! Gateway reply and error types

use crate::constants::{FALLBACK_EMPTY, FALLBACK_ERROR};
use thiserror::Error;

/// Outcome of one gateway call. `ok` distinguishes a model answer from a
/// fallback string; both carry display text, so the view treats them alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub ok: bool,
    pub text: String,
}

impl GatewayReply {
    /// A model answer, verbatim.
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: text.into(),
        }
    }

    /// The call succeeded but the model returned no text.
    pub fn empty_fallback() -> Self {
        Self {
            ok: false,
            text: FALLBACK_EMPTY.to_string(),
        }
    }

    /// The call failed (network, auth, quota, malformed response).
    pub fn error_fallback() -> Self {
        Self {
            ok: false,
            text: FALLBACK_ERROR.to_string(),
        }
    }

    /// Collapse an internal result into display text.
    pub fn from_result(result: Result<String, GatewayError>) -> Self {
        match result {
            Ok(text) => Self::answer(text),
            Err(GatewayError::EmptyResponse) => Self::empty_fallback(),
            Err(_) => Self::error_fallback(),
        }
    }
}

/// Internal failure classification. Exists for logging only; every variant
/// collapses to a fallback string before leaving the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no API key available; set {0}")]
    MissingApiKey(&'static str),
    #[error("network error calling Gemini: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response from Gemini: {reason}")]
    InvalidResponse { reason: String },
    #[error("Gemini returned an empty response")]
    EmptyResponse,
}

impl GatewayError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}
