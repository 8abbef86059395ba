//! Decode port - abstracts the remote LLM endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::decoder::DecoderResponse;

/// Failures a decode attempt can surface.
///
/// All three are collapsed into one generic user-facing message at the
/// submission boundary; no retry is attempted.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Network or endpoint failure before any content arrived.
    #[error("decode transport failed: {0}")]
    Transport(String),

    /// The endpoint answered but returned no content, e.g. upstream
    /// safety filtering produced an empty candidate.
    #[error("the signal was blocked: endpoint returned no content")]
    EmptyResponse,

    /// Content arrived but could not be parsed as the expected shape,
    /// even after code-fence stripping and brace isolation.
    #[error("malformed decoder reply: {0}")]
    MalformedResponse(String),
}

/// Decode port.
///
/// One outbound request per user submission. Crisis detection in the reply
/// is produced by the remote model under the persona prompt's instructions;
/// implementations must not override or second-guess it.
#[async_trait]
pub trait DecodePort: Send + Sync {
    /// Decode one free-text fear input into a structured response.
    async fn decode(&self, text: &str) -> Result<DecoderResponse, DecodeError>;
}
