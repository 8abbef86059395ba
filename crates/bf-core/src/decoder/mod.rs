//! Decoder response domain model.

mod parse;

pub use parse::parse_decoder_response;

/// Structured reply produced by one decode submission.
///
/// Field names mirror the JSON schema the remote model is instructed to
/// return. Immutable once produced; discarded on reset or replaced by the
/// next submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoderResponse {
    pub insight: String,
    pub practical_task: String,
    pub follow_up_prompt: String,
    pub philosophical_lens: String,
    /// Produced by the remote model, never computed locally. The correctness
    /// of crisis detection rests entirely on the persona prompt.
    pub is_crisis: bool,
}
