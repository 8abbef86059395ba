//! Best-effort extraction of the structured reply from raw model text.
//!
//! The endpoint is asked for strict JSON, but replies still arrive wrapped
//! in markdown code fences or padded with prose. Parsing strips the fences,
//! isolates the outermost brace-delimited span, and only then hands the
//! text to serde.

use crate::decoder::DecoderResponse;
use crate::ports::DecodeError;

/// Parse raw reply text into a [`DecoderResponse`].
pub fn parse_decoder_response(raw: &str) -> Result<DecoderResponse, DecodeError> {
    let object = extract_json_object(raw)?;
    serde_json::from_str(object).map_err(|e| DecodeError::MalformedResponse(e.to_string()))
}

/// Isolate the outermost `{...}` span after stripping code-fence wrappers.
fn extract_json_object(raw: &str) -> Result<&str, DecodeError> {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text = text.trim();

    let first = text.find('{');
    let last = text.rfind('}');
    match (first, last) {
        (Some(first), Some(last)) if first < last => Ok(&text[first..=last]),
        // No braces at all means the model failed to output JSON.
        _ => Err(DecodeError::MalformedResponse(
            "no JSON object found in reply".to_string(),
        )),
    }
}
