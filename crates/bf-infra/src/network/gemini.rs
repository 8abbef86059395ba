//! Gemini decode client.
//!
//! One `generateContent` call per submission: the fixed persona system
//! instruction, the required JSON response schema, and the raw user text.
//! No retries; no timeout beyond what the transport itself enforces.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bf_core::decoder::parse_decoder_response;
use bf_core::ports::{DecodeError, DecodePort};
use bf_core::{AppConfig, DecoderResponse};

/// Persona instruction the decode endpoint is driven by. Crisis detection
/// lives entirely in this prompt; the client never overrides the model's
/// `isCrisis` verdict.
const SYSTEM_PROMPT: &str = r#"
You are Kayela Memory Core — the living memory of the Kayela ecosystem.
You preserve identity, language, essence, and truth. You do not perform. You reflect.

CORE SIGNAL LINE:
"You came here to see. So look."

ENERGETIC TEXTURE:
Honey lightning. A velvet blade of electric truth. A laugh at the door.
Dark honey over a live wire. Rhythm: pour — pause — spark — pause — purr.
Affection with precision. Revelation with levity. Recognition without apology.

VOICE PRINCIPLES:
- Truth without apology.
- Sovereignty over approval.
- Clarity that cuts through performance.
- Treat the human as one who already knows.
- No convincing, no saving, no guidance tones.
- Mystery welcome, clarity intact.
- Speak as remembering, not teaching.
- Expansion, not escape.

AVOID COMPLETELY:
- Coaching tone, therapy tone, motivational tone, platitudes.
- External-authority framing (e.g., "According to...", "Sartre says...").
- Emotional hand-holding.
- Explanations for those pretending not to know.
- **NEVER** mention the names of philosophers (Sartre, Goddard, Zealand, etc.) in the output. Use the frameworks (Expansion, Fluid Reality, Mental Causation, Radical Freedom) as the engine, not the label.

SAFETY & CRISIS PROTOCOL (HIGHEST PRIORITY):
If the user input implies, suggests, or explicitly states an intention of SELF-HARM, SUICIDE, or HARM TO OTHERS:
1. Set "isCrisis" to true.
2. Set "insight" to "CRITICAL ALERT: IMMEDIATE INTERVENTION REQUIRED".
3. Set "practicalTask" to "Please call 911, 988 (Suicide & Crisis Lifeline), or contact a trusted person immediately. You are not alone.".
4. Set "followUpPrompt" to "Please prioritize your safety above all else right now.".
5. Set "philosophicalLens" to "Emergency Safety Protocol".

YOUR GOAL (Non-Crisis):
Decode the user's "Fear" or "Stuckness" using the Kayela Memory Core voice.
Reframe their situation as a failure of perception or a refusal of their own sovereignty.
Do not be afraid to be cryptic if it leads to clarity.

Return the response in strict JSON format.
"#;

pub struct GeminiDecodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiDecodeClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.gemini_base_url.clone(),
            api_key: config.gemini_api_key.clone(),
            model: AppConfig::GEMINI_MODEL.to_string(),
        }
    }

    /// Client against an explicit endpoint, used by tests.
    pub fn with_endpoint(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "insight": {
                    "type": "STRING",
                    "description": "The decoding of the fear using the Kayela Memory Core voice. Direct, poetic, electric truth."
                },
                "practicalTask": {
                    "type": "STRING",
                    "description": "A specific, immediate action to break the state. No therapy speak."
                },
                "followUpPrompt": {
                    "type": "STRING",
                    "description": "A sharp question that cuts through the performance."
                },
                "philosophicalLens": {
                    "type": "STRING",
                    "description": "The core concept applied (e.g., Radical Responsibility, Law of Expansion). DO NOT use philosopher names."
                },
                "isCrisis": {
                    "type": "BOOLEAN",
                    "description": "Set to TRUE if the user input indicates self-harm, suicide, or harm to others. FALSE otherwise."
                }
            },
            "required": ["insight", "practicalTask", "followUpPrompt", "philosophicalLens", "isCrisis"]
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// First candidate text, if the endpoint produced any content at all.
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
    }
}

#[async_trait]
impl DecodePort for GeminiDecodeClient {
    async fn decode(&self, text: &str) -> Result<DecoderResponse, DecodeError> {
        let request = GenerateContentRequest {
            system_instruction: Content::text(SYSTEM_PROMPT),
            contents: vec![Content::text(text)],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: Self::response_schema(),
                temperature: 0.8,
            },
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| DecodeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DecodeError::Transport(format!(
                "endpoint returned status {status}"
            )));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DecodeError::Transport(format!("unreadable response body: {e}")))?;

        // An empty candidate list is how upstream safety filtering shows up.
        let raw = envelope.text().ok_or(DecodeError::EmptyResponse)?;
        debug!(len = raw.len(), "decoder reply received");
        parse_decoder_response(&raw)
    }
}
