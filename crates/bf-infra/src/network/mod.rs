//! Network adapters.

mod gemini;
mod lead_webhook;

pub use gemini::GeminiDecodeClient;
pub use lead_webhook::WebhookLeadClient;
