//! Application configuration.

use std::path::PathBuf;

/// Runtime configuration for the decoder application.
///
/// Loaded from the environment by the infrastructure layer; held immutably
/// for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
    /// API key for the decode endpoint.
    pub gemini_api_key: String,
    /// Base URL of the decode endpoint. Overridable so tests can point the
    /// client at a local server.
    pub gemini_base_url: String,
    /// Lead webhook URL. `None` means "store locally only", not an error.
    pub lead_webhook_url: Option<String>,
    /// External checkout page.
    pub checkout_url: String,
    /// Directory holding the flag store file.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Default decode endpoint base.
    pub const DEFAULT_GEMINI_BASE_URL: &'static str =
        "https://generativelanguage.googleapis.com/v1beta";

    /// Model the persona prompt is tuned against.
    pub const GEMINI_MODEL: &'static str = "gemini-2.5-flash";
}
