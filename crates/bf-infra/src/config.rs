//! Environment-based configuration loading.

use std::path::PathBuf;

use anyhow::{Context, Result};

use bf_core::AppConfig;

/// Default external checkout page.
pub const DEFAULT_CHECKOUT_URL: &str = "https://buy.stripe.com/3cI8wP0fv4WG6dfadG8Ra02";

/// Load configuration from the environment (a `.env` file is honored when
/// present).
///
/// `GEMINI_API_KEY` is required. `LEAD_WEBHOOK_URL` is optional: when absent
/// the intake record is kept in the local backup only.
pub fn load_from_env() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    build(|key| std::env::var(key).ok())
}

fn build(lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
    let gemini_api_key = lookup("GEMINI_API_KEY")
        .filter(|v| !v.trim().is_empty())
        .context("GEMINI_API_KEY is not set")?;
    let gemini_base_url = lookup("GEMINI_BASE_URL")
        .unwrap_or_else(|| AppConfig::DEFAULT_GEMINI_BASE_URL.to_string());
    let lead_webhook_url = lookup("LEAD_WEBHOOK_URL").filter(|v| !v.trim().is_empty());
    let checkout_url =
        lookup("CHECKOUT_URL").unwrap_or_else(|| DEFAULT_CHECKOUT_URL.to_string());
    let data_dir = match lookup("BREAKFEAR_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .context("no data directory available on this platform")?
            .join("breakfear"),
    };

    Ok(AppConfig {
        gemini_api_key,
        gemini_base_url,
        lead_webhook_url,
        checkout_url,
        data_dir,
    })
}
