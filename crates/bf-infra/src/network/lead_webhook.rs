//! Lead webhook client.
//!
//! A single JSON POST of the intake record to a spreadsheet-backed webhook.
//! The remote response is intentionally never inspected (the hosted variant
//! used an opaque-response transport for the same reason), so success or
//! failure of the remote write is unobservable; failures are logged and
//! swallowed.

use async_trait::async_trait;
use tracing::{debug, warn};

use bf_core::ports::LeadCapturePort;
use bf_core::UserInfo;

pub struct WebhookLeadClient {
    http: reqwest::Client,
    url: Option<String>,
}

impl WebhookLeadClient {
    /// `None` means no webhook is configured: intake records stay in the
    /// local backup only. Not an error.
    pub fn new(url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl LeadCapturePort for WebhookLeadClient {
    async fn submit(&self, info: &UserInfo) {
        let Some(url) = &self.url else {
            debug!("lead webhook not configured, record kept locally only");
            return;
        };

        match self.http.post(url).json(info).send().await {
            Ok(_) => debug!("lead transmission sent"),
            Err(e) => warn!(error = %e, "lead transmission failed, continuing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn posts_intake_record_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/exec")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::JsonString(
                r#"{"name":"Ada","email":"ada@example.com","isPremium":false}"#.to_string(),
            ))
            .with_status(200)
            .create_async()
            .await;

        let client = WebhookLeadClient::new(Some(format!("{}/exec", server.url())));
        client.submit(&UserInfo::new("Ada", "ada@example.com")).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn remote_failure_is_swallowed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/exec")
            .with_status(500)
            .create_async()
            .await;

        // A 5xx is still "sent" from the caller's perspective; nothing to
        // assert beyond not panicking and returning.
        let client = WebhookLeadClient::new(Some(format!("{}/exec", server.url())));
        client.submit(&UserInfo::new("Ada", "ada@example.com")).await;
    }

    #[tokio::test]
    async fn unconfigured_webhook_issues_no_request() {
        let client = WebhookLeadClient::new(None);
        client.submit(&UserInfo::new("Ada", "ada@example.com")).await;
    }
}
