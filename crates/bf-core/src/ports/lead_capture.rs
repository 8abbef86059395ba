//! Lead capture port - best-effort outbound push of intake data.

use async_trait::async_trait;

use crate::user::UserInfo;

/// Lead capture port.
///
/// Deliberately has no failure channel: transmission is advisory, never
/// essential to the flow. Implementations log failures internally and
/// return normally, and never read the remote response.
#[async_trait]
pub trait LeadCapturePort: Send + Sync {
    /// Submit the user's intake record. Fire-and-forget.
    async fn submit(&self, info: &UserInfo);
}
