use std::sync::Arc;

use bf_core::ports::KeyValueStorePort;
use bf_core::trial;

/// Snapshot of the trial gate for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateStatus {
    /// Device-level flag, or the email-level flag when an email was given.
    pub consumed: bool,
    /// Permanent premium unlock. Overrides everything else.
    pub premium: bool,
}

impl GateStatus {
    /// True when a submission must route to the paywall instead of the
    /// decode client.
    pub fn blocks(&self) -> bool {
        self.consumed && !self.premium
    }
}

/// Use case for reading the trial gate.
///
/// Pure read, no side effects: device flag OR (when an email is supplied)
/// the per-email flag, plus the premium override.
pub struct CheckTrialGate {
    store: Arc<dyn KeyValueStorePort>,
}

impl CheckTrialGate {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Read the gate for the given identity.
    pub async fn execute(&self, email: Option<&str>) -> anyhow::Result<GateStatus> {
        let device_used = self.flag_set(trial::DEVICE_USED_KEY).await?;
        let email_used = match email.and_then(trial::email_usage_key) {
            Some(key) => self.flag_set(&key).await?,
            None => false,
        };
        let premium = self.flag_set(trial::PREMIUM_KEY).await?;

        Ok(GateStatus {
            consumed: device_used || email_used,
            premium,
        })
    }

    /// Read only the premium flag.
    pub async fn is_premium(&self) -> anyhow::Result<bool> {
        self.flag_set(trial::PREMIUM_KEY).await
    }

    async fn flag_set(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.store.get(key).await?.as_deref() == Some(trial::FLAG_SET))
    }
}
