use std::sync::Arc;

use tracing::debug;

use bf_core::ports::{KeyValueStorePort, LeadCapturePort};
use bf_core::trial;
use bf_core::UserInfo;

/// Use case for capturing the intake record.
///
/// Always writes the local backup copy first, then attempts the outbound
/// push. The push has no failure channel; only the local write can fail.
pub struct CaptureLead {
    store: Arc<dyn KeyValueStorePort>,
    lead: Arc<dyn LeadCapturePort>,
}

impl CaptureLead {
    pub fn new(store: Arc<dyn KeyValueStorePort>, lead: Arc<dyn LeadCapturePort>) -> Self {
        Self { store, lead }
    }

    pub async fn execute(&self, info: &UserInfo) -> anyhow::Result<()> {
        let backup = serde_json::to_string(info)?;
        self.store.set(trial::USER_BACKUP_KEY, &backup).await?;

        debug!(email = %info.email, "lead backup stored, submitting");
        self.lead.submit(info).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockStore {
        values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStorePort for MockStore {
        async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Lead port that counts calls; stands in for a webhook that may be
    /// failing silently, which must be indistinguishable to the caller.
    struct CountingLead {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LeadCapturePort for CountingLead {
        async fn submit(&self, _info: &UserInfo) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn backup_is_written_before_submission() {
        let store = Arc::new(MockStore {
            values: Mutex::new(HashMap::new()),
        });
        let lead = Arc::new(CountingLead {
            calls: AtomicUsize::new(0),
        });
        let capture = CaptureLead::new(store.clone(), lead.clone());

        let info = UserInfo::new("Ada", "ada@example.com");
        capture.execute(&info).await.unwrap();

        let stored = store
            .values
            .lock()
            .unwrap()
            .get(trial::USER_BACKUP_KEY)
            .cloned()
            .unwrap();
        let restored: UserInfo = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, info);
        assert_eq!(lead.calls.load(Ordering::SeqCst), 1);
    }
}
