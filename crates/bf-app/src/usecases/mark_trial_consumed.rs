use std::sync::Arc;

use bf_core::ports::KeyValueStorePort;
use bf_core::trial;

/// Use case for marking the free trial consumed.
///
/// Sets the device-level flag and, when an email is present, the per-email
/// flag. Idempotent; flags are monotonic and never cleared by the
/// application.
pub struct MarkTrialConsumed {
    store: Arc<dyn KeyValueStorePort>,
}

impl MarkTrialConsumed {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, email: Option<&str>) -> anyhow::Result<()> {
        self.store
            .set(trial::DEVICE_USED_KEY, trial::FLAG_SET)
            .await?;
        if let Some(key) = email.and_then(trial::email_usage_key) {
            self.store.set(&key, trial::FLAG_SET).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::CheckTrialGate;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                values: Mutex::new(HashMap::new()),
            }
        }
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

    #[tokio::test]
    async fn marks_device_and_email_flags() {
        let store = Arc::new(MockStore::new());
        let mark = MarkTrialConsumed::new(store.clone());
        let gate = CheckTrialGate::new(store);

        mark.execute(Some("ada@example.com")).await.unwrap();

        // Both the device-only and the email-qualified reads now report
        // the trial as consumed.
        assert!(gate.execute(None).await.unwrap().consumed);
        assert!(gate
            .execute(Some("ada@example.com"))
            .await
            .unwrap()
            .consumed);
    }

    #[tokio::test]
    async fn marking_without_email_sets_only_device_flag() {
        let store = Arc::new(MockStore::new());
        MarkTrialConsumed::new(store.clone())
            .execute(None)
            .await
            .unwrap();

        let values = store.values.lock().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(
            values.get(trial::DEVICE_USED_KEY).map(String::as_str),
            Some(trial::FLAG_SET)
        );
    }

    #[tokio::test]
    async fn marking_twice_is_idempotent() {
        let store = Arc::new(MockStore::new());
        let mark = MarkTrialConsumed::new(store.clone());

        mark.execute(Some("ada@example.com")).await.unwrap();
        mark.execute(Some("ada@example.com")).await.unwrap();

        assert_eq!(store.values.lock().unwrap().len(), 2);
    }
}
