use std::sync::Arc;

use bf_core::ports::KeyValueStorePort;
use bf_core::trial;

/// Use case for persisting the premium unlock.
///
/// Set once a successful payment return is observed; permanent, never unset
/// by the application, and the terminal override for all gating decisions.
pub struct UnlockPremium {
    store: Arc<dyn KeyValueStorePort>,
}

impl UnlockPremium {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.store.set(trial::PREMIUM_KEY, trial::FLAG_SET).await
    }
}
