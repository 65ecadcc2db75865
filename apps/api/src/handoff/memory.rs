use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

use super::{HandoffError, HandoffKey, HandoffStore, DEFAULT_HANDOFF_TTL_SECS};

struct Entry {
    stored_at: Instant,
    value: String,
}

/// Process-local store. Entries live until taken or until `ttl` has passed; expired
/// entries are evicted on every `put` and never returned by `take`.
pub struct MemoryHandoffStore {
    entries: Mutex<HashMap<(Uuid, HandoffKey), Entry>>,
    ttl: Duration,
}

impl MemoryHandoffStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    fn is_live(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.stored_at) < self.ttl
    }
}

impl Default for MemoryHandoffStore {
    fn default() -> Self {
        Self::new(DEFAULT_HANDOFF_TTL_SECS)
    }
}

#[async_trait]
impl HandoffStore for MemoryHandoffStore {
    async fn put(&self, session: Uuid, key: HandoffKey, value: String) -> Result<(), HandoffError> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| self.is_live(entry, now));
        let evicted = before - entries.len();
        if evicted > 0 {
            debug!("Evicted {evicted} expired hand-off entries");
        }
        entries.insert(
            (session, key),
            Entry {
                stored_at: now,
                value,
            },
        );
        Ok(())
    }

    async fn take(&self, session: Uuid, key: HandoffKey) -> Result<Option<String>, HandoffError> {
        let now = Instant::now();
        let entry = self.entries.lock().await.remove(&(session, key));
        Ok(entry
            .filter(|entry| self.is_live(entry, now))
            .map(|entry| entry.value))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_take_consumes_entry() {
        let store = MemoryHandoffStore::default();
        let session = Uuid::new_v4();
        store
            .put(session, HandoffKey::TempFormData, "{}".to_string())
            .await
            .unwrap();

        let first = store.take(session, HandoffKey::TempFormData).await.unwrap();
        let second = store.take(session, HandoffKey::TempFormData).await.unwrap();
        assert_eq!(first.as_deref(), Some("{}"));
        assert_eq!(second, None);
    }

    #[tokio::test]
    async fn test_sessions_and_keys_are_isolated() {
        let store = MemoryHandoffStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store
            .put(a, HandoffKey::CampaignData, "a".to_string())
            .await
            .unwrap();

        assert_eq!(store.take(b, HandoffKey::CampaignData).await.unwrap(), None);
        assert_eq!(store.take(a, HandoffKey::PreviewAnalytics).await.unwrap(), None);
        assert_eq!(
            store.take(a, HandoffKey::CampaignData).await.unwrap().as_deref(),
            Some("a")
        );
    }

    #[tokio::test]
    async fn test_put_replaces_previous_value() {
        let store = MemoryHandoffStore::default();
        let session = Uuid::new_v4();
        for value in ["old", "new"] {
            store
                .put(session, HandoffKey::CampaignData, value.to_string())
                .await
                .unwrap();
        }
        assert_eq!(
            store.take(session, HandoffKey::CampaignData).await.unwrap().as_deref(),
            Some("new")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_not_returned() {
        let store = MemoryHandoffStore::new(60);
        let session = Uuid::new_v4();
        store
            .put(session, HandoffKey::CampaignData, "late".to_string())
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(store.take(session, HandoffKey::CampaignData).await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_evicts_expired_entries() {
        let store = MemoryHandoffStore::new(60);
        let (stale, fresh) = (Uuid::new_v4(), Uuid::new_v4());
        for key in [HandoffKey::TempFormData, HandoffKey::PreviewAnalytics] {
            store.put(stale, key, "{}".to_string()).await.unwrap();
        }

        tokio::time::advance(Duration::from_secs(30)).await;
        store
            .put(fresh, HandoffKey::CampaignData, "{}".to_string())
            .await
            .unwrap();
        assert_eq!(store.entries.lock().await.len(), 3);

        tokio::time::advance(Duration::from_secs(31)).await;
        store
            .put(fresh, HandoffKey::TempFormData, "{}".to_string())
            .await
            .unwrap();
        let entries = store.entries.lock().await;
        assert_eq!(entries.len(), 2, "only the stale session's entries expired");
        assert!(entries.keys().all(|(session, _)| *session == fresh));
    }
}
