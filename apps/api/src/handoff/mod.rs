//! Hand-off Store: transient, consume-once payloads passed from the form endpoints to
//! the results endpoint.
//!
//! Entries are addressed by a session id and a fixed key. The writer puts a raw JSON
//! string; the reader takes it, which deletes it. Nothing here validates payloads, so a
//! corrupt entry is returned as-is and the reader decides what to do with it.
//!
//! `AppState` holds an `Arc<dyn HandoffStore>`: Redis when `REDIS_URL` is set,
//! otherwise a process-local map.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryHandoffStore;
pub use redis_store::RedisHandoffStore;

/// Seconds an untaken entry is kept when `HANDOFF_TTL_SECS` is not set.
pub const DEFAULT_HANDOFF_TTL_SECS: u64 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandoffKey {
    /// `{formData}`, `{routePlan, ...}` or a structured record.
    CampaignData,
    /// Prediction payload produced by the preview endpoint.
    PreviewAnalytics,
    /// The form that produced `PreviewAnalytics`.
    TempFormData,
}

impl HandoffKey {
    pub fn as_str(self) -> &'static str {
        match self {
            HandoffKey::CampaignData => "campaignData",
            HandoffKey::PreviewAnalytics => "previewAnalytics",
            HandoffKey::TempFormData => "tempFormData",
        }
    }
}

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait HandoffStore: Send + Sync {
    /// Stores `value`, replacing any previous entry for the same session and key.
    async fn put(&self, session: Uuid, key: HandoffKey, value: String) -> Result<(), HandoffError>;

    /// Reads and deletes the entry. `Ok(None)` when nothing was stored.
    async fn take(&self, session: Uuid, key: HandoffKey) -> Result<Option<String>, HandoffError>;

    fn backend(&self) -> &'static str;
}

/// Serializes `value` to JSON and stores it.
pub async fn put_json<T: Serialize + ?Sized>(
    store: &dyn HandoffStore,
    session: Uuid,
    key: HandoffKey,
    value: &T,
) -> Result<(), HandoffError> {
    let json = serde_json::to_string(value)?;
    store.put(session, key, json).await
}
