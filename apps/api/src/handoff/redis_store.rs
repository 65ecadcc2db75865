use async_trait::async_trait;
use redis::Client as RedisClient;
use tracing::debug;
use uuid::Uuid;

use super::{HandoffError, HandoffKey, HandoffStore};

const KEY_PREFIX: &str = "adroute:handoff";

/// Redis-backed store. Entries expire after `ttl_secs` if never taken.
pub struct RedisHandoffStore {
    client: RedisClient,
    ttl_secs: u64,
}

impl RedisHandoffStore {
    pub fn new(client: RedisClient, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }
}

fn entry_key(session: Uuid, key: HandoffKey) -> String {
    format!("{KEY_PREFIX}:{session}:{}", key.as_str())
}

#[async_trait]
impl HandoffStore for RedisHandoffStore {
    async fn put(&self, session: Uuid, key: HandoffKey, value: String) -> Result<(), HandoffError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(entry_key(session, key))
            .arg(value)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        debug!("Stored {} for session {session}", key.as_str());
        Ok(())
    }

    async fn take(&self, session: Uuid, key: HandoffKey) -> Result<Option<String>, HandoffError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value = redis::cmd("GETDEL")
            .arg(entry_key(session, key))
            .query_async::<_, Option<String>>(&mut conn)
            .await?;
        Ok(value)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_is_namespaced_by_session_and_key() {
        let session = Uuid::nil();
        assert_eq!(
            entry_key(session, HandoffKey::PreviewAnalytics),
            "adroute:handoff:00000000-0000-0000-0000-000000000000:previewAnalytics"
        );
    }
}
