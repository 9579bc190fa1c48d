//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userdir_core::storage::{Result, UsernameRepository};
use userdir_core::user::UserRecord;

/// In-memory storage backend.
///
/// Records are keyed by the username value's canonical JSON encoding, so a
/// repeated put overwrites rather than duplicates. Data is not persisted
/// and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsernameRepository for InMemoryRepository {
    async fn list_usernames(&self) -> Result<Vec<UserRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn put_username(&self, record: &UserRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.key(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_list() {
        let repo = InMemoryRepository::new();

        repo.put_username(&UserRecord::new("alice")).await.unwrap();
        repo.put_username(&UserRecord::new("bob")).await.unwrap();

        let records = repo.list_usernames().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_put_overwrites_same_username() {
        let repo = InMemoryRepository::new();
        let record = UserRecord::new("alice");

        repo.put_username(&record).await.unwrap();
        repo.put_username(&record).await.unwrap();

        let records = repo.list_usernames().await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_value_types_do_not_collide() {
        let repo = InMemoryRepository::new();

        repo.put_username(&UserRecord::new("0")).await.unwrap();
        repo.put_username(&UserRecord::new(0)).await.unwrap();

        let records = repo.list_usernames().await.unwrap();
        assert_eq!(records.len(), 2);
    }
}
