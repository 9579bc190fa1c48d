use async_trait::async_trait;

use crate::user::UserRecord;

use super::Result;

/// Repository for username directory operations.
#[async_trait]
pub trait UsernameRepository: Send + Sync {
    /// Returns every stored record.
    ///
    /// Backed by a full table scan. Stores that page their scan results
    /// surface only the first page.
    async fn list_usernames(&self) -> Result<Vec<UserRecord>>;

    /// Upserts a record. An existing record with the same username is
    /// overwritten; last write wins.
    async fn put_username(&self, record: &UserRecord) -> Result<()>;
}
