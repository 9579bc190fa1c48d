//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `userdir_core::storage` using
//! DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use userdir_core::storage::{Result, UsernameRepository};
use userdir_core::user::UserRecord;

use super::conversions::{item_to_record, record_to_item};
use super::error::{map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
///
/// The table uses `username` as its partition key and carries no other
/// attributes.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UsernameRepository for DynamoDbRepository {
    async fn list_usernames(&self) -> Result<Vec<UserRecord>> {
        // Single Scan call; LastEvaluatedKey continuation is not followed,
        // so tables larger than one response page are truncated.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_record).collect()
    }

    async fn put_username(&self, record: &UserRecord) -> Result<()> {
        let item = record_to_item(record);

        // No condition expression: a put on an existing username overwrites it.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, record.key()))?;

        Ok(())
    }
}
