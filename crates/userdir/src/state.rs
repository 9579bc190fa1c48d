//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction and supports different backends via feature flags.

use std::sync::Arc;

use userdir_core::storage::UsernameRepository;

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// This is cloned for each request handler. The store client is an
/// explicitly constructed, injected dependency - handlers never reach for
/// a lazily-initialized global.
#[derive(Clone)]
pub struct AppState {
    /// Username repository.
    pub users: Arc<dyn UsernameRepository>,
}

impl AppState {
    /// Creates an AppState around an explicit repository.
    ///
    /// This is the seam for substituting a test double.
    pub fn with_repository(users: Arc<dyn UsernameRepository>) -> Self {
        Self { users }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        ///
        /// Useful for local runs and tests without external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        ///
        /// Uses the AWS SDK default credential chain and the table name
        /// from the configuration.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = DynamoDbRepository::new(client, config.table_name.clone());

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use userdir_core::storage::Result;
    use userdir_core::user::UserRecord;

    /// Minimal in-memory repository for tests.
    ///
    /// Kept independent of the storage feature flags so router tests build
    /// against any backend configuration.
    #[derive(Debug, Default)]
    struct TestRepository {
        records: RwLock<HashMap<String, UserRecord>>,
    }

    #[async_trait]
    impl UsernameRepository for TestRepository {
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

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            Self::with_repository(Arc::new(TestRepository::default()))
        }
    }
}
