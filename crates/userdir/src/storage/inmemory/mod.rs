//! In-memory storage backend.
//!
//! Stores all records in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! testing and development scenarios where persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
