//! Persistence layer: queue mirror and match log storage.
//!
//! Provides the [`Store`] trait over the two DynamoDB tables: the queue
//! table (one record per place, overwritten wholesale) and the match table
//! (insert-only). The concrete implementation uses `aws-sdk-dynamodb`;
//! [`MemoryStore`] backs tests and local development.

pub mod dynamo;
pub mod memory;

use std::fmt;

use async_trait::async_trait;

use crate::domain::MatchRecord;
use crate::error::ServiceError;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// Storage backend for the queue mirror and the match log.
///
/// All three operations map to single get-item/put-item calls. Callers
/// above the store log and absorb failures; the store itself only reports
/// them.
#[async_trait]
pub trait Store: Send + Sync + fmt::Debug {
    /// Loads the stored player list for `place`. Returns an empty list
    /// when no record exists. Used once, at startup.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on backend failure.
    async fn load_queue(&self, place: &str) -> Result<Vec<String>, ServiceError>;

    /// Overwrites (not merges) the entire queue record for `place`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on backend failure.
    async fn save_queue(&self, place: &str, players: &[String]) -> Result<(), ServiceError>;

    /// Inserts a new match record. Match ids are freshly generated per
    /// call, so there is no overwrite case.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] on backend failure.
    async fn save_match(&self, record: &MatchRecord) -> Result<(), ServiceError>;
}
