//! In-memory implementation of the persistence layer.
//!
//! Backs the test suite and local development runs where no DynamoDB
//! endpoint is available. Mirrors the table shapes exactly: one queue
//! record per place plus an append-only match list.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Store;
use crate::domain::MatchRecord;
use crate::error::ServiceError;

/// HashMap-backed [`Store`] for tests and local development.
#[derive(Debug, Default)]
pub struct MemoryStore {
    queues: Mutex<HashMap<String, Vec<String>>>,
    matches: Mutex<Vec<MatchRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored queue for `place`, if any record exists.
    pub async fn queue(&self, place: &str) -> Option<Vec<String>> {
        self.queues.lock().await.get(place).cloned()
    }

    /// Returns all recorded matches in insertion order.
    pub async fn matches(&self) -> Vec<MatchRecord> {
        self.matches.lock().await.clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load_queue(&self, place: &str) -> Result<Vec<String>, ServiceError> {
        Ok(self
            .queues
            .lock()
            .await
            .get(place)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_queue(&self, place: &str, players: &[String]) -> Result<(), ServiceError> {
        self.queues
            .lock()
            .await
            .insert(place.to_string(), players.to_vec());
        Ok(())
    }

    async fn save_match(&self, record: &MatchRecord) -> Result<(), ServiceError> {
        self.matches.lock().await.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchRecord, MatchReport};

    #[tokio::test]
    async fn save_queue_overwrites_whole_record() {
        let store = MemoryStore::new();
        let result = store
            .save_queue("court1", &["a".to_string(), "b".to_string()])
            .await;
        assert!(result.is_ok());

        let result = store.save_queue("court1", &["c".to_string()]).await;
        assert!(result.is_ok());
        assert_eq!(store.queue("court1").await, Some(vec!["c".to_string()]));
    }

    #[tokio::test]
    async fn load_queue_missing_place_is_empty() {
        let store = MemoryStore::new();
        let loaded = store.load_queue("nowhere").await;
        assert_eq!(loaded.ok(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn matches_are_append_only() {
        let store = MemoryStore::new();
        let record = MatchRecord::from_report(MatchReport {
            place: "court1".to_string(),
            player1_name: "A".to_string(),
            player1_score: 11,
            player2_name: "B".to_string(),
            player2_score: 7,
            match_time: "12:30".to_string(),
        });

        assert!(store.save_match(&record).await.is_ok());
        assert!(store.save_match(&record).await.is_ok());
        assert_eq!(store.matches().await.len(), 2);
    }
}
