//! Match service: builds and persists completed-game records.

use std::sync::Arc;

use crate::domain::{MatchRecord, MatchReport};
use crate::persistence::Store;

/// Records match results into the match table.
///
/// Stateless apart from the store handle: each call builds a fresh
/// [`MatchRecord`] and persists it. Persistence failures are logged and
/// absorbed — the caller always receives the built record and the HTTP
/// layer reports success regardless.
#[derive(Debug)]
pub struct MatchService {
    store: Arc<dyn Store>,
}

impl MatchService {
    /// Creates a new `MatchService`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Builds a record from the report (fresh id, venue-local timestamp,
    /// derived winner/loser) and persists it.
    pub async fn record_match(&self, report: MatchReport) -> MatchRecord {
        let record = MatchRecord::from_report(report);

        if let Err(error) = self.store.save_match(&record).await {
            tracing::error!(%error, match_id = %record.match_id, "match persistence failed");
        } else {
            tracing::info!(
                match_id = %record.match_id,
                place = %record.place,
                winner = %record.winner,
                "match recorded"
            );
        }

        record
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::persistence::MemoryStore;

    fn report(score1: i64, score2: i64) -> MatchReport {
        MatchReport {
            place: "court1".to_string(),
            player1_name: "A".to_string(),
            player1_score: score1,
            player2_name: "B".to_string(),
            player2_score: score2,
            match_time: "19:00".to_string(),
        }
    }

    #[tokio::test]
    async fn record_match_persists_derived_outcome() {
        let store = Arc::new(MemoryStore::new());
        let service = MatchService::new(Arc::clone(&store) as Arc<dyn Store>);

        let record = service.record_match(report(11, 7)).await;
        assert_eq!(record.winner, "A");
        assert_eq!(record.loser, "B");

        let stored = store.matches().await;
        let Some(first) = stored.first() else {
            panic!("expected a persisted match record");
        };
        assert_eq!(first.match_id, record.match_id);
        assert_eq!(first.winner, "A");
    }

    #[tokio::test]
    async fn persistence_failure_is_absorbed() {
        #[derive(Debug)]
        struct FailingStore;

        #[async_trait::async_trait]
        impl Store for FailingStore {
            async fn load_queue(&self, _place: &str) -> Result<Vec<String>, ServiceError> {
                Ok(Vec::new())
            }

            async fn save_queue(
                &self,
                _place: &str,
                _players: &[String],
            ) -> Result<(), ServiceError> {
                Ok(())
            }

            async fn save_match(&self, _record: &MatchRecord) -> Result<(), ServiceError> {
                Err(ServiceError::Persistence("table missing".to_string()))
            }
        }

        let service = MatchService::new(Arc::new(FailingStore));
        // The record still comes back; the failure is only logged.
        let record = service.record_match(report(7, 11)).await;
        assert_eq!(record.winner, "B");
    }
}
