//! DynamoDB implementation of the persistence layer.
//!
//! Queue records live in the queue table keyed by `place` with a `players`
//! list attribute; match records go into the match table with the full
//! attribute set of [`MatchRecord`]. Table names come from configuration
//! and are not validated up front — a missing name fails at call time.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

use super::Store;
use crate::domain::MatchRecord;
use crate::error::ServiceError;

/// DynamoDB-backed [`Store`] using the AWS SDK client.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    queue_table: String,
    match_table: String,
}

impl DynamoStore {
    /// Creates a new store over the given client and table names.
    #[must_use]
    pub fn new(client: Client, queue_table: String, match_table: String) -> Self {
        Self {
            client,
            queue_table,
            match_table,
        }
    }

    fn av_s(s: impl Into<String>) -> AttributeValue {
        AttributeValue::S(s.into())
    }

    fn av_n(n: impl ToString) -> AttributeValue {
        AttributeValue::N(n.to_string())
    }
}

#[async_trait]
impl Store for DynamoStore {
    async fn load_queue(&self, place: &str) -> Result<Vec<String>, ServiceError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.queue_table)
            .key("place", Self::av_s(place))
            .send()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        let Some(item) = response.item else {
            return Ok(Vec::new());
        };

        let players = item
            .get("players")
            .and_then(|attr| attr.as_l().ok())
            .map(|list| {
                list.iter()
                    .filter_map(|attr| attr.as_s().ok().cloned())
                    .collect()
            })
            .unwrap_or_default();

        Ok(players)
    }

    async fn save_queue(&self, place: &str, players: &[String]) -> Result<(), ServiceError> {
        let players_attr = AttributeValue::L(
            players
                .iter()
                .map(|name| Self::av_s(name.clone()))
                .collect(),
        );

        self.client
            .put_item()
            .table_name(&self.queue_table)
            .item("place", Self::av_s(place))
            .item("players", players_attr)
            .send()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        tracing::debug!(place, count = players.len(), "queue record overwritten");
        Ok(())
    }

    async fn save_match(&self, record: &MatchRecord) -> Result<(), ServiceError> {
        self.client
            .put_item()
            .table_name(&self.match_table)
            .item("place", Self::av_s(record.place.clone()))
            .item("match_id", Self::av_s(record.match_id.to_string()))
            .item("player1_name", Self::av_s(record.player1_name.clone()))
            .item("player1_score", Self::av_n(record.player1_score))
            .item("player2_name", Self::av_s(record.player2_name.clone()))
            .item("player2_score", Self::av_n(record.player2_score))
            .item("match_time", Self::av_s(record.match_time.clone()))
            .item("date", Self::av_s(record.date.to_rfc3339()))
            .item("winner", Self::av_s(record.winner.clone()))
            .item("loser", Self::av_s(record.loser.clone()))
            .send()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        tracing::debug!(match_id = %record.match_id, place = %record.place, "match record saved");
        Ok(())
    }
}
