//! Match result DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::MatchReport;

/// Request body for `POST /result`.
///
/// All fields default when absent — the endpoint applies no validation
/// beyond deserialization and always reports success.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordMatchRequest {
    /// Venue partition key. Falls back to the configured default place.
    #[serde(default)]
    pub place: Option<String>,
    /// First player's name.
    #[serde(default)]
    pub player1_name: String,
    /// First player's score.
    #[serde(default)]
    pub player1_score: i64,
    /// Second player's name.
    #[serde(default)]
    pub player2_name: String,
    /// Second player's score.
    #[serde(default)]
    pub player2_score: i64,
    /// Free-form match duration or time label.
    #[serde(default)]
    pub match_time: String,
}

impl RecordMatchRequest {
    /// Converts the request into a domain [`MatchReport`], resolving a
    /// missing `place` to `default_place`.
    #[must_use]
    pub fn into_report(self, default_place: &str) -> MatchReport {
        MatchReport {
            place: self.place.unwrap_or_else(|| default_place.to_string()),
            player1_name: self.player1_name,
            player1_score: self.player1_score,
            player2_name: self.player2_name,
            player2_score: self.player2_score,
            match_time: self.match_time,
        }
    }
}
