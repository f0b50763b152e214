//! Immutable match result records.
//!
//! A [`MatchRecord`] is built once from a [`MatchReport`], stamped with a
//! fresh [`MatchId`] and the venue-local time, and never modified again.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::MatchId;

/// The venue's UTC offset in seconds. Seoul is UTC+9 year-round (no DST),
/// so a fixed offset reproduces the venue's wall-clock time exactly.
const VENUE_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Raw match outcome as reported by the caller.
///
/// Carries both players' names and scores plus a free-form duration/time
/// label. No validation beyond deserialization is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Venue partition key.
    pub place: String,
    /// First player's name.
    pub player1_name: String,
    /// First player's score.
    pub player1_score: i64,
    /// Second player's name.
    pub player2_name: String,
    /// Second player's score.
    pub player2_score: i64,
    /// Free-form match duration or time label (e.g. `"12:30"`).
    pub match_time: String,
}

/// Immutable persisted outcome of one completed game.
///
/// Winner and loser are derived from the scores at construction time.
/// There is no update or delete path; records are insert-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Venue partition key.
    pub place: String,
    /// Generated unique match identifier.
    pub match_id: MatchId,
    /// First player's name.
    pub player1_name: String,
    /// First player's score.
    pub player1_score: i64,
    /// Second player's name.
    pub player2_name: String,
    /// Second player's score.
    pub player2_score: i64,
    /// Free-form match duration or time label.
    pub match_time: String,
    /// Venue-local timestamp at +09:00.
    pub date: DateTime<FixedOffset>,
    /// Name of the player with the higher score. Ties go to player 1.
    pub winner: String,
    /// Name of the other player.
    pub loser: String,
}

impl MatchRecord {
    /// Builds a record from a report: generates the match id, stamps the
    /// venue-local time, and derives winner/loser.
    ///
    /// On equal scores player 1 is treated as the winner. There is no
    /// explicit tie state in the record format.
    #[must_use]
    pub fn from_report(report: MatchReport) -> Self {
        let player1_won = report.player1_score >= report.player2_score;
        let (winner, loser) = if player1_won {
            (report.player1_name.clone(), report.player2_name.clone())
        } else {
            (report.player2_name.clone(), report.player1_name.clone())
        };

        Self {
            place: report.place,
            match_id: MatchId::new(),
            player1_name: report.player1_name,
            player1_score: report.player1_score,
            player2_name: report.player2_name,
            player2_score: report.player2_score,
            match_time: report.match_time,
            date: venue_now(),
            winner,
            loser,
        }
    }
}

/// Returns the current time in the venue's timezone (UTC+9).
#[must_use]
pub fn venue_now() -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(VENUE_UTC_OFFSET_SECS) {
        Some(offset) => Utc::now().with_timezone(&offset),
        // Unreachable: nine hours is a valid offset.
        None => Utc::now().fixed_offset(),
    }
}
