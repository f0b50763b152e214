//! Domain layer: the waiting queue and match result model.
//!
//! Pure in-memory types with no I/O. [`PlayerQueue`] holds the ordered
//! waiting list for a venue; [`MatchRecord`] captures the immutable
//! outcome of one completed game.

pub mod match_id;
pub mod match_record;
pub mod queue;

pub use match_id::MatchId;
pub use match_record::{MatchRecord, MatchReport};
pub use queue::PlayerQueue;
