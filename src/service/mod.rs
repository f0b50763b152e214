//! Service layer: business logic orchestration.
//!
//! [`QueueService`] owns the in-memory waiting list and mirrors every
//! mutation to the persistence layer; [`MatchService`] records completed
//! games.

pub mod match_service;
pub mod queue_service;

pub use match_service::MatchService;
pub use queue_service::QueueService;
