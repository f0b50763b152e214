//! # courtside
//!
//! REST API for a game venue's player waiting queue and match results.
//!
//! The queue of record lives in process memory for the lifetime of the
//! service; every mutation is mirrored to a DynamoDB queue table keyed by
//! the venue's `place`, and completed matches are appended to a match table.
//! Persistence is best-effort — backend failures are logged and absorbed so
//! the queue stays available.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── QueueService / MatchService (service/)
//!     │
//!     ├── PlayerQueue, MatchRecord (domain/)
//!     │
//!     └── DynamoDB Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
