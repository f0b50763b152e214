//! Data Transfer Objects for REST request/response serialization.

pub mod match_dto;
pub mod queue_dto;

pub use match_dto::*;
pub use queue_dto::*;
