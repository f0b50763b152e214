//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type. Only validation and lookup
//! errors ever reach the HTTP layer as non-2xx responses; persistence
//! failures are logged and absorbed at the service layer, so a client can
//! receive a success response even when the durable mirror was not updated.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON response body carrying a short human-readable message.
///
/// Used both for success envelopes and for error responses — the wire
/// contract has no structured error codes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message (Korean, matching the venue's UI).
    pub message: String,
}

impl MessageResponse {
    /// Builds a response body from any message string.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Server-side error enum with HTTP status code mapping.
///
/// Display strings double as the user-visible response messages, so the
/// validation/lookup variants carry the exact wording the original venue
/// UI expects.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// `name` was absent or empty in an add-player request.
    #[error("플레이어 이름을 제공하세요.")]
    MissingPlayerName,

    /// Removal index outside the current queue bounds.
    #[error("플레이어를 찾을 수 없습니다.")]
    PlayerNotFound {
        /// The rejected index.
        index: usize,
    },

    /// Rename index out of range, or the new name trimmed to empty.
    #[error("등록되지 않은 플레이어 이름입니다.")]
    InvalidRename,

    /// Fewer than two players queued when ending the current game.
    #[error("대기 중인 플레이어가 부족합니다.")]
    InsufficientPlayers,

    /// Persistence backend failure. Logged and swallowed at the service
    /// layer; never surfaced through an HTTP response.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPlayerName | Self::InsufficientPlayers => StatusCode::BAD_REQUEST,
            Self::PlayerNotFound { .. } | Self::InvalidRename => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // The end-game endpoint replies in plain text; everything else is
        // a JSON message envelope.
        if matches!(self, Self::InsufficientPlayers) {
            return (status, self.to_string()).into_response();
        }
        let mut response = axum::Json(MessageResponse::new(self.to_string())).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ServiceError::MissingPlayerName.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::PlayerNotFound { index: 7 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::InvalidRename.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::InsufficientPlayers.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Persistence("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_uses_venue_messages() {
        assert_eq!(
            ServiceError::MissingPlayerName.to_string(),
            "플레이어 이름을 제공하세요."
        );
        assert_eq!(
            ServiceError::InsufficientPlayers.to_string(),
            "대기 중인 플레이어가 부족합니다."
        );
    }
}
