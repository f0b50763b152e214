//! Match result handler.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;

use crate::api::dto::RecordMatchRequest;
use crate::app_state::AppState;
use crate::error::MessageResponse;

/// `POST /result` — Record a completed match.
///
/// Winner and loser are derived server-side from the scores; the record
/// is stamped with a fresh match id and the venue-local time. Always
/// answers 201 — persistence failures are logged, never surfaced.
#[utoipa::path(
    post,
    path = "/result",
    tag = "Matches",
    summary = "Record a match result",
    description = "Persists an immutable record of one completed game, deriving winner and loser from the submitted scores.",
    request_body = RecordMatchRequest,
    responses(
        (status = 201, description = "Match result saved", body = MessageResponse),
    )
)]
pub async fn record_match(
    State(state): State<AppState>,
    Json(req): Json<RecordMatchRequest>,
) -> impl IntoResponse {
    let report = req.into_report(&state.default_place);
    state.match_service.record_match(report).await;

    (
        StatusCode::CREATED,
        Json(MessageResponse::new("경기 결과가 저장되었습니다.")),
    )
}

/// Match result routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/result", post(record_match))
}
