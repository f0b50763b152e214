//! Waiting queue handlers: list, add, remove, rename, end current game.

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};

use crate::api::dto::{AddPlayerRequest, PlaceQuery, RenamePlayerRequest};
use crate::app_state::AppState;
use crate::error::{MessageResponse, ServiceError};

/// `GET /players` — List the waiting queue in order.
#[utoipa::path(
    get,
    path = "/players",
    tag = "Queue",
    summary = "List waiting players",
    description = "Returns the ordered list of player names currently waiting. The first two positions are the pair on the court.",
    responses(
        (status = 200, description = "Ordered player names", body = Vec<String>),
    )
)]
pub async fn list_players(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.queue_service.list().await)
}

/// `POST /players` — Append a player to the queue.
///
/// # Errors
///
/// Returns [`ServiceError::MissingPlayerName`] when the body has no
/// usable name.
#[utoipa::path(
    post,
    path = "/players",
    tag = "Queue",
    summary = "Add a player",
    description = "Appends the named player to the end of the waiting queue and persists the full queue for the place.",
    request_body = AddPlayerRequest,
    responses(
        (status = 201, description = "Player added", body = MessageResponse),
        (status = 400, description = "Missing player name", body = MessageResponse),
    )
)]
pub async fn add_player(
    State(state): State<AppState>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let place = resolve_place(req.place, &state);
    state.queue_service.add_player(&place, req.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("플레이어가 추가되었습니다.")),
    ))
}

/// `DELETE /players/:index` — Remove the player at a queue position.
///
/// # Errors
///
/// Returns [`ServiceError::PlayerNotFound`] when the index is out of
/// range.
#[utoipa::path(
    delete,
    path = "/players/{index}",
    tag = "Queue",
    summary = "Remove a player",
    description = "Removes the player at the given zero-based queue position, preserving the order of the rest.",
    params(
        ("index" = usize, Path, description = "Zero-based queue position"),
        PlaceQuery,
    ),
    responses(
        (status = 200, description = "Player removed", body = MessageResponse),
        (status = 404, description = "Index out of range", body = MessageResponse),
    )
)]
pub async fn remove_player(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<PlaceQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let place = resolve_place(query.place, &state);
    state.queue_service.remove_player(&place, index).await?;

    Ok(Json(MessageResponse::new("플레이어가 제거되었습니다.")))
}

/// `PUT /players/:index` — Rename the player at a queue position.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidRename`] when the index is out of range
/// or the new name is blank.
#[utoipa::path(
    put,
    path = "/players/{index}",
    tag = "Queue",
    summary = "Rename a player",
    description = "Replaces the name at the given queue position with the trimmed replacement.",
    params(
        ("index" = usize, Path, description = "Zero-based queue position"),
    ),
    request_body = RenamePlayerRequest,
    responses(
        (status = 200, description = "Player renamed", body = MessageResponse),
        (status = 404, description = "Invalid index or blank name", body = MessageResponse),
    )
)]
pub async fn rename_player(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<RenamePlayerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let place = resolve_place(req.place, &state);
    let new_name = req.new_name.unwrap_or_default();
    state
        .queue_service
        .rename_player(&place, index, &new_name)
        .await?;

    Ok(Json(MessageResponse::new(
        "플레이어 이름이 업데이트되었습니다.",
    )))
}

/// `DELETE /endCurrentGame` — Finish the current game.
///
/// Replies in plain text, matching the venue display's expectations.
///
/// # Errors
///
/// Returns [`ServiceError::InsufficientPlayers`] when fewer than two
/// players are queued.
#[utoipa::path(
    delete,
    path = "/endCurrentGame",
    tag = "Queue",
    summary = "End the current game",
    description = "Removes the first two queued players (the pair on the court) and persists the remaining queue.",
    params(PlaceQuery),
    responses(
        (status = 200, description = "Game ended", body = String),
        (status = 400, description = "Fewer than two players waiting", body = String),
    )
)]
pub async fn end_current_game(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let place = resolve_place(query.place, &state);
    state.queue_service.end_current_game(&place).await?;

    Ok((StatusCode::OK, "게임 종료"))
}

/// Queue management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(list_players).post(add_player))
        .route(
            "/players/{index}",
            delete(remove_player).put(rename_player),
        )
        .route("/endCurrentGame", delete(end_current_game))
}

/// Resolves an optional request `place` against the configured default.
fn resolve_place(place: Option<String>, state: &AppState) -> String {
    place.unwrap_or_else(|| state.default_place.clone())
}
