use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::error;
use std::sync::Arc;

use super::AppState;
use crate::api::models::RosterResponse;

pub async fn list_tournaments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.all_tournaments().to_vec())
}

pub async fn tournament_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let tournament = match state.service.get_tournament(&id) {
        Ok(t) => t.clone(),
        Err(e) => {
            error!("Error fetching player list for tournament with ID {}: {}", id, e);
            return (StatusCode::NOT_FOUND, "404 tournament not found").into_response();
        }
    };

    let events = match state.service.get_players(&tournament).await {
        Ok(events) => events,
        Err(e) => {
            error!("Error fetching player list for tournament with ID {}: {}", id, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "500 internal server error")
                .into_response();
        }
    };

    Json(RosterResponse { tournament, events }).into_response()
}
