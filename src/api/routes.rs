use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    tournaments::{list_tournaments, tournament_players},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tournaments", get(list_tournaments))
        .route("/api/tournament/:id/players", get(tournament_players))
        .with_state(state)
}
