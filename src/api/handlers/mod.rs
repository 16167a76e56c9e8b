use crate::services::roster::TournamentDataService;

pub mod tournaments;

pub struct AppState {
    pub service: TournamentDataService,
}
