use anyhow::Result;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::config::tournaments::load_tournaments;
use crate::http::FeedClient;
use crate::providers::{ProviderRegistry, UsOpenProvider};
use crate::services::roster::TournamentDataService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let service = self.build_data_service()?;

        let state = Arc::new(AppState { service });
        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Build providers and the tournament catalog. Registration happens
    /// once here, single-threaded; the service is read-only afterwards.
    fn build_data_service(&self) -> Result<TournamentDataService> {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(UsOpenProvider::new()));

        let client = FeedClient::new(self.config.feed.timeout_secs)?;
        let mut service = TournamentDataService::new(client, registry);

        let path = std::env::var("TOURNAMENTS_FILE")
            .unwrap_or_else(|_| self.config.tournaments_file.clone());

        let tournaments = match load_tournaments(&path) {
            Ok(tournaments) => tournaments,
            Err(e) => {
                warn!("Error loading tournaments: {:?}", e);
                Vec::new()
            }
        };

        for tournament in tournaments {
            let id = tournament.id.clone();
            if let Err(e) = service.register_tournament(tournament) {
                warn!("Error registering tournament with ID {}: {}", id, e);
            }
        }

        Ok(service)
    }
}
