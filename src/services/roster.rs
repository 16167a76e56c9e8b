use log::info;

use crate::domain::{Event, PlayerMap, Tournament};
use crate::errors::FetchError;
use crate::http::FeedClient;
use crate::providers::ProviderRegistry;

/// Catalog of registered tournaments plus the fetch pipeline that turns
/// one tournament into an ordered per-event roster.
///
/// Populated once at startup; read-only afterwards, so it can be shared
/// across handlers without locking.
pub struct TournamentDataService {
    client: FeedClient,
    registry: ProviderRegistry,
    tournaments: Vec<Tournament>,
}

impl TournamentDataService {
    pub fn new(client: FeedClient, registry: ProviderRegistry) -> Self {
        Self {
            client,
            registry,
            tournaments: Vec::new(),
        }
    }

    /// Register a tournament, keeping insertion order. When the
    /// tournament references an unknown provider ID the error propagates
    /// and the catalog is left unchanged.
    pub fn register_tournament(&mut self, tournament: Tournament) -> Result<(), FetchError> {
        self.registry.get(&tournament.provider_id)?;
        self.tournaments.push(tournament);
        Ok(())
    }

    /// First exact ID match in registration order.
    pub fn get_tournament(&self, id: &str) -> Result<&Tournament, FetchError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| FetchError::TournamentNotFound(id.to_string()))
    }

    pub fn all_tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    /// Fetch and order the player roster for one tournament.
    ///
    /// Exactly one GET per call, bounded by the client timeout, with no
    /// retry and no caching. Either a fully ordered roster comes back or
    /// an error does; there is no partial-success mode.
    pub async fn get_players(&self, tournament: &Tournament) -> Result<Vec<Event>, FetchError> {
        let provider = self.registry.get(&tournament.provider_id)?;
        let url = provider.players_url(tournament)?;

        info!("Fetching players for tournament {} from {}", tournament.id, url);

        let response = self.client.get(&url, provider.user_agent()).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        ensure_success(status, &body)?;

        let events = provider.deserialize_players(&body)?;
        Ok(order_events(events))
    }
}

/// Required success status is exactly 200. Anything else carries the
/// numeric status and the raw body back to the caller unparsed.
fn ensure_success(status: u16, body: &[u8]) -> Result<(), FetchError> {
    if status != 200 {
        return Err(FetchError::HttpStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    Ok(())
}

/// Flatten the accumulator into a deterministic sequence: event IDs are
/// sorted lexicographically, never emitted in map iteration order.
fn order_events(mut events: PlayerMap) -> Vec<Event> {
    let mut keys: Vec<String> = events.keys().cloned().collect();
    keys.sort();

    keys.iter().filter_map(|k| events.remove(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::DataProvider;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn tournament(id: &str, provider_id: &str) -> Tournament {
        Tournament {
            id: id.to_string(),
            year: 2024,
            name: id.to_uppercase(),
            tier: "Grand Slam".to_string(),
            singles_draw_size: 128,
            doubles_draw_size: 64,
            provider_id: provider_id.to_string(),
            surface: "Hard".to_string(),
            has_overview: true,
            has_live_scores: false,
            has_results: false,
            has_draw: false,
            has_schedule: false,
            has_seeds_list: false,
            has_full_players_list: true,
            has_prize_breakdown: false,
        }
    }

    fn empty_event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {}", id),
            is_doubles: false,
            seeded_players: Vec::new(),
            unseeded_players: Vec::new(),
        }
    }

    struct LocalFeedProvider {
        base: String,
    }

    impl DataProvider for LocalFeedProvider {
        fn id(&self) -> &str {
            "local"
        }

        fn base_url(&self) -> &str {
            &self.base
        }

        fn user_agent(&self) -> &str {
            "tournament-tracker-tests/1.0"
        }

        fn players_url(&self, _tournament: &Tournament) -> Result<String, FetchError> {
            Ok(format!("{}/players.json", self.base))
        }

        fn deserialize_players(&self, data: &[u8]) -> Result<PlayerMap, FetchError> {
            let ids: Vec<String> = serde_json::from_slice(data)?;
            Ok(ids.into_iter().map(|id| (id.clone(), empty_event(&id))).collect())
        }
    }

    fn service_with_local_provider(base: String) -> TournamentDataService {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(LocalFeedProvider { base }));
        TournamentDataService::new(FeedClient::new(5).unwrap(), registry)
    }

    /// One-shot HTTP server that answers a single request with a canned
    /// response and closes the connection.
    async fn spawn_one_shot(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Drain the request headers before answering.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "{}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn registering_with_unknown_provider_leaves_catalog_unchanged() {
        let mut service = service_with_local_provider("http://unused".to_string());
        service.register_tournament(tournament("uso", "local")).unwrap();

        let err = service
            .register_tournament(tournament("wim", "gs-wim"))
            .unwrap_err();

        assert!(matches!(err, FetchError::ProviderNotFound(id) if id == "gs-wim"));
        assert_eq!(service.all_tournaments().len(), 1);
        assert_eq!(service.all_tournaments()[0].id, "uso");
    }

    #[test]
    fn get_tournament_on_empty_catalog_fails_not_found() {
        let service = service_with_local_provider("http://unused".to_string());
        let err = service.get_tournament("uso").unwrap_err();
        assert!(matches!(err, FetchError::TournamentNotFound(id) if id == "uso"));
    }

    #[test]
    fn get_tournament_with_unknown_id_fails_not_found() {
        let mut service = service_with_local_provider("http://unused".to_string());
        service.register_tournament(tournament("uso", "local")).unwrap();

        let err = service.get_tournament("wim").unwrap_err();
        assert!(matches!(err, FetchError::TournamentNotFound(_)));
    }

    #[test]
    fn all_tournaments_preserves_registration_order() {
        let mut service = service_with_local_provider("http://unused".to_string());
        for id in ["wim", "uso", "aus"] {
            service.register_tournament(tournament(id, "local")).unwrap();
        }

        let ids: Vec<&str> = service.all_tournaments().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["wim", "uso", "aus"]);
    }

    #[test]
    fn non_success_status_carries_status_and_raw_body() {
        let err = ensure_success(429, b"rate limited").unwrap_err();
        match err {
            FetchError::HttpStatus { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn exact_200_is_the_only_success_status() {
        assert!(ensure_success(200, b"").is_ok());
        assert!(ensure_success(204, b"").is_err());
        assert!(ensure_success(301, b"").is_err());
    }

    #[test]
    fn events_come_out_sorted_by_id_regardless_of_accumulation_order() {
        let insertion_orders = [
            ["MS", "LS", "MD", "BS"],
            ["BS", "MD", "LS", "MS"],
            ["LS", "BS", "MS", "MD"],
        ];

        for order in insertion_orders {
            let mut map = PlayerMap::new();
            for id in order {
                map.insert(id.to_string(), empty_event(id));
            }

            let ordered = order_events(map);
            let ids: Vec<&str> = ordered.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["BS", "LS", "MD", "MS"]);
        }
    }

    #[tokio::test]
    async fn get_players_surfaces_http_status_errors() {
        let base = spawn_one_shot("HTTP/1.1 429 Too Many Requests", "rate limited").await;
        let service = service_with_local_provider(base);

        let err = service
            .get_players(&tournament("uso", "local"))
            .await
            .unwrap_err();

        match err {
            FetchError::HttpStatus { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_players_returns_ordered_events_on_success() {
        let base = spawn_one_shot("HTTP/1.1 200 OK", r#"["MS","BS","LS"]"#).await;
        let service = service_with_local_provider(base);

        let events = service
            .get_players(&tournament("uso", "local"))
            .await
            .unwrap();

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["BS", "LS", "MS"]);
    }

    #[tokio::test]
    async fn get_players_surfaces_transport_errors() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let service = service_with_local_provider(base);
        let err = service
            .get_players(&tournament("uso", "local"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}
