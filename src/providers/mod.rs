pub mod registry;
pub mod us_open;

pub use registry::ProviderRegistry;
pub use us_open::UsOpenProvider;

use crate::domain::{PlayerMap, Tournament};
use crate::errors::FetchError;

/// Capability contract for one external tournament data source.
///
/// A provider knows its own identity, base endpoint and outbound
/// identity string, how to build the player-feed URL for a tournament,
/// and how to turn the raw feed body into event draws keyed by event ID.
/// Implementations are pure functions of (tournament, bytes) plus their
/// own static configuration; adding a new source means adding one new
/// implementation, never touching the pipeline.
pub trait DataProvider: Send + Sync {
    fn id(&self) -> &str;

    fn base_url(&self) -> &str;

    /// Value placed in the request's User-Agent header.
    fn user_agent(&self) -> &str;

    /// Build the player-feed URL for a tournament. Fails with a
    /// configuration error when the tournament's fields are unusable.
    fn players_url(&self, tournament: &Tournament) -> Result<String, FetchError>;

    /// Parse a raw feed body into event draws. Malformed top-level
    /// structure fails the whole call; per-field anomalies must be
    /// recovered locally by the implementation.
    fn deserialize_players(&self, data: &[u8]) -> Result<PlayerMap, FetchError>;
}
