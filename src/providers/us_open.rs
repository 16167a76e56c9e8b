use serde::Deserialize;

use super::DataProvider;
use crate::domain::{Event, EventSet, Player, PlayerMap, Tournament};
use crate::errors::FetchError;

const PROVIDER_ID: &str = "gs-uso";
const BASE_URL: &str = "https://www.usopen.org/en_US";
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.159 Safari/537.36";

/// Provider for the US Open player feed.
pub struct UsOpenProvider {
    doubles_events: EventSet,
}

impl UsOpenProvider {
    pub fn new() -> Self {
        Self {
            doubles_events: EventSet::new(&[
                "MD", "WD", "XD", "BD", "GD", "CD", "DD", "UD", "ED",
            ]),
        }
    }
}

impl Default for UsOpenProvider {
    fn default() -> Self {
        Self::new()
    }
}

// --- Feed payload shapes ---

#[derive(Deserialize)]
struct FeedEventEntry {
    #[serde(rename = "event_id")]
    id: String,
    #[serde(rename = "event_name")]
    name: String,
    #[serde(default)]
    seed: u32,
}

#[derive(Deserialize)]
struct FeedPlayer {
    #[serde(default)]
    id: String,
    #[serde(rename = "first_name", default)]
    first_name: String,
    #[serde(rename = "last_name", default)]
    last_name: String,
    #[serde(rename = "country_long", default)]
    country: String,
    #[serde(rename = "events_entered", default)]
    events: Vec<FeedEventEntry>,
    #[serde(rename = "singles_rank", default)]
    singles_rank: String,
    #[serde(rename = "doubles_rank", default)]
    doubles_rank: String,
}

#[derive(Deserialize)]
struct FeedPlayerList {
    #[serde(default)]
    players: Vec<FeedPlayer>,
}

/// Parse one ranking field. The literal "0" and anything that is not a
/// positive integer both mean "no known ranking" and degrade to
/// (false, 0) instead of failing the fetch.
fn parse_rank(raw: &str) -> (bool, u32) {
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => (false, 0),
        Ok(n) => (true, n),
    }
}

impl DataProvider for UsOpenProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }

    fn user_agent(&self) -> &str {
        DESKTOP_USER_AGENT
    }

    fn players_url(&self, tournament: &Tournament) -> Result<String, FetchError> {
        if tournament.year <= 0 {
            return Err(FetchError::Configuration(format!(
                "invalid year {} for tournament {}",
                tournament.year, tournament.id
            )));
        }

        Ok(format!(
            "{}/scores/feeds/{}/players/players.json",
            self.base_url(),
            tournament.year
        ))
    }

    fn deserialize_players(&self, data: &[u8]) -> Result<PlayerMap, FetchError> {
        let feed: FeedPlayerList = serde_json::from_slice(data)?;

        let mut events = PlayerMap::new();

        for p in &feed.players {
            for entry in &p.events {
                let event = events.entry(entry.id.clone()).or_insert_with(|| Event {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    is_doubles: self.doubles_events.contains(&entry.id),
                    seeded_players: Vec::new(),
                    unseeded_players: Vec::new(),
                });

                let seeded = entry.seed > 0;
                let (has_singles_ranking, singles_ranking) = parse_rank(&p.singles_rank);
                let (has_doubles_ranking, doubles_ranking) = parse_rank(&p.doubles_rank);

                let player = Player {
                    id: p.id.clone(),
                    name: format!("{} {}", p.first_name, p.last_name),
                    country: p.country.clone(),
                    seeded,
                    seed: entry.seed,
                    has_singles_ranking,
                    singles_ranking,
                    has_doubles_ranking,
                    doubles_ranking,
                };

                if seeded {
                    event.seeded_players.push(player);
                } else {
                    event.unseeded_players.push(player);
                }
            }
        }

        // Vec sorts are stable, so entrants with equal seeds or equal
        // rankings keep their original encounter order.
        for event in events.values_mut() {
            event.seeded_players.sort_by_key(|p| p.seed);
            if event.is_doubles {
                event.unseeded_players.sort_by_key(|p| p.doubles_ranking);
            } else {
                event.unseeded_players.sort_by_key(|p| p.singles_ranking);
            }
        }

        Ok(events)
    }
}
