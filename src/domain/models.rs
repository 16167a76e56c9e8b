use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A tournament known to the system, bound to a data provider by ID.
///
/// Loaded from the tournaments JSON document at startup and immutable
/// afterwards. Field names follow the document schema; unknown extra
/// fields in the document are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Name")]
    pub name: String,
    /// Competition tier label, e.g. "Grand Slam".
    #[serde(rename = "Type")]
    pub tier: String,
    #[serde(rename = "SinglesDrawSize")]
    pub singles_draw_size: i32,
    #[serde(rename = "DoublesDrawSize")]
    pub doubles_draw_size: i32,
    #[serde(rename = "ProviderID")]
    pub provider_id: String,
    #[serde(rename = "Surface")]
    pub surface: String,
    #[serde(rename = "HasOverview")]
    pub has_overview: bool,
    #[serde(rename = "HasLiveScores")]
    pub has_live_scores: bool,
    #[serde(rename = "HasResults")]
    pub has_results: bool,
    #[serde(rename = "HasDraw")]
    pub has_draw: bool,
    #[serde(rename = "HasSchedule")]
    pub has_schedule: bool,
    #[serde(rename = "HasSeedsList")]
    pub has_seeds_list: bool,
    #[serde(rename = "HasFullPlayersList")]
    pub has_full_players_list: bool,
    #[serde(rename = "HasPrizePointBreakdown")]
    pub has_prize_breakdown: bool,
}

/// One entrant in an event draw.
///
/// `seed` is 0 for unseeded entrants. The `has_*_ranking` flags
/// distinguish "ranked at position N" from "no known ranking"; when a
/// flag is false the matching ranking value is always 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub country: String,
    pub seeded: bool,
    pub seed: u32,
    pub has_singles_ranking: bool,
    pub singles_ranking: u32,
    pub has_doubles_ranking: bool,
    pub doubles_ranking: u32,
}

/// One event draw with its entrants split into seeded and unseeded
/// sequences, each kept in a deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub is_doubles: bool,
    pub seeded_players: Vec<Player>,
    pub unseeded_players: Vec<Player>,
}

/// Accumulator mapping event ID to its draw while a feed is parsed.
/// Never returned as-is; the pipeline flattens it into a sorted sequence.
pub type PlayerMap = HashMap<String, Event>;

/// Fixed set of event codes, used to mark doubles draws.
#[derive(Debug, Clone, Default)]
pub struct EventSet(HashSet<&'static str>);

impl EventSet {
    pub fn new(codes: &[&'static str]) -> Self {
        Self(codes.iter().copied().collect())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }
}
