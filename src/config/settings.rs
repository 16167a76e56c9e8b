pub const DEFAULT_TOURNAMENTS_FILE: &str = "one-off-tournaments.json";

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub timeout_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed: FeedSettings,
    pub tournaments_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            feed: FeedSettings::default(),
            tournaments_file: DEFAULT_TOURNAMENTS_FILE.to_string(),
        }
    }
}
