use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for upstream feed fetches, bounded by a fixed timeout.
///
/// The outbound identity string is supplied per request because each
/// provider carries its own. One GET per call, no retries.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(
        &self,
        url: &str,
        user_agent: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
    }

    fn build_client(timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
