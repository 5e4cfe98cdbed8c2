use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::debug;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Desktop browser UA; some status pages reject the default client string.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(anyhow!("{url} returned HTTP {status}"));
        }

        Ok(response.text().await?)
    }
}
