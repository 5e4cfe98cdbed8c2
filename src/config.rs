use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};

pub const DEFAULT_TARGET_URL: &str = "https://pixelunlocktool.com/";
pub const DEFAULT_SITE_NAME: &str = "PixelUnlockTool";
pub const DEFAULT_STATUS_MARKER: &str = "server status";
pub const DEFAULT_OFFLINE_MARKER: &str = "offline";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target_url: String,
    pub poll_interval: Duration,
    pub site_name: String,
    pub status_marker: String,
    pub offline_marker: String,
    pub bot_token: String,
    pub chat_id: String,
    pub telegram_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get("BOT_TOKEN");
        let chat_id = get("CHAT_ID");

        let missing: Vec<&str> = [("BOT_TOKEN", &bot_token), ("CHAT_ID", &chat_id)]
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        let (Some(bot_token), Some(chat_id)) = (bot_token, chat_id) else {
            return Err(anyhow!(
                "Missing environment variables: {}",
                missing.join(", ")
            ));
        };

        let poll_interval = match get("CHECK_INTERVAL_SECONDS") {
            Some(raw) => parse_interval(&raw)?,
            None => Duration::from_secs(DEFAULT_INTERVAL_SECS),
        };

        Ok(Self {
            target_url: get("PIXEL_URL").unwrap_or_else(|| DEFAULT_TARGET_URL.to_string()),
            poll_interval,
            site_name: get("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            status_marker: get("STATUS_MARKER")
                .unwrap_or_else(|| DEFAULT_STATUS_MARKER.to_string()),
            offline_marker: get("OFFLINE_MARKER")
                .unwrap_or_else(|| DEFAULT_OFFLINE_MARKER.to_string()),
            bot_token,
            chat_id,
            telegram_api_url: get("TELEGRAM_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
        })
    }
}

pub fn parse_interval(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow!("CHECK_INTERVAL_SECONDS must be a positive integer, got {raw:?}"))?;
    if secs == 0 {
        return Err(anyhow!("CHECK_INTERVAL_SECONDS must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
