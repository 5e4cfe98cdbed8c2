use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::Alert;
use crate::utils::redact_path;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    endpoint: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, bot_token: &str, chat_id: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            endpoint: format!(
                "{}/bot{}/sendMessage",
                api_url.trim_end_matches('/'),
                bot_token
            ),
            chat_id: chat_id.into(),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.telegram_api_url, &config.bot_token, config.chat_id.clone())
    }

    /// Endpoint with the token hidden, safe to log.
    pub fn redacted_endpoint(&self) -> String {
        redact_path(&self.endpoint)
    }

    pub async fn send(&self, alert: &Alert) -> Result<()> {
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": alert.message,
        });

        // reqwest errors embed the URL, which holds the bot token.
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| anyhow!("Telegram request failed: {}", e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            info!("Alert sent to Telegram: {}", alert.title);
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(anyhow!("Telegram notify failed: HTTP {status}: {error_text}"))
        }
    }
}
