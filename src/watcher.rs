use crate::alert::AlertEngine;
use crate::config::AppConfig;
use crate::fetcher::PageFetcher;
use crate::notifier::NotifierHub;
use crate::scheduler::{CancelToken, Ticker};
use crate::status::StatusDetector;
use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    FetchFailed,
    Online { notified: bool },
    Offline,
}

pub struct Watchtower {
    config: AppConfig,
    fetcher: PageFetcher,
    detector: StatusDetector,
    alert_engine: AlertEngine,
    notifier: NotifierHub,
}

impl Watchtower {
    pub fn new(
        config: AppConfig,
        fetcher: PageFetcher,
        detector: StatusDetector,
        alert_engine: AlertEngine,
        notifier: NotifierHub,
    ) -> Self {
        Self {
            config,
            fetcher,
            detector,
            alert_engine,
            notifier,
        }
    }

    pub fn alert_engine(&self) -> &AlertEngine {
        &self.alert_engine
    }

    /// Polls until `token` is cancelled. An in-flight tick always completes.
    pub async fn run(&mut self, mut token: CancelToken) -> Result<()> {
        info!(
            "👁️  Watching {} every {}s",
            self.config.target_url,
            self.config.poll_interval.as_secs()
        );

        let mut ticker = Ticker::new(self.config.poll_interval);
        while ticker.next(&mut token).await {
            self.poll_once().await;
        }

        info!("🛑 Monitor stopped");
        Ok(())
    }

    pub async fn poll_once(&mut self) -> TickOutcome {
        let content = match self.fetcher.fetch_text(&self.config.target_url).await {
            Ok(content) => content,
            Err(e) => {
                warn!("⚠️  Network/HTTP error occurred: {:#}", e);
                return TickOutcome::FetchFailed;
            }
        };

        let now = Utc::now();
        let status = self.detector.detect(&content);
        info!(
            "[{}] Checked site, online={}",
            now.format("%Y-%m-%d %H:%M:%S UTC"),
            status.is_online()
        );

        match self.alert_engine.observe(status, now) {
            Some(alert) => {
                self.notifier.send(&alert).await;
                TickOutcome::Online { notified: true }
            }
            None if status.is_online() => TickOutcome::Online { notified: false },
            None => TickOutcome::Offline,
        }
    }
}
