use chrono::{DateTime, Utc};

use crate::domain::{Alert, Status};

/// Debounces alerts: one per offline-to-online transition.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    site_name: String,
    target_url: String,
    already_notified: bool,
}

impl AlertEngine {
    pub fn new(site_name: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            target_url: target_url.into(),
            already_notified: false,
        }
    }

    pub fn already_notified(&self) -> bool {
        self.already_notified
    }

    /// Records the observed status and returns an alert if one is due.
    ///
    /// The engine counts the alert as sent once it is returned, whether or
    /// not delivery later succeeds.
    pub fn observe(&mut self, status: Status, at: DateTime<Utc>) -> Option<Alert> {
        match status {
            Status::Online if !self.already_notified => {
                self.already_notified = true;
                Some(self.online_alert(at))
            }
            Status::Online => None,
            Status::Offline => {
                self.already_notified = false;
                None
            }
        }
    }

    fn online_alert(&self, at: DateTime<Utc>) -> Alert {
        Alert::at(
            format!("{} is online", self.site_name),
            format!(
                "{} appears ONLINE at {}. {}",
                self.site_name,
                at.format("%Y-%m-%d %H:%M:%S UTC"),
                self.target_url
            ),
            at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AlertEngine;
    use crate::domain::Status::{self, Offline, Online};
    use chrono::{TimeZone, Utc};

    fn count_alerts(statuses: &[Status]) -> usize {
        let mut engine = AlertEngine::new("Example", "https://example.com/");
        statuses
            .iter()
            .filter(|status| engine.observe(**status, Utc::now()).is_some())
            .count()
    }

    #[test]
    fn steady_online_alerts_once() {
        assert_eq!(count_alerts(&[Online, Online, Online]), 1);
    }

    #[test]
    fn each_recovery_alerts_again() {
        assert_eq!(count_alerts(&[Online, Offline, Online]), 2);
        assert_eq!(count_alerts(&[Offline, Online, Offline, Offline, Online, Online]), 2);
    }

    #[test]
    fn offline_never_alerts() {
        assert_eq!(count_alerts(&[Offline, Offline]), 0);
    }

    #[test]
    fn flag_tracks_latest_status() {
        let mut engine = AlertEngine::new("Example", "https://example.com/");
        assert!(!engine.already_notified());

        engine.observe(Online, Utc::now());
        assert!(engine.already_notified());

        engine.observe(Offline, Utc::now());
        assert!(!engine.already_notified());
    }

    #[test]
    fn alert_text_names_site_time_and_url() {
        let mut engine = AlertEngine::new("PixelUnlockTool", "https://pixelunlocktool.com/");
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();

        let alert = engine.observe(Online, at).expect("first online observation alerts");

        assert_eq!(alert.title, "PixelUnlockTool is online");
        assert_eq!(
            alert.message,
            "PixelUnlockTool appears ONLINE at 2024-05-01 12:30:05 UTC. https://pixelunlocktool.com/"
        );
        assert_eq!(alert.timestamp, at);
    }
}
