use crate::config::{DEFAULT_OFFLINE_MARKER, DEFAULT_STATUS_MARKER};
use crate::domain::Status;

/// Derives site status from a marker phrase in the fetched page.
#[derive(Debug, Clone)]
pub struct StatusDetector {
    status_marker: String,
    offline_marker: String,
}

impl Default for StatusDetector {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_MARKER, DEFAULT_OFFLINE_MARKER)
    }
}

impl StatusDetector {
    pub fn new(status_marker: &str, offline_marker: &str) -> Self {
        Self {
            status_marker: status_marker.to_lowercase(),
            offline_marker: offline_marker.to_lowercase(),
        }
    }

    /// Pages without the status marker are assumed online.
    pub fn is_online(&self, content: &str) -> bool {
        let content = content.to_lowercase();
        if content.contains(&self.status_marker) {
            !content.contains(&self.offline_marker)
        } else {
            true
        }
    }

    pub fn detect(&self, content: &str) -> Status {
        Status::from_online(self.is_online(content))
    }
}
