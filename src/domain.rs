use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Online,
    Offline,
}

impl Status {
    pub fn from_online(online: bool) -> Self {
        if online {
            Status::Online
        } else {
            Status::Offline
        }
    }

    pub fn is_online(self) -> bool {
        self == Status::Online
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Online => write!(f, "online"),
            Status::Offline => write!(f, "offline"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(title, message, Utc::now())
    }

    pub fn at(title: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            timestamp,
        }
    }
}
