use reqwest::Url;

/// Keeps scheme and authority, hides the path. Bot API URLs carry the token in the path.
pub fn redact_path(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return "***".to_string();
    };
    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}://{host}:{port}/***/", parsed.scheme()),
        (Some(host), None) => format!("{}://{host}/***/", parsed.scheme()),
        (None, _) => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::redact_path;

    #[test]
    fn hides_bot_token() {
        let masked = redact_path("https://api.telegram.org/bot123456:SECRET/sendMessage");
        assert_eq!(masked, "https://api.telegram.org/***/");
        assert!(!masked.contains("SECRET"));
    }

    #[test]
    fn keeps_port() {
        assert_eq!(
            redact_path("http://127.0.0.1:8545/bot1:abc/sendMessage"),
            "http://127.0.0.1:8545/***/"
        );
    }

    #[test]
    fn returns_generic_for_invalid_url() {
        assert_eq!(redact_path("not-a-valid-url"), "***");
    }
}
