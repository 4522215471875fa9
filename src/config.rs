use std::time::Duration;

use rand::seq::IteratorRandom;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Settings for [`crate::FbrefClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Minimum time between the start of two requests.
    pub wait_time: Duration,
    /// Timeout applied to each request by the transport.
    pub timeout: Duration,
    /// Browser whose headers every request imitates.
    pub profile: BrowserProfile,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            wait_time: Duration::from_secs(5),
            timeout: Duration::from_secs(30),
            profile: BrowserProfile::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_profile(mut self, profile: BrowserProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// A browser header set sent with every request.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum BrowserProfile {
    #[default]
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl BrowserProfile {
    /// Pick a profile at random. Call once at startup and keep the result.
    pub fn random() -> Self {
        BrowserProfile::iter()
            .choose(&mut rand::thread_rng())
            .unwrap_or_default()
    }

    pub fn user_agent(self) -> &'static str {
        match self {
            BrowserProfile::Chrome => "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            BrowserProfile::Firefox => "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
            BrowserProfile::Safari => "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
            BrowserProfile::Edge => "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
        }
    }

    /// The full header set for this browser.
    pub fn headers(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(self.user_agent()));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let client_hints = match self {
            BrowserProfile::Chrome => {
                Some("\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Google Chrome\";v=\"120\"")
            }
            BrowserProfile::Edge => {
                Some("\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Microsoft Edge\";v=\"120\"")
            }
            BrowserProfile::Firefox | BrowserProfile::Safari => None,
        };
        if let Some(hints) = client_hints {
            headers.insert(
                HeaderName::from_static("sec-ch-ua"),
                HeaderValue::from_static(hints),
            );
            headers.insert(
                HeaderName::from_static("sec-ch-ua-mobile"),
                HeaderValue::from_static("?0"),
            );
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.wait_time, Duration::from_secs(5));
        assert_eq!(config.profile, BrowserProfile::Chrome);
    }

    #[test]
    fn test_profile_headers() {
        for profile in BrowserProfile::iter() {
            let headers = profile.headers();
            assert_eq!(
                headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
                Some(profile.user_agent())
            );
            assert!(headers.contains_key(ACCEPT));
        }
        assert!(!BrowserProfile::Firefox.headers().contains_key("sec-ch-ua"));
        assert!(BrowserProfile::Edge.headers().contains_key("sec-ch-ua"));
    }
}
