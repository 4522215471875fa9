use std::future::Future;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{FbrefError, Result};

/// A raw HTTP response: status and body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues a single GET request and returns whatever the server answered.
///
/// Implementations must not interpret the status code; classification
/// happens in the requester.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    headers: HeaderMap,
}

impl ReqwestTransport {
    /// Build a client honouring the timeout and header profile in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FbrefError::Client)?;
        Ok(Self::with_client(http, config))
    }

    /// Wrap an existing [`reqwest::Client`]; the header profile from
    /// `config` is still attached to every request.
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            headers: config.profile.headers(),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!(url, "fetching page");

        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| FbrefError::Http {
                url: url.to_owned(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| FbrefError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::config::BrowserProfile;

    /// Accept one connection, answer it and return the lowercased request head.
    async fn serve_once(listener: TcpListener, status_line: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response =
            format!("{status_line}\r\ncontent-length: 5\r\nconnection: close\r\n\r\nhello");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&head).to_lowercase()
    }

    fn header_names(head: &str) -> Vec<&str> {
        head.lines()
            .skip(1)
            .filter_map(|line| line.split_once(':'))
            .map(|(name, _)| name.trim())
            .collect()
    }

    #[tokio::test]
    async fn test_requests_carry_the_profile_headers() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/en/players/1f44ac21/", listener.local_addr().unwrap());
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 200 OK"));

        let config = ClientConfig::default().with_profile(BrowserProfile::Firefox);
        let transport = ReqwestTransport::new(&config).unwrap();
        let response = transport.get(&url).await.unwrap();
        let head = server.await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "hello");
        let user_agent = format!(
            "user-agent: {}",
            BrowserProfile::Firefox.user_agent().to_lowercase()
        );
        assert!(head.contains(&user_agent), "{head}");

        let names = header_names(&head);
        for expected in ["accept", "accept-language", "upgrade-insecure-requests"] {
            assert!(names.contains(&expected), "missing {expected}: {head}");
        }
        assert!(!names.contains(&"sec-ch-ua"), "{head}");
        assert!(!names.contains(&"cookie"), "{head}");
    }

    #[tokio::test]
    async fn test_status_is_passed_through_unclassified() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 429 Too Many Requests"));

        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let response = transport.get(&url).await.unwrap();
        server.await.unwrap();

        assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_malformed_url_is_http_error() {
        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let err = transport.get("not a url").await.unwrap_err();
        assert!(matches!(err, FbrefError::Http { ref url, .. } if url == "not a url"));
    }
}
