pub(crate) mod player_stats;
pub(crate) mod seasons;
pub(crate) mod top_scorers;

use std::time::Duration;

pub(crate) use ::scraper::Html;
use ::scraper::ElementRef;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{FbrefError, Result};
use crate::rate_limit::RateLimiter;
use crate::transport::{HttpResponse, Transport};

pub(crate) const BASE_URL: &str = "https://fbref.com";

/// Paces, issues and classifies requests to fbref.
#[derive(Debug)]
pub(crate) struct Requester<T> {
    transport: T,
    limiter: RateLimiter,
}

impl<T: Transport> Requester<T> {
    pub(crate) fn new(transport: T, wait_time: Duration) -> Self {
        Self {
            transport,
            limiter: RateLimiter::new(wait_time),
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Wait for the rate limiter, GET `url` and classify the status.
    pub(crate) async fn fetch(&self, url: &str) -> Result<HttpResponse> {
        self.limiter.acquire().await;
        let response = self.transport.get(url).await?;
        classify_status(url, response.status)?;
        debug!(url, status = %response.status, bytes = response.body.len(), "fetched page");
        Ok(response)
    }
}

/// Map a response status to the matching error, if any.
pub(crate) fn classify_status(url: &str, status: StatusCode) -> Result<()> {
    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            warn!(url, "rate limited by fbref");
            Err(FbrefError::RateLimited {
                url: url.to_owned(),
            })
        }
        StatusCode::NOT_FOUND | StatusCode::GATEWAY_TIMEOUT => Err(FbrefError::RequestFailed {
            url: url.to_owned(),
            status,
        }),
        s if s.is_success() => Ok(()),
        _ => Err(FbrefError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        }),
    }
}

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document<T: Transport>(
    requester: &Requester<T>,
    url: &str,
) -> Result<Html> {
    let response = requester.fetch(url).await?;
    Ok(Html::parse_document(&response.body))
}

/// All text inside `element`, trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
