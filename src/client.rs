use serde_json::Value;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::fbref_scraper::{self, Requester};
use crate::model::*;
use crate::transport::{HttpResponse, ReqwestTransport, Transport};

/// The main entry point for interacting with fbref.com.
///
/// `FbrefClient` owns a transport and a rate limiter and exposes methods to
/// list a league's seasons, its top scorers per season and the detailed
/// stats of one season's top scorer.
///
/// League arguments accept anything convertible into a [`serde_json::Value`]
/// so untyped input (CLI arguments, request bodies) is validated the same
/// way as string literals: non-strings fail with
/// [`crate::FbrefError::TypeMismatch`], unknown keys with
/// [`crate::FbrefError::InvalidLeague`], both before any request is sent.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fbref_scraper::Result<()> {
/// use fbref_scraper::FbrefClient;
///
/// let client = FbrefClient::new()?;
/// let best = client.get_top_scorer("EPL", "2023-2024").await?;
/// println!("{} scored {}", best.scorer.name, best.scorer.goals);
/// # Ok(())
/// # }
/// ```
pub struct FbrefClient<T = ReqwestTransport> {
    requester: Requester<T>,
}

impl FbrefClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with the given settings.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(transport, config))
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, TLS, etc. The timeout in
    /// `config` is ignored in favour of the client's own.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self::with_transport(ReqwestTransport::with_client(client, &config), config)
    }
}

impl<T: Transport> FbrefClient<T> {
    /// Create a new client issuing requests through `transport`.
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self {
            requester: Requester::new(transport, config.wait_time),
        }
    }

    /// Every league the client knows about.
    pub fn leagues(&self) -> Vec<League> {
        League::all()
    }

    /// Fetch every season of a league with the relative URL of its page.
    #[instrument(skip(self, league))]
    pub async fn get_current_seasons(&self, league: impl Into<Value>) -> Result<SeasonUrls> {
        let league = League::resolve(&league.into())?;
        fbref_scraper::seasons::get_current_seasons(&self.requester, league).await
    }

    /// Fetch the top scorer of every season of a league.
    #[instrument(skip(self, league))]
    pub async fn get_top_scorers(&self, league: impl Into<Value>) -> Result<TopScorers> {
        let league = League::resolve(&league.into())?;
        fbref_scraper::top_scorers::get_top_scorers(&self.requester, league).await
    }

    /// Fetch one season's top scorer along with their percentile table.
    ///
    /// `season` is formatted as on fbref, e.g. `"2023-2024"` or `"2022"`.
    #[instrument(skip(self, league))]
    pub async fn get_top_scorer(
        &self,
        league: impl Into<Value>,
        season: &str,
    ) -> Result<BestScorer> {
        let league = League::resolve(&league.into())?;
        fbref_scraper::top_scorers::get_best_scorer(&self.requester, league, season).await
    }

    /// Fetch a raw page, subject to the same pacing and status handling as
    /// every other request.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<HttpResponse> {
        self.requester.fetch(url).await
    }
}
