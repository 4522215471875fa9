use ::scraper::error::SelectorErrorKind;

/// All errors that can occur during fbref scraping operations.
#[derive(thiserror::Error, Debug)]
pub enum FbrefError {
    /// The league argument was not a string.
    #[error("`league` must be a string such as \"EPL\", got {found}")]
    TypeMismatch { found: &'static str },

    /// The league is not in the lookup table.
    #[error("invalid league `{league}`, expected one of: {}", .valid.join(", "))]
    InvalidLeague { league: String, valid: Vec<String> },

    /// fbref answered with 429; the caller must back off.
    #[error("rate limited by fbref while fetching {url}")]
    RateLimited { url: String },

    /// The page does not exist or the upstream server is overloaded (404/504).
    #[error("request failed with status {status} for {url}")]
    RequestFailed {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Server returned any other non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// HTTP request failed (network, DNS, TLS, timeout, malformed URL, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// No top scorer is listed for the requested season.
    #[error("season not found: {key}")]
    SeasonNotFound { key: String },

    /// An expected table was not found on the page.
    #[error("table not found: {table}")]
    TableNotFound { table: &'static str },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),
}

impl<'a> From<SelectorErrorKind<'a>> for FbrefError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        FbrefError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FbrefError>;
