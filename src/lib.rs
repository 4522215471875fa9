//! Scrape football statistics from [fbref.com](https://fbref.com).
//!
//! [`FbrefClient`] lists a league's seasons, the top scorer of every season
//! and the percentile table of one season's top scorer. Requests are spaced
//! by a minimum interval ([`ClientConfig::wait_time`]) and failures are
//! reported as [`FbrefError`] without retrying.

pub use ::scraper::Html;
pub use client::FbrefClient;
pub use config::{BrowserProfile, ClientConfig};
pub use error::{FbrefError, Result};
pub use fbref_scraper::player_stats::extract_detailed_stats;
pub use fbref_scraper::seasons::extract_seasons;
pub use fbref_scraper::top_scorers::extract_top_scorers;
pub use model::*;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

mod client;
mod config;
mod error;
mod fbref_scraper;
pub mod model;
mod rate_limit;
mod transport;
