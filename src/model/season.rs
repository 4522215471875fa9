use indexmap::IndexMap;
use itertools::Itertools;

use crate::fbref_scraper::BASE_URL;

/// Season label → relative URL of that season's stats page, in page order.
///
/// A label seen twice keeps its first position and its last URL.
pub type SeasonUrls = IndexMap<String, String>;

/// The fully-qualified URL stored for `season`.
pub fn season_url(seasons: &SeasonUrls, season: &str) -> Option<String> {
    seasons.get(season).map(|path| absolute_url(path))
}

/// Prefix a site-relative path with the fbref origin.
pub fn absolute_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{BASE_URL}{path}")
    } else {
        path.to_string()
    }
}

/// Parse a `"YYYY"` or `"YYYY-YYYY"` season label into its years.
pub fn season_years(label: &str) -> Option<(u16, Option<u16>)> {
    let label = label.trim();
    if let Ok(year) = label.parse() {
        return Some((year, None));
    }
    let (start, end) = label.split('-').collect_tuple()?;
    Some((start.parse().ok()?, Some(end.parse().ok()?)))
}
