use ::scraper::Selector;
use tracing::{debug, instrument};

use crate::error::{FbrefError, Result};
use crate::fbref_scraper::{self, element_text, Html, Requester};
use crate::model::DetailedStat;
use crate::transport::Transport;

const PERCENTILE_TABLE: &str = "scout_summary";

#[instrument(skip(requester))]
pub(crate) async fn get_detailed_stats<T: Transport>(
    requester: &Requester<T>,
    url: &str,
) -> Result<Vec<DetailedStat>> {
    let document = fbref_scraper::get_document(requester, url).await?;
    let stats = extract_detailed_stats(&document)?;
    debug!(count = stats.len(), "parsed percentile table");
    Ok(stats)
}

/// Read the player's percentile table.
///
/// Fails with [`FbrefError::TableNotFound`] when the page has no
/// `scout_summary*` table. The first row is the header; rows without all
/// three of the `statistic`, `per90` and `percentile` cells are skipped.
pub fn extract_detailed_stats(document: &Html) -> Result<Vec<DetailedStat>> {
    let table_selector = Selector::parse(&format!(r#"table[id^="{PERCENTILE_TABLE}"]"#))?;
    let row_selector = Selector::parse("tr")?;
    let statistic_selector = Selector::parse(r#"[data-stat="statistic"]"#)?;
    let per90_selector = Selector::parse(r#"[data-stat="per90"]"#)?;
    let percentile_selector = Selector::parse(r#"[data-stat="percentile"]"#)?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(FbrefError::TableNotFound {
            table: PERCENTILE_TABLE,
        })?;

    let stats = table
        .select(&row_selector)
        .skip(1)
        .filter_map(|row| {
            Some(DetailedStat {
                statistic: element_text(&row.select(&statistic_selector).next()?),
                per90: element_text(&row.select(&per90_selector).next()?),
                percentile: element_text(&row.select(&percentile_selector).next()?),
            })
        })
        .collect();
    Ok(stats)
}
