use ::scraper::Selector;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::fbref_scraper::{self, element_text, Html, Requester};
use crate::model::{League, SeasonUrls};
use crate::transport::Transport;

#[instrument(skip(requester))]
pub(crate) async fn get_current_seasons<T: Transport>(
    requester: &Requester<T>,
    league: League,
) -> Result<SeasonUrls> {
    let url = league.history_url();
    let document = fbref_scraper::get_document(requester, &url).await?;
    let seasons = extract_seasons(&document)?;
    debug!(count = seasons.len(), "parsed seasons");
    Ok(seasons)
}

/// Collect every season header cell that links to a season page.
///
/// Cells are `th` elements carrying both a `data-stat` and a `class`
/// attribute. The label is the cell text and the value the link's `href`;
/// cells without a link are skipped.
pub fn extract_seasons(document: &Html) -> Result<SeasonUrls> {
    let cell_selector = Selector::parse("th[data-stat][class]")?;
    let link_selector = Selector::parse("a")?;

    let seasons = document
        .select(&cell_selector)
        .filter_map(|cell| {
            let href = cell.select(&link_selector).next()?.value().attr("href")?;
            Some((element_text(&cell), href.to_string()))
        })
        .collect();
    Ok(seasons)
}
