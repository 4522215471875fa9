use ::scraper::{ElementRef, Selector};
use tracing::{debug, instrument};

use crate::error::{FbrefError, Result};
use crate::fbref_scraper::{self, element_text, player_stats, Html, Requester};
use crate::model::{absolute_url, top_scorer_key, BestScorer, League, TopScorerRecord, TopScorers};
use crate::transport::Transport;

const UNKNOWN_CLUB: &str = "Unknown";

#[instrument(skip(requester))]
pub(crate) async fn get_top_scorers<T: Transport>(
    requester: &Requester<T>,
    league: League,
) -> Result<TopScorers> {
    let url = league.history_url();
    let document = fbref_scraper::get_document(requester, &url).await?;
    let scorers = extract_top_scorers(&document, &league.to_string())?;
    debug!(count = scorers.len(), "parsed top scorers");
    Ok(scorers)
}

/// Fetch the history page, pick `season`'s top scorer and fetch their
/// percentile table.
#[instrument(skip(requester))]
pub(crate) async fn get_best_scorer<T: Transport>(
    requester: &Requester<T>,
    league: League,
    season: &str,
) -> Result<BestScorer> {
    let mut scorers = get_top_scorers(requester, league).await?;
    let key = top_scorer_key(&league.to_string(), season);
    let scorer = scorers
        .shift_remove(&key)
        .ok_or(FbrefError::SeasonNotFound { key })?;

    let stats = player_stats::get_detailed_stats(requester, &scorer.stats_url).await?;
    debug!(player = %scorer.name, stats = stats.len(), "parsed best scorer");

    Ok(BestScorer {
        league,
        season: season.to_string(),
        scorer,
        stats,
    })
}

/// Collect the top scorer of every season row on a history page.
///
/// Rows lacking a season cell, a linked scorer or the goal count are
/// skipped. Keys are `"{league} season {year}"`.
pub fn extract_top_scorers(document: &Html, league: &str) -> Result<TopScorers> {
    let selectors = RowSelectors::new()?;
    let row_selector = Selector::parse("tr")?;

    let scorers = document
        .select(&row_selector)
        .filter_map(|row| parse_scorer_row(&row, &selectors))
        .map(|record| (top_scorer_key(league, &record.season), record))
        .collect();
    Ok(scorers)
}

struct RowSelectors {
    year: Selector,
    scorer: Selector,
    link: Selector,
    goals: Selector,
    club: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            year: Selector::parse(r#"[data-stat="year_id"], [data-stat="year"]"#)?,
            scorer: Selector::parse(r#"td[data-stat="top_scorers"]"#)?,
            link: Selector::parse("a")?,
            goals: Selector::parse("span")?,
            club: Selector::parse(r#"td[data-stat="champ"]"#)?,
        })
    }
}

fn parse_scorer_row(row: &ElementRef, selectors: &RowSelectors) -> Option<TopScorerRecord> {
    let season = element_text(&row.select(&selectors.year).next()?);
    let scorer_cell = row.select(&selectors.scorer).next()?;
    let link = scorer_cell.select(&selectors.link).next()?;
    let href = link.value().attr("href")?;
    let goals = element_text(&scorer_cell.select(&selectors.goals).next()?);

    let club = row
        .select(&selectors.club)
        .next()
        .map(|cell| parse_club(&element_text(&cell)))
        .unwrap_or_else(|| UNKNOWN_CLUB.to_string());

    Some(TopScorerRecord {
        season,
        name: element_text(&link),
        goals,
        stats_url: absolute_url(href),
        club,
    })
}

/// `"Manchester City - 91"` → `"Manchester City"`.
fn parse_club(text: &str) -> String {
    let club = text.split('-').next().unwrap_or_default().trim();
    if club.is_empty() {
        UNKNOWN_CLUB.to_string()
    } else {
        club.to_string()
    }
}
