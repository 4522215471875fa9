use indexmap::IndexMap;
use serde::Serialize;

use crate::model::League;

/// `"{league} season {year}"` → that season's top scorer, in page order.
pub type TopScorers = IndexMap<String, TopScorerRecord>;

/// The top scorer of one season as listed on a league's history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopScorerRecord {
    pub season: String,
    pub name: String,
    /// Goal count exactly as displayed.
    pub goals: String,
    pub stats_url: String,
    pub club: String,
}

/// One row of a player's percentile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedStat {
    pub statistic: String,
    pub per90: String,
    pub percentile: String,
}

/// A season's top scorer together with their percentile table.
#[derive(Debug, Clone, Serialize)]
pub struct BestScorer {
    pub league: League,
    pub season: String,
    pub scorer: TopScorerRecord,
    pub stats: Vec<DetailedStat>,
}

/// Key under which a season's top scorer is stored in [`TopScorers`].
pub fn top_scorer_key(league: &str, season: &str) -> String {
    format!("{league} season {season}")
}
