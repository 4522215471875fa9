use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::error::{FbrefError, Result};
use crate::fbref_scraper::BASE_URL;

/// A competition known to the lookup table.
///
/// The string form (`"EPL"`, `"La Liga"`, ...) is the league key accepted by
/// [`crate::FbrefClient`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum League {
    #[strum(serialize = "EPL")]
    #[serde(rename = "EPL")]
    PremierLeague,
    #[strum(serialize = "Championship")]
    #[serde(rename = "Championship")]
    Championship,
    #[strum(serialize = "La Liga")]
    #[serde(rename = "La Liga")]
    LaLiga,
    #[strum(serialize = "Serie A")]
    #[serde(rename = "Serie A")]
    SerieA,
    #[strum(serialize = "Bundesliga")]
    #[serde(rename = "Bundesliga")]
    Bundesliga,
    #[strum(serialize = "Ligue 1")]
    #[serde(rename = "Ligue 1")]
    Ligue1,
    #[strum(serialize = "Eredivisie")]
    #[serde(rename = "Eredivisie")]
    Eredivisie,
    #[strum(serialize = "Primeira Liga")]
    #[serde(rename = "Primeira Liga")]
    PrimeiraLiga,
    #[strum(serialize = "MLS")]
    #[serde(rename = "MLS")]
    MajorLeagueSoccer,
    #[strum(serialize = "Champions League")]
    #[serde(rename = "Champions League")]
    ChampionsLeague,
    #[strum(serialize = "Europa League")]
    #[serde(rename = "Europa League")]
    EuropaLeague,
    #[strum(serialize = "Copa Libertadores")]
    #[serde(rename = "Copa Libertadores")]
    CopaLibertadores,
    #[strum(serialize = "World Cup")]
    #[serde(rename = "World Cup")]
    WorldCup,
}

impl League {
    /// Every league in the lookup table.
    pub fn all() -> Vec<League> {
        League::iter().collect()
    }

    /// The key of every league in the lookup table.
    pub fn keys() -> Vec<String> {
        League::iter().map(|l| l.to_string()).collect()
    }

    /// fbref's numeric competition id.
    pub fn comp_id(self) -> u16 {
        match self {
            League::PremierLeague => 9,
            League::Championship => 10,
            League::LaLiga => 12,
            League::SerieA => 11,
            League::Bundesliga => 20,
            League::Ligue1 => 13,
            League::Eredivisie => 23,
            League::PrimeiraLiga => 32,
            League::MajorLeagueSoccer => 22,
            League::ChampionsLeague => 8,
            League::EuropaLeague => 19,
            League::CopaLibertadores => 14,
            League::WorldCup => 1,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            League::PremierLeague => "Premier-League",
            League::Championship => "Championship",
            League::LaLiga => "La-Liga",
            League::SerieA => "Serie-A",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue-1",
            League::Eredivisie => "Eredivisie",
            League::PrimeiraLiga => "Primeira-Liga",
            League::MajorLeagueSoccer => "Major-League-Soccer",
            League::ChampionsLeague => "Champions-League",
            League::EuropaLeague => "Europa-League",
            League::CopaLibertadores => "Copa-Libertadores",
            League::WorldCup => "World-Cup",
        }
    }

    /// The page listing every season of this league.
    pub fn history_url(self) -> String {
        format!(
            "{BASE_URL}/en/comps/{}/history/{}-Seasons",
            self.comp_id(),
            self.slug()
        )
    }

    /// Look up a league by its key.
    pub fn from_key(key: &str) -> Result<League> {
        League::from_str(key).map_err(|_| FbrefError::InvalidLeague {
            league: key.to_string(),
            valid: League::keys(),
        })
    }

    /// Validate an untyped league argument.
    ///
    /// Non-strings are rejected with [`FbrefError::TypeMismatch`] before the
    /// key is looked up.
    pub fn resolve(value: &Value) -> Result<League> {
        let key = value.as_str().ok_or(FbrefError::TypeMismatch {
            found: json_type_name(value),
        })?;
        League::from_key(key)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_history_url() {
        assert_eq!(
            League::LaLiga.history_url(),
            "https://fbref.com/en/comps/12/history/La-Liga-Seasons"
        );
        assert_eq!(
            League::PremierLeague.history_url(),
            "https://fbref.com/en/comps/9/history/Premier-League-Seasons"
        );
    }

    #[test]
    fn test_keys_round_trip_through_from_key() {
        for league in League::all() {
            assert_eq!(League::from_key(&league.to_string()).unwrap(), league);
        }
    }

    #[test]
    fn test_unknown_key_reports_key_and_known_set() {
        for key in ["Premier League", "epl", "", "Serie B"] {
            match League::from_key(key) {
                Err(FbrefError::InvalidLeague { league, valid }) => {
                    assert_eq!(league, key);
                    assert_eq!(valid, League::keys());
                    assert_eq!(valid.len(), League::all().len());
                }
                other => panic!("expected InvalidLeague for {key:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_rejects_non_strings_before_lookup() {
        for value in [json!(12), json!(null), json!(true), json!(["EPL"]), json!({"league": "EPL"})] {
            assert!(matches!(
                League::resolve(&value),
                Err(FbrefError::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_serializes_as_league_key() {
        assert_eq!(serde_json::to_value(League::PremierLeague).unwrap(), json!("EPL"));
        for league in League::all() {
            let value = serde_json::to_value(league).unwrap();
            assert_eq!(value, json!(league.to_string()));
            assert_eq!(League::resolve(&value).unwrap(), league);
            assert_eq!(serde_json::from_value::<League>(value).unwrap(), league);
        }
    }

    #[test]
    fn test_resolve_string() {
        assert_eq!(League::resolve(&json!("EPL")).unwrap(), League::PremierLeague);
        assert!(matches!(
            League::resolve(&json!("Narnia Premier")),
            Err(FbrefError::InvalidLeague { .. })
        ));
    }
}
