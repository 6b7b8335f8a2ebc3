use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Falls back to the default when a field is `null` or holds an unexpected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes fixtures one at a time, skipping entries that are not objects.
fn entries<'de, D>(deserializer: D) -> Result<Vec<FixtureEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!(response = %other, "fixtures response is not a list");
            return Ok(Vec::new());
        }
    };

    let mut fixtures = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(entry) => fixtures.push(entry),
            Err(e) => warn!(index, error = %e, "skipping undecodable fixture"),
        }
    }
    Ok(fixtures)
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureResponse {
    #[serde(deserialize_with = "lenient")]
    pub get: String,
    #[serde(deserialize_with = "lenient")]
    pub parameters: Parameters,
    // array when empty, object keyed by field when the request is rejected
    pub errors: Value,
    #[serde(deserialize_with = "lenient")]
    pub results: u32,
    #[serde(deserialize_with = "lenient")]
    pub paging: Paging,
    #[serde(deserialize_with = "entries")]
    pub response: Vec<FixtureEntry>,
}

impl FixtureResponse {
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    #[serde(deserialize_with = "lenient")]
    pub league: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub team: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub next: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    #[serde(deserialize_with = "lenient")]
    pub current: u32,
    #[serde(deserialize_with = "lenient")]
    pub total: u32,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureEntry {
    #[serde(deserialize_with = "lenient")]
    pub fixture: Fixture,
    #[serde(deserialize_with = "lenient")]
    pub league: League,
    #[serde(deserialize_with = "lenient")]
    pub teams: Teams,
    #[serde(deserialize_with = "lenient")]
    pub goals: Goals,
    #[serde(deserialize_with = "lenient")]
    pub score: Score,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(deserialize_with = "lenient")]
    pub referee: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub timezone: String,
    #[serde(deserialize_with = "lenient")]
    pub date: String,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient")]
    pub periods: Periods,
    #[serde(deserialize_with = "lenient")]
    pub venue: Venue,
    #[serde(deserialize_with = "lenient")]
    pub status: Status,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Periods {
    #[serde(deserialize_with = "lenient")]
    pub first: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub second: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "lenient")]
    pub long: String,
    #[serde(deserialize_with = "lenient")]
    pub short: String,
    #[serde(deserialize_with = "lenient")]
    pub elapsed: Option<u32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct League {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub country: String,
    #[serde(deserialize_with = "lenient")]
    pub logo: String,
    #[serde(deserialize_with = "lenient")]
    pub flag: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub season: u32,
    #[serde(deserialize_with = "lenient")]
    pub round: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teams {
    #[serde(deserialize_with = "lenient")]
    pub home: Team,
    #[serde(deserialize_with = "lenient")]
    pub away: Team,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub logo: String,
    #[serde(deserialize_with = "lenient")]
    pub winner: Option<bool>,
}

/// Home/away pair used for goals and every score period. Both sides stay `None` until played.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    #[serde(deserialize_with = "lenient")]
    pub home: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub away: Option<u32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    #[serde(deserialize_with = "lenient")]
    pub halftime: Goals,
    #[serde(deserialize_with = "lenient")]
    pub fulltime: Goals,
    #[serde(deserialize_with = "lenient")]
    pub extratime: Goals,
    #[serde(deserialize_with = "lenient")]
    pub penalty: Goals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_deserialize_sample() {
        let content = fs::read_to_string("fixtures_sample.json").expect("Failed to read sample file");
        let data: FixtureResponse = serde_json::from_str(&content).expect("Failed to deserialize");

        assert_eq!(data.get, "fixtures");
        assert_eq!(data.results, 3);
        assert_eq!(data.response.len(), 3);
        assert_eq!(data.parameters.team.as_deref(), Some("6762"));
        assert!(!data.has_errors());

        let first = &data.response[0];
        assert_eq!(first.teams.home.name, "Clyde");
        assert_eq!(first.fixture.venue.city.as_deref(), Some("Cumbernauld"));
        assert_eq!(first.fixture.status.short, "NS");
    }

    #[test]
    fn test_unplayed_fields_are_none() {
        let json = r#"{
            "fixture": {"id": 1, "referee": null, "date": "2024-08-03T14:00:00+00:00",
                        "status": {"long": "Not Started", "short": "NS", "elapsed": null}},
            "teams": {"home": {"id": 1, "name": "A", "winner": null},
                      "away": {"id": 2, "name": "B", "winner": null}},
            "goals": {"home": null, "away": null},
            "score": {"halftime": {"home": null, "away": null}}
        }"#;
        let entry: FixtureEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.fixture.referee, None);
        assert_eq!(entry.fixture.status.elapsed, None);
        assert_eq!(entry.teams.home.winner, None);
        assert_eq!(entry.goals, Goals::default());
        assert_eq!(entry.score.penalty.home, None);
    }

    #[test]
    fn test_missing_and_null_strings_default() {
        let json = r#"{"teams": {"home": {"name": null}}, "fixture": {"date": null}}"#;
        let entry: FixtureEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.teams.home.name, "");
        assert_eq!(entry.teams.away.name, "");
        assert_eq!(entry.fixture.date, "");
        assert_eq!(entry.league, League::default());
    }

    #[test]
    fn test_errors_object_is_reported() {
        let json = r#"{"errors": {"token": "Error/Missing application key."}, "response": []}"#;
        let data: FixtureResponse = serde_json::from_str(json).unwrap();
        assert!(data.has_errors());

        let empty: FixtureResponse = serde_json::from_str(r#"{"errors": []}"#).unwrap();
        assert!(!empty.has_errors());
    }

    #[test]
    fn test_nulls_and_wrong_types_fall_back_to_defaults() {
        let json = r#"{
            "results": null,
            "paging": null,
            "response": [
                {"fixture": {"id": 1, "date": "2024-08-10T14:00:00+00:00", "venue": null},
                 "league": {"id": 184, "season": "2024"},
                 "teams": {"home": {"id": "x", "name": "Clyde"}, "away": {"name": "Elgin City"}}},
                {"fixture": {"id": null, "timestamp": null, "status": null, "periods": null},
                 "teams": {"home": {"name": "Annan", "winner": "yes"}, "away": {"name": "Clyde"}},
                 "goals": null,
                 "score": {"halftime": null, "fulltime": {"home": "one", "away": 2}}}
            ]
        }"#;
        let data: FixtureResponse = serde_json::from_str(json).unwrap();

        assert_eq!(data.results, 0);
        assert_eq!(data.paging, Paging::default());
        assert_eq!(data.response.len(), 2);

        let first = &data.response[0];
        assert_eq!(first.teams.home.name, "Clyde");
        assert_eq!(first.teams.home.id, 0);
        assert_eq!(first.league.season, 0);
        assert_eq!(first.league.id, 184);
        assert_eq!(first.fixture.venue, Venue::default());

        let second = &data.response[1];
        assert_eq!(second.fixture.id, 0);
        assert_eq!(second.fixture.status, Status::default());
        assert_eq!(second.teams.home.winner, None);
        assert_eq!(second.score.fulltime.home, None);
        assert_eq!(second.score.fulltime.away, Some(2));
    }

    #[test]
    fn test_bad_entry_is_skipped_not_fatal() {
        let json = r#"{"response": [
            7,
            {"teams": {"home": {"name": "Clyde"}, "away": {"name": "Forfar"}}},
            "oops",
            {"teams": {"home": {"name": "Stranraer"}, "away": {"name": "Clyde"}}}
        ]}"#;
        let data: FixtureResponse = serde_json::from_str(json).unwrap();

        let homes: Vec<_> = data.response.iter().map(|e| e.teams.home.name.as_str()).collect();
        assert_eq!(homes, vec!["Clyde", "Stranraer"]);
    }

    #[test]
    fn test_response_that_is_not_a_list_is_empty() {
        let data: FixtureResponse = serde_json::from_str(r#"{"results": 1, "response": {"a": 1}}"#).unwrap();
        assert!(data.response.is_empty());
        assert_eq!(data.results, 1);
    }
}
