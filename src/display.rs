use crate::config::FIXTURE_COUNT;
use crate::model::{FixtureEntry, FixtureResponse};
use chrono::DateTime;
use tracing::{debug, warn};

pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Decodes an api body. A body that isn't a fixtures payload yields an empty response.
pub fn decode_response(body: &str) -> FixtureResponse {
    let response: FixtureResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "could not decode fixtures response");
            return FixtureResponse::default();
        }
    };
    if response.has_errors() {
        warn!(errors = %response.errors, "football api reported errors");
    }
    response
}

/// RFC 3339 timestamp as DD-MM-YYYY, in the timestamp's own offset.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(e) => {
            debug!(date = raw, error = %e, "unparseable fixture date");
            UNKNOWN_DATE.to_string()
        }
    }
}

pub fn display_fixture(entry: &FixtureEntry) -> String {
    format!(
        "{} vs {} - {}",
        entry.teams.home.name,
        entry.teams.away.name,
        format_date(&entry.fixture.date)
    )
}

pub fn display_fixtures(response: &FixtureResponse) -> Vec<String> {
    response
        .response
        .iter()
        .take(FIXTURE_COUNT)
        .map(display_fixture)
        .collect()
}

/// Lays fixtures out in a fixed set of slots; unused slots stay empty.
pub fn into_slots(fixtures: Vec<String>) -> [String; FIXTURE_COUNT] {
    let mut slots: [String; FIXTURE_COUNT] = Default::default();
    for (slot, fixture) in slots.iter_mut().zip(fixtures) {
        *slot = fixture;
    }
    slots
}
