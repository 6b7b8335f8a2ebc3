//! Upcoming fixtures for one team in one league, fetched from api-football and rendered as
//! `"Home vs Away - DD-MM-YYYY"` lines.

pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod model;
pub mod season;

pub use config::{ApiKey, FixtureQuery, FIXTURE_COUNT};
pub use data::DataClient;
pub use error::FixtureError;
pub use season::{current_season_year, season_year, Clock, FixedClock, SystemClock};

use tracing::info;

/// Next fixtures for Clyde in League Two this season.
pub async fn get_fixtures() -> Result<[String; FIXTURE_COUNT], FixtureError> {
    get_fixtures_with(&DataClient::new(), &FixtureQuery::default(), &SystemClock).await
}

/// Reads the api key from the environment first; nothing is sent without one.
pub async fn get_fixtures_with<C: Clock + ?Sized>(
    client: &DataClient,
    query: &FixtureQuery,
    clock: &C,
) -> Result<[String; FIXTURE_COUNT], FixtureError> {
    let api_key = ApiKey::from_env()?;
    get_fixtures_for(client, query, clock, &api_key).await
}

pub async fn get_fixtures_for<C: Clock + ?Sized>(
    client: &DataClient,
    query: &FixtureQuery,
    clock: &C,
    api_key: &ApiKey,
) -> Result<[String; FIXTURE_COUNT], FixtureError> {
    let season = current_season_year(clock);

    let body = client.fetch_fixtures(query, &season, api_key).await?;
    let fixtures = display::display_fixtures(&display::decode_response(&body));
    info!(count = fixtures.len(), "fixtures ready");

    Ok(display::into_slots(fixtures))
}
