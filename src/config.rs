use std::fmt;

use crate::error::FixtureError;

pub const API_HOST: &str = "v3.football.api-sports.io";
pub const API_KEY_ENV: &str = "CLYDETOOLS_API_KEY";

/// Scottish League Two.
pub const DEFAULT_LEAGUE_ID: &str = "184";
/// Clyde FC.
pub const DEFAULT_TEAM_ID: &str = "6762";
/// Also the number of display slots returned by `get_fixtures`.
pub const FIXTURE_COUNT: usize = 10;

/// Which fixtures to ask the api for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureQuery {
    pub league: String,
    pub team: String,
    pub next: usize,
}

impl Default for FixtureQuery {
    fn default() -> Self {
        Self {
            league: DEFAULT_LEAGUE_ID.to_string(),
            team: DEFAULT_TEAM_ID.to_string(),
            next: FIXTURE_COUNT,
        }
    }
}

/// Api-sports key. Only ever sourced from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn from_env() -> Result<Self, FixtureError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FixtureError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(FixtureError::Config(format!("{} is not set", API_KEY_ENV))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
