use crate::config::{ApiKey, FixtureQuery, API_HOST};
use crate::error::FixtureError;
use reqwest::{Client, Request};
use tracing::{debug, info, warn};

pub struct DataClient {
    client: Client,
    base_url: String,
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DataClient {
    pub fn new() -> Self {
        Self::with_base_url(Client::new(), format!("https://{}", API_HOST))
    }

    /// Points the client at another api root, e.g. a local stand-in server.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn fixtures_url(&self) -> String {
        format!("{}/fixtures", self.base_url)
    }

    /// Builds the authenticated GET for the next `query.next` fixtures without sending it.
    pub fn fixtures_request(
        &self,
        query: &FixtureQuery,
        season: &str,
        api_key: &ApiKey,
    ) -> Result<Request, FixtureError> {
        let next = query.next.to_string();
        let request = self
            .client
            .get(self.fixtures_url())
            .query(&[
                ("league", query.league.as_str()),
                ("season", season),
                ("team", query.team.as_str()),
                ("next", next.as_str()),
            ])
            .header("x-rapidapi-key", api_key.as_str())
            .header("x-rapidapi-host", API_HOST)
            .build()?;
        Ok(request)
    }

    /// Returns the raw response body whatever the status; decoding is left to the caller.
    pub async fn fetch_fixtures(
        &self,
        query: &FixtureQuery,
        season: &str,
        api_key: &ApiKey,
    ) -> Result<String, FixtureError> {
        let request = self.fixtures_request(query, season, api_key)?;
        info!(league = %query.league, team = %query.team, season, "fetching fixtures");
        debug!(url = %request.url(), "sending fixtures request");

        let resp = self.client.execute(request).await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = %status, "football api returned an error status");
        }

        let body = resp.text().await?;
        debug!(bytes = body.len(), "received fixtures body");
        Ok(body)
    }
}
