use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use clyde_fixtures::{
    config::{DEFAULT_LEAGUE_ID, DEFAULT_TEAM_ID},
    get_fixtures_with, Clock, DataClient, FixedClock, FixtureQuery, SystemClock, FIXTURE_COUNT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// api-football league id
    #[arg(short, long, default_value = DEFAULT_LEAGUE_ID)]
    league: String,

    /// api-football team id
    #[arg(short, long, default_value = DEFAULT_TEAM_ID)]
    team: String,

    /// Pretend today is this date (YYYY-MM-DD) when working out the season
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print empty slots too
    #[arg(long)]
    all_slots: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let query = FixtureQuery {
        league: args.league,
        team: args.team,
        next: FIXTURE_COUNT,
    };
    let clock: Box<dyn Clock> = match args.date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let fixtures = get_fixtures_with(&DataClient::new(), &query, clock.as_ref())
        .await
        .context("could not load fixtures")?;

    for fixture in fixtures.iter().filter(|f| args.all_slots || !f.is_empty()) {
        println!("{}", fixture);
    }
    Ok(())
}
