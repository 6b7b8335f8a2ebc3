use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("{0}")]
    Config(String),

    #[error("request to football api failed: {0}")]
    Network(#[from] reqwest::Error),
}
