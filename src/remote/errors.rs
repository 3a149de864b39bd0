use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("Network response was not ok ({0})")]
    Status(StatusCode),
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to build resource url: {0}")]
    Url(#[from] url::ParseError),
}
