use std::io;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamHttp { status: u16, url: String },
    #[error("upstream response shape: {0}")]
    UpstreamShape(String),
    #[error("derivation error: {0}")]
    Derivation(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::UpstreamShape(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
