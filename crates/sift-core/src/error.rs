use std::path::PathBuf;

/// Errors of the ambient layers (configuration, logging).
///
/// Matching and scoring never fail: invalid regexes fall back to literal
/// matching and oversized inputs get sentinel scores instead.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("config.matching={0}")]
    InvalidMatchingMethod(#[from] sift_query::ParseMatchingMethodError),
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Failed to create log directory: {0}")]
    CreateLogDir(#[source] std::io::Error),
    #[error("Failed to initialize tracing: {0}")]
    TracingInit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
