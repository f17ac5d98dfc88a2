use std::path::PathBuf;
use thiserror::Error;
use xrayref::core::descriptors::ValidationError;
use xrayref::core::notation::ParseError;
use xrayref::engine::{ConfigError, LoadError, LookupError};
use xrayref::workflows::QueryError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    ResolverConfig(#[from] ConfigError),

    #[error(transparent)]
    Notation(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
