use thiserror::Error;

/// Failures of the configuration, registry and host layers.
///
/// Transformations never fail; only resolving a pipeline or reading the
/// record stream can.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown transformation: {0}")]
    UnknownTransformation(String),

    #[error("no pipeline configured for stream: {0}")]
    UnknownStream(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid JSON: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: expected a JSON object, found {found}")]
    NotAnObject { line: usize, found: &'static str },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
