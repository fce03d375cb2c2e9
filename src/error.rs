use std::path::PathBuf;

/// Failures outside the parser itself. Parsing never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("failed to encode graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown diagram dialect: {0}")]
    UnknownDialect(String),
}
