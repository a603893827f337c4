use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeroError>;

#[derive(Debug, Error)]
pub enum HeroError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
