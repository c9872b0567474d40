use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the soundtrack menu and its session tracker
#[derive(Debug, Error)]
pub enum SoundtrackError {
    #[error("configuration '{path}' unavailable: {reason}")]
    ConfigurationUnavailable { path: PathBuf, reason: String },

    #[error("Unknown state: {0}")]
    UnknownPreset(String),

    #[error("nothing to choose from: the list is empty")]
    EmptyList,

    #[error("failed to open {url} in a browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SoundtrackError>;
