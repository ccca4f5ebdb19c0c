//! Things that can go wrong loading a scenario.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("couldn't read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad scenario file: {0}")]
    Parse(#[from] json5::Error),

    #[error("no prefab satellite named {0:?}")]
    UnknownPrefab(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
