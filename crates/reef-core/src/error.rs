//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by reef-core
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}
