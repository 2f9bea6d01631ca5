use std::{io, path::PathBuf};

use slide_core::validate::{Field, ValidationError};
use thiserror::Error;

/// Errors that end a `slide` run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read parameter file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid parameter file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("input ended before the {0} was entered")]
    InputClosed(Field),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "plot")]
    #[error("failed to open the chart window: {0}")]
    Plot(#[from] eframe::Error),
}
