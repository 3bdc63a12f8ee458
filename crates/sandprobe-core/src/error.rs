use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{source}")]
    Filesystem { path: PathBuf, source: io::Error },
    #[error("{source}")]
    Launch { command: PathBuf, source: io::Error },
    #[error("{source}")]
    Allocation {
        requested: usize,
        source: TryReserveError,
    },
}
