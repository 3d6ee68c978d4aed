//! Errors reported by the command line tool

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("--output needs exactly one input file, found {0}")]
    OutputWithMany(usize),

    #[error("--output and --in-place cannot be combined")]
    OutputWithInPlace,
}

pub type Result<T> = std::result::Result<T, Error>;
