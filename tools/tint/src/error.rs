use std::io;

use tint_core::UnknownColorizer;

/// Everything that can stop a `tint` invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("option `{0}` requires a value")]
    MissingValue(&'static str),

    #[error(transparent)]
    InvalidMode(#[from] UnknownColorizer),

    /// Opening or reading an input failed. `input` is the path, or `-`.
    #[error("{input}: {source}")]
    Read {
        input: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

impl CliError {
    /// `true` for errors in the command line itself (exit status 2).
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownOption(_) | CliError::MissingValue(_) | CliError::InvalidMode(_)
        )
    }

    /// `true` when the reader of our output went away (`tint … | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
