use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The input is missing or unreadable.
    #[error("couldn't read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The input isn't valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    #[error("couldn't write the report: {0}")]
    Write(#[source] io::Error),
}

/// A command line value that isn't one of the accepted words.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected one of {expected}, got {got:?}")]
pub struct ChoiceError {
    pub got: String,
    pub expected: &'static str,
}
