//! Error handling for robogen.
//! Defines the error type and result alias shared by the fixture generator
//! and the release patcher.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating fixtures or patching release files.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// File system error tied to a concrete path
    #[error("Failed to access '{}': {source}.", path.display())]
    FileSystemError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An identifier longer than the alphabet was requested
    #[error("Cannot draw {requested} distinct characters from an alphabet of {available}.")]
    NameLengthError { requested: usize, available: usize },

    /// No more sibling-unique identifiers can be produced
    #[error("Cannot allocate {count} unique names of length {min_length}..={max_length}.")]
    NameSpaceExhausted {
        count: usize,
        min_length: usize,
        max_length: usize,
    },

    /// Represents invalid generator or release configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),

    /// A patch rule did not match a single line of its target file
    #[error("Rule '{rule}' matched nothing in '{}'.", path.display())]
    UnmatchedRuleError { path: PathBuf, rule: String },

    /// A generated source file does not start with a valid header block
    #[error("Invalid header in '{}': {reason}.", path.display())]
    HeaderError { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn file_system(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileSystemError {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
