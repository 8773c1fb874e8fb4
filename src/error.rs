//! Error handling for create-wp-theme.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scaffolding run or one of its steps.
///
/// Missing customization markers are not errors; they are collected as
/// [`crate::customize::FieldFailure`] entries instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed project metadata, raised before anything touches the filesystem
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Filesystem failure while checking, clearing or copying
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The manifest is not a well-formed JSON object
    #[error("Failed to parse '{}': {source}.", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An exclusion rule could not be compiled
    #[error("Pattern error: {0}.")]
    PatternError(String),

    /// An external process could not be started
    #[error("Process error: {0}.")]
    ProcessError(String),

    /// Interactive confirmation failed
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
