use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Permission denied while accessing '{path}'.")]
    PermissionDeniedError { path: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDirMissingError { template_dir: String },

    #[error("File '{path}' does not exist.")]
    FileMissingError { path: String },

    #[error("Failed to parse manifest. Original error: {0}")]
    ManifestParseError(#[from] serde_json::Error),

    /// When an external command has executed but finished with an error.
    #[error("Command '{command}' failed with status {status}.\n{stderr}")]
    CommandFailedError { command: String, status: ExitStatus, stderr: String },

    #[error("Node.js version 20 or higher is required. Found version: {version}.")]
    NodeVersionError { version: String },

    /// Represents validation failures in user input.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

/// Convenience type alias for Results with jollof's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
