//! Error handling for kitgen
//!
//! Every error is fatal for the run. Each variant carries a stable code and
//! a few recovery suggestions that the CLI prints next to the message.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for kitgen operations
pub type Result<T> = std::result::Result<T, KitError>;

/// Main error type for kitgen operations
#[derive(Error, Debug)]
pub enum KitError {
    // Configuration Errors
    #[error("{tool} not found (needed for format conversion)")]
    ToolNotFound { tool: String },

    #[error("Cannot find Hydrogen data ({path})")]
    HydrogenDataNotFound { path: PathBuf },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to read configuration file: {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sample folder not found: {path}")]
    SourceNotFound { path: PathBuf },

    // File System Errors
    #[error("Cannot create drum kit folder: {path}: {source}")]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read folder: {path}: {source}")]
    DirectoryReadError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Result Errors
    #[error("No files found")]
    NoSamplesFound,

    // Sample Errors
    #[error("Failed to copy {from} to {to}: {source}")]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion of {from} failed: {reason}")]
    ConversionFailed { from: PathBuf, reason: String },

    // Serialization Errors
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KitError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            KitError::ToolNotFound { .. } => "TOOL_NOT_FOUND",
            KitError::HydrogenDataNotFound { .. } => "HYDROGEN_DATA_NOT_FOUND",
            KitError::InvalidConfig { .. } => "INVALID_CONFIG",
            KitError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            KitError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            KitError::DirectoryCreateError { .. } => "DIRECTORY_CREATE_ERROR",
            KitError::DirectoryReadError { .. } => "DIRECTORY_READ_ERROR",
            KitError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            KitError::NoSamplesFound => "NO_SAMPLES_FOUND",
            KitError::CopyError { .. } => "COPY_ERROR",
            KitError::ConversionFailed { .. } => "CONVERSION_FAILED",
            KitError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the error comes from what the user asked for rather than
    /// from the filesystem or an external tool.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            KitError::ToolNotFound { .. }
                | KitError::HydrogenDataNotFound { .. }
                | KitError::InvalidConfig { .. }
                | KitError::SourceNotFound { .. }
                | KitError::NoSamplesFound
                | KitError::Serialization(_)
        )
    }

    /// Process exit status for this error: 2 when the request itself was
    /// wrong, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            2
        } else {
            1
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            KitError::ToolNotFound { .. } => vec![
                "Install SoX and make sure `sox` is on your PATH",
                "Or drop --to to copy the samples unchanged",
            ],
            KitError::HydrogenDataNotFound { .. } => vec![
                "Start Hydrogen once so it creates its data folder",
                "Or pass --output to write the kit somewhere else",
            ],
            KitError::NoSamplesFound => vec![
                "Check that --from matches the format of your samples",
                "Extensions are case-sensitive: `.WAV` does not match `.wav`",
            ],
            KitError::DirectoryCreateError { .. } | KitError::FileWriteError { .. } => vec![
                "Check that you can write to the destination folder",
                "Free up disk space",
            ],
            KitError::ConversionFailed { .. } => vec![
                "Check that the sample plays in another application",
                "Try again without --to to copy the file as is",
            ],
            _ => vec![],
        }
    }
}
