use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build scripts and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - license files generated (missing data is only reported)
    Success = 0,
    /// Some dependencies have no license data and `--strict` was requested
    MissingLicenseData = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MissingLicenseData => write!(f, "Missing License Data (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license attribution.
///
/// Only `InvalidLicenseDeclaration`, `ConfigParse`, `DependencyGraphParse` and
/// the filesystem variants abort a run. Per-dependency problems
/// (`InvalidCoordinate`, `BlobDecode`, `ArchiveRead`) are demoted to
/// "missing license data" by the scanner.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("{message}\n\n💡 Hint: Every declared license needs a project name and at least one author")]
    InvalidLicenseDeclaration { message: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the config file is valid YAML and uses known license identifiers")]
    ConfigParse { path: PathBuf, details: String },

    #[error("Failed to parse dependency graph: {path}\nDetails: {details}\n\n💡 Hint: The dependency graph must be the JSON document exported by the build tool")]
    DependencyGraphParse { path: PathBuf, details: String },

    #[error("Invalid dependency coordinate: '{coordinate}'\nReason: {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },

    #[error("Failed to decode license blob: {details}")]
    BlobDecode { details: String },

    #[error("Failed to read archive: {path}\nDetails: {details}")]
    ArchiveRead { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    Security {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl AttributionError {
    pub fn blob_decode(details: impl Into<String>) -> Self {
        AttributionError::BlobDecode {
            details: details.into(),
        }
    }

    pub fn invalid_coordinate(coordinate: &str, reason: impl Into<String>) -> Self {
        AttributionError::InvalidCoordinate {
            coordinate: coordinate.to_string(),
            reason: reason.into(),
        }
    }
}
