//! Error types for Sitewright
//!
//! This module provides the error hierarchy shared by the section loader,
//! the renderers, and the catalog seeder, plus the CLI exit-code mapping.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for Sitewright CLI operations.
///
/// These codes follow Unix conventions. Seeding aborts with the generic
/// error code on the first failed insert.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (includes any seed failure)
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid JSON, unknown kind, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for Sitewright operations.
///
/// This enum aggregates all domain-specific errors and provides
/// a unified interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum SitewrightError {
    /// Section configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database seeding error
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SitewrightError {
    /// Returns the appropriate exit code for this error.
    ///
    /// Seed failures map to the generic error code: the seeder aborts the
    /// whole process on its first error with exit code 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Seed(_) => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Section configuration loading and validation errors.
///
/// These errors cover all failure modes while reading a section config
/// file and deserializing it into typed content records.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Column number where the error occurred (if available)
        column: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// The `kind` tag does not name a known section kind
    #[error("unknown section kind '{kind}'{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    UnknownKind {
        /// The unrecognized kind tag
        kind: String,
        /// Closest known kind by string distance, if any
        suggestion: Option<String>,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}")]
    ValidationFailed {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Configuration file exceeds the size limit
    #[error("config file too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual file size in bytes
        size: usize,
        /// Maximum accepted size in bytes
        limit: usize,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during section config validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// JSON path to the problematic field (e.g., "sections[2].content.plans[0]")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - failure that prevents the configuration from being used
    Error,
    /// Warning - potential issue that does not prevent loading
    Warning,
}

// ============================================================================
// Seed Errors
// ============================================================================

/// Database seeding errors.
///
/// The seeder performs straight-line inserts: the first error stops the
/// run, leaving the dataset partially seeded. There is no rollback.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Failed to open or create the database
    #[error("failed to open database '{path}': {source}")]
    Connect {
        /// Database path as given on the command line
        path: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// Failed to create a table
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    /// An insert failed
    #[error("insert into '{table}' failed: {source}")]
    Insert {
        /// Table the failed statement targeted
        table: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A JSON payload for a row failed to serialize
    #[error("failed to encode '{table}' payload: {source}")]
    Encode {
        /// Table the payload was meant for
        table: &'static str,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// A post-seed verification query failed
    #[error("verification query failed: {0}")]
    Verify(#[source] sqlx::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for Sitewright operations.
pub type Result<T> = std::result::Result<T, SitewrightError>;

// ============================================================================
// Tests
// ============================================================================
