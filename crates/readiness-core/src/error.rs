//! Core error types for readiness-core.
//!
//! This module defines the error hierarchy using thiserror so that every
//! failure reaches the presentation host synchronously and with context.

use std::path::PathBuf;
use thiserror::Error;

use crate::assessment::SessionPhase;

/// Core error type for readiness-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session/assessment errors
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Report rendering errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the assessment session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// The answer label is not one of the five Likert options
    #[error("Invalid answer label '{label}': expected one of Strongly Disagree, Disagree, Neutral, Agree, Strongly Agree")]
    InvalidAnswerLabel { label: String },

    /// Numeric answer outside 1..=5
    #[error("Invalid answer value {value}: expected 1-5")]
    InvalidAnswerValue { value: i64 },

    /// Results requested before the assessment finished
    #[error("Cannot access {operation} before the assessment is complete (currently {phase})")]
    PrematureAccess {
        operation: &'static str,
        phase: SessionPhase,
    },

    /// Answer submitted outside of an in-progress session
    #[error("No question is awaiting an answer (currently {phase})")]
    NotInProgress { phase: SessionPhase },

    /// `submit_selected` called without a selected answer
    #[error("No answer has been selected for the current question")]
    NoPendingAnswer,

    /// Report export is switched off in the configuration
    #[error("Report export is disabled")]
    ReportExportDisabled,
}

/// Report-specific errors.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing into the in-memory document buffer failed
    #[error("Failed to render {format} report: {message}")]
    RenderFailed {
        format: &'static str,
        message: String,
    },

    /// Unknown report format name
    #[error("Unknown report format '{0}': expected pdf or markdown")]
    UnknownFormat(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", .path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", .path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Configuration directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DataDir(String),
}

impl From<std::fmt::Error> for ReportError {
    fn from(err: std::fmt::Error) -> Self {
        ReportError::RenderFailed {
            format: "text",
            message: err.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
