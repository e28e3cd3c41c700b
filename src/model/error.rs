//! Error types for vscroll.
//!
//! Errors use `thiserror` and compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping all domain-specific failures
//!   - [`WindowError`] - Invalid list geometry (fatal, raised at configuration time)
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`InputError`] - Record file failures (file not found, IO)
//!   - [`LoggingError`] - Log file setup failures
//!   - [`TuiError`] - Terminal failures inside the event loop
//!   - `std::io::Error` - Other terminal failures
//!
//! # Error Recovery Strategy
//!
//! Out-of-range scroll offsets and empty lists are never errors: the windowing
//! engine clamps them. Malformed record lines are logged and skipped. Only
//! geometry, config, input and terminal failures reach the top level.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use crate::view_state::types::WindowError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use vscroll::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _records = read_records()?;
///     Ok(())
/// }
/// # fn read_records() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// A list was configured with an unusable geometry.
    ///
    /// **Recovery**: none. Fix the configured item height and restart.
    #[error("Invalid list geometry: {0}")]
    Window(#[from] WindowError),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to read the record file.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The terminal UI failed while running.
    #[error("{0}")]
    Tui(#[from] TuiError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading a record file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified record file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use vscroll::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Generic I/O error reading the record file.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A record line that was skipped while loading.
///
/// Non-fatal: the line is logged and loading continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line is not valid JSON or not a JSON object.
    #[error("line {line}: {message}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// The object has no usable `id` field.
    #[error("line {line}: missing or invalid \"id\" (expected string or non-negative integer)")]
    MissingId {
        /// 1-based line number.
        line: usize,
    },

    /// Another record already uses this id.
    #[error("line {line}: duplicate id {id}")]
    DuplicateId {
        /// 1-based line number.
        line: usize,
        /// The repeated id.
        id: String,
    },
}

impl RecordError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::Malformed { line, .. }
            | Self::MissingId { line }
            | Self::DuplicateId { line, .. } => *line,
        }
    }
}
