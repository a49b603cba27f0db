//! CLI errors with structured context and sysexits.h-compliant exit codes.

use std::io;

use serde_json::Value;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the redraw CLI.
///
/// Terminal write failures carry the sink's `io::Error` unchanged; the
/// output layer below never wraps or retries them.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Terminal write failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("Stdin reader failed: {0}")]
    Stdin(String),

    #[error("Signal handler setup failed: {0}")]
    SignalSetup(String),

    #[error("Output serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns structured context about the error for debugging.
    pub fn context(&self) -> Value {
        match self {
            CliError::Terminal(e) => json!({
                "operation": "terminal_write",
                "reason": e.to_string()
            }),
            CliError::Stdin(reason) => json!({
                "operation": "stdin_read",
                "reason": reason
            }),
            CliError::SignalSetup(reason) => json!({
                "operation": "signal_setup",
                "reason": reason
            }),
            CliError::Json(e) => json!({
                "operation": "serialize",
                "reason": e.to_string()
            }),
        }
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            CliError::Terminal(_) => {
                "Writing to stdout failed. If output is piped, the reader may have closed the pipe."
                    .to_string()
            }
            CliError::Stdin(_) => {
                "Reading from stdin failed. Check whatever is feeding the demo input.".to_string()
            }
            CliError::SignalSetup(_) => {
                "Could not install signal handlers. Try again or check process limits.".to_string()
            }
            CliError::Json(_) => "Output could not be serialized. This is a bug.".to_string(),
        }
    }

    /// Returns whether this error is potentially transient and may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CliError::Terminal(_) | CliError::Stdin(_))
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Terminal(_) | CliError::Stdin(_) => 74, // EX_IOERR
            CliError::SignalSetup(_) => 71,                   // EX_OSERR
            CliError::Json(_) => 70,                          // EX_SOFTWARE
        }
    }

    /// Returns structured JSON representation of this error.
    pub fn to_json(&self) -> Value {
        json!({
            "message": self.to_string(),
            "retryable": self.is_retryable(),
            "context": self.context(),
            "suggestion": self.suggestion()
        })
    }
}
