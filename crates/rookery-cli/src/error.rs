//! Session command errors.

use rookery_core::LayoutError;

/// Errors that can occur while reading or parsing session commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A known command is missing an argument or has too many.
    #[error("malformed {command} command: {reason}")]
    Malformed {
        /// The command keyword.
        command: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The `position` layout text was rejected.
    #[error("invalid layout: {source}")]
    InvalidLayout {
        /// The underlying layout error.
        #[from]
        source: LayoutError,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// The depth value in `perft` could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `set` was given something other than `on` or `off`.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
