//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Message shown for malformed input (bad phone, blank name, surplus arguments).
pub const FORMAT_MESSAGE: &str = "Give me name and phone please.";

/// Message shown when a required contact does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Contact not found.";

/// Message shown when a command is missing positional arguments.
pub const ARITY_MESSAGE: &str = "Not enough arguments provided.";

/// Errors a command handler can fail with.
///
/// None of these reach the user as-is: the dispatcher turns each into a
/// fixed message with [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed argument value
    #[error("Invalid format: {0}")]
    Format(String),

    /// Contact lookup failed
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Phone lookup on an existing contact failed
    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// Too few positional arguments
    #[error("Not enough arguments: expected {expected}, got {got}")]
    Arity { expected: usize, got: usize },
}

impl CommandError {
    /// The fixed text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Format(_) => FORMAT_MESSAGE.to_string(),
            Self::NotFound(name) if name.is_empty() => NOT_FOUND_MESSAGE.to_string(),
            Self::NotFound(name) => format!("Contact {} not found.", name),
            Self::PhoneNotFound { name, phone } => {
                format!("Phone {} not found for {}.", phone, name)
            }
            Self::Arity { .. } => ARITY_MESSAGE.to_string(),
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Format(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
