//! Contact Assistant - a console bot that manages an in-memory address book.
//!
//! The bot reads one command per line (`add`, `change`, `phone`, `all`, ...)
//! and answers with one line of text, or a block for listings.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: `Record` and the `AddressBook` that owns them
//! - **bot**: Line parsing, command dispatch and the error boundary
//! - **error**: Custom error types and the fixed user-facing messages
//! - **config**: Configuration management from environment variables

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use bot::{Assistant, Command, Reply, SessionState};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::{AddressBook, Record};
