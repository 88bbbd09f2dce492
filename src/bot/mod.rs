//! Command dispatcher for the assistant bot.
//!
//! [`Assistant`] owns the session's address book and a two-state session
//! (running or stopped). Every input line goes through
//! [`Assistant::handle_line`], which parses it, routes it to a handler and
//! converts any handler error into its fixed user-facing message. Errors
//! never escape the dispatcher and never end the session.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command, ParsedInput};

use crate::error::CommandResult;
use crate::models::AddressBook;
use tracing::{debug, warn};

/// Printed by the REPL when the session ends.
pub const GOODBYE: &str = "Good bye!";

/// Reply for commands the assistant does not know.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Message(String),
    /// The session is over; stop reading input.
    Exit,
}

/// The assistant session: an address book plus the dispatch state machine.
#[derive(Debug)]
pub struct Assistant {
    book: AddressBook,
    state: SessionState,
}

impl Assistant {
    pub fn new() -> Self {
        Self::with_book(AddressBook::new())
    }

    /// Start a session over an existing book.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book,
            state: SessionState::Running,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Handle one input line.
    ///
    /// Once stopped, every further line yields `Reply::Exit` without being
    /// looked at.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if self.state == SessionState::Stopped {
            return Reply::Exit;
        }

        let parsed = match parse_input(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Failed to parse input: {}", e);
                return Reply::Message(e.user_message());
            }
        };

        debug!(
            "Dispatching command: {} ({} args)",
            parsed.command,
            parsed.args.len()
        );

        match self.dispatch(&parsed) {
            Some(result) => Reply::Message(Self::respond(&parsed.command, result)),
            None => {
                self.state = SessionState::Stopped;
                debug!("Session stopped");
                Reply::Exit
            }
        }
    }

    /// Route a parsed line to its handler. `None` means the session ends.
    fn dispatch(&mut self, parsed: &ParsedInput) -> Option<CommandResult<String>> {
        let args = parsed.args.as_slice();
        let result = match &parsed.command {
            Command::Hello => Ok(handlers::hello()),
            Command::Help => Ok(handlers::help()),
            Command::Add => handlers::add_contact(args, &mut self.book),
            Command::Change => handlers::change_contact(args, &mut self.book),
            Command::Phone => handlers::show_phone(args, &self.book),
            Command::Remove => handlers::remove_phone(args, &mut self.book),
            Command::Delete => handlers::delete_contact(args, &mut self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::Exit => return None,
            Command::Unknown(token) => {
                debug!("Unknown command: {}", token);
                Ok(INVALID_COMMAND.to_string())
            }
        };
        Some(result)
    }

    /// Error boundary: every failure becomes its fixed message.
    fn respond(command: &Command, result: CommandResult<String>) -> String {
        match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Command '{}' failed: {}", command, e);
                e.user_message()
            }
        }
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}
