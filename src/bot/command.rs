//! Line parsing and command resolution.

use crate::error::{CommandError, CommandResult};
use std::fmt;

/// A command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    Remove,
    Help,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept verbatim for logging
    Unknown(String),
}

impl Command {
    /// Resolve a lower-cased command token. Matching is exact.
    pub fn resolve(token: &str) -> Self {
        match token {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "delete" => Self::Delete,
            "remove" => Self::Remove,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Delete => "delete",
            Self::Remove => "remove",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Unknown(token) => token,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parsed input line: the command plus its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a raw line on whitespace into a command and its arguments.
///
/// The command token is lower-cased; arguments are kept as typed.
///
/// # Errors
///
/// Returns `CommandError::Arity` when the line has no tokens at all.
pub fn parse_input(line: &str) -> CommandResult<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens
        .next()
        .ok_or(CommandError::Arity {
            expected: 1,
            got: 0,
        })?
        .to_lowercase();

    Ok(ParsedInput {
        command: Command::resolve(&command),
        args: tokens.map(str::to_string).collect(),
    })
}
