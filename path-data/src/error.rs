//! Error types associated with parsing path data.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::Command;

/// Errors that abort parsing of path data.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An argument token could not be parsed as a finite number.
    InvalidNumber {
        /// The command whose arguments contained the token.
        command: Command,
        /// Byte offset of the token in the path data.
        offset: usize,
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber {
                command,
                offset,
                token,
            } => write!(
                f,
                "invalid number '{token}' at offset {offset} in arguments of path command '{}'",
                command.letter()
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A command was followed by fewer arguments than it requires.
///
/// This is recoverable: the incomplete argument group is dropped and parsing
/// continues with the next command.
#[derive(Clone, Debug, PartialEq)]
pub struct ArityError {
    /// The command that would have consumed the arguments.
    ///
    /// For trailing groups after a move, this is the implied line command.
    pub command: Command,
    /// The number of arguments required by the command.
    pub expected: usize,
    /// The arguments that were present.
    pub args: Vec<f64>,
}

impl ArityError {
    pub(crate) fn new(command: Command, args: &[f64]) -> Self {
        Self {
            command,
            expected: command.arity(),
            args: args.to_vec(),
        }
    }

    /// Returns the number of arguments that were present.
    pub fn found(&self) -> usize {
        self.args.len()
    }
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid number of arguments for path command '{}': {} of {}: '",
            self.command.letter(),
            self.found(),
            self.expected
        )?;
        for (i, arg) in self.args.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str("'")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArityError {}
