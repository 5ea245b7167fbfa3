/// Errors raised at the dispatcher boundary and by command handlers.
use thiserror::Error;

use crate::files::WriteError;
use crate::tree::TreeError;

/// Arguments that do not fit a command's parameter schema.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// Wrong number of positional arguments.
    #[error("expected {expected} argument(s) <{usage}>, got {got}")]
    Count {
        expected: usize,
        got: usize,
        /// Parameter names joined for display, e.g. `source> <destination`.
        usage: String,
    },

    /// An argument was given as an empty string.
    #[error("argument <{param}> must not be empty")]
    Empty { param: &'static str },

    /// A handler asked for a parameter its schema does not declare.
    #[error("no parameter named <{param}>")]
    Undeclared { param: String },
}

/// Failures inside a command handler.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Everything [`super::Registry::dispatch`] can report.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered command has this name.
    #[error("The command '{name}' does not exist")]
    UnknownCommand {
        /// The name given on the command line.
        name: String,
    },

    /// Arguments were rejected before the command ran.
    #[error("Invalid arguments for the command {command}: {source}")]
    Arguments {
        command: &'static str,
        source: ArgumentError,
    },

    /// The command ran and failed.
    #[error("Error while executing the command {command}: {source}")]
    CommandFailed {
        command: &'static str,
        source: CommandError,
    },
}

impl DispatchError {
    /// Return the process exit code for this error. Never zero.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments { .. }
            | Self::CommandFailed {
                source: CommandError::Argument(_),
                ..
            } => 2,
            Self::UnknownCommand { .. }
            | Self::CommandFailed {
                source:
                    CommandError::Tree(
                        TreeError::PathNotFound { .. } | TreeError::NotADirectory { .. },
                    ),
                ..
            } => 4,
            Self::CommandFailed { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_messages_name_the_command() {
        let err = DispatchError::UnknownCommand {
            name: "foo".to_owned(),
        };
        assert_eq!(err.to_string(), "The command 'foo' does not exist");

        let err = DispatchError::CommandFailed {
            command: "tree_to_txt",
            source: CommandError::Tree(TreeError::PathNotFound {
                path: PathBuf::from("nowhere"),
            }),
        };
        assert_eq!(
            err.to_string(),
            "Error while executing the command tree_to_txt: Path 'nowhere' does not exist"
        );
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = [
            DispatchError::UnknownCommand {
                name: "foo".to_owned(),
            },
            DispatchError::Arguments {
                command: "tree_to_txt",
                source: ArgumentError::Empty { param: "source" },
            },
            DispatchError::CommandFailed {
                command: "tree_to_txt",
                source: CommandError::Write(WriteError::Write {
                    path: PathBuf::from("out.txt"),
                    source: std::io::Error::other("disk full"),
                }),
            },
        ];
        let codes: Vec<i32> = errors.iter().map(DispatchError::exit_code).collect();
        assert_eq!(codes, vec![4, 2, 1]);
    }
}
