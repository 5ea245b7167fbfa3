/// Serializable output types written to stdout / stderr.
///
/// These are decoupled from the registry and tree types so the JSON shape
/// stays stable when internals change.
use serde::{Deserialize, Serialize};

use crate::commands::{CommandError, CommandSpec, DispatchError, Registry};
use crate::tree::TreeError;

/// Result of a successful `tree_to_txt` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTreeOutput {
    /// Directory that was scanned, as given.
    pub source: String,
    /// File that was written, as given.
    pub destination: String,
    /// Number of lines written (root included).
    pub entries: usize,
    /// How many of those lines are directories (root included).
    pub directories: usize,
}

/// One positional parameter in a command listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamOutput {
    pub name: String,
    /// `directory` or `file`.
    pub kind: String,
    pub help: String,
}

/// A registered command in a command listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInfoOutput {
    pub name: String,
    pub about: String,
    pub params: Vec<ParamOutput>,
}

impl From<&CommandSpec> for CommandInfoOutput {
    fn from(spec: &CommandSpec) -> Self {
        Self {
            name: spec.name.to_owned(),
            about: spec.about.to_owned(),
            params: spec
                .params
                .iter()
                .map(|p| ParamOutput {
                    name: p.name.to_owned(),
                    kind: p.kind.as_str().to_owned(),
                    help: p.help.to_owned(),
                })
                .collect(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable, single-line message naming the command.
    pub message: String,
    /// Known command names, for an unknown command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `DispatchError`.
    #[must_use]
    pub fn from_dispatch_error(err: &DispatchError, registry: &Registry) -> Self {
        let (code, candidates) = match err {
            DispatchError::UnknownCommand { .. } => (
                "unknown_command",
                Some(
                    registry
                        .commands()
                        .iter()
                        .map(|spec| spec.name.to_owned())
                        .collect(),
                ),
            ),
            DispatchError::Arguments { .. }
            | DispatchError::CommandFailed {
                source: CommandError::Argument(_),
                ..
            } => ("invalid_arguments", None),
            DispatchError::CommandFailed { source, .. } => (error_code(source), None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }
}

fn error_code(err: &CommandError) -> &'static str {
    match err {
        CommandError::Tree(TreeError::PathNotFound { .. }) => "path_not_found",
        CommandError::Tree(TreeError::NotADirectory { .. }) => "not_a_directory",
        CommandError::Tree(_) | CommandError::Write(_) => "io_error",
        CommandError::Argument(_) => "invalid_arguments",
    }
}
