/// Command dispatch: a closed registry mapping command names to handlers.
///
/// Each command declares an ordered parameter schema. Arguments are checked
/// against it before the handler runs, so a handler never sees the wrong
/// number of arguments.
pub mod errors;
pub mod tree_to_txt;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::RunContext;

pub use errors::{ArgumentError, CommandError, DispatchError};

/// Signature shared by all command handlers.
pub type Handler = fn(&BoundArgs, &RunContext) -> Result<(), CommandError>;

/// What a positional parameter refers to.
///
/// Every kind binds to a path. The kind only describes the parameter in
/// `--list-commands`; `bind` does not touch the filesystem. Whether a
/// `Directory` argument exists and is a directory is checked by the command
/// that reads it, which reports `TreeError::PathNotFound` /
/// `TreeError::NotADirectory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// An existing directory to read from.
    Directory,
    /// A file path to write to.
    File,
}

impl ParamKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

/// One positional parameter of a command.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub help: &'static str,
}

/// A registered command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub params: &'static [ParamSpec],
    pub run: Handler,
}

impl CommandSpec {
    /// Parameter names formatted for messages, e.g. `source> <destination`.
    #[must_use]
    pub fn usage(&self) -> String {
        self.params
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join("> <")
    }

    /// Check `args` against the schema and bind them to parameter names.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError` on a count mismatch or an empty argument.
    pub fn bind(&self, args: &[String]) -> Result<BoundArgs, ArgumentError> {
        if args.len() != self.params.len() {
            return Err(ArgumentError::Count {
                expected: self.params.len(),
                got: args.len(),
                usage: self.usage(),
            });
        }

        let values = self
            .params
            .iter()
            .zip(args)
            .map(|(param, value)| {
                if value.is_empty() {
                    Err(ArgumentError::Empty { param: param.name })
                } else {
                    Ok((param.name, PathBuf::from(value)))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoundArgs { values })
    }
}

/// Arguments validated against a [`CommandSpec`], addressed by parameter name.
#[derive(Debug, Clone)]
pub struct BoundArgs {
    values: Vec<(&'static str, PathBuf)>,
}

impl BoundArgs {
    /// Path bound to parameter `name`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::Undeclared` if the schema has no such parameter.
    pub fn path(&self, name: &str) -> Result<&Path, ArgumentError> {
        self.values
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.as_path())
            .ok_or_else(|| ArgumentError::Undeclared {
                param: name.to_owned(),
            })
    }
}

/// Commands shipped with the binary.
pub static BUILTIN_COMMANDS: &[CommandSpec] = &[tree_to_txt::SPEC];

/// A closed set of commands, resolved by exact name.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandSpec],
}

impl Registry {
    #[must_use]
    pub fn new(commands: &'static [CommandSpec]) -> Self {
        Self { commands }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_COMMANDS)
    }

    #[must_use]
    pub fn commands(&self) -> &'static [CommandSpec] {
        self.commands
    }

    /// Look up a command by exact name.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownCommand` if no command has this name.
    pub fn resolve(&self, name: &str) -> Result<&'static CommandSpec, DispatchError> {
        let commands = self.commands;
        commands
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| DispatchError::UnknownCommand {
                name: name.to_owned(),
            })
    }

    /// Resolve `name`, validate `args`, and run the command.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` for an unknown name, rejected arguments, or a
    /// failing handler. Nothing runs unless resolution and binding succeed.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        ctx: &RunContext,
    ) -> Result<(), DispatchError> {
        let spec = self.resolve(name)?;
        debug!("Resolved command '{}' with {} argument(s)", spec.name, args.len());

        let bound = spec.bind(args).map_err(|source| DispatchError::Arguments {
            command: spec.name,
            source,
        })?;

        (spec.run)(&bound, ctx).map_err(|source| DispatchError::CommandFailed {
            command: spec.name,
            source,
        })
    }
}
