/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

use crate::logging::LogLevel;

/// dirtools — run small filesystem utilities by name.
///
/// Global options must come before the command name; everything after the
/// command is passed to it unchanged.
#[derive(Debug, Parser)]
#[command(
    name = "dirtools",
    about = "Run small filesystem utilities by name",
    version,
    arg_required_else_help = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    /// Verbosity of diagnostic logging on stderr.
    #[arg(long, short, value_name = "LEVEL", default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Print errors and results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Directory name to skip while walking (repeatable).
    /// Replaces the default list, which is `__pycache__`.
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Sort entries by name instead of keeping filesystem order.
    #[arg(long)]
    pub sort: bool,

    /// List the available commands and their parameters, then exit.
    #[arg(long)]
    pub list_commands: bool,

    /// Command to run (e.g. `tree_to_txt`) followed by its arguments.
    #[command(subcommand)]
    pub command: Option<Invocation>,
}

/// A command name plus raw arguments. Names are resolved by the command
/// registry, not by clap, so any name is accepted here.
#[derive(Debug, Subcommand)]
pub enum Invocation {
    #[command(external_subcommand)]
    Run(Vec<String>),
}

impl Cli {
    /// Command name and the arguments that follow it, if a command was given.
    #[must_use]
    pub fn invocation(&self) -> Option<(&str, &[String])> {
        match &self.command {
            Some(Invocation::Run(argv)) => argv
                .split_first()
                .map(|(name, args)| (name.as_str(), args)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dirtools").chain(argv.iter().copied()))
    }

    fn forwarded(cli: &Cli) -> (String, Vec<String>) {
        let (name, args) = cli.invocation().unwrap();
        (name.to_owned(), args.to_vec())
    }

    #[test]
    fn test_command_and_arguments() {
        let cli = parse(&["tree_to_txt", "src", "out/tree.txt"]).unwrap();
        let (name, args) = forwarded(&cli);
        assert_eq!(name, "tree_to_txt");
        assert_eq!(args, vec!["src", "out/tree.txt"]);
        assert!(!cli.sort);
        assert!(cli.exclude.is_empty());
    }

    #[test]
    fn test_unknown_command_name_is_accepted_by_parser() {
        let cli = parse(&["foo"]).unwrap();
        let (name, args) = forwarded(&cli);
        assert_eq!(name, "foo");
        assert!(args.is_empty());
    }

    #[test]
    fn test_arguments_after_command_are_forwarded_verbatim() {
        let cli = parse(&["tree_to_txt", "src", "--sort"]).unwrap();
        assert_eq!(forwarded(&cli).1, vec!["src", "--sort"]);
        assert!(!cli.sort);
    }

    #[test]
    fn test_known_flags_right_after_command_are_forwarded() {
        let cli = parse(&["tree_to_txt", "--sort", "a", "b"]).unwrap();
        assert_eq!(forwarded(&cli).1, vec!["--sort", "a", "b"]);
        assert!(!cli.sort);

        let cli = parse(&["tree_to_txt", "--help"]).unwrap();
        assert_eq!(forwarded(&cli).1, vec!["--help"]);

        let cli = parse(&["foo", "--json", "-x"]).unwrap();
        let (name, args) = forwarded(&cli);
        assert_eq!(name, "foo");
        assert_eq!(args, vec!["--json", "-x"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&[
            "--sort",
            "--exclude",
            "target",
            "--exclude",
            ".git",
            "--log-level",
            "debug",
            "tree_to_txt",
            "a",
            "b",
        ])
        .unwrap();
        assert!(cli.sort);
        assert_eq!(cli.exclude, vec!["target", ".git"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(forwarded(&cli).1, vec!["a", "b"]);
    }

    #[test]
    fn test_list_commands_needs_no_command() {
        let cli = parse(&["--list-commands"]).unwrap();
        assert!(cli.list_commands);
        assert!(cli.invocation().is_none());
    }

    #[test]
    fn test_flags_without_command_have_no_invocation() {
        let cli = parse(&["--sort"]).unwrap();
        assert!(cli.invocation().is_none());
    }
}
