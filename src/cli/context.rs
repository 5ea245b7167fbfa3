/// Runtime settings handed to every command.
use crate::tree::TreeOptions;

use super::Cli;

/// Configuration derived from the command line. There is no config file and
/// no environment lookup; this struct is the whole of it.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Walker settings used by tree commands.
    pub tree: TreeOptions,
    /// Emit results and errors as JSON.
    pub json: bool,
}

impl From<&Cli> for RunContext {
    fn from(cli: &Cli) -> Self {
        let mut tree = TreeOptions {
            sort: cli.sort,
            ..TreeOptions::default()
        };
        if !cli.exclude.is_empty() {
            tree.exclude.clone_from(&cli.exclude);
        }
        Self {
            tree,
            json: cli.json,
        }
    }
}
