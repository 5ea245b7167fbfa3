/// `tree_to_txt` command: save a directory tree as an indented text outline.
use std::path::Path;

use tracing::debug;

use crate::cli::RunContext;
use crate::cli::output::write_saved_tree;
use crate::files::write_file;
use crate::tree::{TreeError, TreeOptions, generate_tree, render};
use crate::types::SavedTreeOutput;

use super::{BoundArgs, CommandError, CommandSpec, ParamKind, ParamSpec};

/// Registry entry for `tree_to_txt`.
pub const SPEC: CommandSpec = CommandSpec {
    name: "tree_to_txt",
    about: "Render a directory tree as an indented text outline and save it to a file",
    params: &[
        ParamSpec {
            name: "source",
            kind: ParamKind::Directory,
            help: "Directory to scan",
        },
        ParamSpec {
            name: "destination",
            kind: ParamKind::File,
            help: "Text file to write (overwritten if present)",
        },
    ],
    run,
};

/// Run `dirtools tree_to_txt <source> <destination>`.
///
/// # Errors
///
/// Returns `CommandError` if the source cannot be walked or the destination
/// cannot be written. Nothing is written when the walk fails.
pub fn run(args: &BoundArgs, ctx: &RunContext) -> Result<(), CommandError> {
    let source = args.path("source")?;
    let destination = args.path("destination")?;

    let rendered = outline(source, &ctx.tree)?;
    write_file(&rendered.text, destination)?;

    write_saved_tree(
        &SavedTreeOutput {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            entries: rendered.entries,
            directories: rendered.directories,
        },
        ctx.json,
    );
    Ok(())
}

/// A rendered tree plus counts for reporting.
#[derive(Debug, Clone)]
pub struct Outline {
    pub text: String,
    /// Lines in `text`, root included.
    pub entries: usize,
    /// Directory lines in `text`, root included.
    pub directories: usize,
}

/// Walk `source` and render it.
///
/// # Errors
///
/// Returns `TreeError` when `source` is not a readable directory tree.
pub fn outline(source: &Path, opts: &TreeOptions) -> Result<Outline, TreeError> {
    let tree = generate_tree(source, opts)?;
    debug!("Rendering {} entries from {}", tree.len(), source.display());
    Ok(Outline {
        text: render(&tree),
        entries: tree.len(),
        directories: tree.iter_preorder().filter(|(_, node)| node.is_dir()).count(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::commands::{ArgumentError, DispatchError, Registry};

    fn sorted_ctx() -> RunContext {
        RunContext {
            tree: TreeOptions {
                sort: true,
                ..TreeOptions::default()
            },
            json: false,
        }
    }

    fn build_source(tmp: &TempDir) -> std::path::PathBuf {
        let root = tmp.path().join("root");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::create_dir_all(root.join("__pycache__").join("deeper")).unwrap();
        fs::write(root.join("__pycache__").join("x.pyc"), "").unwrap();
        fs::write(root.join("a.txt"), "").unwrap();
        fs::write(root.join("sub").join("b.txt"), "").unwrap();
        root
    }

    fn dispatch(args: &[&std::path::Path], ctx: &RunContext) -> Result<(), DispatchError> {
        let args: Vec<String> = args.iter().map(|p| p.display().to_string()).collect();
        Registry::builtin().dispatch("tree_to_txt", &args, ctx)
    }

    #[test]
    fn test_writes_outline() {
        let tmp = TempDir::new().unwrap();
        let source = build_source(&tmp);
        let dest = tmp.path().join("out").join("tree.txt");

        dispatch(&[&source, &dest], &sorted_ctx()).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "| root\n----| a.txt\n----| sub\n--------| b.txt\n"
        );
    }

    #[test]
    fn test_second_run_overwrites_with_same_content() {
        let tmp = TempDir::new().unwrap();
        let source = build_source(&tmp);
        let dest = tmp.path().join("tree.txt");

        dispatch(&[&source, &dest], &sorted_ctx()).unwrap();
        let first = fs::read_to_string(&dest).unwrap();
        dispatch(&[&source, &dest], &sorted_ctx()).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), first);
    }

    #[test]
    fn test_line_count_matches_entries() {
        let tmp = TempDir::new().unwrap();
        let source = build_source(&tmp);
        let rendered = outline(&source, &TreeOptions::default()).unwrap();
        assert_eq!(rendered.entries, 4);
        assert_eq!(rendered.directories, 2);
        assert_eq!(rendered.text.lines().count(), rendered.entries);
        assert!(!rendered.text.contains("__pycache__"));
        assert!(!rendered.text.contains("x.pyc"));
        assert!(!rendered.text.contains("deeper"));
    }

    #[test]
    fn test_single_argument_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let source = build_source(&tmp);

        let err = dispatch(&[&source], &sorted_ctx()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Arguments {
                source: ArgumentError::Count {
                    expected: 2,
                    got: 1,
                    ..
                },
                ..
            }
        ));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("tree.txt");

        let err = dispatch(&[&tmp.path().join("missing"), &dest], &sorted_ctx()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::CommandFailed {
                source: CommandError::Tree(TreeError::PathNotFound { .. }),
                ..
            }
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_destination_is_directory() {
        let tmp = TempDir::new().unwrap();
        let source = build_source(&tmp);

        let err = dispatch(&[&source, tmp.path()], &sorted_ctx()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::CommandFailed {
                source: CommandError::Write(_),
                ..
            }
        ));
        assert_eq!(err.exit_code(), 1);
    }
}
