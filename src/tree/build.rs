/// Directory walker producing an arena [`Tree`].
///
/// The walk uses an explicit work stack instead of recursion, so tree depth is
/// bounded by memory rather than the call stack. Symlinked directories are
/// followed and there is no cycle detection: a link pointing back up the tree
/// makes the walk run until memory is exhausted.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::errors::TreeError;
use super::{NodeId, NodeKind, Tree};

/// Directory names skipped when no exclusion list is configured.
pub const DEFAULT_EXCLUDES: &[&str] = &["__pycache__"];

/// Options controlling the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Directory names skipped entirely (neither listed nor entered).
    /// Only directories are matched; a file with the same name is kept.
    pub exclude: Vec<String>,
    /// Sort children by name at every level. When false, children keep the
    /// order the filesystem enumerates them in, which varies across platforms.
    pub sort: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDES.iter().map(|&s| s.to_owned()).collect(),
            sort: false,
        }
    }
}

impl TreeOptions {
    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}

/// Walk `root` and build its tree.
///
/// # Errors
///
/// Returns `TreeError::PathNotFound` / `TreeError::NotADirectory` when `root`
/// is unusable, and `TreeError::ReadDir` when any directory in the tree cannot
/// be listed. No partial tree is returned.
pub fn generate_tree(root: &Path, opts: &TreeOptions) -> Result<Tree, TreeError> {
    ensure_directory(root)?;

    let mut tree = Tree::new(root_name(root));
    let mut pending: Vec<(PathBuf, NodeId)> = vec![(root.to_path_buf(), NodeId::ROOT)];

    while let Some((dir, id)) = pending.pop() {
        debug!("Scanning directory {}", dir.display());
        let entries = fs::read_dir(&dir).map_err(|source| TreeError::ReadDir {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| TreeError::ReadDir {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            let name = entry.file_name().into_string().unwrap_or_else(|raw| {
                let lossy = raw.to_string_lossy().into_owned();
                warn!(
                    "Entry name in {} is not valid UTF-8, writing it as '{lossy}'",
                    dir.display()
                );
                lossy
            });

            if path.is_dir() {
                if opts.is_excluded(&name) {
                    debug!("Skipping excluded directory {}", path.display());
                    continue;
                }
                let child = tree.push_child(
                    id,
                    name,
                    NodeKind::Directory {
                        children: Vec::new(),
                    },
                );
                pending.push((path, child));
            } else {
                tree.push_child(id, name, NodeKind::File);
            }
        }

        if opts.sort {
            tree.sort_children(id);
        }
    }

    debug!("Built tree '{}' with {} nodes", tree.root().name, tree.len());
    Ok(tree)
}

fn ensure_directory(root: &Path) -> Result<(), TreeError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(TreeError::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(TreeError::PathNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(TreeError::Metadata {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Base name of the absolute form of `root`.
///
/// Paths without a final normal component (`..`, `/`) fall back to the
/// canonical path's name, then to the full display string.
fn root_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    if let Some(name) = absolute.file_name() {
        return name.to_string_lossy().into_owned();
    }
    absolute
        .canonicalize()
        .ok()
        .and_then(|canonical| {
            canonical
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| absolute.display().to_string())
}
