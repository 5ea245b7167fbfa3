/// Text outline rendering for a [`Tree`].
use std::fmt::Write as _;

use super::Tree;

/// Indentation unit repeated once per level of depth.
pub const INDENT_MARKER: &str = "----";

/// Separator written between the indentation and the entry name.
pub const NAME_PREFIX: &str = "| ";

/// Render `tree` as an indented outline, one `\n`-terminated line per node.
///
/// ```text
/// | root
/// ----| a.txt
/// ----| sub
/// --------| b.txt
/// ```
#[must_use]
pub fn render(tree: &Tree) -> String {
    let mut out = String::new();
    for (depth, node) in tree.iter_preorder() {
        for _ in 0..depth {
            out.push_str(INDENT_MARKER);
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{NAME_PREFIX}{}", node.name);
    }
    out
}
