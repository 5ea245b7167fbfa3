/// Directory tree domain layer: arena model, walker, text rendering.
pub mod build;
pub mod errors;
pub mod render;

pub use build::{TreeOptions, generate_tree};
pub use errors::TreeError;
pub use render::render;

/// Index of a node inside a [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);
}

/// What kind of filesystem entry a node stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A directory; children are kept in walk order.
    Directory { children: Vec<NodeId> },
    /// Anything that is not a directory. Always a leaf.
    File,
}

/// A single filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Single path component, or the base name of the scanned directory for the root.
    pub name: String,
    pub kind: NodeKind,
}

impl Node {
    /// Children of a directory node; empty for files.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File => &[],
        }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }
}

/// Arena-backed directory tree. The root directory always lives at [`NodeId::ROOT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only a root directory named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                name: name.into(),
                kind: NodeKind::Directory {
                    children: Vec::new(),
                },
            }],
        }
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Append a child under `parent` and return its id.
    ///
    /// Appending to a file node is a logic error and the child is left detached.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            kind,
        });
        match &mut self.nodes[parent.0].kind {
            NodeKind::Directory { children } => children.push(id),
            NodeKind::File => debug_assert!(false, "cannot attach a child to a file node"),
        }
        id
    }

    /// Sort the children of `parent` by name.
    pub fn sort_children(&mut self, parent: NodeId) {
        let mut children = match &mut self.nodes[parent.0].kind {
            NodeKind::Directory { children } => std::mem::take(children),
            NodeKind::File => return,
        };
        children.sort_by(|a, b| self.nodes[a.0].name.cmp(&self.nodes[b.0].name));
        if let NodeKind::Directory { children: slot } = &mut self.nodes[parent.0].kind {
            *slot = children;
        }
    }

    /// Depth-first, pre-order walk yielding `(depth, node)`; root is depth 0.
    #[must_use]
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter {
            tree: self,
            stack: vec![(NodeId::ROOT, 0)],
        }
    }
}

/// Iterator returned by [`Tree::iter_preorder`]. Uses an explicit stack, no recursion.
pub struct PreorderIter<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.get(id);
        self.stack
            .extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
        Some((depth, node))
    }
}
