//! The simplified syntax tree that rules inspect.
//!
//! Parser frontends map their concrete grammar onto this closed set of
//! node kinds. Rules match on [`NodeKind`] exhaustively, so adding a kind
//! is a compile-time change that every rule has to acknowledge.

/// Loop flavor, so loop rules can pick the right flavor of mockery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    /// A `for` loop.
    For,
    /// A `while` loop.
    While,
}

/// The closed set of structural node kinds.
///
/// Anything the grammar produces that has no dedicated variant but may
/// still contain statements (conditionals, try blocks, with blocks) maps
/// to [`NodeKind::Other`] with its statement children preserved, so that
/// context such as loop nesting survives the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The root of a parsed file.
    Module,
    /// A function definition, `async` or not.
    FunctionDef {
        /// Declared function name.
        name: String,
        /// Parameter names in declaration order.
        params: Vec<String>,
    },
    /// A class definition.
    ClassDef {
        /// Declared class name.
        name: String,
    },
    /// One import statement with every name it binds.
    Import {
        /// Bound names, aliases resolved (`import os as o` binds `o`).
        names: Vec<String>,
        /// True for `from module import ...` forms.
        from_import: bool,
    },
    /// A loop statement.
    Loop {
        /// Which loop keyword introduced it.
        kind: LoopKind,
    },
    /// An assignment statement.
    Assign {
        /// Plain identifier targets, chained and unpacked targets included.
        targets: Vec<String>,
    },
    /// A string literal appearing as its own statement.
    Str {
        /// Literal content without quotes or prefixes.
        value: String,
        /// True when this string is the first statement of an enclosing
        /// module, function, or class body.
        docstring: bool,
    },
    /// A source comment.
    Comment {
        /// Raw comment text including the leading `#`.
        text: String,
    },
    /// Any other statement worth descending into.
    Other,
}

/// A node in the simplified tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// What this node is.
    pub kind: NodeKind,
    /// Starting line (1-indexed).
    pub line: usize,
    /// Child nodes in source order.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(kind: NodeKind, line: usize) -> Self {
        Self {
            kind,
            line,
            children: Vec::new(),
        }
    }

    /// Creates a node with children.
    #[must_use]
    pub fn with_children(kind: NodeKind, line: usize, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            line,
            children,
        }
    }

    /// The docstring of this node's body, if its first statement is a
    /// string literal.
    ///
    /// Only the parser marks strings as docstrings, so scanning children
    /// finds at most one.
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match &child.kind {
            NodeKind::Str {
                value,
                docstring: true,
            } => Some(value.as_str()),
            _ => None,
        })
    }

    /// The name this node contributes to the scope stack, for functions
    /// and classes.
    #[must_use]
    pub fn scope_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::FunctionDef { name, .. } | NodeKind::ClassDef { name } => Some(name),
            _ => None,
        }
    }
}

/// A parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    /// Root node, always [`NodeKind::Module`].
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Wraps a module root node.
    #[must_use]
    pub fn new(root: SyntaxNode) -> Self {
        Self { root }
    }
}
