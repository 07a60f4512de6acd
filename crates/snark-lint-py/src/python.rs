//! Python language frontend using Tree-sitter.
//!
//! Maps the concrete Python grammar onto the simplified core tree. The
//! mapping is statement-level: expressions are not represented, except
//! that comments are pulled out of whatever subtree they appear in, and
//! compound statements without a dedicated node kind become
//! [`NodeKind::Other`] so that nesting context survives.

use tree_sitter::{Language, Node, Parser};

use snark_lint_core::{LoopKind, NodeKind, ParseError, SourceParser, SyntaxNode, SyntaxTree};

/// Clause kinds whose statements hang off an inner block.
const CLAUSE_KINDS: &[&str] = &[
    "elif_clause",
    "else_clause",
    "except_clause",
    "except_group_clause",
    "finally_clause",
    "case_clause",
];

/// Parses Python source and produces the simplified tree.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Creates a new Python parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn line(node: &Node<'_>) -> usize {
        node.start_position().row + 1
    }

    fn comment(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Comment {
                text: Self::text(node, src).to_owned(),
            },
            Self::line(node),
        )
    }

    /// Collects every comment in the subtree, in document order.
    fn collect_comments(node: &Node<'_>, src: &[u8], out: &mut Vec<SyntaxNode>) {
        if node.kind() == "comment" {
            out.push(Self::comment(node, src));
            return;
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            Self::collect_comments(&child, src, out);
        }
    }

    /// Converts the statements of a `module` or `block` node.
    ///
    /// `doc_ctx` marks bodies that can open with a docstring; the first
    /// non-comment statement is then eligible for the docstring flag.
    fn collect_body(container: &Node<'_>, src: &[u8], doc_ctx: bool) -> Vec<SyntaxNode> {
        let mut out = Vec::new();
        let mut awaiting_first = doc_ctx;
        let mut cursor = container.walk();
        for child in container.named_children(&mut cursor) {
            let first = awaiting_first;
            if child.kind() != "comment" {
                awaiting_first = false;
            }
            Self::collect_statement(&child, src, first, &mut out);
        }
        out
    }

    /// Converts one statement-level grammar node.
    fn collect_statement(node: &Node<'_>, src: &[u8], first_stmt: bool, out: &mut Vec<SyntaxNode>) {
        match node.kind() {
            "comment" => out.push(Self::comment(node, src)),
            "function_definition" => out.push(Self::convert_function(node, src)),
            "class_definition" => out.push(Self::convert_class(node, src)),
            "decorated_definition" => {
                let mut cursor = node.walk();
                for part in node.named_children(&mut cursor) {
                    match part.kind() {
                        "function_definition" | "class_definition" => {
                            Self::collect_statement(&part, src, false, out);
                        }
                        _ => Self::collect_comments(&part, src, out),
                    }
                }
            }
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                out.push(Self::convert_import(node, src));
            }
            "for_statement" => out.push(Self::convert_loop(node, src, LoopKind::For)),
            "while_statement" => out.push(Self::convert_loop(node, src, LoopKind::While)),
            "expression_statement" => {
                Self::convert_expression_statement(node, src, first_stmt, out);
            }
            // compound statements keep their statement subtree so loop
            // nesting and nested defs survive
            "if_statement" | "try_statement" | "with_statement" | "match_statement" => {
                out.push(SyntaxNode::with_children(
                    NodeKind::Other,
                    Self::line(node),
                    Self::collect_nested(node, src),
                ));
            }
            _ => Self::collect_comments(node, src, out),
        }
    }

    /// Flattens the blocks and clauses of a compound statement into one
    /// child list.
    fn collect_nested(node: &Node<'_>, src: &[u8]) -> Vec<SyntaxNode> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "block" {
                out.extend(Self::collect_body(&child, src, false));
            } else if CLAUSE_KINDS.contains(&child.kind()) {
                out.extend(Self::collect_nested(&child, src));
            } else {
                Self::collect_comments(&child, src, &mut out);
            }
        }
        out
    }

    fn convert_function(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned())
            .unwrap_or_default();
        let params = node
            .child_by_field_name("parameters")
            .map_or_else(Vec::new, |p| Self::param_names(&p, src));

        let mut children = Vec::new();
        if let Some(parameters) = node.child_by_field_name("parameters") {
            Self::collect_comments(&parameters, src, &mut children);
        }
        if let Some(body) = node.child_by_field_name("body") {
            children.extend(Self::collect_body(&body, src, true));
        }

        SyntaxNode::with_children(
            NodeKind::FunctionDef { name, params },
            Self::line(node),
            children,
        )
    }

    fn convert_class(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned())
            .unwrap_or_default();

        let mut children = Vec::new();
        if let Some(superclasses) = node.child_by_field_name("superclasses") {
            Self::collect_comments(&superclasses, src, &mut children);
        }
        if let Some(body) = node.child_by_field_name("body") {
            children.extend(Self::collect_body(&body, src, true));
        }

        SyntaxNode::with_children(NodeKind::ClassDef { name }, Self::line(node), children)
    }

    fn param_names(parameters: &Node<'_>, src: &[u8]) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = parameters.walk();
        for param in parameters.named_children(&mut cursor) {
            match param.kind() {
                "identifier" => names.push(Self::text(&param, src).to_owned()),
                "typed_parameter"
                | "default_parameter"
                | "typed_default_parameter"
                | "list_splat_pattern"
                | "dictionary_splat_pattern" => {
                    if let Some(id) = Self::first_identifier(&param) {
                        names.push(Self::text(&id, src).to_owned());
                    }
                }
                _ => {}
            }
        }
        names
    }

    fn first_identifier<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "identifier" {
                return Some(child);
            }
            if let Some(found) = Self::first_identifier(&child) {
                return Some(found);
            }
        }
        None
    }

    fn convert_import(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for name in node.children_by_field_name("name", &mut cursor) {
            match name.kind() {
                "aliased_import" => {
                    // `import os.path as p` binds the alias
                    if let Some(alias) = name.child_by_field_name("alias") {
                        names.push(Self::text(&alias, src).to_owned());
                    } else if let Some(inner) = name.child_by_field_name("name") {
                        names.push(Self::text(&inner, src).to_owned());
                    }
                }
                _ => names.push(Self::text(&name, src).to_owned()),
            }
        }
        let from_import = node.kind() != "import_statement";
        SyntaxNode::new(NodeKind::Import { names, from_import }, Self::line(node))
    }

    fn convert_loop(node: &Node<'_>, src: &[u8], kind: LoopKind) -> SyntaxNode {
        let mut children = Vec::new();
        // header expressions can hide trailing comments
        for field in ["left", "right", "condition"] {
            if let Some(part) = node.child_by_field_name(field) {
                Self::collect_comments(&part, src, &mut children);
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            children.extend(Self::collect_body(&body, src, false));
        }
        if let Some(alternative) = node.child_by_field_name("alternative") {
            children.extend(Self::collect_nested(&alternative, src));
        }
        SyntaxNode::with_children(NodeKind::Loop { kind }, Self::line(node), children)
    }

    fn convert_expression_statement(
        node: &Node<'_>,
        src: &[u8],
        first_stmt: bool,
        out: &mut Vec<SyntaxNode>,
    ) {
        let mut cursor = node.walk();
        for (i, child) in node.named_children(&mut cursor).enumerate() {
            if i == 0 {
                match child.kind() {
                    "string" | "concatenated_string" => {
                        out.push(SyntaxNode::new(
                            NodeKind::Str {
                                value: Self::string_value(&child, src),
                                docstring: first_stmt,
                            },
                            Self::line(&child),
                        ));
                        continue;
                    }
                    "assignment" => {
                        let mut targets = Vec::new();
                        Self::assign_targets(&child, src, &mut targets);
                        out.push(SyntaxNode::new(
                            NodeKind::Assign { targets },
                            Self::line(node),
                        ));
                        Self::collect_comments(&child, src, out);
                        continue;
                    }
                    _ => {}
                }
            }
            Self::collect_comments(&child, src, out);
        }
    }

    fn string_value(node: &Node<'_>, src: &[u8]) -> String {
        if node.kind() == "concatenated_string" {
            let mut value = String::new();
            let mut cursor = node.walk();
            for part in node.named_children(&mut cursor) {
                if part.kind() == "string" {
                    value.push_str(&Self::string_value(&part, src));
                }
            }
            return value;
        }
        let mut value = String::new();
        let mut cursor = node.walk();
        for part in node.named_children(&mut cursor) {
            if part.kind() == "string_content" {
                value.push_str(Self::text(&part, src));
            }
        }
        value
    }

    fn assign_targets(assign: &Node<'_>, src: &[u8], targets: &mut Vec<String>) {
        if let Some(left) = assign.child_by_field_name("left") {
            Self::target_identifiers(&left, src, targets);
        }
        // `a = b = 1` chains the next assignment on the right
        if let Some(right) = assign.child_by_field_name("right") {
            if right.kind() == "assignment" {
                Self::assign_targets(&right, src, targets);
            }
        }
    }

    fn target_identifiers(node: &Node<'_>, src: &[u8], out: &mut Vec<String>) {
        match node.kind() {
            "identifier" => out.push(Self::text(node, src).to_owned()),
            "pattern_list" | "tuple_pattern" | "list_pattern" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    Self::target_identifiers(&child, src, out);
                }
            }
            // attribute and subscript targets are not plain bindings
            _ => {}
        }
    }

    /// Locates the first error or missing token in document order.
    fn first_error(node: &Node<'_>) -> Option<(usize, String)> {
        if node.is_error() {
            return Some((Self::line(node), "unrecognized syntax".to_owned()));
        }
        if node.is_missing() {
            return Some((Self::line(node), format!("missing {}", node.kind())));
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !child.has_error() {
                continue;
            }
            if let Some(found) = Self::first_error(&child) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for PythonParser {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".py", ".pyi"]
    }

    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .expect("failed to set python language");

        let src = text.as_bytes();
        let Some(cst) = parser.parse(src, None) else {
            return Err(ParseError::new(None, "the parser gave up on this file"));
        };

        let root = cst.root_node();
        if root.has_error() {
            let (line, description) = Self::first_error(&root)
                .map_or((None, "invalid syntax".to_owned()), |(l, d)| (Some(l), d));
            return Err(ParseError::new(line, description));
        }

        let children = Self::collect_body(&root, src, true);
        Ok(SyntaxTree::new(SyntaxNode::with_children(
            NodeKind::Module,
            1,
            children,
        )))
    }
}
