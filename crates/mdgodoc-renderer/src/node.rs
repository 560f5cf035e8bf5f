//! Markdown document tree consumed by the renderer.

/// Kind of a document tree node.
///
/// The set is closed: every kind the renderer knows about has a variant, and
/// anything a tree builder cannot map ends up as [`NodeKind::Unrecognized`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the tree.
    Document,
    /// ATX or setext heading, level 1-6.
    Heading { level: u8 },
    Paragraph,
    List { ordered: bool },
    Item,
    /// Plain text; the content is in [`Node::literal`].
    Text,
    Emphasis,
    Strong,
    Link { title: String, destination: String },
    /// Image; never rendered. Alt text is kept as children.
    Image { destination: String },
    /// Fenced or indented code; the content is in [`Node::literal`].
    CodeBlock { language: Option<String> },
    InlineCode,
    SoftBreak,
    HardBreak,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell,
    BlockQuote,
    HtmlBlock,
    RawHtml,
    Rule,
    FootnoteDefinition,
    FootnoteReference,
    /// Front matter / title block.
    Metadata,
    /// A construct the tree builder has no mapping for.
    Unrecognized(&'static str),
}

impl NodeKind {
    /// Short name used in logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Heading { .. } => "Heading",
            Self::Paragraph => "Paragraph",
            Self::List { .. } => "List",
            Self::Item => "Item",
            Self::Text => "Text",
            Self::Emphasis => "Emphasis",
            Self::Strong => "Strong",
            Self::Link { .. } => "Link",
            Self::Image { .. } => "Image",
            Self::CodeBlock { .. } => "CodeBlock",
            Self::InlineCode => "InlineCode",
            Self::SoftBreak => "SoftBreak",
            Self::HardBreak => "HardBreak",
            Self::Table => "Table",
            Self::TableHead => "TableHead",
            Self::TableBody => "TableBody",
            Self::TableRow => "TableRow",
            Self::TableCell => "TableCell",
            Self::BlockQuote => "BlockQuote",
            Self::HtmlBlock => "HtmlBlock",
            Self::RawHtml => "RawHtml",
            Self::Rule => "Rule",
            Self::FootnoteDefinition => "FootnoteDefinition",
            Self::FootnoteReference => "FootnoteReference",
            Self::Metadata => "Metadata",
            Self::Unrecognized(name) => *name,
        }
    }
}

/// One element of a markdown document tree.
///
/// Sibling order is the order of [`children`](Self::children); the renderer
/// never mutates a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// What this node is.
    pub kind: NodeKind,
    /// Literal payload. Set for text-like leaves; usually empty on containers.
    pub literal: String,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with no literal and no children.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            literal: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a leaf node carrying a literal payload.
    #[must_use]
    pub fn leaf(kind: NodeKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            children: Vec::new(),
        }
    }

    /// Create a container node.
    #[must_use]
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            literal: String::new(),
            children,
        }
    }

    /// Create a document root.
    #[must_use]
    pub fn document(children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Document, children)
    }

    /// Create a text leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    /// Whether this node is a link whose only content is an image.
    ///
    /// Follows the chain of single children, so `[**![alt](img)**](url)` counts
    /// as well as the plain `[![alt](img)](url)` status badge.
    #[must_use]
    pub fn is_badge(&self) -> bool {
        if !matches!(self.kind, NodeKind::Link { .. }) {
            return false;
        }

        let mut current = self;
        while let [only] = current.children.as_slice() {
            if matches!(only.kind, NodeKind::Image { .. }) {
                return true;
            }
            current = only;
        }
        false
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(NodeKind::Document)
    }
}
