//! Go package documentation renderer.

use crate::builder::parse_markdown;
use crate::error::RenderError;
use crate::node::{Node, NodeKind};
use crate::state::CommentWriter;
use crate::util::strip_trailing_space;

/// Bullet written before every list item.
const BULLET: &str = "• ";

/// Renders a document tree as Go package documentation.
///
/// The output is a line comment starting with `// Package <name> is the `,
/// continued by the rendered document, followed by `package <name>`.
///
/// The renderer itself is immutable: every [`render`](Self::render) call
/// starts from fresh traversal state, so one renderer can serve any number
/// of documents.
#[derive(Clone, Debug)]
pub struct GodocRenderer {
    package: String,
    suppress_badges: bool,
}

impl GodocRenderer {
    /// Create a renderer for the given package.
    ///
    /// `package` must already be a valid Go identifier. With
    /// `suppress_badges`, links whose only content is an image are dropped
    /// entirely.
    #[must_use]
    pub fn new(package: impl Into<String>, suppress_badges: bool) -> Self {
        Self {
            package: package.into(),
            suppress_badges,
        }
    }

    /// Package name written in the header and footer.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Whether badge links are dropped.
    #[must_use]
    pub fn suppresses_badges(&self) -> bool {
        self.suppress_badges
    }

    /// Render a document tree.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedNodeKind`] if the tree contains an
    /// [`NodeKind::Unrecognized`] node. No partial output is returned.
    pub fn render(&self, document: &Node) -> Result<Vec<u8>, RenderError> {
        let mut walk = Walk::new(self);
        walk.visit(document, 0)?;
        let output = walk.finish();

        tracing::debug!(
            package = %self.package,
            bytes = output.len(),
            "Rendered package documentation"
        );
        Ok(output)
    }

    /// Parse markdown text and render it.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render).
    pub fn render_markdown(&self, markdown: &str) -> Result<Vec<u8>, RenderError> {
        self.render(&parse_markdown(markdown))
    }
}

/// Traversal state for a single render.
struct Walk<'r> {
    renderer: &'r GodocRenderer,
    out: CommentWriter,
    list_depth: usize,
}

impl<'r> Walk<'r> {
    fn new(renderer: &'r GodocRenderer) -> Self {
        Self {
            renderer,
            out: CommentWriter::new(&renderer.package),
            list_depth: 0,
        }
    }

    fn finish(self) -> Vec<u8> {
        self.out.finish(&self.renderer.package)
    }

    /// End of a block: the first block that wrote anything closes the
    /// opening sentence.
    fn end_block(&mut self) {
        if self.out.has_written() {
            self.out.close_sentence();
        }
    }

    /// Visit `node`, the `index`-th child of its parent.
    fn visit(&mut self, node: &Node, index: usize) -> Result<(), RenderError> {
        tracing::trace!(kind = node.kind.name(), literal = %node.literal, "Visit node");

        match &node.kind {
            NodeKind::Document => self.children(node)?,
            NodeKind::Heading { .. } => {
                let leads = !self.out.has_written();
                self.out.out(&node.literal);
                self.children(node)?;
                if leads && self.out.has_written() {
                    // Heading text completes "Package x is the ...".
                    self.out.complete_sentence();
                }
                self.end_block();
                self.out.cr();
                self.out.cr();
            }
            NodeKind::Paragraph => {
                self.out.out(&node.literal);
                self.children(node)?;
                self.end_block();
                self.out.cr();
                self.out.cr();
            }
            NodeKind::List { .. } => {
                if self.list_depth > 0 {
                    self.end_block();
                    self.out.cr();
                }
                self.list_depth += 1;
                let result = self.children(node);
                self.list_depth -= 1;
                result?;
                self.out.cr();
            }
            NodeKind::Item => {
                if index > 0 {
                    self.out.cr();
                }
                self.out.out(BULLET);
                self.children(node)?;
                self.out.out(&node.literal);
                self.end_block();
                self.out.cr();
            }
            NodeKind::Text => self.text(&node.literal),
            NodeKind::SoftBreak => self.out.cr(),
            NodeKind::HardBreak => {
                self.out.cr();
                self.out.cr();
            }
            NodeKind::Emphasis => self.wrap(node, "*")?,
            NodeKind::Strong => self.wrap(node, "**")?,
            NodeKind::Link { title, destination } => self.link(node, title, destination)?,
            NodeKind::InlineCode => self.out.out(&node.literal),
            NodeKind::CodeBlock { .. } => self.code_block(&node.literal),
            NodeKind::Image { .. } => {
                // Images never render; alt text included.
            }
            NodeKind::Table
            | NodeKind::TableHead
            | NodeKind::TableBody
            | NodeKind::TableRow
            | NodeKind::TableCell
            | NodeKind::BlockQuote
            | NodeKind::HtmlBlock
            | NodeKind::RawHtml
            | NodeKind::Rule
            | NodeKind::FootnoteDefinition
            | NodeKind::FootnoteReference
            | NodeKind::Metadata => {
                // Not supported
            }
            NodeKind::Unrecognized(kind) => {
                return Err(RenderError::UnsupportedNodeKind { kind: *kind });
            }
        }

        Ok(())
    }

    fn children(&mut self, node: &Node) -> Result<(), RenderError> {
        for (index, child) in node.children.iter().enumerate() {
            self.visit(child, index)?;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.out.cr();
            }
            let (line, stripped) = strip_trailing_space(line);
            self.out.out(line);
            if stripped {
                self.out.space();
            }
        }
    }

    /// Emphasis and strong: separated from the preceding word, then wrapped
    /// in `marker`.
    fn wrap(&mut self, node: &Node, marker: &str) -> Result<(), RenderError> {
        self.out.space();
        self.out.out(marker);
        self.children(node)?;
        self.out.out(marker);
        Ok(())
    }

    fn link(&mut self, node: &Node, title: &str, destination: &str) -> Result<(), RenderError> {
        if self.renderer.suppress_badges && node.is_badge() {
            tracing::trace!(destination, "Skipping badge");
            return Ok(());
        }

        self.out.out(title);
        self.children(node)?;
        if !destination.is_empty() {
            self.out.space();
            self.out.out(&format!("({destination})"));
        }
        Ok(())
    }

    fn code_block(&mut self, code: &str) {
        // The period must not end up on a code line.
        if self.out.sentence_open() {
            self.out.close_sentence();
            self.out.cr();
            self.out.cr();
        }
        for line in code.lines() {
            if !line.is_empty() {
                self.out.out(&format!("  {line}"));
            }
            self.out.line_break();
        }
        self.out.line_break();
    }
}
