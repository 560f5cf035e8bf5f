//! Builds a [`Node`] tree from `pulldown-cmark` events.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TextMergeStream};

use crate::node::{Node, NodeKind};
use crate::util::{fence_language, heading_level_to_num};

/// Parser options used by [`parse_markdown`].
///
/// Tables, footnotes and front matter are recognized so that they can be
/// dropped cleanly instead of leaking into the output as literal text.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Parse markdown text into a document tree.
#[must_use]
pub fn parse_markdown(markdown: &str) -> Node {
    let parser = Parser::new_ext(markdown, parser_options());
    build_tree(TextMergeStream::new(parser))
}

/// Fold a stream of markdown events into a document tree.
///
/// Unbalanced streams are tolerated: stray end events are ignored and
/// unclosed containers are closed at the end of input.
pub fn build_tree<'a, I>(events: I) -> Node
where
    I: Iterator<Item = Event<'a>>,
{
    let mut builder = TreeBuilder::default();
    for event in events {
        builder.process_event(event);
    }
    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    root: Node,
    open: Vec<Node>,
}

impl TreeBuilder {
    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open.push(Node::new(node_kind(tag))),
            Event::End(_) => self.close(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push(Node::leaf(NodeKind::InlineCode, code.as_ref())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push(Node::leaf(NodeKind::RawHtml, html.as_ref()));
            }
            Event::FootnoteReference(label) => {
                self.push(Node::leaf(NodeKind::FootnoteReference, label.as_ref()));
            }
            Event::SoftBreak => self.push(Node::new(NodeKind::SoftBreak)),
            Event::HardBreak => self.push(Node::new(NodeKind::HardBreak)),
            Event::Rule => self.push(Node::new(NodeKind::Rule)),
            Event::TaskListMarker(_) => {
                self.push(Node::new(NodeKind::Unrecognized("TaskListMarker")));
            }
            Event::InlineMath(math) => {
                self.push(Node::leaf(NodeKind::Unrecognized("InlineMath"), math.as_ref()));
            }
            Event::DisplayMath(math) => {
                self.push(Node::leaf(NodeKind::Unrecognized("DisplayMath"), math.as_ref()));
            }
        }
    }

    /// Code block content accumulates in the block's literal; other text
    /// becomes a leaf.
    fn text(&mut self, text: &str) {
        if let Some(code) = self
            .open
            .last_mut()
            .filter(|node| matches!(node.kind, NodeKind::CodeBlock { .. }))
        {
            code.literal.push_str(text);
        } else {
            self.push(Node::text(text));
        }
    }

    fn push(&mut self, node: Node) {
        self.open
            .last_mut()
            .unwrap_or(&mut self.root)
            .children
            .push(node);
    }

    fn close(&mut self) {
        if let Some(node) = self.open.pop() {
            self.push(node);
        }
    }

    fn finish(mut self) -> Node {
        while !self.open.is_empty() {
            self.close();
        }
        self.root
    }
}

fn node_kind(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading {
            level: heading_level_to_num(level),
        },
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(kind) => NodeKind::CodeBlock {
            language: match kind {
                CodeBlockKind::Fenced(info) => fence_language(&info),
                CodeBlockKind::Indented => None,
            },
        },
        Tag::HtmlBlock => NodeKind::HtmlBlock,
        Tag::List(start) => NodeKind::List {
            ordered: start.is_some(),
        },
        Tag::Item => NodeKind::Item,
        Tag::FootnoteDefinition(_) => NodeKind::FootnoteDefinition,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Link {
            dest_url, title, ..
        } => NodeKind::Link {
            title: title.to_string(),
            destination: dest_url.to_string(),
        },
        Tag::Image { dest_url, .. } => NodeKind::Image {
            destination: dest_url.to_string(),
        },
        Tag::MetadataBlock(_) => NodeKind::Metadata,
        Tag::DefinitionList => NodeKind::Unrecognized("DefinitionList"),
        Tag::DefinitionListTitle => NodeKind::Unrecognized("DefinitionListTitle"),
        Tag::DefinitionListDefinition => NodeKind::Unrecognized("DefinitionListDefinition"),
        Tag::Strikethrough => NodeKind::Unrecognized("Strikethrough"),
        Tag::Superscript => NodeKind::Unrecognized("Superscript"),
        Tag::Subscript => NodeKind::Unrecognized("Subscript"),
    }
}
