//! Markdown to Go package documentation renderer.
//!
//! This crate turns a markdown document into the text of a `doc.go` file: a
//! `// Package <name> is the ...` comment followed by the `package` clause.
//!
//! # Architecture
//!
//! Rendering happens in two steps:
//! - [`parse_markdown`] / [`build_tree`]: fold `pulldown-cmark` events into a
//!   [`Node`] tree
//! - [`GodocRenderer`]: walk the tree once and emit comment text
//!
//! Trees can also be built by hand, which is how callers plug in a different
//! markdown parser.
//!
//! # Example
//!
//! ```
//! use mdgodoc_renderer::GodocRenderer;
//!
//! let renderer = GodocRenderer::new("widgets", true);
//! let output = renderer
//!     .render_markdown("# Widget factory\n\nMakes widgets.")
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "// Package widgets is the Widget factory\n//\n// Makes widgets.\npackage widgets\n"
//! );
//! ```

mod builder;
mod error;
mod node;
mod renderer;
mod state;
mod util;

pub use builder::{build_tree, parse_markdown, parser_options};
pub use error::RenderError;
pub use node::{Node, NodeKind};
pub use renderer::GodocRenderer;
