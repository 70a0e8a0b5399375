//! # docsite-commonmark
//!
//! Markdown processor behind the `docsite` documentation builder. It turns a
//! single Markdown document into an HTML fragment using `comrak`, and collects
//! the document's headings along the way.
//!
//! ## Quick Start
//!
//! ```rust
//! use docsite_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Hello World\n\nThis is **bold** text.");
//!
//! assert_eq!(result.title.as_deref(), Some("Hello World"));
//! assert!(result.html.starts_with("<h1>Hello World</h1>"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use docsite_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   gfm: true, // strikethrough, task lists, autolinks and footnotes
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```

mod error;
pub mod processor;
mod types;

pub use crate::{
  error::RenderError,
  processor::{MarkdownOptions, MarkdownProcessor},
  types::{Header, MarkdownResult},
};
