//! Core implementation of the Markdown processor.
//!
//! Holds the rendering pipeline of [`MarkdownProcessor`]: parse with comrak,
//! collect headings from the AST, then format the same tree as HTML.
use std::{fs, io, path::Path};

use comrak::{
  Arena,
  nodes::{AstNode, NodeHeading, NodeValue},
  options::Options,
  parse_document,
};
use log::{error, trace};

use super::types::{MarkdownOptions, MarkdownProcessor};
use crate::{
  error::RenderError,
  types::{Header, MarkdownResult},
};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub const fn new(options: MarkdownOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown to HTML, extracting headers and title.
  #[must_use]
  pub fn render(&self, markdown: &str) -> MarkdownResult {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let (headers, title) = collect_headers(root);
    let html = format_fragment(root, &options);

    trace!(
      "Rendered {} bytes of markdown into {} bytes of HTML",
      markdown.len(),
      html.len()
    );

    MarkdownResult {
      html,
      headers,
      title,
    }
  }

  /// Read a Markdown file and render it.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::NotFound`] if `path` does not exist and
  /// [`RenderError::Io`] for any other read failure.
  pub fn render_file(&self, path: &Path) -> Result<MarkdownResult, RenderError> {
    let content = fs::read_to_string(path).map_err(|e| {
      if e.kind() == io::ErrorKind::NotFound {
        RenderError::NotFound(path.to_path_buf())
      } else {
        RenderError::Io {
          path:   path.to_path_buf(),
          source: e,
        }
      }
    })?;

    Ok(self.render(&content))
  }

  /// Extract headers and title from the markdown content.
  #[must_use]
  pub fn extract_headers(
    &self,
    content: &str,
  ) -> (Vec<Header>, Option<String>) {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, content, &options);
    collect_headers(root)
  }

  /// Build comrak options from `MarkdownOptions`.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    options.extension.table = self.options.tables;
    if self.options.gfm {
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
      options.extension.footnotes = true;
    }
    options.extension.header_ids = None;
    options.render.r#unsafe = self.options.unsafe_html;
    options
  }
}

/// Walk the tree and collect every heading, taking the first H1 as title.
fn collect_headers<'a>(
  root: &'a AstNode<'a>,
) -> (Vec<Header>, Option<String>) {
  let mut headers = Vec::new();
  let mut found_title = None;

  for node in root.descendants() {
    if let NodeValue::Heading(NodeHeading { level, .. }) =
      &node.data.borrow().value
    {
      let text = extract_inline_text(node).trim().to_string();
      if *level == 1 && found_title.is_none() {
        found_title = Some(text.clone());
      }
      headers.push(Header {
        text,
        level: *level,
      });
    }
  }

  (headers, found_title)
}

fn format_fragment<'a>(root: &'a AstNode<'a>, options: &Options) -> String {
  let mut html_output = String::new();
  if let Err(e) = comrak::format_html(root, options, &mut html_output) {
    error!("Failed to format markdown as HTML: {e}");
    html_output.clear();
  }
  html_output
}

/// Concatenate the plain text of a node's inline children.
pub fn extract_inline_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(t) => text.push_str(&t.literal),
      NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
      NodeValue::Link(..)
      | NodeValue::Emph
      | NodeValue::Strong
      | NodeValue::Strikethrough => {
        text.push_str(&extract_inline_text(child));
      },
      _ => {},
    }
  }
  text
}
