//! Types for docsite-commonmark public API and internal use.

/// Represents a header in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
  /// Header text (inline content, no markdown formatting).
  pub text:  String,
  /// Header level (1-6).
  pub level: u8,
}

/// Result of Markdown processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownResult {
  /// Rendered HTML fragment.
  pub html: String,

  /// Extracted headers, in document order.
  pub headers: Vec<Header>,

  /// Title of the document, if found (first H1).
  pub title: Option<String>,
}
