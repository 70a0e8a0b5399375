//! Type definitions for the Markdown processor.
//!
//! # Examples
//!
//! ```
//! use docsite_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   tables: false,
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! assert!(!processor.options().tables);
//! ```

/// Options for configuring the Markdown processor.
///
/// The defaults describe plain Markdown with tables: no heading ids, no
/// autolinking and raw HTML passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct MarkdownOptions {
  /// Enable pipe tables.
  pub tables: bool,

  /// Enable the remaining GitHub Flavored Markdown (GFM) extensions:
  /// strikethrough, task lists, autolinks and footnotes.
  pub gfm: bool,

  /// Pass raw HTML and dangerous URLs through instead of scrubbing them.
  pub unsafe_html: bool,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      tables:      true,
      gfm:         false,
      unsafe_html: true,
    }
  }
}

/// Main Markdown processor.
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
  pub(crate) options: MarkdownOptions,
}
