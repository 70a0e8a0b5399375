use docsite_commonmark::MarkdownOptions;
use serde::{Deserialize, Serialize};

/// Markdown rendering switches, mapped onto [`MarkdownOptions`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct MarkdownConfig {
  /// Render pipe tables.
  pub tables: bool,

  /// Enable strikethrough, task lists, autolinks and footnotes.
  pub gfm: bool,

  /// Pass raw HTML through to the rendered page.
  pub unsafe_html: bool,
}

impl Default for MarkdownConfig {
  fn default() -> Self {
    let defaults = MarkdownOptions::default();
    Self {
      tables:      defaults.tables,
      gfm:         defaults.gfm,
      unsafe_html: defaults.unsafe_html,
    }
  }
}

impl From<&MarkdownConfig> for MarkdownOptions {
  fn from(config: &MarkdownConfig) -> Self {
    Self {
      tables:      config.tables,
      gfm:         config.gfm,
      unsafe_html: config.unsafe_html,
    }
  }
}
