use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A Markdown source rendered to its own HTML page and linked from the index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
  /// Markdown source, relative to the site directory.
  pub source: PathBuf,

  /// Anchor text of the navigation link pointing at the rendered page.
  pub label: String,
}

impl PageConfig {
  #[must_use]
  pub fn new(source: impl Into<PathBuf>, label: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      label:  label.into(),
    }
  }

  /// Path of the rendered page relative to the site directory: the source
  /// path with its extension replaced by `html`.
  #[must_use]
  pub fn output(&self) -> PathBuf {
    self.source.with_extension("html")
  }

  /// Link target for the navigation bar, always using forward slashes.
  #[must_use]
  pub fn href(&self) -> String {
    path_to_href(&self.output())
  }
}

/// Join the plain name components of `path` with `/`. Root, prefix and `.`
/// components are dropped so the result is always a relative URL.
fn path_to_href(path: &Path) -> String {
  path
    .components()
    .filter_map(|c| {
      match c {
        Component::Normal(name) => Some(name.to_string_lossy()),
        Component::ParentDir => Some("..".into()),
        Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
      }
    })
    .collect::<Vec<_>>()
    .join("/")
}

/// The three pages of the WordPress Website Generator documentation.
#[must_use]
pub fn default_pages() -> Vec<PageConfig> {
  vec![
    PageConfig::new("complete_documentation.md", "Complete Documentation"),
    PageConfig::new("INSTALLATION.md", "Installation Guide"),
    PageConfig::new("README.md", "README"),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_output_replaces_extension() {
    let page = PageConfig::new("README.md", "README");
    assert_eq!(page.output(), PathBuf::from("README.html"));
    assert_eq!(page.href(), "README.html");

    let page = PageConfig::new("guides/setup.markdown", "Setup");
    assert_eq!(page.output(), PathBuf::from("guides/setup.html"));
    assert_eq!(page.href(), "guides/setup.html");

    let page = PageConfig::new("CHANGELOG", "Changes");
    assert_eq!(page.output(), PathBuf::from("CHANGELOG.html"));
  }

  #[test]
  fn test_href_is_always_relative() {
    let page = PageConfig::new("/etc/notes.md", "Notes");
    assert_eq!(page.href(), "etc/notes.html");

    let page = PageConfig::new("./guides/setup.md", "Setup");
    assert_eq!(page.href(), "guides/setup.html");
  }

  #[test]
  fn test_default_pages_order() {
    let hrefs: Vec<String> = default_pages().iter().map(PageConfig::href).collect();
    assert_eq!(hrefs, vec![
      "complete_documentation.html",
      "INSTALLATION.html",
      "README.html"
    ]);
  }
}
