use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the landing page linking all rendered pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
  /// File name of the landing page inside the site directory.
  pub filename: String,

  /// Contents of the `<title>` element.
  pub title: String,

  /// Main heading of the page.
  pub heading: String,

  /// Introductory sentence shown below the heading.
  pub intro: String,

  /// Custom Tera template replacing the built-in landing page.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub template: Option<PathBuf>,
}

impl Default for IndexConfig {
  fn default() -> Self {
    Self {
      filename: "index.html".to_string(),
      title:    "WordPress Website Generator Documentation".to_string(),
      heading:  "Welcome to the WordPress Website Generator Documentation"
        .to_string(),
      intro:    "Please select a document from the navigation above to get \
                 started."
        .to_string(),
      template: None,
    }
  }
}
