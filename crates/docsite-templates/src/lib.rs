use std::collections::HashMap;

pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
pub const INDEX_CSS: &str = include_str!("../templates/index.css");

pub const DEFAULT_TOML_CONFIG: &str = include_str!("../templates/docsite.toml");
pub const DEFAULT_JSON_CONFIG: &str = include_str!("../templates/docsite.json");

/// Templates that can be exported for customization, keyed by file name.
#[must_use]
pub fn all_templates() -> HashMap<&'static str, &'static str> {
  let mut templates = HashMap::new();
  templates.insert("index.html", INDEX_TEMPLATE);
  templates.insert("index.css", INDEX_CSS);
  templates
}
