//! Landing page linking every rendered page.
use std::fs;

use docsite_config::{index::IndexConfig, page::PageConfig};
use docsite_templates::{INDEX_CSS, INDEX_TEMPLATE};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use tera::Tera;

use crate::error::SiteError;

/// A navigation bar entry. Both fields are already HTML-escaped.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
  pub href:  String,
  pub label: String,
}

impl From<&PageConfig> for NavLink {
  fn from(page: &PageConfig) -> Self {
    Self {
      href:  encode_double_quoted_attribute(&page.href()).into_owned(),
      label: encode_text(&page.label).into_owned(),
    }
  }
}

/// Render the landing page for `pages`.
///
/// Uses `index.template` when configured, the built-in template otherwise.
/// The template is registered without autoescaping, so every string is
/// escaped here before it reaches the context.
///
/// # Errors
///
/// Returns an error if the custom template cannot be read, or the template
/// fails to parse or render.
pub fn render_index(
  index: &IndexConfig,
  pages: &[PageConfig],
) -> Result<String, SiteError> {
  let template_content = match index.template {
    Some(ref path) => {
      log::debug!("Using custom index template: {}", path.display());
      fs::read_to_string(path).map_err(|source| {
        SiteError::Read {
          path: path.clone(),
          source,
        }
      })?
    },
    None => INDEX_TEMPLATE.to_string(),
  };

  let mut tera = Tera::default();
  tera.add_raw_template("index", &template_content)?;

  let nav_links: Vec<NavLink> = pages.iter().map(NavLink::from).collect();

  let mut context = tera::Context::new();
  context.insert("title", &encode_text(&index.title));
  context.insert("heading", &encode_text(&index.heading));
  context.insert("intro", &encode_text(&index.intro));
  context.insert("stylesheet", INDEX_CSS);
  context.insert("nav_links", &nav_links);

  Ok(tera.render("index", &context)?)
}
