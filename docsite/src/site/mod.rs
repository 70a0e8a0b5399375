//! Site assembly: render every configured page, then the landing page.
//!
//! Pages are processed strictly in order and the first failure aborts the
//! build. Outputs written before the failure stay on disk; the landing page is
//! only written once every page has been rendered.
pub mod index;

use std::{
  fs,
  path::{Path, PathBuf},
};

use docsite_commonmark::MarkdownProcessor;
use docsite_config::{Config, page::PageConfig};
use log::{debug, info};

use crate::error::SiteError;

/// A page written during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
  pub source: PathBuf,
  pub output: PathBuf,
  /// First H1 of the source, if any.
  pub title:  Option<String>,
}

/// Everything a successful build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
  pub pages: Vec<RenderedPage>,
  pub index: PathBuf,
}

/// Build the site described by `config`.
///
/// # Errors
///
/// - [`SiteError::Config`] before anything is read if the configuration is
///   invalid, e.g. an output that would overwrite a page source.
/// - [`SiteError::MissingSiteDir`] before anything is read if the site
///   directory is absent.
/// - [`SiteError::SourceNotFound`] when a page source is missing; later pages
///   and the landing page are not written.
/// - Read, write and template errors as they occur.
pub fn build(config: &Config) -> Result<BuildSummary, SiteError> {
  config.validate()?;
  config.validate_paths()?;

  let site_dir = config.site_dir();
  if !site_dir.is_dir() {
    return Err(SiteError::MissingSiteDir(site_dir));
  }
  info!("Building documentation in {}", site_dir.display());

  let processor = MarkdownProcessor::new(config.markdown_options());
  debug!("Markdown options: {:?}", processor.options());

  let pages = config.pages();
  let mut rendered = Vec::with_capacity(pages.len());
  for page in &pages {
    rendered.push(convert_page(&processor, &site_dir, page)?);
  }

  let index_config = config.index();
  let index_html = index::render_index(&index_config, &pages)?;
  let index_path = site_dir.join(&index_config.filename);
  write_output(&index_path, &index_html)?;
  info!("Wrote index page {}", index_path.display());

  Ok(BuildSummary {
    pages: rendered,
    index: index_path,
  })
}

/// Render one page and write it next to its source, replacing any previous
/// output.
///
/// # Errors
///
/// Returns [`SiteError::SourceNotFound`] if the source is missing, or an I/O
/// error if it cannot be read or the output cannot be written.
pub fn convert_page(
  processor: &MarkdownProcessor,
  site_dir: &Path,
  page: &PageConfig,
) -> Result<RenderedPage, SiteError> {
  let source = site_dir.join(&page.source);
  let output = site_dir.join(page.output());

  let result = processor.render_file(&source)?;
  debug!(
    "Rendered {} ({} headings)",
    source.display(),
    result.headers.len()
  );

  write_output(&output, &result.html)?;
  info!("Wrote {} -> {}", source.display(), output.display());

  Ok(RenderedPage {
    source,
    output,
    title: result.title,
  })
}

fn write_output(path: &Path, contents: &str) -> Result<(), SiteError> {
  fs::write(path, contents).map_err(|source| {
    SiteError::Write {
      path: path.to_path_buf(),
      source,
    }
  })
}
