use std::{io, path::PathBuf};

use docsite_commonmark::RenderError;
use docsite_config::ConfigError;
use thiserror::Error;

/// Errors raised while assembling the documentation site.
#[derive(Debug, Error)]
pub enum SiteError {
  #[error(
    "Site directory does not exist or is not a directory: {}",
    .0.display()
  )]
  MissingSiteDir(PathBuf),

  #[error("Source file not found: {}", .0.display())]
  SourceNotFound(PathBuf),

  #[error("Failed to read {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to write {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Template error: {0}")]
  Template(String),

  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl From<RenderError> for SiteError {
  fn from(e: RenderError) -> Self {
    match e {
      RenderError::NotFound(path) => Self::SourceNotFound(path),
      RenderError::Io { path, source } => Self::Read { path, source },
    }
  }
}

impl From<tera::Error> for SiteError {
  fn from(e: tera::Error) -> Self {
    use std::error::Error as _;

    // tera keeps the useful part of parse errors in the source chain
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
      message.push_str(": ");
      message.push_str(&cause.to_string());
      source = cause.source();
    }
    Self::Template(message)
  }
}
