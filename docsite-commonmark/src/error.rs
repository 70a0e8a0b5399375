use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading a Markdown document from disk.
#[derive(Debug, Error)]
pub enum RenderError {
  #[error("Markdown source not found: {}", .0.display())]
  NotFound(PathBuf),

  #[error("Failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
}
