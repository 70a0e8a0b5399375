//! Markdown processing.
//!
//! - [`core`]: processor implementation and rendering pipeline
//! - [`types`]: configuration and processor types
pub mod core;
pub mod types;

pub use self::core::extract_inline_text;

pub use types::{MarkdownOptions, MarkdownProcessor};
