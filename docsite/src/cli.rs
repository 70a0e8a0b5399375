use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// Command line interface for docsite
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "docsite: render Markdown documentation into a static site"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`]). Defaults to `build`.
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Later files override earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the docsite CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render every page and the index page.
  Build {
    /// Directory holding the Markdown sources, overriding the configuration.
    #[arg(short = 'd', long)]
    site_dir: Option<PathBuf>,
  },

  /// Write a default configuration file.
  Init {
    /// Path to create the configuration file at. Defaults to
    /// `docsite.toml` or `docsite.json` depending on the format
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Export the built-in index template and stylesheet for customization.
  ExportTemplates {
    /// Output directory for template files.
    #[arg(short, long, default_value = "templates")]
    output_dir: PathBuf,

    /// Whether to overwrite existing files.
    #[arg(long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Where `init` writes the configuration file: the explicit `--output`, or
/// `docsite.<format>` in the working directory.
#[must_use]
pub fn init_output(output: Option<&Path>, format: &str) -> PathBuf {
  output.map_or_else(
    || PathBuf::from(format!("docsite.{format}")),
    Path::to_path_buf,
  )
}
