use std::{
  collections::HashSet,
  fs,
  path::{Component, Path, PathBuf},
};

use docsite_commonmark::MarkdownOptions;
use serde::{Deserialize, Serialize};

use crate::{
  error::ConfigError,
  index::IndexConfig,
  markdown::MarkdownConfig,
  page::{self, PageConfig},
};

/// Directory used when no configuration names one.
pub const DEFAULT_SITE_DIR: &str = "documentation-website";

/// Configuration for the docsite documentation builder.
///
/// Every field is optional so that several config files can be layered; the
/// accessor methods fill in the built-in defaults, which reproduce the
/// WordPress Website Generator documentation site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
  /// Directory holding the Markdown sources and receiving the HTML output.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub site_dir: Option<PathBuf>,

  /// Pages to render, in navigation order. Empty means the default pages.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub pages: Vec<PageConfig>,

  /// Landing page configuration.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub index: Option<IndexConfig>,

  /// Markdown rendering configuration.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub markdown: Option<MarkdownConfig>,
}

impl Config {
  /// The site directory, falling back to [`DEFAULT_SITE_DIR`].
  #[must_use]
  pub fn site_dir(&self) -> PathBuf {
    self
      .site_dir
      .clone()
      .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR))
  }

  /// The configured pages, or the default three when none are configured.
  #[must_use]
  pub fn pages(&self) -> Vec<PageConfig> {
    if self.pages.is_empty() {
      page::default_pages()
    } else {
      self.pages.clone()
    }
  }

  /// The landing page configuration.
  #[must_use]
  pub fn index(&self) -> IndexConfig {
    self.index.clone().unwrap_or_default()
  }

  /// Options for the Markdown processor.
  #[must_use]
  pub fn markdown_options(&self) -> MarkdownOptions {
    self
      .markdown
      .as_ref()
      .map(MarkdownOptions::from)
      .unwrap_or_default()
  }

  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    match ext.to_lowercase().as_str() {
      "json" => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      "toml" => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and `KEY=VALUE` overrides.
  ///
  /// Explicit config files are merged in order. Without any, a config file in
  /// the working directory is used if one is found, otherwise the defaults.
  /// Overrides are applied last and the result is validated.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is invalid, or
  /// validation fails.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first)?;
      for config_path in rest {
        merged_config.merge(Self::from_file(config_path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      } else {
        log::debug!("Loaded config file: {}", first.display());
      }

      merged_config
    } else if let Some(discovered) = Self::find_config_file() {
      log::info!("Using discovered config file: {}", discovered.display());
      Self::from_file(&discovered)?
    } else {
      log::debug!("No config file found, using built-in defaults");
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Search the working directory for a config file.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Search `dir` for a config file in the usual locations.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    const CONFIG_FILENAMES: [&str; 4] = [
      "docsite.toml",
      "docsite.json",
      ".docsite.toml",
      ".config/docsite.toml",
    ];

    CONFIG_FILENAMES
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - `pages`: a non-empty list replaces this config's list
  pub fn merge(&mut self, other: Self) {
    if other.site_dir.is_some() {
      self.site_dir = other.site_dir;
    }
    if !other.pages.is_empty() {
      self.pages = other.pages;
    }
    if other.index.is_some() {
      self.index = other.index;
    }
    if other.markdown.is_some() {
      self.markdown = other.markdown;
    }
  }

  /// Apply configuration overrides from `KEY=VALUE` strings.
  ///
  /// # Errors
  ///
  /// Returns an error if an override is not in `KEY=VALUE` format, names an
  /// unknown key, or carries a value of the wrong type.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use docsite_config::Config;
  /// let mut config = Config::default();
  /// config
  ///   .apply_overrides(&["index.title=My Docs".to_string()])
  ///   .unwrap();
  /// assert_eq!(config.index().title, "My Docs");
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
      "site_dir" => self.site_dir = Some(PathBuf::from(value)),
      "index.filename" => self.index_mut().filename = value.to_string(),
      "index.title" => self.index_mut().title = value.to_string(),
      "index.heading" => self.index_mut().heading = value.to_string(),
      "index.intro" => self.index_mut().intro = value.to_string(),
      "index.template" => {
        self.index_mut().template =
          (!value.is_empty()).then(|| PathBuf::from(value));
      },
      "markdown.tables" => self.markdown_mut().tables = parse_bool(key, value)?,
      "markdown.gfm" => self.markdown_mut().gfm = parse_bool(key, value)?,
      "markdown.unsafe_html" => {
        self.markdown_mut().unsafe_html = parse_bool(key, value)?;
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  fn index_mut(&mut self) -> &mut IndexConfig {
    self.index.get_or_insert_with(IndexConfig::default)
  }

  fn markdown_mut(&mut self) -> &mut MarkdownConfig {
    self.markdown.get_or_insert_with(MarkdownConfig::default)
  }

  /// Check that the pages and the landing page map to distinct, sensible
  /// output files inside the site directory, and that no output would replace
  /// a Markdown source.
  ///
  /// # Errors
  ///
  /// Returns every problem found, one per line.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    let index = self.index();
    let index_path = Path::new(&index.filename);
    let pages = self.pages();

    if index.filename.trim().is_empty() {
      errors.push("Index filename must not be empty".to_string());
    } else if !is_inside_site_dir(index_path) {
      errors.push(format!(
        "Index filename must be relative to the site directory without '..': \
         {}",
        index.filename
      ));
    }

    let sources: HashSet<&Path> =
      pages.iter().map(|page| page.source.as_path()).collect();
    if sources.contains(index_path) {
      errors.push(format!(
        "Index page {} would overwrite a page source",
        index.filename
      ));
    }

    let mut outputs = HashSet::new();
    for (position, page) in pages.iter().enumerate() {
      let number = position + 1;
      if page.source.file_name().is_none() {
        errors.push(format!(
          "Page {number} has no source file name: '{}'",
          page.source.display()
        ));
        continue;
      }
      if !is_inside_site_dir(&page.source) {
        errors.push(format!(
          "Page {number} source must be relative to the site directory \
           without '..': {}",
          page.source.display()
        ));
      }
      if page.label.trim().is_empty() {
        errors.push(format!(
          "Page {number} ({}) has an empty label",
          page.source.display()
        ));
      }

      let output = page.output();
      if output == page.source {
        errors.push(format!(
          "Page {number} would overwrite its own source: {}",
          page.source.display()
        ));
      } else if sources.contains(output.as_path()) {
        errors.push(format!(
          "Page {number} ({}) would overwrite the source of another page: {}",
          page.source.display(),
          output.display()
        ));
      }
      if output == index_path {
        errors.push(format!(
          "Page {number} ({}) collides with the index page {}",
          page.source.display(),
          index.filename
        ));
      }
      if !outputs.insert(output.clone()) {
        errors.push(format!(
          "Page {number} ({}) renders to {} which another page already uses",
          page.source.display(),
          output.display()
        ));
      }
    }

    if !errors.is_empty() {
      let error_message = errors.join("\n");
      return Err(ConfigError::Config(format!(
        "Configuration validation errors:\n{error_message}"
      )));
    }

    Ok(())
  }

  /// Validate paths that must exist before a build starts.
  ///
  /// # Errors
  ///
  /// Returns an error if a custom index template is configured but missing.
  pub fn validate_paths(&self) -> Result<(), ConfigError> {
    if let Some(ref template) = self.index().template
      && !template.is_file()
    {
      return Err(ConfigError::Config(format!(
        "Index template file does not exist: {}",
        template.display()
      )));
    }

    Ok(())
  }

  /// Write the default configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }

  /// Export embedded templates to a directory for customization.
  ///
  /// Existing files are left alone unless `force` is set.
  ///
  /// # Errors
  ///
  /// Returns an error if the output directory cannot be created or a template
  /// cannot be written.
  pub fn export_templates(
    output_dir: &Path,
    force: bool,
  ) -> Result<(), ConfigError> {
    fs::create_dir_all(output_dir).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to create template directory: {}: {}",
        output_dir.display(),
        e
      ))
    })?;

    let mut templates: Vec<_> =
      docsite_templates::all_templates().into_iter().collect();
    templates.sort_unstable_by_key(|(name, _)| *name);

    for (filename, content) in templates {
      let file_path = output_dir.join(filename);

      if file_path.exists() && !force {
        log::warn!(
          "File {} already exists. Use --force to overwrite.",
          file_path.display()
        );
        continue;
      }

      fs::write(&file_path, content).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to write template file: {}: {}",
          file_path.display(),
          e
        ))
      })?;
      log::info!("Exported template: {}", file_path.display());
    }

    Ok(())
  }
}

/// Whether `path` is relative and made only of plain names, so joining it onto
/// the site directory cannot leave it.
fn is_inside_site_dir(path: &Path) -> bool {
  path
    .components()
    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" | "on" => Ok(true),
    "false" | "no" | "0" | "off" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'"
      )))
    },
  }
}
