#![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
use std::{
  fs,
  path::{Path, PathBuf},
};

use docsite::{error::SiteError, site};
use docsite_config::{Config, index::IndexConfig, page::PageConfig};
use tempfile::{TempDir, tempdir};

const SOURCES: [&str; 3] =
  ["complete_documentation.md", "INSTALLATION.md", "README.md"];
const OUTPUTS: [&str; 4] = [
  "complete_documentation.html",
  "INSTALLATION.html",
  "README.html",
  "index.html",
];

/// Create a site directory holding the three default sources.
fn setup_site() -> (TempDir, PathBuf) {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let site_dir = temp_dir.path().join("documentation-website");
  fs::create_dir_all(&site_dir).expect("Failed to create dir in test");

  fs::write(
    site_dir.join("complete_documentation.md"),
    r"# Complete Documentation

## Features

| Feature | Status |
| ------- | ------ |
| Themes  | done   |

```php
<?php echo 'hi'; ?>
```
",
  )
  .expect("Failed to write complete_documentation.md in test");
  fs::write(
    site_dir.join("INSTALLATION.md"),
    "# Installation\n\n1. Download\n2. *Install*\n",
  )
  .expect("Failed to write INSTALLATION.md in test");
  fs::write(
    site_dir.join("README.md"),
    "# README\n\nSee [installation](INSTALLATION.html).\n",
  )
  .expect("Failed to write README.md in test");

  (temp_dir, site_dir)
}

fn config_for(site_dir: &Path) -> Config {
  Config {
    site_dir: Some(site_dir.to_path_buf()),
    ..Default::default()
  }
}

fn read_outputs(site_dir: &Path) -> Vec<Vec<u8>> {
  OUTPUTS
    .iter()
    .map(|name| fs::read(site_dir.join(name)).expect("Missing output"))
    .collect()
}

#[test]
fn test_full_build_writes_all_outputs() {
  let (_temp_dir, site_dir) = setup_site();

  let summary = site::build(&config_for(&site_dir)).expect("Build failed");

  assert_eq!(summary.pages.len(), 3);
  assert_eq!(summary.index, site_dir.join("index.html"));
  for name in OUTPUTS {
    assert!(site_dir.join(name).is_file(), "{name} was not written");
  }

  let titles: Vec<_> = summary
    .pages
    .iter()
    .map(|p| p.title.clone().unwrap_or_default())
    .collect();
  assert_eq!(titles, vec!["Complete Documentation", "Installation", "README"]);

  let complete =
    fs::read_to_string(site_dir.join("complete_documentation.html")).unwrap();
  assert!(complete.contains("<table>"));
  assert!(complete.contains("<td>Themes</td>"));
  assert!(complete.contains(r#"<code class="language-php">"#));

  let readme = fs::read_to_string(site_dir.join("README.html")).unwrap();
  assert!(readme.contains(r#"<a href="INSTALLATION.html">installation</a>"#));
}

#[test]
fn test_heading_only_documents() {
  let (_temp_dir, site_dir) = setup_site();
  for source in SOURCES {
    fs::write(site_dir.join(source), "# Title").unwrap();
  }

  site::build(&config_for(&site_dir)).expect("Build failed");

  for name in &OUTPUTS[..3] {
    let html = fs::read_to_string(site_dir.join(name)).unwrap();
    assert_eq!(html.trim_end(), "<h1>Title</h1>", "unexpected {name}");
  }
}

#[test]
fn test_index_contents() {
  let (_temp_dir, site_dir) = setup_site();

  site::build(&config_for(&site_dir)).expect("Build failed");

  let index = fs::read_to_string(site_dir.join("index.html")).unwrap();
  assert!(index.contains(r#"href="README.html""#));
  assert!(index.contains(r#"href="INSTALLATION.html""#));
  assert!(index.contains(r#"href="complete_documentation.html""#));
  assert!(
    index.contains("Welcome to the WordPress Website Generator Documentation")
  );
  assert!(index.contains(">Complete Documentation</a>"));
  assert!(index.contains(">Installation Guide</a>"));
  assert!(index.contains(">README</a>"));
}

#[test]
fn test_build_is_idempotent() {
  let (_temp_dir, site_dir) = setup_site();
  let config = config_for(&site_dir);

  site::build(&config).expect("First build failed");
  let first = read_outputs(&site_dir);

  site::build(&config).expect("Second build failed");
  let second = read_outputs(&site_dir);

  assert_eq!(first, second);
}

#[test]
fn test_outputs_are_fully_overwritten() {
  let (_temp_dir, site_dir) = setup_site();
  let stale = "<p>stale</p>\n".repeat(500);
  for name in OUTPUTS {
    fs::write(site_dir.join(name), &stale).unwrap();
  }

  site::build(&config_for(&site_dir)).expect("Build failed");

  for name in OUTPUTS {
    let html = fs::read_to_string(site_dir.join(name)).unwrap();
    assert!(!html.contains("stale"), "{name} kept stale content");
  }
}

#[test]
fn test_missing_readme_stops_before_index() {
  let (_temp_dir, site_dir) = setup_site();
  fs::remove_file(site_dir.join("README.md")).unwrap();

  let err = site::build(&config_for(&site_dir)).unwrap_err();

  assert!(
    matches!(err, SiteError::SourceNotFound(ref path) if *path == site_dir.join("README.md"))
  );
  // pages before the failure point were written
  assert!(site_dir.join("complete_documentation.html").is_file());
  assert!(site_dir.join("INSTALLATION.html").is_file());
  // nothing after it
  assert!(!site_dir.join("README.html").exists());
  assert!(!site_dir.join("index.html").exists());
}

#[test]
fn test_missing_first_source_writes_nothing() {
  let (_temp_dir, site_dir) = setup_site();
  fs::remove_file(site_dir.join("complete_documentation.md")).unwrap();

  assert!(site::build(&config_for(&site_dir)).is_err());
  for name in OUTPUTS {
    assert!(!site_dir.join(name).exists(), "{name} should not exist");
  }
}

#[test]
fn test_missing_site_dir_fails_fast() {
  let temp_dir = tempdir().unwrap();
  let site_dir = temp_dir.path().join("documentation-website");

  let err = site::build(&config_for(&site_dir)).unwrap_err();

  assert!(matches!(err, SiteError::MissingSiteDir(ref path) if *path == site_dir));
  assert!(err.to_string().contains("documentation-website"));
  assert!(!site_dir.exists());
}

#[test]
fn test_site_dir_that_is_a_file() {
  let temp_dir = tempdir().unwrap();
  let site_dir = temp_dir.path().join("documentation-website");
  fs::write(&site_dir, "not a directory").unwrap();

  let err = site::build(&config_for(&site_dir)).unwrap_err();
  assert!(matches!(err, SiteError::MissingSiteDir(_)));
}

#[test]
fn test_index_over_page_source_is_rejected() {
  let (_temp_dir, site_dir) = setup_site();
  let config = Config {
    index: Some(IndexConfig {
      filename: "README.md".to_owned(),
      ..Default::default()
    }),
    ..config_for(&site_dir)
  };

  let err = site::build(&config).unwrap_err();

  assert!(matches!(err, SiteError::Config(_)));
  assert!(err.to_string().contains("README.md"));
  assert_eq!(
    fs::read_to_string(site_dir.join("README.md")).unwrap(),
    "# README\n\nSee [installation](INSTALLATION.html).\n"
  );
  for name in OUTPUTS {
    assert!(!site_dir.join(name).exists(), "{name} should not exist");
  }
}

#[test]
fn test_absolute_page_source_is_rejected() {
  let (_temp_dir, site_dir) = setup_site();
  let config = Config {
    pages: vec![PageConfig::new(site_dir.join("README.md"), "README")],
    ..config_for(&site_dir)
  };

  let err = site::build(&config).unwrap_err();

  assert!(matches!(err, SiteError::Config(_)));
  assert!(!site_dir.join("README.html").exists());
  assert!(!site_dir.join("index.html").exists());
}

#[test]
fn test_configured_pages_and_index() {
  let temp_dir = tempdir().unwrap();
  let site_dir = temp_dir.path().join("docs");
  fs::create_dir_all(site_dir.join("guides")).unwrap();
  fs::write(site_dir.join("guides/setup.md"), "# Setup\n").unwrap();
  fs::write(site_dir.join("faq.md"), "# FAQ\n").unwrap();

  let config_path = temp_dir.path().join("docsite.toml");
  fs::write(
    &config_path,
    format!(
      r#"
site_dir = "{}"

[[pages]]
source = "guides/setup.md"
label = "Setup"

[[pages]]
source = "faq.md"
label = "FAQ"

[index]
filename = "home.html"
heading = "Project Docs"
"#,
      site_dir.display()
    ),
  )
  .unwrap();

  let config = Config::load(&[config_path], &[]).expect("Config load failed");
  let summary = site::build(&config).expect("Build failed");

  assert_eq!(summary.index, site_dir.join("home.html"));
  assert_eq!(
    summary
      .pages
      .iter()
      .map(|p| p.output.clone())
      .collect::<Vec<_>>(),
    vec![site_dir.join("guides/setup.html"), site_dir.join("faq.html")]
  );

  let home = fs::read_to_string(site_dir.join("home.html")).unwrap();
  assert!(home.contains(r#"<a href="guides/setup.html">Setup</a>"#));
  assert!(home.contains(r#"<a href="faq.html">FAQ</a>"#));
  assert!(home.contains("<h1>Project Docs</h1>"));
  assert!(!site_dir.join("index.html").exists());
  assert_eq!(
    fs::read_to_string(site_dir.join("guides/setup.html")).unwrap(),
    "<h1>Setup</h1>\n"
  );
}

#[test]
fn test_default_pages_follow_documentation_layout() {
  let config = Config::default();
  let sources: Vec<PathBuf> =
    config.pages().iter().map(|p: &PageConfig| p.source.clone()).collect();
  assert_eq!(
    sources,
    SOURCES.iter().map(PathBuf::from).collect::<Vec<_>>()
  );
}
