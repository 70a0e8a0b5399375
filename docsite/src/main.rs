use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use docsite::{
  cli::{Cli, Commands, init_output},
  site,
};
use docsite_config::Config;
use log::{LevelFilter, info};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Some(Commands::Init {
      output,
      format,
      force,
    }) => {
      let output = init_output(output.as_deref(), format);
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
      {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }

      Config::generate_default_config(format, &output).wrap_err_with(|| {
        format!(
          "Failed to generate configuration file: {}",
          output.display()
        )
      })?;
      Ok(())
    },

    Some(Commands::ExportTemplates { output_dir, force }) => {
      Config::export_templates(output_dir, *force).wrap_err_with(|| {
        format!("Failed to export templates to {}", output_dir.display())
      })
    },

    Some(Commands::Build { site_dir }) => {
      let mut config = load_config(&cli)?;
      if let Some(dir) = site_dir {
        config.site_dir = Some(dir.clone());
      }
      build(&config)
    },

    None => build(&load_config(&cli)?),
  }
}

fn load_config(cli: &Cli) -> Result<Config> {
  Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")
}

fn build(config: &Config) -> Result<()> {
  let summary = site::build(config).wrap_err_with(|| {
    format!(
      "Failed to build documentation in {}",
      config.site_dir().display()
    )
  })?;

  for page in &summary.pages {
    info!(
      "  {} ({})",
      page.output.display(),
      page.title.as_deref().unwrap_or("untitled")
    );
  }
  info!(
    "Documentation generated successfully: {} pages, index at {}",
    summary.pages.len(),
    summary.index.display()
  );

  Ok(())
}
