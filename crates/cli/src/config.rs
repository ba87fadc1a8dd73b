use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{Result, WrapErr};
use mathpanel_convert::ConversionConfig;

use crate::cli::Cli;

/// Resolve the conversion config: `--config`, else the user config file if
/// present, else defaults. Flags win over file settings.
pub fn load(cli: &Cli) -> Result<ConversionConfig> {
    let mut config = match &cli.config {
        Some(path) => load_file(path)?,
        None => match get_default_config_path() {
            Some(path) if path.exists() => load_file(&path)?,
            _ => ConversionConfig::default(),
        },
    };

    if cli.standalone {
        config.standalone = true;
    }

    Ok(config)
}

fn load_file(path: &Path) -> Result<ConversionConfig> {
    tracing::debug!("loading config from {}", path.display());
    ConversionConfig::load(path)
        .wrap_err_with(|| format!("Failed to load config file {}", path.display()))
}

pub fn get_default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "mathpanel", "mathpanel")
        .map(|dirs| dirs.config_dir().join("config.json"))
}
