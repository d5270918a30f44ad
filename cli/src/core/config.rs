//! # PackRS Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional defaults used by the `pack` command: which
//! archive format to produce, whether to include the root folder name, and
//! where to put archives named by a relative path.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the command, not here)
//! 2. Project-specific `.packrs.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory, or the file
//!    named by the `PACKRS_CONFIG` environment variable
//! 4. Default values defined in the code
//!
//! ```toml
//! [defaults]
//! format = "tar"
//! include_root = true
//! output_dir = "~/archives"
//! ```
//!
//! `output_dir` has `~` expanded. The merged configuration is validated before
//! use; failures are reported as `PackrsError::Config`.
//!
use crate::common::archive::ArchiveFormat;
use crate::core::error::{PackrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// The resolved configuration used by the commands.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub defaults: PackDefaults,
}

/// Defaults applied by `packrs pack` when the matching flag is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDefaults {
    /// Archive format name: "zip" or "tar".
    pub format: String,
    /// Nest every entry under the source directory's own name.
    pub include_root: bool,
    /// Directory receiving archives given by a relative path (can use ~).
    pub output_dir: Option<String>,
}

impl Default for PackDefaults {
    fn default() -> Self {
        PackDefaults {
            format: default_format(),
            include_root: false,
            output_dir: None,
        }
    }
}

/// One configuration file as written on disk. Unset keys stay `None`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    defaults: FileDefaults,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FileDefaults {
    format: Option<String>,
    include_root: Option<bool>,
    output_dir: Option<String>,
}

impl Config {
    /// The configured default format, parsed.
    pub fn format(&self) -> Result<ArchiveFormat> {
        Ok(self.defaults.format.parse::<ArchiveFormat>()?)
    }
}

fn default_format() -> String {
    "zip".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".packrs.toml";
const CONFIG_ENV_VAR: &str = "PACKRS_CONFIG";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        info!("Loading configuration from {}={}", CONFIG_ENV_VAR, explicit);
        return load_config_from_path(Path::new(&explicit)).map(Some);
    }
    let Some(proj_dirs) = ProjectDirs::from("com", "PackRS", "packrs") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .map_err(|e| anyhow!(PackrsError::Config(format!("{}: {}", path.display(), e))))
}

/// Project values win over user values, which win over the code defaults.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default().defaults;
    let project = project.unwrap_or_default().defaults;
    Config {
        defaults: PackDefaults {
            format: project
                .format
                .or(user.format)
                .unwrap_or_else(default_format),
            include_root: project.include_root.or(user.include_root).unwrap_or(false),
            output_dir: project.output_dir.or(user.output_dir),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.defaults.output_dir.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded output directory: {}", dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    config.format()?;
    if let Some(dir) = &config.defaults.output_dir {
        let dir = Path::new(dir);
        if dir.exists() && !dir.is_dir() {
            return Err(anyhow!(PackrsError::Config(format!(
                "Configured output_dir '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    Ok(())
}
