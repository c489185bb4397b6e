//! # reportfs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for reportfs, handling loading,
//! merging, validation, and access to configuration data. Configuration decides
//! how the gzip-aware file helper behaves (compression level, what to do when
//! compression fails, how lines are split) and where report templates live.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config`, used on its own
//! 2. Project-specific `.reportfs.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/reportfs/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [compression]
//! level = 9
//! on_failure = "fail"
//!
//! [lines]
//! separator = "universal"
//!
//! [resources]
//! directory = "~/reports/templates"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let helper = FileHelper::from_config(&cfg);
//! ```
//!
use crate::core::error::{ReportFsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub compression: CompressionConfig,
    #[serde(default)]
    pub lines: LinesConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Settings for `.gz` targets.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CompressionConfig {
    /// Gzip level, 0 (store) to 9 (best).
    #[serde(default = "default_compression_level")]
    pub level: u32,
    /// What to do when compressing or decompressing fails.
    #[serde(default)]
    pub on_failure: CompressionFailurePolicy,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            level: default_compression_level(),
            on_failure: CompressionFailurePolicy::default(),
        }
    }
}

/// Behaviour when a gzip round trip fails part way.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompressionFailurePolicy {
    /// Log a warning and carry on as if the step succeeded.
    #[default]
    Warn,
    /// Return `ReportFsError::Compression` to the caller.
    Fail,
}

/// Settings for appending and splitting lines.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LinesConfig {
    #[serde(default)]
    pub separator: LineSeparator,
}

/// How file content is split into lines.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// Only the host separator (`"\n"`, or `"\r\n"` on Windows) is recognised.
    #[default]
    Platform,
    /// `"\r\n"`, `"\n"` and `"\r"` all end a line.
    Universal,
}

impl LineSeparator {
    /// The separator written between appended entries.
    pub fn platform() -> &'static str {
        if cfg!(windows) {
            "\r\n"
        } else {
            "\n"
        }
    }
}

/// Where report templates are looked up.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Template directory (can use ~). Will be expanded.
    #[serde(default = "default_resource_dir")]
    pub directory: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            directory: default_resource_dir(),
        }
    }
}

fn default_compression_level() -> u32 {
    6
}
fn default_resource_dir() -> String {
    "~/.config/reportfs/templates".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".reportfs.toml";
const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Loads the effective configuration.
///
/// When `explicit` is given, only that file is read (plus defaults). Otherwise the
/// user and project files are merged key by key, project values winning.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            config_from_table(load_table_from_path(path)?)
                .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?
        }
        None => {
            let mut merged = load_user_config()?.unwrap_or_default();
            if let Some(project) = load_project_config()? {
                merge_tables(&mut merged, project);
            }
            config_from_table(merged).context("Failed to build merged configuration")?
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<toml::Table>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "reportfs", "reportfs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_table_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<toml::Table>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_table_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.reportfs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.reportfs.toml`, stopping at a `.git` directory.
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

/// Reads one config file as a raw table, rejecting it early if it would not
/// deserialize on its own so the error names the offending file.
fn load_table_from_path(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let table: toml::Table = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    config_from_table(table.clone())
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    Ok(table)
}

fn config_from_table(table: toml::Table) -> std::result::Result<Config, toml::de::Error> {
    toml::Value::Table(table).try_into()
}

/// Overlays `overlay` onto `base`. Nested tables merge recursively; any other
/// value present in `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, nested),
                _ => {
                    base.insert(key, toml::Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

fn expand_config_paths(config: &mut Config) {
    config.resources.directory = shellexpand::tilde(&config.resources.directory).into_owned();
    debug!(
        "Expanded resource directory: {}",
        config.resources.directory
    );
}

fn validate_config(config: &Config) -> Result<()> {
    if config.compression.level > MAX_COMPRESSION_LEVEL {
        return Err(anyhow!(ReportFsError::Config(format!(
            "Compression level {} is out of range (0-{}).",
            config.compression.level, MAX_COMPRESSION_LEVEL
        ))));
    }
    let res_dir = PathBuf::from(&config.resources.directory);
    if res_dir.exists() && !res_dir.is_dir() {
        return Err(anyhow!(ReportFsError::Config(format!(
            "Configured resource path '{}' exists but is not a directory.",
            res_dir.display()
        ))));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [compression]
            level = 9
            on_failure = "fail"

            [lines]
            separator = "universal"

            [resources]
            directory = "/srv/templates"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.compression.level, 9);
        assert_eq!(config.compression.on_failure, CompressionFailurePolicy::Fail);
        assert_eq!(config.lines.separator, LineSeparator::Universal);
        assert_eq!(config.resources.directory, "/srv/templates");
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: Config = toml::from_str("").expect("empty TOML is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.compression.level, 6);
        assert_eq!(config.compression.on_failure, CompressionFailurePolicy::Warn);
        assert_eq!(config.lines.separator, LineSeparator::Platform);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[compression]\nsuffix = \".bz2\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            resources: ResourcesConfig {
                directory: "~/report_templates".to_string(),
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.resources.directory,
            home_dir.join("report_templates").to_string_lossy()
        );
    }

    fn table(content: &str) -> toml::Table {
        toml::from_str(content).expect("valid TOML")
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let mut merged = table(
            r#"
            [compression]
            level = 1
            on_failure = "fail"

            [resources]
            directory = "/srv/user-templates"
            "#,
        );
        merge_tables(
            &mut merged,
            table(
                r#"
                [compression]
                level = 9

                [lines]
                separator = "universal"
                "#,
            ),
        );
        let config = config_from_table(merged).expect("merged config is valid");
        assert_eq!(config.compression.level, 9);
        // Keys the project file leaves out keep the user's values.
        assert_eq!(config.compression.on_failure, CompressionFailurePolicy::Fail);
        assert_eq!(config.resources.directory, "/srv/user-templates");
        assert_eq!(config.lines.separator, LineSeparator::Universal);
    }

    #[test]
    fn test_merge_project_can_restore_defaults() {
        let mut merged = table("[compression]\nlevel = 1\non_failure = \"fail\"\n");
        merge_tables(
            &mut merged,
            table("[compression]\nlevel = 6\non_failure = \"warn\"\n"),
        );
        let config = config_from_table(merged).expect("merged config is valid");
        assert_eq!(config.compression.on_failure, CompressionFailurePolicy::Warn);
        assert_eq!(config.compression.level, 6);
    }

    #[test]
    fn test_load_rejects_unknown_field_per_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[lines]\nseparator = \"universal\"\nwidth = 80\n")?;
        let err = load_table_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML from file"));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let mut config = Config::default();
        config.compression.level = 12;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_find_project_config_stops_at_git() -> Result<()> {
        let root = tempdir()?;
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested)?;
        fs::create_dir(root.path().join("a/.git"))?;
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "")?;
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(root.path().join("a").join(PROJECT_CONFIG_FILENAME), "")?;
        assert_eq!(
            find_project_config_path(&nested),
            Some(root.path().join("a").join(PROJECT_CONFIG_FILENAME))
        );
        Ok(())
    }

    #[test]
    fn test_load_explicit_config() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[compression]\nlevel = 3\n")?;
        let config = load_config(Some(&path))?;
        assert_eq!(config.compression.level, 3);
        Ok(())
    }
}
