use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::app::Page;
use crate::domain::tree::DEFAULT_INDENT_UNIT;

pub const DEFAULT_COMPACT_WIDTH: u16 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPage {
    #[default]
    Home,
    Tree,
}

impl From<StartPage> for Page {
    fn from(value: StartPage) -> Self {
        match value {
            StartPage::Home => Page::Home,
            StartPage::Tree => Page::ProjectTree,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub start_page: StartPage,

    pub sidebar_open: bool,

    /// Terminal cells per indent rank on the tree page
    pub indent_unit: u16,

    /// Widths below this use the compact layout
    pub compact_width: u16,

    /// Extra or overriding level -> indent rank entries
    pub indent_levels: BTreeMap<String, u16>,

    pub export_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_page: StartPage::Home,
            sidebar_open: true,
            indent_unit: DEFAULT_INDENT_UNIT,
            compact_width: DEFAULT_COMPACT_WIDTH,
            indent_levels: BTreeMap::new(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn export_dir_path(&self) -> Option<PathBuf> {
        self.export_dir.as_deref().and_then(expand_path)
    }
}

/// Loads the config, falling back to defaults when the file is missing or
/// unreadable. Parse problems are logged rather than surfaced.
pub fn load(explicit: Option<&Path>) -> Config {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PROJDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("projdash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("projdash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "projdash", "projdash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("projdash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("projdash"));
    }
    directories::ProjectDirs::from("io", "projdash", "projdash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("projdash.log"))
}

fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(trimmed))
}
