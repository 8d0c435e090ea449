//! File logging. The terminal belongs to the UI, so log lines go to a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use simplelog::{Config, ConfigBuilder, LevelFilter, WriteLogger};

/// Level from `PROJDASH_LOG` (`error`..`trace`), `Info` otherwise.
pub fn level_from_env() -> LevelFilter {
    std::env::var("PROJDASH_LOG")
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info)
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Starts the global file logger. Returns the file in use.
pub fn init(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(crate::config::log_path)
        .unwrap_or_else(|| PathBuf::from("projdash.log"));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(level_from_env(), logger_config(), file)
        .context("initializing logger")?;
    Ok(path)
}

fn logger_config() -> Config {
    let mut builder = ConfigBuilder::new();
    // local offset lookup can fail on some platforms; keep UTC then
    let _ = builder.set_time_offset_to_local();
    builder.build()
}
