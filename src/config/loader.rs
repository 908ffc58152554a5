use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{DisplayConfig, TaskroiConfig, UndoConfig};
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".taskroi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid sections are replaced by their defaults with a warning rather
/// than failing the whole load.
pub fn parse_and_validate_config(contents: &str) -> Result<TaskroiConfig> {
    let mut config = toml::from_str::<TaskroiConfig>(contents).map_err(|e| {
        Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    if let Some(ref display) = config.display {
        if let Err(e) = display.validate() {
            log::warn!("Invalid display config: {}. Using defaults.", e);
            config.display = Some(DisplayConfig::default());
        }
    }

    if let Some(ref undo) = config.undo {
        if let Err(e) = undo.validate() {
            log::warn!("Invalid undo config: {}. Using defaults.", e);
            config.undo = Some(UndoConfig::default());
        }
    }

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TaskroiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: &Path) -> TaskroiConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TaskroiConfig::default()
        })
}

pub fn load_config() -> TaskroiConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            TaskroiConfig::default()
        }
    }
}

/// Contents written by `taskroi init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# taskroi configuration

[display]
# Shown in place of an ROI that cannot be computed
na_label = "N/A"
# Decimal places for ROI values
precision = 1

[undo]
# How long a deleted task can be restored (milliseconds)
window_ms = 5000

[output]
# terminal, json or markdown
default_format = "terminal"
"#;
