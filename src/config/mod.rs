//! Configuration loaded from `.taskroi.toml`.

mod core;
mod loader;

pub use self::core::{DisplayConfig, OutputConfig, TaskroiConfig, UndoConfig, MAX_PRECISION};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE,
};
