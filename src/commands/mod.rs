//! CLI command implementations.
//!
//! Available commands:
//! - **list**: Load a task file and render it ranked by ROI
//! - **roi**: Compute a single ROI value
//! - **init**: Write a default `.taskroi.toml`

pub mod init;
pub mod list;
pub mod roi;

pub use init::init_config;
pub use list::{handle_list, ListConfig};
pub use roi::{format_roi_command, parse_lenient};
