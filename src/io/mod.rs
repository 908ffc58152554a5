pub mod loader;
pub mod writers;

pub use loader::{parse_tasks, JsonFileSource, TaskRepository, TaskSource};
pub use writers::{create_writer, DisplayOptions, OutputFormat, RankingWriter};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}
