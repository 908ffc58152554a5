use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Error, Result};
use crate::io::writers::{DisplayOptions, OutputFormat};
use crate::roi::{DEFAULT_NA_LABEL, DEFAULT_PRECISION};

/// Largest number of decimals accepted for ROI display.
pub const MAX_PRECISION: usize = 6;

/// Root configuration structure for taskroi
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaskroiConfig {
    /// ROI display configuration
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Undo-delete configuration
    #[serde(default)]
    pub undo: Option<UndoConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl TaskroiConfig {
    pub fn display_options(&self) -> DisplayOptions {
        let display = self.display.clone().unwrap_or_default();
        DisplayOptions {
            precision: display.precision,
            na_label: display.na_label,
        }
    }

    pub fn undo_window(&self) -> Duration {
        Duration::from_millis(self.undo.clone().unwrap_or_default().window_ms)
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|o| o.default_format)
            .unwrap_or_default()
    }
}

/// How ROI values are rendered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Placeholder shown when ROI is not applicable (default: "N/A")
    #[serde(default = "default_na_label")]
    pub na_label: String,

    /// Decimal places for ROI values (default: 1)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            na_label: default_na_label(),
            precision: default_precision(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.na_label.trim().is_empty() {
            return Err(Error::configuration("na_label must not be empty"));
        }
        if self.precision > MAX_PRECISION {
            return Err(Error::configuration(format!(
                "precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

fn default_na_label() -> String {
    DEFAULT_NA_LABEL.to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Undo-delete window configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UndoConfig {
    /// How long a deleted task can be restored, in milliseconds
    #[serde(default = "default_undo_window_ms")]
    pub window_ms: u64,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self {
            window_ms: default_undo_window_ms(),
        }
    }
}

impl UndoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_ms == 0 {
            return Err(Error::configuration("window_ms must be greater than zero"));
        }
        Ok(())
    }
}

fn default_undo_window_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}
