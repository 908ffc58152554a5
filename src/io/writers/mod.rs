//! Renderers for a ranked task list.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::formatting::FormattingConfig;
use crate::ranking::RankedTask;
use crate::roi::{DEFAULT_NA_LABEL, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// How ROI values are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub precision: usize,
    pub na_label: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            na_label: DEFAULT_NA_LABEL.to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn roi(&self, item: &RankedTask) -> String {
        item.roi.display(self.precision, &self.na_label)
    }
}

pub trait RankingWriter {
    fn write_ranking(&mut self, items: &[RankedTask]) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: DisplayOptions,
    formatting: FormattingConfig,
) -> Box<dyn RankingWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, options, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, options)),
    }
}

/// Revenue / time-taken cell text; malformed inputs show as `-`.
pub(crate) fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v}"),
        _ => "-".to_string(),
    }
}
