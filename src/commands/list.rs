use crate::formatting::FormattingConfig;
use crate::io::{create_writer, DisplayOptions, JsonFileSource, OutputFormat, TaskRepository};
use crate::ranking::{rank_tasks, take_top, RankedTask};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub formatting: FormattingConfig,
    pub display: DisplayOptions,
}

pub fn handle_list(config: ListConfig) -> Result<()> {
    let repository = TaskRepository::new(JsonFileSource::new(&config.path));
    let tasks = repository
        .into_tasks()
        .with_context(|| format!("Failed to load tasks from {}", config.path.display()))?;

    let total = tasks.len();
    let ranked = take_top(rank_tasks(tasks), config.top);
    log::debug!("Rendering {} of {} tasks", ranked.len(), total);

    match config.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_ranked(&mut out, &config, &ranked)?;
            out.into_inner()
                .map_err(|e| e.into_error())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            write_ranked(&mut out, &config, &ranked)?;
        }
    }
    Ok(())
}

fn write_ranked<W: Write>(out: &mut W, config: &ListConfig, ranked: &[RankedTask]) -> Result<()> {
    let mut writer = create_writer(
        config.format,
        Box::new(out),
        config.display.clone(),
        config.formatting,
    );
    writer.write_ranking(ranked)
}
