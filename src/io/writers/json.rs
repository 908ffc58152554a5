use super::{DisplayOptions, RankingWriter};
use crate::core::{Priority, TaskId};
use crate::ranking::RankedTask;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    rank: usize,
    id: TaskId,
    title: &'a str,
    priority: Priority,
    revenue: Option<f64>,
    time_taken: Option<f64>,
    /// `null` when not applicable
    roi: Option<f64>,
    roi_display: String,
}

pub struct JsonWriter<W: Write> {
    writer: W,
    options: DisplayOptions,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, options: DisplayOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> RankingWriter for JsonWriter<W> {
    fn write_ranking(&mut self, items: &[RankedTask]) -> anyhow::Result<()> {
        let rows: Vec<JsonRow<'_>> = items
            .iter()
            .enumerate()
            .map(|(i, item)| JsonRow {
                rank: i + 1,
                id: item.task.id,
                title: &item.task.title,
                priority: item.task.priority,
                revenue: item.task.revenue.filter(|v| v.is_finite()),
                time_taken: item.task.time_taken.filter(|v| v.is_finite()),
                roi: item.roi.value(),
                roi_display: self.options.roi(item),
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
