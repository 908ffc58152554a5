use super::{format_amount, DisplayOptions, RankingWriter};
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::ranking::RankedTask;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{CellAlignment, ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: DisplayOptions,
    formatting: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: DisplayOptions, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            options,
            formatting,
            formatter: formatting.formatter(),
        }
    }

    fn build_table(&self, items: &[RankedTask]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.formatting.ascii_only {
                ASCII_FULL
            } else {
                UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Title", "Priority", "Revenue", "Time", "ROI"]);

        for (i, item) in items.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                item.task.title.clone(),
                item.task.priority.to_string(),
                format_amount(item.task.revenue),
                format_amount(item.task.time_taken),
                self.options.roi(item),
            ]);
        }

        for index in [0, 3, 4, 5] {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        table
    }
}

impl<W: Write> RankingWriter for TerminalWriter<W> {
    fn write_ranking(&mut self, items: &[RankedTask]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Tasks by ROI"))?;

        if items.is_empty() {
            writeln!(self.writer, "{}", self.formatter.dim("No tasks."))?;
            self.writer.flush()?;
            return Ok(());
        }

        let table = self.build_table(items);
        writeln!(self.writer, "{table}")?;

        let without_roi = items.iter().filter(|i| !i.roi.is_applicable()).count();
        let summary = format!("{} tasks, {} without ROI", items.len(), without_roi);
        if without_roi > 0 {
            writeln!(self.writer, "{}", self.formatter.warning(&summary))?;
        } else {
            writeln!(self.writer, "{}", self.formatter.dim(&summary))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
