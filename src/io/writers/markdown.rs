use super::{format_amount, DisplayOptions, RankingWriter};
use crate::ranking::RankedTask;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: DisplayOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: DisplayOptions) -> Self {
        Self { writer, options }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Tasks by ROI")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Title | Priority | Revenue | Time Taken | ROI |"
        )?;
        writeln!(self.writer, "|---|-------|----------|---------|------------|-----|")?;
        Ok(())
    }

    fn write_row(&mut self, rank: usize, item: &RankedTask) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            rank,
            escape_cell(&item.task.title),
            item.task.priority,
            format_amount(item.task.revenue),
            format_amount(item.task.time_taken),
            self.options.roi(item)
        )?;
        Ok(())
    }
}

impl<W: Write> RankingWriter for MarkdownWriter<W> {
    fn write_ranking(&mut self, items: &[RankedTask]) -> anyhow::Result<()> {
        self.write_header()?;
        for (i, item) in items.iter().enumerate() {
            self.write_row(i + 1, item)?;
        }
        if items.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "_No tasks._")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
