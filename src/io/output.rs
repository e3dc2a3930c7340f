use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::formatting::ColorMode;
use crate::report::SimulationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SimulationReport) -> anyhow::Result<()>;
}

/// Create a writer for `format` targeting `destination`.
///
/// Writing to a file always disables color so escape codes never end up on
/// disk.
pub fn create_writer(
    format: OutputFormat,
    destination: Option<&Path>,
    color: ColorMode,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match destination {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    let color = if destination.is_some() {
        ColorMode::Never
    } else {
        color
    };

    let writer: Box<dyn OutputWriter> = match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, color)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
    };
    Ok(writer)
}
