//! CSV and JSON output of joined events.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crewsrq_api::join::FinalEvent;

/// CSV header row.
const CSV_HEADERS: [&str; 8] = [
    "Date",
    "Start Time",
    "End Time",
    "Title",
    "Organizer",
    "Industry",
    "Market",
    "Link",
];

/// One spreadsheet row, in `CSV_HEADERS` order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: String,
    start_time: String,
    end_time: String,
    title: &'a str,
    organizer: &'a str,
    industry: &'a str,
    market: &'a str,
    link: &'a str,
}

impl<'a> From<&'a FinalEvent> for CsvRow<'a> {
    fn from(event: &'a FinalEvent) -> Self {
        Self {
            date: event.start.format("%Y-%m-%d").to_string(),
            start_time: event.start.format("%H:%M").to_string(),
            end_time: event.end.format("%H:%M").to_string(),
            title: &event.title,
            organizer: &event.organizer,
            industry: &event.industry,
            market: &event.market,
            link: &event.link,
        }
    }
}

/// Writes `events` as CSV, header row first.
///
/// # Errors
///
/// Returns an error if a row cannot be written.
pub fn write_csv<W: Write>(events: &[FinalEvent], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer
        .write_record(CSV_HEADERS)
        .context("failed to write CSV header")?;
    for event in events {
        writer
            .serialize(CsvRow::from(event))
            .context("failed to write CSV row")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Writes `events` as CSV to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv_file(events: &[FinalEvent], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(events, file)?;
    tracing::info!(path = %path.display(), rows = events.len(), "CSV written");
    Ok(())
}

/// Writes `events` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(events: &[FinalEvent], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, events).context("failed to serialize events")?;
    writeln!(out).context("failed to write JSON output")?;
    out.flush().context("failed to flush JSON output")?;
    Ok(())
}
