//! Plain-text table rendering for joined events.

use std::io::Write;

use anyhow::{Context, Result};

use crate::join::FinalEvent;

/// Column headers, in output order.
const HEADERS: [&str; 7] = [
    "Event Title",
    "Event Link",
    "start_dt",
    "end_dt",
    "Organizer",
    "Industry",
    "Market",
];

/// Timestamp format used in the table.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cells of one event, in `HEADERS` order.
fn row(event: &FinalEvent) -> [String; 7] {
    [
        event.title.clone(),
        event.link.clone(),
        event.start.format(TIMESTAMP_FORMAT).to_string(),
        event.end.format(TIMESTAMP_FORMAT).to_string(),
        event.organizer.clone(),
        event.industry.clone(),
        event.market.clone(),
    ]
}

/// Renders `events` as a left-aligned table with a header row.
#[must_use]
pub fn render_table(events: &[FinalEvent]) -> String {
    let rows: Vec<[String; 7]> = events.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    std::iter::once(&header)
        .chain(&rows)
        .map(|cells| {
            let line = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}\n", line.trim_end())
        })
        .collect()
}

/// Writes the table to `out` when `events` is non-empty and hands the
/// events back unchanged. Nothing is written for an empty list.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn present<W: Write>(events: Vec<FinalEvent>, out: &mut W) -> Result<Vec<FinalEvent>> {
    if events.is_empty() {
        return Ok(events);
    }
    out.write_all(render_table(&events).as_bytes())
        .context("failed to write event table")?;
    out.flush().context("failed to flush event table")?;
    Ok(events)
}
