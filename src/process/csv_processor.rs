use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

use crate::error::PanelError;
use crate::process::{raw_table::RawRow, row::normalize_row};
use crate::schema::ProjectRecord;

const UTF8_BOM: char = '\u{feff}';

/// Read the export at `csv_path` and normalize every data row, preserving
/// input order. Rows without a project name are skipped but still consume an
/// index, so IDs stay tied to the row position in the file.
pub fn load_records(csv_path: &Path) -> Result<Vec<ProjectRecord>> {
    if !csv_path.exists() {
        return Err(PanelError::SourceMissing {
            path: csv_path.to_path_buf(),
        }
        .into());
    }

    let content = fs::read_to_string(csv_path)
        .with_context(|| format!("reading {}", csv_path.display()))?;
    let rows = parse_export(&content).with_context(|| format!("parsing {}", csv_path.display()))?;
    info!(rows = rows.len(), path = %csv_path.display(), "read export");

    let records: Vec<ProjectRecord> = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| normalize_row(row, idx))
        .collect();
    debug!(
        kept = records.len(),
        dropped = rows.len() - records.len(),
        "normalized rows"
    );
    Ok(records)
}

/// Split export text into header-keyed rows.
///
/// The first line of the export is a free-form summary ("Total proyectos: …")
/// and is discarded; the next line is the header row. A blank header line
/// means no named columns, so the export yields no rows.
pub fn parse_export(content: &str) -> Result<Vec<RawRow>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let body = match content.find('\n') {
        Some(pos) => &content[pos + 1..],
        None => "",
    };

    let header_line = body.split('\n').next().unwrap_or("");
    if !body.is_empty() && header_line.trim_end_matches('\r').is_empty() {
        warn!("header line after the summary is blank, no columns to read");
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers().context("reading header row")?.clone();

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading data row {}", line + 1))?;
        rows.push(RawRow::from_cells(headers.iter(), record.iter()));
    }
    Ok(rows)
}
