//! CSV loading for vote tables and live results.

use std::{fs, io::Cursor, path::Path};

use anyhow::{bail, ensure, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};
use tracing::debug;

use super::parties::PartyRegistry;
use crate::types::{CurrentResult, CurrentResults, District, SeatFilter};

const KEY_COLUMN: &str = "district";

/// Read CSV bytes with every column kept as text, so district keys keep
/// their leading zeros and counts can be validated here.
fn read_text_table(bytes: &[u8]) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .context("[io::csv::read] Failed to parse CSV")
}

/// Text cells of a column, `None` for empty cells.
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] missing column '{name}'"))?;
    Ok(column.str()?.into_iter()
        .map(|cell| cell.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
        .collect())
}

fn district_keys(df: &DataFrame) -> Result<Vec<String>> {
    text_column(df, KEY_COLUMN)?.into_iter().enumerate()
        .map(|(row, key)| key.with_context(|| format!("[io::csv::read] row {}: empty district key", row + 1)))
        .collect()
}

fn parse_votes_cell(cell: Option<&str>, row: usize, column: &str) -> Result<u64> {
    let Some(text) = cell else { return Ok(0) };
    ensure!(!text.starts_with('-'),
        "[io::csv::read] row {row}, column '{column}': vote counts must be non-negative, got '{text}'");
    text.parse::<u64>()
        .with_context(|| format!("[io::csv::read] row {row}, column '{column}': invalid vote count '{text}'"))
}

fn parse_flag(cell: Option<&str>, row: usize) -> Result<bool> {
    match cell.map(str::to_ascii_lowercase).as_deref() {
        None | Some("false") | Some("0") | Some("no") => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some(other) => bail!("[io::csv::read] row {row}: invalid final flag '{other}'"),
    }
}

/// Parse a votes table: `district,<party id>,<party id>,...`.
pub fn parse_votes(bytes: &[u8], parties: &PartyRegistry) -> Result<Vec<District<String>>> {
    let df = read_text_table(bytes)?;
    let names = df.get_column_names().into_iter().map(|n| n.to_string()).collect::<Vec<_>>();
    ensure!(names.first().is_some_and(|n| n == KEY_COLUMN),
        "[io::csv::read] first column must be '{KEY_COLUMN}', got {names:?}");

    let keys = district_keys(&df)?;
    let mut columns = Vec::with_capacity(names.len() - 1);
    for name in &names[1..] {
        columns.push((parties.get(name)?.clone(), text_column(&df, name)?));
    }

    let districts = keys.into_iter().enumerate()
        .map(|(i, key)| {
            let votes = columns.iter()
                .map(|(party, cells)| {
                    let count = parse_votes_cell(cells[i].as_deref(), i + 1, party.abbreviation())?;
                    Ok((party.clone(), count))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(District::new(key, votes))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(districts = districts.len(), parties = columns.len(), "read votes table");
    Ok(districts)
}

/// Read a votes table from a file.
pub fn read_votes(path: &Path, parties: &PartyRegistry) -> Result<Vec<District<String>>> {
    let bytes = fs::read(path)
        .with_context(|| format!("[io::csv::read] Failed to open votes file: {}", path.display()))?;
    parse_votes(&bytes, parties)
        .with_context(|| format!("[io::csv::read] Failed to read votes from {}", path.display()))
}

/// Parse a results table: `district,winner,final`. An empty winner means the
/// district has not declared.
pub fn parse_results(bytes: &[u8], parties: &PartyRegistry) -> Result<CurrentResults<String>> {
    let df = read_text_table(bytes)?;
    let keys = district_keys(&df)?;
    let winners = text_column(&df, "winner")?;
    let finals = text_column(&df, "final")?;

    let mut results = CurrentResults::with_capacity(keys.len());
    for (i, key) in keys.into_iter().enumerate() {
        let winner = winners[i].as_deref().map(|id| parties.get(id).cloned()).transpose()?;
        let is_final = parse_flag(finals[i].as_deref(), i + 1)?;
        ensure!(!results.contains_key(&key), "[io::csv::read] duplicate district '{key}' in results");
        results.insert(key, CurrentResult { winner, is_final });
    }

    debug!(results = results.len(), "read results table");
    Ok(results)
}

/// Read a results table from a file.
pub fn read_results(path: &Path, parties: &PartyRegistry) -> Result<CurrentResults<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("[io::csv::read] Failed to open results file: {}", path.display()))?;
    parse_results(&bytes, parties)
        .with_context(|| format!("[io::csv::read] Failed to read results from {}", path.display()))
}

/// Read a newline-separated list of district keys. Blank lines and lines
/// starting with `#` are ignored.
pub fn read_seat_filter(path: &Path) -> Result<SeatFilter<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::csv::read] Failed to open filter file: {}", path.display()))?;
    Ok(text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
