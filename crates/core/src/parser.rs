//! Tolerant reader for the comma-separated question files.
//!
//! The format is line based: the first line names the columns, every other
//! line is one record. Quoted cells may contain commas, but not newlines.

use std::collections::HashMap;

/// One data line keyed by the header names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: HashMap<String, String>,
}

impl RawRecord {
    /// Returns the cell for `column`, or `None` if the header has no such column.
    ///
    /// A known column whose cell was missing on the line yields `Some("")`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Parse raw text into one record per data line.
///
/// Returns an empty list when the text has no header plus at least one data line.
#[must_use]
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut lines = text.trim().lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let cells = split_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let raw = cells.get(i).map_or("", String::as_str);
                    ((*name).to_string(), clean_cell(raw))
                })
                .collect()
        })
        .collect()
}

/// Split one line into cells, honouring double-quoted sections.
///
/// Inside quotes a comma is literal and `""` is an escaped quote. The quote
/// characters that open and close a section are dropped.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => out.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    out.push(current);
    out
}

// Strips at most one quote on each side; this is not CSV unescaping.
fn clean_cell(raw: &str) -> String {
    let without_lead = raw.strip_prefix('"').unwrap_or(raw);
    let stripped = without_lead.strip_suffix('"').unwrap_or(without_lead);
    stripped.trim().to_string()
}
