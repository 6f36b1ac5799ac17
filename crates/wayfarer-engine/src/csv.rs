//! CSV interchange for travel data.
//!
//! One header row, then one row per visit (or one status-only row for a
//! country with no recorded visits). The decoder is a fold over lines: bad
//! rows are skipped and reported as diagnostics, and only a structurally
//! empty input fails the whole import.

use std::fmt;
use wayfarer_types::{
    CountryCode, CountryStatus, ExportDataset, Granularity, PartialDate, Transportation,
    VisitId, VisitRecord,
};

/// Exact header line of the interchange format. Emitted verbatim; discarded
/// unvalidated on import.
pub const CSV_HEADER: &str = "Country Code,Status,Visit ID,Arrival Year,Arrival Month,Arrival Day,Departure Year,Departure Month,Departure Day,Granularity,Transportation,Note";

const COLUMN_COUNT: usize = 12;

/// Result of a tolerant CSV import: the recovered dataset plus one
/// diagnostic per skipped row or dropped field.
#[derive(Debug)]
pub struct CsvImport {
    pub dataset: ExportDataset,
    pub diagnostics: Vec<RowDiagnostic>,
}

/// A problem found on one data row. `line` is 1-based with the header as
/// line 1, matching what a user sees in an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub line: usize,
    pub reason: RowSkipReason,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Why a row (or one of its fields) was not imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSkipReason {
    /// Row has fewer than the 12 required columns.
    TooFewColumns(usize),
    /// Country code or status column is empty.
    MissingCountryOrStatus,
    /// Status is not one of none/visited/wishlist. The row contributes
    /// nothing, not even the status.
    InvalidStatus(String),
    /// A numeric column holds a non-numeric value.
    InvalidNumber(&'static str),
    /// Transportation outside the closed set; the value is dropped but the
    /// row is kept.
    InvalidTransportation(String),
}

impl fmt::Display for RowSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSkipReason::TooFewColumns(n) => {
                write!(f, "expected {} columns, found {}; row skipped", COLUMN_COUNT, n)
            }
            RowSkipReason::MissingCountryOrStatus => {
                write!(f, "missing country code or status; row skipped")
            }
            RowSkipReason::InvalidStatus(s) => write!(f, "invalid status '{}'; row skipped", s),
            RowSkipReason::InvalidNumber(column) => {
                write!(f, "non-numeric value in '{}'; row skipped", column)
            }
            RowSkipReason::InvalidTransportation(s) => {
                write!(f, "unknown transportation '{}'; value dropped", s)
            }
        }
    }
}

/// Encode the dataset as CSV text (no trailing newline).
///
/// Countries iterate in status-map order; a country with visits emits one
/// row per visit in stored order, a country without visits emits a single
/// row with all visit fields empty. Notes are always quoted when present,
/// with embedded quotes doubled.
pub fn to_csv(dataset: &ExportDataset) -> String {
    let mut rows = Vec::with_capacity(dataset.country_statuses.len() + 1);
    rows.push(CSV_HEADER.to_string());

    for (code, status) in &dataset.country_statuses {
        let visits = dataset.visits(code);
        if visits.is_empty() {
            // Status-only row still carries all 12 columns so it survives
            // the decoder's column-count gate.
            rows.push(format!("{},{},,,,,,,,,,", code, status));
        } else {
            for visit in visits {
                rows.push(visit_row(code, *status, visit));
            }
        }
    }

    rows.join("\n")
}

fn visit_row(code: &CountryCode, status: CountryStatus, visit: &VisitRecord) -> String {
    let arrival = &visit.arrival_date;
    let departure = visit.departure_date.as_ref();

    let fields: [String; COLUMN_COUNT] = [
        code.to_string(),
        status.to_string(),
        visit.id.to_string(),
        arrival.year.to_string(),
        opt_num(arrival.month),
        opt_num(arrival.day),
        departure.map(|d| d.year.to_string()).unwrap_or_default(),
        opt_num(departure.and_then(|d| d.month)),
        opt_num(departure.and_then(|d| d.day)),
        visit.granularity.to_string(),
        visit
            .transportation
            .map(|t| t.to_string())
            .unwrap_or_default(),
        visit.note.as_deref().map(escape_note).unwrap_or_default(),
    ];

    fields.join(",")
}

fn opt_num(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn escape_note(note: &str) -> String {
    format!("\"{}\"", note.replace('"', "\"\""))
}

/// Decode CSV text into a dataset.
///
/// Returns `None` only on structural failure: fewer than two lines (header
/// plus at least one data row). Every row-level problem is absorbed into
/// the diagnostics list and parsing continues.
pub fn from_csv(text: &str) -> Option<CsvImport> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return None;
    }

    let mut dataset = ExportDataset::new();
    let mut diagnostics = Vec::new();

    // Header is line 1 and is discarded unconditionally.
    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = index + 1;
        let (entry, warnings) = parse_row(line);
        diagnostics.extend(
            warnings
                .into_iter()
                .map(|reason| RowDiagnostic { line: line_no, reason }),
        );

        if let Some(entry) = entry {
            dataset.country_statuses.insert(entry.code.clone(), entry.status);
            if let Some(visit) = entry.visit {
                dataset.add_visit(entry.code, visit);
            }
        }
    }

    Some(CsvImport {
        dataset,
        diagnostics,
    })
}

struct RowEntry {
    code: CountryCode,
    status: CountryStatus,
    visit: Option<VisitRecord>,
}

fn parse_row(line: &str) -> (Option<RowEntry>, Vec<RowSkipReason>) {
    let parts = split_line(line);
    if parts.len() < COLUMN_COUNT {
        return (None, vec![RowSkipReason::TooFewColumns(parts.len())]);
    }

    let code = parts[0].as_str();
    let status = parts[1].as_str();
    if code.is_empty() || status.is_empty() {
        return (None, vec![RowSkipReason::MissingCountryOrStatus]);
    }

    let Ok(status) = status.parse::<CountryStatus>() else {
        return (None, vec![RowSkipReason::InvalidStatus(status.to_string())]);
    };
    let code = CountryCode::from(code);

    // A row contributes a status-only entry unless both the visit id and
    // the arrival year are present.
    let visit_id = parts[2].as_str();
    let arrival_year = parts[3].as_str();
    if visit_id.is_empty() || arrival_year.is_empty() {
        return (
            Some(RowEntry {
                code,
                status,
                visit: None,
            }),
            Vec::new(),
        );
    }

    let mut warnings = Vec::new();

    const ARRIVAL_COLUMNS: [&str; 3] = ["Arrival Year", "Arrival Month", "Arrival Day"];
    const DEPARTURE_COLUMNS: [&str; 3] = ["Departure Year", "Departure Month", "Departure Day"];

    let arrival = match parse_partial_date(arrival_year, &parts[4], &parts[5], ARRIVAL_COLUMNS) {
        Ok(date) => date,
        Err(reason) => return (None, vec![reason]),
    };

    let departure = if parts[6].is_empty() {
        None
    } else {
        match parse_partial_date(&parts[6], &parts[7], &parts[8], DEPARTURE_COLUMNS) {
            Ok(date) => Some(date),
            Err(reason) => return (None, vec![reason]),
        }
    };

    // Empty or unrecognized granularity falls back to year precision.
    let granularity = parts[9].parse::<Granularity>().unwrap_or(Granularity::Year);

    let transportation = if parts[10].is_empty() {
        None
    } else {
        match parts[10].parse::<Transportation>() {
            Ok(t) => Some(t),
            Err(_) => {
                warnings.push(RowSkipReason::InvalidTransportation(parts[10].clone()));
                None
            }
        }
    };

    let note = if parts[11].is_empty() {
        None
    } else {
        Some(unescape_note(&parts[11]))
    };

    let visit = VisitRecord {
        id: VisitId::new(visit_id),
        arrival_date: arrival,
        departure_date: departure,
        granularity,
        transportation,
        note,
    };

    (
        Some(RowEntry {
            code,
            status,
            visit: Some(visit),
        }),
        warnings,
    )
}

fn parse_partial_date(
    year: &str,
    month: &str,
    day: &str,
    columns: [&'static str; 3],
) -> Result<PartialDate, RowSkipReason> {
    let year = year
        .parse::<i32>()
        .map_err(|_| RowSkipReason::InvalidNumber(columns[0]))?;
    let month = parse_opt_component(month, columns[1])?;
    let day = parse_opt_component(day, columns[2])?;
    Ok(PartialDate { year, month, day })
}

fn parse_opt_component(
    value: &str,
    column: &'static str,
) -> Result<Option<u32>, RowSkipReason> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| RowSkipReason::InvalidNumber(column))
}

/// Split one line on commas, honoring double-quoted runs. Quote characters
/// are preserved in the field text (the note column strips them later);
/// each field is trimmed.
fn split_line(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    parts.push(current.trim().to_string());

    parts
}

/// Strip one layer of surrounding quotes and un-double internal quotes.
fn unescape_note(raw: &str) -> String {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}
