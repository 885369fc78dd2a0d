//! The observation table: one row per calendar date, one column per zonal region.
//!
//! # CSV Format
//!
//! A header row naming the date column (`TIME` by default) and one column per
//! region. Values are anomalies in degrees; empty cells and `NaN` are carried
//! as missing (`f64::NAN`).
//!
//! ```text
//! TIME,GLOBAL,TROPICS,POLAR (N)
//! 1981-01-01,0.12,-0.31,1.05
//! 1981-01-02,0.10,-0.29,
//! ```

use crate::error::{Result, ZonalError};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default name of the date column.
pub const DEFAULT_TIME_COLUMN: &str = "TIME";

/// Date format of the date column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    /// One value per region, in table column order. Missing values are NaN.
    pub values: Vec<f64>,
}

/// Anomaly observations keyed by calendar date, with named region columns.
///
/// Rows are kept sorted by date.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    regions: Vec<String>,
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Build a table from region names and rows. Rows are sorted by date.
    pub fn new(regions: Vec<String>, mut rows: Vec<Observation>) -> Self {
        rows.sort_by_key(|row| row.date);
        Self { regions, rows }
    }

    /// Parse a table from CSV text.
    pub fn from_csv_str(csv_data: &str, time_column: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes(), time_column)
    }

    /// Load a table from a CSV file. Paths ending in `.gz` are decompressed.
    pub fn from_path(path: &Path, time_column: &str) -> Result<Self> {
        let file = File::open(path)?;
        let is_gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        let table = if is_gzip {
            Self::from_reader(GzDecoder::new(BufReader::new(file)), time_column)?
        } else {
            Self::from_reader(BufReader::new(file), time_column)?
        };
        log::info!(
            "[ZCA] table: Loaded {} rows x {} regions from {}",
            table.rows.len(),
            table.regions.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a table from any CSV reader. Fails fast on the first malformed
    /// date or value.
    pub fn from_reader<R: Read>(reader: R, time_column: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let time_idx = headers
            .iter()
            .position(|h| h == time_column)
            .ok_or_else(|| ZonalError::MissingTimeColumn(time_column.to_string()))?;
        let regions: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != time_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let date_str = record.get(time_idx).unwrap_or("");
            let date = parse_date(date_str).ok_or_else(|| ZonalError::DateParse {
                line,
                value: date_str.to_string(),
            })?;

            let mut values = Vec::with_capacity(regions.len());
            for (i, cell) in record.iter().enumerate() {
                if i == time_idx {
                    continue;
                }
                let value = parse_value(cell).ok_or_else(|| ZonalError::ValueParse {
                    line,
                    column: headers.get(i).unwrap_or("").to_string(),
                    value: cell.to_string(),
                })?;
                values.push(value);
            }
            rows.push(Observation { date, values });
        }

        Ok(Self::new(regions, rows))
    }

    /// Region column names, in table order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a date cell. Accepts "YYYY-MM-DD" optionally followed by a time
/// component separated by a space or `T`, which is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = match s.find([' ', 'T']) {
        Some(idx) => &s[..idx],
        None => s,
    };
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Parse a value cell. Empty cells and NaN spellings become `f64::NAN`.
fn parse_value(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
TIME,GLOBAL,TROPICS,POLAR (N)
1981-01-02,0.10,-0.29,
1981-01-01,0.12,-0.31,1.05
1984-02-29 00:00:00,0.30,0.10,NaN
";

    #[test]
    fn parses_regions_and_rows() {
        let table = ObservationTable::from_csv_str(SAMPLE_CSV, DEFAULT_TIME_COLUMN).unwrap();
        assert_eq!(table.regions(), &["GLOBAL", "TROPICS", "POLAR (N)"]);
        assert_eq!(table.len(), 3);
        // rows are sorted by date
        assert_eq!(table.rows()[0].date, NaiveDate::from_ymd_opt(1981, 1, 1).unwrap());
        assert_eq!(table.rows()[0].values, vec![0.12, -0.31, 1.05]);
    }

    #[test]
    fn missing_cells_become_nan() {
        let table = ObservationTable::from_csv_str(SAMPLE_CSV, DEFAULT_TIME_COLUMN).unwrap();
        assert!(table.rows()[1].values[2].is_nan());
        assert!(table.rows()[2].values[2].is_nan());
    }

    #[test]
    fn time_component_is_ignored() {
        let table = ObservationTable::from_csv_str(SAMPLE_CSV, DEFAULT_TIME_COLUMN).unwrap();
        assert_eq!(table.rows()[2].date, NaiveDate::from_ymd_opt(1984, 2, 29).unwrap());
        assert_eq!(parse_date("2024-06-01T12:00:00"), NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn malformed_date_fails_fast() {
        let csv = "TIME,GLOBAL\n1981-13-01,0.1\n";
        let err = ObservationTable::from_csv_str(csv, DEFAULT_TIME_COLUMN).unwrap_err();
        match err {
            ZonalError::DateParse { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "1981-13-01");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_value_fails_fast() {
        let csv = "TIME,GLOBAL\n1981-01-01,warm\n";
        let err = ObservationTable::from_csv_str(csv, DEFAULT_TIME_COLUMN).unwrap_err();
        assert!(matches!(err, ZonalError::ValueParse { ref column, .. } if column == "GLOBAL"));
    }

    #[test]
    fn missing_time_column_is_reported() {
        let csv = "DATE,GLOBAL\n1981-01-01,0.1\n";
        let err = ObservationTable::from_csv_str(csv, DEFAULT_TIME_COLUMN).unwrap_err();
        assert!(matches!(err, ZonalError::MissingTimeColumn(ref c) if c == "TIME"));
    }
}
