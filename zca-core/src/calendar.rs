//! Day-of-year alignment of calendar dates.
//!
//! Every year is mapped onto the 365 days of a non-leap reference year so
//! that years can be overlaid on one x-axis. February 29 has no slot: leap
//! day observations are dropped rather than remapped, which shifts leap years
//! by one calendar day after Feb 28.

use crate::date_range::DateRange;
use crate::error::{Result, ZonalError};
use crate::table::ObservationTable;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Non-leap year used to build the day-of-year index.
pub const REFERENCE_YEAR: i32 = 1901;

/// Number of slots on the aligned axis.
pub const DAYS_PER_YEAR: u32 = 365;

/// Single-letter month labels for x-axis ticks.
pub const MONTH_LABELS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// A month and day without a year.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// A month-day that exists in the non-leap reference year.
    pub fn from_md_opt(month: u32, day: u32) -> Option<MonthDay> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).map(|_| MonthDay { month, day })
    }

    /// Parse an "MM-DD" key. Feb 29 is rejected.
    pub fn from_key(key: &str) -> Result<MonthDay> {
        let invalid = || ZonalError::InvalidMonthDay(key.to_string());
        let (month, day) = key.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        MonthDay::from_md_opt(month, day).ok_or_else(invalid)
    }

    /// The "MM-DD" key.
    pub fn key(&self) -> String {
        format!("{:02}-{:02}", self.month, self.day)
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(value: NaiveDate) -> Self {
        MonthDay {
            month: value.month(),
            day: value.day(),
        }
    }
}

/// Returns true for February 29.
pub fn is_leap_day(date: &NaiveDate) -> bool {
    date.month() == 2 && date.day() == 29
}

/// Lookup from "MM-DD" to day-of-year in 1..=365.
///
/// Built once by walking the reference year day by day, so the mapping is a
/// bijection over the 365 non-leap month-days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOfYearIndex {
    by_key: HashMap<String, u32>,
    by_day: Vec<MonthDay>,
}

impl Default for DayOfYearIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DayOfYearIndex {
    pub fn new() -> Self {
        let mut by_key = HashMap::with_capacity(DAYS_PER_YEAR as usize);
        let mut by_day = Vec::with_capacity(DAYS_PER_YEAR as usize);
        if let Some(reference) = DateRange::calendar_year(REFERENCE_YEAR) {
            for (i, date) in reference.enumerate() {
                let month_day = MonthDay::from(date);
                by_key.insert(month_day.key(), i as u32 + 1);
                by_day.push(month_day);
            }
        }
        Self { by_key, by_day }
    }

    /// Day-of-year for an "MM-DD" key.
    pub fn lookup(&self, key: &str) -> Option<u32> {
        self.by_key.get(key).copied()
    }

    /// Day-of-year for a calendar date of any year. `None` for Feb 29.
    pub fn day_of_year(&self, date: &NaiveDate) -> Option<u32> {
        if is_leap_day(date) {
            return None;
        }
        self.lookup(&MonthDay::from(*date).key())
    }

    /// The month-day at a given day-of-year.
    pub fn month_day(&self, day_of_year: u32) -> Result<MonthDay> {
        day_of_year
            .checked_sub(1)
            .and_then(|i| self.by_day.get(i as usize))
            .copied()
            .ok_or(ZonalError::InvalidDayOfYear(day_of_year))
    }

    /// Day-of-year of the first of each month with its single-letter label.
    pub fn month_ticks(&self) -> Vec<(u32, &'static str)> {
        MONTH_LABELS
            .iter()
            .enumerate()
            .filter_map(|(i, label)| {
                let key = MonthDay { month: i as u32 + 1, day: 1 }.key();
                self.lookup(&key).map(|doy| (doy, *label))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

/// An observation row with its day-of-year slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedObservation {
    pub date: NaiveDate,
    pub day_of_year: u32,
    pub values: Vec<f64>,
}

impl AlignedObservation {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// The observation table with leap days removed and every row on the
/// 365-day axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTable {
    regions: Vec<String>,
    rows: Vec<AlignedObservation>,
}

impl AlignedTable {
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn rows(&self) -> &[AlignedObservation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a region column. A missing region is a selection error.
    pub fn column_index(&self, region: &str) -> Result<usize> {
        self.regions
            .iter()
            .position(|r| r == region)
            .ok_or_else(|| ZonalError::MissingColumn(region.to_string()))
    }

    /// Every value of a region column, all years included.
    pub fn column_values(&self, region: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(region)?;
        Ok(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    /// The (day-of-year, value) series of one region for one year, in
    /// day order.
    pub fn year_series(&self, region: &str, year: i32) -> Result<Vec<(u32, f64)>> {
        let idx = self.column_index(region)?;
        Ok(self
            .rows
            .iter()
            .filter(|row| row.year() == year)
            .map(|row| (row.day_of_year, row.values[idx]))
            .collect())
    }
}

/// Drops leap days and assigns day-of-year slots.
#[derive(Debug, Clone, Default)]
pub struct CalendarAligner {
    index: DayOfYearIndex,
}

impl CalendarAligner {
    pub fn new() -> Self {
        Self {
            index: DayOfYearIndex::new(),
        }
    }

    pub fn align(&self, table: &ObservationTable) -> AlignedTable {
        let mut dropped = 0usize;
        let rows: Vec<AlignedObservation> = table
            .rows()
            .iter()
            .filter_map(|row| match self.index.day_of_year(&row.date) {
                Some(day_of_year) => Some(AlignedObservation {
                    date: row.date,
                    day_of_year,
                    values: row.values.clone(),
                }),
                None => {
                    dropped += 1;
                    None
                }
            })
            .collect();
        if dropped > 0 {
            log::warn!("[ZCA] calendar: Dropped {} leap day rows", dropped);
        }
        log::info!("[ZCA] calendar: Aligned {} rows", rows.len());
        AlignedTable {
            regions: table.regions().to_vec(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Observation, DEFAULT_TIME_COLUMN};
    use std::collections::HashSet;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Rows for every day of 1981 and of 1984 (which includes Feb 29).
    fn two_year_table() -> ObservationTable {
        let mut rows = Vec::new();
        for year in [1981, 1984] {
            for (i, date) in DateRange::calendar_year(year).unwrap().enumerate() {
                rows.push(Observation {
                    date,
                    values: vec![i as f64],
                });
            }
        }
        ObservationTable::new(vec!["GLOBAL".to_string()], rows)
    }

    #[test]
    fn index_is_a_bijection_onto_1_to_365() {
        let index = DayOfYearIndex::new();
        assert_eq!(index.len(), 365);
        let days: HashSet<u32> = DateRange::calendar_year(1999)
            .unwrap()
            .map(|d| index.day_of_year(&d).unwrap())
            .collect();
        assert_eq!(days.len(), 365);
        assert_eq!(days.iter().min(), Some(&1));
        assert_eq!(days.iter().max(), Some(&365));
    }

    #[test]
    fn lookup_by_key() {
        let index = DayOfYearIndex::new();
        assert_eq!(index.lookup("01-01"), Some(1));
        assert_eq!(index.lookup("03-01"), Some(60));
        assert_eq!(index.lookup("12-31"), Some(365));
        assert_eq!(index.lookup("02-29"), None);
    }

    #[test]
    fn leap_and_non_leap_years_share_slots() {
        let index = DayOfYearIndex::new();
        assert_eq!(index.day_of_year(&ymd(1984, 3, 1)), Some(60));
        assert_eq!(index.day_of_year(&ymd(1981, 3, 1)), Some(60));
        assert_eq!(index.day_of_year(&ymd(1984, 2, 29)), None);
        assert_eq!(index.day_of_year(&ymd(1984, 12, 31)), Some(365));
    }

    #[test]
    fn month_day_is_inverse_of_lookup() {
        let index = DayOfYearIndex::new();
        for doy in 1..=365 {
            let md = index.month_day(doy).unwrap();
            assert_eq!(index.lookup(&md.key()), Some(doy));
        }
        assert!(matches!(index.month_day(0), Err(ZonalError::InvalidDayOfYear(0))));
        assert!(matches!(index.month_day(366), Err(ZonalError::InvalidDayOfYear(366))));
    }

    #[test]
    fn month_ticks_start_each_month() {
        let ticks = DayOfYearIndex::new().month_ticks();
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], (1, "J"));
        assert_eq!(ticks[1], (32, "F"));
        assert_eq!(ticks[2], (60, "M"));
        assert_eq!(ticks[11], (335, "D"));
    }

    #[test]
    fn month_day_keys() {
        assert_eq!(MonthDay::from_key("03-01").unwrap(), MonthDay { month: 3, day: 1 });
        assert_eq!(MonthDay { month: 7, day: 4 }.key(), "07-04");
        for bad in ["02-29", "3-01", "13-01", "xx-yy", "0301"] {
            assert!(MonthDay::from_key(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn align_drops_leap_day_rows() {
        let aligned = CalendarAligner::new().align(&two_year_table());
        assert_eq!(aligned.len(), 365 * 2);
        assert!(aligned.rows().iter().all(|row| !is_leap_day(&row.date)));

        let series_1984 = aligned.year_series("GLOBAL", 1984).unwrap();
        assert_eq!(series_1984.len(), 365);
        // Feb 29 was row 59 of 1984; Mar 1 (row 60) sits at day 60.
        assert_eq!(series_1984[59], (60, 60.0));
        assert!(series_1984.iter().all(|(_, v)| *v != 59.0));
    }

    #[test]
    fn align_from_csv() {
        let csv = "TIME,GLOBAL\n1984-02-28,1.0\n1984-02-29,2.0\n1984-03-01,3.0\n";
        let table = ObservationTable::from_csv_str(csv, DEFAULT_TIME_COLUMN).unwrap();
        let aligned = CalendarAligner::new().align(&table);
        let days: Vec<u32> = aligned.rows().iter().map(|r| r.day_of_year).collect();
        assert_eq!(days, vec![59, 60]);
    }

    #[test]
    fn unknown_region_is_a_selection_error() {
        let aligned = CalendarAligner::new().align(&two_year_table());
        let err = aligned.year_series("TROPICS", 1981).unwrap_err();
        assert!(matches!(err, ZonalError::MissingColumn(ref r) if r == "TROPICS"));
        assert!(aligned.column_values("TROPICS").is_err());
    }

    #[test]
    fn column_values_span_all_years_without_leap_day() {
        let aligned = CalendarAligner::new().align(&two_year_table());
        let values = aligned.column_values("GLOBAL").unwrap();
        assert_eq!(values.len(), 730);
        assert_eq!(values[364], 364.0);
        assert_eq!(values[365], 0.0);
        assert!(!values[365..].contains(&59.0));
    }
}
