use serde::Serialize;
use zca_core::config::OverlayConfig;
use zca_core::{Result, ZonalError};

/// An inclusive range of calendar years to overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    pub fn new(first: i32, last: i32) -> Result<Self> {
        if first > last {
            return Err(ZonalError::InvalidYearRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn from_config(config: &OverlayConfig) -> Result<Self> {
        Self::new(config.first_year, config.last_year)
    }

    /// Years in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    pub fn len(&self) -> usize {
        (i64::from(self.last) - i64::from(self.first) + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
