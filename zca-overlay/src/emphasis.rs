//! Year emphasis policy.
//!
//! A three-tier categorical mapping over the year range: the last year is
//! the accented current year, the year before it is distinguished, and every
//! older year shares one muted style.

use crate::years::YearRange;
use serde::Serialize;
use zca_core::color::Rgb;

/// Line weight of the current and prior years.
pub const ACCENT_WIDTH: u32 = 2;

/// Line weight of historical years.
pub const STANDARD_WIDTH: u32 = 1;

/// Opacity of historical years.
pub const MUTED_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisTier {
    /// The most recent year in range
    Current,
    /// The year before the most recent one
    Prior,
    Historical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: u32,
    pub opacity: f64,
}

impl EmphasisTier {
    pub fn for_year(year: i32, years: &YearRange) -> EmphasisTier {
        if year == years.last {
            EmphasisTier::Current
        } else if years.last.checked_sub(1) == Some(year) {
            EmphasisTier::Prior
        } else {
            EmphasisTier::Historical
        }
    }

    pub fn style(&self) -> LineStyle {
        match self {
            EmphasisTier::Current => LineStyle {
                color: Rgb::ORANGE,
                width: ACCENT_WIDTH,
                opacity: 1.0,
            },
            EmphasisTier::Prior => LineStyle {
                color: Rgb::BLACK,
                width: ACCENT_WIDTH,
                opacity: 1.0,
            },
            EmphasisTier::Historical => LineStyle {
                color: Rgb::GREY,
                width: STANDARD_WIDTH,
                opacity: MUTED_OPACITY,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmphasisTier::Current => "current",
            EmphasisTier::Prior => "prior",
            EmphasisTier::Historical => "historical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_over_default_range() {
        let years = YearRange::new(1981, 2024).unwrap();
        assert_eq!(EmphasisTier::for_year(2024, &years), EmphasisTier::Current);
        assert_eq!(EmphasisTier::for_year(2023, &years), EmphasisTier::Prior);
        assert_eq!(EmphasisTier::for_year(2022, &years), EmphasisTier::Historical);
        assert_eq!(EmphasisTier::for_year(1981, &years), EmphasisTier::Historical);
    }

    #[test]
    fn tiers_follow_the_range_end() {
        let years = YearRange::new(1991, 2020).unwrap();
        assert_eq!(EmphasisTier::for_year(2020, &years), EmphasisTier::Current);
        assert_eq!(EmphasisTier::for_year(2019, &years), EmphasisTier::Prior);
    }

    #[test]
    fn extreme_year_bounds() {
        let years = YearRange::new(i32::MIN, i32::MIN).unwrap();
        assert_eq!(EmphasisTier::for_year(i32::MIN, &years), EmphasisTier::Current);
        let years = YearRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(EmphasisTier::for_year(i32::MAX - 1, &years), EmphasisTier::Prior);
        assert_eq!(EmphasisTier::for_year(i32::MIN, &years), EmphasisTier::Historical);
    }

    #[test]
    fn accented_years_are_heavier_and_opaque() {
        let current = EmphasisTier::Current.style();
        let prior = EmphasisTier::Prior.style();
        let historical = EmphasisTier::Historical.style();
        assert!(current.width > historical.width);
        assert!(prior.width > historical.width);
        assert_eq!(current.opacity, 1.0);
        assert!(historical.opacity < 1.0);
        assert_ne!(current.color, prior.color);
        assert_ne!(prior.color, historical.color);
    }
}
