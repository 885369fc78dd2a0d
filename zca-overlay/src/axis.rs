use serde::Serialize;

/// Fraction of each extremum added to itself to get the y-axis bound.
pub const PADDING_FACTOR: f64 = 0.4;

/// A y-axis display range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Range used when a region has no finite values.
    pub const FALLBACK: AxisRange = AxisRange { min: -1.0, max: 1.0 };

    /// `[min + 0.4 * min, max + 0.4 * max]` over the finite values.
    ///
    /// The bounds scale away from zero only when `min < 0 < max`. A positive
    /// minimum or a negative maximum moves toward the other bound instead and
    /// can clip the series; this is kept as-is.
    pub fn padded<I: IntoIterator<Item = f64>>(values: I) -> Option<AxisRange> {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        Some(AxisRange {
            min: min + PADDING_FACTOR * min,
            max: max + PADDING_FACTOR * max,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::AxisRange;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tropics_example() {
        let range = AxisRange::padded(vec![0.1, -0.5, 0.8, 0.0]).unwrap();
        assert!(approx(range.min, -0.7), "min was {}", range.min);
        assert!(approx(range.max, 1.12), "max was {}", range.max);
    }

    #[test]
    fn nan_values_are_ignored() {
        let range = AxisRange::padded(vec![f64::NAN, -1.0, 2.0, f64::NAN]).unwrap();
        assert!(approx(range.min, -1.4));
        assert!(approx(range.max, 2.8));
    }

    #[test]
    fn positive_minimum_moves_up() {
        let range = AxisRange::padded(vec![0.5, 1.0]).unwrap();
        assert!(approx(range.min, 0.7));
        assert!(range.min > 0.5, "literal formula clips a positive minimum");
    }

    #[test]
    fn no_finite_values() {
        assert_eq!(AxisRange::padded(Vec::<f64>::new()), None);
        assert_eq!(AxisRange::padded(vec![f64::NAN]), None);
    }
}
