use crate::emphasis::{EmphasisTier, LineStyle};
use serde::Serialize;
use zca_core::calendar::DayOfYearIndex;
use zca_core::region::RegionDefinition;

/// Whether a layer is drawn or only listed in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    LegendOnly,
}

impl Visibility {
    pub fn toggled(self) -> Visibility {
        match self {
            Visibility::Visible => Visibility::LegendOnly,
            Visibility::LegendOnly => Visibility::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// One year of one region on the day-of-year axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesLayer {
    pub region: String,
    /// Index of the region panel this layer is drawn in
    pub panel: usize,
    pub year: i32,
    /// (day-of-year, value) pairs in day order, missing values dropped
    pub points: Vec<(u32, f64)>,
    pub tier: EmphasisTier,
    pub style: LineStyle,
    pub legend_group: i32,
    pub show_legend: bool,
    pub visibility: Visibility,
}

impl SeriesLayer {
    /// Hover label for the `i`-th point, e.g.
    /// "Year: 2024 | SSTA: 0.42 | DOY: 60 (03-01)".
    pub fn hover_text(&self, i: usize, value_label: &str, index: &DayOfYearIndex) -> Option<String> {
        let (day_of_year, value) = *self.points.get(i)?;
        let month_day = index.month_day(day_of_year).ok()?;
        Some(format!(
            "Year: {} | {}: {:.2} | DOY: {} ({})",
            self.year,
            value_label,
            value,
            day_of_year,
            month_day.key()
        ))
    }
}

/// The latitude-band map in the first grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLayer {
    pub regions: Vec<RegionDefinition>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Reference(ReferenceLayer),
    DataSeries(SeriesLayer),
}

impl Layer {
    pub fn as_series(&self) -> Option<&SeriesLayer> {
        match self {
            Layer::DataSeries(series) => Some(series),
            Layer::Reference(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(points: Vec<(u32, f64)>) -> SeriesLayer {
        SeriesLayer {
            region: "TROPICS".to_string(),
            panel: 3,
            year: 2024,
            points,
            tier: EmphasisTier::Current,
            style: EmphasisTier::Current.style(),
            legend_group: 2024,
            show_legend: true,
            visibility: Visibility::Visible,
        }
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Visibility::Visible.toggled(), Visibility::LegendOnly);
        assert_eq!(Visibility::Visible.toggled().toggled(), Visibility::Visible);
    }

    #[test]
    fn hover_text_format() {
        let index = DayOfYearIndex::new();
        let series = layer(vec![(1, 0.1), (60, 0.4231)]);
        assert_eq!(
            series.hover_text(1, "SSTA", &index).as_deref(),
            Some("Year: 2024 | SSTA: 0.42 | DOY: 60 (03-01)")
        );
        assert_eq!(series.hover_text(2, "SSTA", &index), None);
    }

    #[test]
    fn layers_serialize_with_kind_tag() {
        let json = serde_json::to_value(Layer::DataSeries(layer(vec![(1, 0.5)]))).unwrap();
        assert_eq!(json["kind"], "data_series");
        assert_eq!(json["visibility"], "visible");
        assert_eq!(json["tier"], "current");
        assert_eq!(json["style"]["color"], "#FFA500");
    }
}
