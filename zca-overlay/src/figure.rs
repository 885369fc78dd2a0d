use crate::axis::AxisRange;
use crate::emphasis::{EmphasisTier, LineStyle};
use crate::grid::GridLayout;
use crate::layer::{Layer, ReferenceLayer, SeriesLayer, Visibility};
use crate::visibility::VisibilityCommand;
use crate::years::YearRange;
use serde::Serialize;
use zca_core::Result;

/// One region subplot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPanel {
    pub region: String,
    pub y_range: AxisRange,
}

/// A legend item; one per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendEntry {
    pub year: i32,
    pub tier: EmphasisTier,
    pub style: LineStyle,
    pub visible: bool,
}

/// A complete overlay figure: the reference map layer followed by every
/// (region, year) series layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub value_label: String,
    pub years: YearRange,
    pub grid: GridLayout,
    pub panels: Vec<RegionPanel>,
    pub layers: Vec<Layer>,
}

impl Figure {
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn series(&self) -> impl Iterator<Item = &SeriesLayer> {
        self.layers.iter().filter_map(Layer::as_series)
    }

    /// Series layers of one panel, in draw order.
    pub fn panel_series(&self, panel: usize) -> impl Iterator<Item = &SeriesLayer> {
        self.series().filter(move |s| s.panel == panel)
    }

    pub fn reference(&self) -> Option<&ReferenceLayer> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Reference(reference) => Some(reference),
            Layer::DataSeries(_) => None,
        })
    }

    pub fn layer_for(&self, region: &str, year: i32) -> Option<&SeriesLayer> {
        self.series().find(|s| s.region == region && s.year == year)
    }

    /// A new figure with the command applied.
    pub fn apply(&self, command: VisibilityCommand) -> Figure {
        let target = match command {
            VisibilityCommand::ToggleYear(year) => self
                .series()
                .find(|s| s.year == year)
                .map(|s| s.visibility.toggled()),
            _ => None,
        };
        // isolating the year that is already the only one shown restores every year
        let restore = match command {
            VisibilityCommand::IsolateYear(year) => {
                self.series().any(|s| s.year == year)
                    && self.series().all(|s| s.visibility.is_visible() == (s.year == year))
            }
            _ => false,
        };

        let mut figure = self.clone();
        for layer in figure.layers.iter_mut() {
            let Layer::DataSeries(series) = layer else {
                continue;
            };
            series.visibility = match command {
                VisibilityCommand::ShowAll => Visibility::Visible,
                VisibilityCommand::HideAll => Visibility::LegendOnly,
                VisibilityCommand::ToggleYear(year) => match target {
                    Some(visibility) if series.year == year => visibility,
                    _ => series.visibility,
                },
                VisibilityCommand::IsolateYear(_) if restore => Visibility::Visible,
                VisibilityCommand::IsolateYear(year) if series.year == year => Visibility::Visible,
                VisibilityCommand::IsolateYear(_) => Visibility::LegendOnly,
            };
        }
        log::debug!("[ZCA] overlay: Applied {:?}", command);
        figure
    }

    /// One entry per year in the range, ascending. A year counts as
    /// visible when any of its layers is.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.years
            .iter()
            .map(|year| {
                let tier = EmphasisTier::for_year(year, &self.years);
                LegendEntry {
                    year,
                    tier,
                    style: tier.style(),
                    visible: self
                        .series()
                        .any(|s| s.year == year && s.visibility.is_visible()),
                }
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
