use crate::axis::AxisRange;
use crate::emphasis::EmphasisTier;
use crate::figure::{Figure, RegionPanel};
use crate::grid::GridLayout;
use crate::layer::{Layer, ReferenceLayer, SeriesLayer, Visibility};
use crate::years::YearRange;
use std::collections::HashSet;
use zca_core::calendar::AlignedTable;
use zca_core::config::OverlayConfig;
use zca_core::region::RegionDefinition;
use zca_core::{Result, ZonalError};

/// Builds the overlay figure from an aligned table.
#[derive(Debug, Clone)]
pub struct OverlayBuilder {
    regions: Vec<String>,
    years: YearRange,
    title: String,
    value_label: String,
    map_regions: Vec<RegionDefinition>,
}

impl OverlayBuilder {
    pub fn new(regions: Vec<String>, years: YearRange) -> Result<Self> {
        let config = OverlayConfig::default();
        Ok(Self {
            regions,
            years,
            title: format!("Zonal Contributions ({}-{})", years.first, years.last),
            value_label: config.value_label,
            map_regions: RegionDefinition::default_regions()?,
        })
    }

    pub fn from_config(config: &OverlayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            regions: config.regions.clone(),
            years: YearRange::from_config(config)?,
            title: config.title(),
            value_label: config.value_label.clone(),
            map_regions: RegionDefinition::default_regions()?,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_value_label(mut self, value_label: impl Into<String>) -> Self {
        self.value_label = value_label.into();
        self
    }

    pub fn build(&self, table: &AlignedTable) -> Result<Figure> {
        if table.is_empty() {
            return Err(ZonalError::NoData);
        }
        let mut layers = vec![Layer::Reference(ReferenceLayer {
            regions: self.map_regions.clone(),
            visibility: Visibility::Visible,
        })];
        let mut panels = Vec::with_capacity(self.regions.len());
        let mut legend_shown: HashSet<i32> = HashSet::new();

        for (panel, region) in self.regions.iter().enumerate() {
            let y_range = AxisRange::padded(table.column_values(region)?).unwrap_or_else(|| {
                log::warn!("[ZCA] overlay: No finite values for {}, using default range", region);
                AxisRange::FALLBACK
            });
            panels.push(RegionPanel {
                region: region.clone(),
                y_range,
            });

            for year in self.years.iter() {
                let points: Vec<(u32, f64)> = table
                    .year_series(region, year)?
                    .into_iter()
                    .filter(|(_, value)| value.is_finite())
                    .collect();
                if points.is_empty() {
                    log::debug!("[ZCA] overlay: No data for {} in {}", region, year);
                }
                let tier = EmphasisTier::for_year(year, &self.years);
                layers.push(Layer::DataSeries(SeriesLayer {
                    region: region.clone(),
                    panel,
                    year,
                    points,
                    tier,
                    style: tier.style(),
                    legend_group: year,
                    show_legend: legend_shown.insert(year),
                    visibility: Visibility::Visible,
                }));
            }
        }

        log::info!(
            "[ZCA] overlay: Built {} layers for {} regions over {}-{}",
            layers.len(),
            self.regions.len(),
            self.years.first,
            self.years.last
        );

        Ok(Figure {
            title: self.title.clone(),
            value_label: self.value_label.clone(),
            years: self.years,
            grid: GridLayout::for_regions(self.regions.len()),
            panels,
            layers,
        })
    }
}
