use zca_core::calendar::{AlignedTable, CalendarAligner};
use zca_core::config::OverlayConfig;
use zca_core::table::ObservationTable;
use zca_core::{Result, ZonalError};
use zca_overlay::{Figure, OverlayBuilder};

/// An embedded CSV and its selector names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSource {
    pub key: &'static str,
    pub label: &'static str,
    pub value_label: &'static str,
    pub csv: &'static str,
}

/// Load every source, in order. The first failure aborts the load and
/// names the dataset it came from.
pub fn load_datasets(sources: &[DatasetSource], config: &OverlayConfig) -> Result<Vec<Dataset>> {
    sources
        .iter()
        .map(|source| {
            Dataset::from_csv(source.key, source.label, source.value_label, source.csv, config).map_err(|e| {
                log::error!("[ZCA] dataset: {} failed to load: {}", source.key, e);
                ZonalError::Dataset {
                    key: source.key.to_string(),
                    source: Box::new(e),
                }
            })
        })
        .collect()
}

/// An embedded dataset, aligned to the day-of-year axis on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Selector value
    pub key: String,
    /// Selector text
    pub label: String,
    /// Quantity name for hover text, e.g. "SSTA"
    pub value_label: String,
    pub table: AlignedTable,
}

impl Dataset {
    /// Parse and align an embedded CSV. An empty string means the fixture
    /// was missing at build time.
    pub fn from_csv(key: &str, label: &str, value_label: &str, csv: &str, config: &OverlayConfig) -> Result<Self> {
        if csv.trim().is_empty() {
            return Err(ZonalError::NoData);
        }
        let table = ObservationTable::from_csv_str(csv, &config.time_column)?;
        let table = CalendarAligner::new().align(&table);
        log::info!("[ZCA] dataset: {} has {} aligned rows", key, table.len());
        Ok(Self {
            key: key.to_string(),
            label: label.to_string(),
            value_label: value_label.to_string(),
            table,
        })
    }

    /// A fresh figure with every layer visible.
    pub fn build_figure(&self, config: &OverlayConfig) -> Result<Figure> {
        OverlayBuilder::from_config(config)?
            .with_value_label(self.value_label.clone())
            .build(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
TIME,GLOBAL,TROPICS
2023-06-01,0.1,0.2
2024-06-01,0.3,0.4
";

    fn config() -> OverlayConfig {
        OverlayConfig {
            regions: vec!["TROPICS".to_string()],
            first_year: 2023,
            last_year: 2024,
            ..OverlayConfig::default()
        }
    }

    #[test]
    fn builds_figure_from_embedded_csv() {
        let dataset = Dataset::from_csv("t2m", "Air temperature", "T2MA", CSV, &config()).unwrap();
        let figure = dataset.build_figure(&config()).unwrap();
        assert_eq!(figure.value_label, "T2MA");
        assert_eq!(figure.series().count(), 2);
    }

    #[test]
    fn empty_fixture_is_no_data() {
        let err = Dataset::from_csv("sst", "Sea surface", "SSTA", "", &config()).unwrap_err();
        assert!(matches!(err, ZonalError::NoData));
    }

    fn sources(sst_csv: &'static str) -> [DatasetSource; 2] {
        [
            DatasetSource {
                key: "sst",
                label: "Sea surface",
                value_label: "SSTA",
                csv: sst_csv,
            },
            DatasetSource {
                key: "t2m",
                label: "Air temperature",
                value_label: "T2MA",
                csv: CSV,
            },
        ]
    }

    #[test]
    fn loads_every_source_in_order() {
        let datasets = load_datasets(&sources(CSV), &config()).unwrap();
        let keys: Vec<&str> = datasets.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["sst", "t2m"]);
    }

    #[test]
    fn one_malformed_source_fails_the_load() {
        let err = load_datasets(&sources("TIME,GLOBAL\nbad,1\n"), &config()).unwrap_err();
        match err {
            ZonalError::Dataset { key, source } => {
                assert_eq!(key, "sst");
                assert!(matches!(*source, ZonalError::DateParse { line: 2, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn one_missing_source_fails_the_load() {
        let err = load_datasets(&sources(""), &config()).unwrap_err();
        assert_eq!(err.to_string(), "Dataset sst: No observations available");
    }

    #[test]
    fn unknown_region_surfaces_on_build() {
        let dataset = Dataset::from_csv("sst", "Sea surface", "SSTA", CSV, &config()).unwrap();
        let config = OverlayConfig {
            regions: vec!["POLAR (N)".to_string()],
            ..config()
        };
        assert!(matches!(
            dataset.build_figure(&config),
            Err(ZonalError::MissingColumn(_))
        ));
    }
}
