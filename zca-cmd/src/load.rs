//! Config and CSV loading shared by the data commands.

use crate::DataArgs;
use anyhow::Context;
use zca_core::calendar::{AlignedTable, CalendarAligner};
use zca_core::config::OverlayConfig;
use zca_core::table::ObservationTable;
use zca_overlay::{Figure, OverlayBuilder};

/// The config file (or defaults) with command line overrides applied.
pub fn load_config(data: &DataArgs) -> anyhow::Result<OverlayConfig> {
    let mut config = match &data.config {
        Some(path) => OverlayConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => OverlayConfig::default(),
    };
    apply_overrides(&mut config, data);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut OverlayConfig, data: &DataArgs) {
    if let Some(first) = data.first_year {
        config.first_year = first;
    }
    if let Some(last) = data.last_year {
        config.last_year = last;
    }
    if let Some(title) = &data.title {
        config.title = Some(title.clone());
    }
}

pub fn load_table(data: &DataArgs, config: &OverlayConfig) -> anyhow::Result<AlignedTable> {
    let table = ObservationTable::from_path(&data.csv, &config.time_column)
        .with_context(|| format!("Failed to read {}", data.csv.display()))?;
    Ok(CalendarAligner::new().align(&table))
}

/// Config, aligned table and figure for one invocation.
pub fn load_figure(data: &DataArgs) -> anyhow::Result<(OverlayConfig, Figure)> {
    let config = load_config(data)?;
    let table = load_table(data, &config)?;
    let figure = OverlayBuilder::from_config(&config)?
        .build(&table)
        .with_context(|| format!("Failed to build overlay from {}", data.csv.display()))?;
    Ok((config, figure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> DataArgs {
        DataArgs {
            csv: PathBuf::from("unused.csv"),
            config: None,
            first_year: None,
            last_year: None,
            title: None,
        }
    }

    #[test]
    fn defaults_without_config() {
        let config = load_config(&args()).unwrap();
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let data = DataArgs {
            first_year: Some(2000),
            last_year: Some(2010),
            title: Some("Zonal SST".to_string()),
            ..args()
        };
        let config = load_config(&data).unwrap();
        assert_eq!((config.first_year, config.last_year), (2000, 2010));
        assert_eq!(config.title(), "Zonal SST");
    }

    #[test]
    fn inverted_override_is_rejected() {
        let data = DataArgs {
            first_year: Some(2030),
            ..args()
        };
        assert!(load_config(&data).is_err());
    }

    #[test]
    fn missing_csv_names_the_path() {
        let data = DataArgs {
            csv: PathBuf::from("/nonexistent/zonal.csv"),
            ..args()
        };
        let err = load_figure(&data).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/zonal.csv"));
    }
}
