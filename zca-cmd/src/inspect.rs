//! Text and data views of a built figure: layer dumps, hover lookups and
//! the region table.

use crate::load::load_figure;
use crate::{DataArgs, LayerFormat};
use anyhow::{bail, Context};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use zca_core::calendar::DayOfYearIndex;
use zca_core::region::RegionDefinition;
use zca_overlay::{Figure, SeriesLayer};

/// One CSV row per layer point.
#[derive(Debug, Serialize)]
struct LayerPointRow<'a> {
    region: &'a str,
    year: i32,
    tier: &'static str,
    day_of_year: u32,
    month_day: String,
    value: f64,
}

pub fn run_layers(
    data: &DataArgs,
    region: Option<&str>,
    output: Option<&Path>,
    format: LayerFormat,
) -> anyhow::Result<()> {
    let (_, figure) = load_figure(data)?;
    let layers = select_layers(&figure, region)?;
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    write_layers(&mut writer, &layers, format)?;
    writer.flush()?;
    log::info!("Wrote {} layers", layers.len());
    Ok(())
}

pub fn run_inspect(data: &DataArgs, region: &str, year: i32, doy: u32) -> anyhow::Result<()> {
    let (_, figure) = load_figure(data)?;
    println!("{}", inspect_text(&figure, region, year, doy)?);
    Ok(())
}

pub fn run_regions() -> anyhow::Result<()> {
    let regions = RegionDefinition::default_regions()?;
    println!("{:<18} {:<18} {:<8}", "NAME", "LATITUDES", "COLOR");
    for region in regions {
        println!(
            "{:<18} {:<18} {:<8}",
            region.name,
            region.lat_label(),
            region.color.hex()
        );
    }
    Ok(())
}

fn select_layers<'a>(figure: &'a Figure, region: Option<&str>) -> anyhow::Result<Vec<&'a SeriesLayer>> {
    match region {
        Some(region) => {
            if !figure.panels.iter().any(|panel| panel.region == region) {
                bail!("Region {} is not in the figure", region);
            }
            Ok(figure.series().filter(|s| s.region == region).collect())
        }
        None => Ok(figure.series().collect()),
    }
}

fn write_layers<W: Write>(writer: W, layers: &[&SeriesLayer], format: LayerFormat) -> anyhow::Result<()> {
    match format {
        LayerFormat::Json => {
            serde_json::to_writer_pretty(writer, layers)?;
        }
        LayerFormat::Csv => {
            let index = DayOfYearIndex::new();
            let mut csv_writer = csv::Writer::from_writer(writer);
            for layer in layers {
                for &(day_of_year, value) in &layer.points {
                    csv_writer.serialize(LayerPointRow {
                        region: &layer.region,
                        year: layer.year,
                        tier: layer.tier.label(),
                        day_of_year,
                        month_day: index.month_day(day_of_year)?.key(),
                        value,
                    })?;
                }
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

/// Hover text for a point, or a note when the year has no value that day.
pub fn inspect_text(figure: &Figure, region: &str, year: i32, doy: u32) -> anyhow::Result<String> {
    let index = DayOfYearIndex::new();
    index.month_day(doy)?;
    let Some(layer) = figure.layer_for(region, year) else {
        bail!("No layer for {} in {}", region, year);
    };
    let text = layer
        .points
        .iter()
        .position(|&(day, _)| day == doy)
        .and_then(|i| layer.hover_text(i, &figure.value_label, &index))
        .unwrap_or_else(|| format!("No value for {} in {} on day {}", region, year, doy));
    Ok(text)
}
