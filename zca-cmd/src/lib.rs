//! Command implementations for the zonal anomaly CLI.
//!
//! Every data command loads one CSV, aligns it to the day-of-year axis and
//! builds the overlay figure before rendering, exporting or inspecting it.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod inspect;
pub mod load;
pub mod render;

/// Input and figure options shared by the data commands.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Zonal contributions CSV (optionally .gz)
    #[arg(short = 'c', long)]
    pub csv: PathBuf,

    /// JSON overlay configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// First year to overlay (overrides config)
    #[arg(long)]
    pub first_year: Option<i32>,

    /// Last year to overlay, drawn as the current year (overrides config)
    #[arg(long)]
    pub last_year: Option<i32>,

    /// Figure title (overrides config)
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the overlay grid to an SVG file
    Render {
        #[command(flatten)]
        data: DataArgs,

        /// Output SVG path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Start with every year hidden (legend only)
        #[arg(long)]
        hide_all: bool,

        #[arg(long, default_value_t = 1400)]
        width: u32,

        #[arg(long, default_value_t = 700)]
        height: u32,
    },

    /// Export a standalone HTML page with map, panels and legend
    Export {
        #[command(flatten)]
        data: DataArgs,

        /// Output HTML path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Pre-rendered region map PNG; latitude bands are drawn when absent
        #[arg(long)]
        map: Option<PathBuf>,
    },

    /// Write the overlay layers of one or all regions
    Layers {
        #[command(flatten)]
        data: DataArgs,

        /// Only this region
        #[arg(short = 'r', long)]
        region: Option<String>,

        /// Output path; stdout when absent
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = LayerFormat::Json)]
        format: LayerFormat,
    },

    /// Print the hover text of one region, year and day of year
    Inspect {
        #[command(flatten)]
        data: DataArgs,

        #[arg(short = 'r', long)]
        region: String,

        #[arg(short = 'y', long)]
        year: i32,

        /// Day of year, 1-365
        #[arg(short = 'd', long)]
        doy: u32,
    },

    /// List the reference map latitude bands
    Regions,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            data,
            output,
            hide_all,
            width,
            height,
        } => render::run_render(&data, &output, hide_all, width, height),
        Command::Export { data, output, map } => render::run_export(&data, &output, map.as_deref()),
        Command::Layers {
            data,
            region,
            output,
            format,
        } => inspect::run_layers(&data, region.as_deref(), output.as_deref(), format),
        Command::Inspect {
            data,
            region,
            year,
            doy,
        } => inspect::run_inspect(&data, &region, year, doy),
        Command::Regions => inspect::run_regions(),
    }
}
