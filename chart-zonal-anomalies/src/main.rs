//! Zonal Contributions chart
//!
//! Overlays every year of daily zonal anomalies on a shared day-of-year axis
//! (Jan 1 = day 1 through Dec 31 = day 365, Feb 29 dropped), one panel per
//! latitude band, with the region map in the first grid cell. The most recent
//! year is orange, the year before it black, older years muted grey.
//!
//! Data flow:
//! 1. `build.rs` copies the dataset CSVs and the map PNG into `OUT_DIR`.
//! 2. `include_str!` / `include_bytes!` embed them into the WASM binary.
//! 3. On mount, each CSV is parsed and aligned once into a `Dataset`.
//! 4. The selected dataset is built into a `Figure`; legend and buttons apply
//!    visibility commands to that figure and panels are re-rendered as SVG.

use dioxus::prelude::*;
use zca_chart_ui::components::{
    ChartContainer, ChartHeader, DatasetSelector, ErrorDisplay, LoadingSpinner, VisibilityControls,
    YearLegend,
};
use zca_chart_ui::dataset::{load_datasets, DatasetSource};
use zca_chart_ui::state::AppState;
use zca_core::region::RegionDefinition;
use zca_render::html::map_markup;
use zca_render::svg::{render_panel_svg, RenderOptions};
use zca_render::MapImage;

const SST_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sst_zonal_contributions.csv"));
const T2M_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/t2m_zonal_contributions.csv"));
const MAP_PNG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/zonal_subdivisions_map.png"));

/// Fixtures that were absent at build time, comma separated.
const MISSING_FIXTURES: &str = env!("ZCA_MISSING_FIXTURES");

const DATASETS: [DatasetSource; 2] = [
    DatasetSource {
        key: "sst",
        label: "Sea surface temperature",
        value_label: "SSTA",
        csv: SST_CSV,
    },
    DatasetSource {
        key: "t2m",
        label: "2 m air temperature",
        value_label: "T2MA",
        csv: T2M_CSV,
    },
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("zonal-anomalies-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[ZCA] zonal-anomalies App component mounted".into());

    let mut state = use_context_provider(AppState::new);
    let map = use_hook(embedded_map);

    use_effect(move || {
        let config = state.config.peek().clone();
        let loaded = match load_datasets(&DATASETS, &config) {
            Ok(datasets) => datasets,
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to load datasets: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        let Some(first) = loaded.first().map(|dataset| dataset.key.clone()) else {
            state.error_msg.set(Some("No datasets embedded".to_string()));
            state.loading.set(false);
            return;
        };
        web_sys::console::log_1(&format!("[ZCA] app: Loaded {} datasets, default {}", loaded.len(), first).into());
        state.datasets.set(loaded);
        state.selected_dataset.set(first);
        state.rebuild();
        state.loading.set(false);
    });

    let options = RenderOptions::default();
    let figure = state.figure.read().clone();
    let panels = figure.as_ref().map(|figure| {
        (0..figure.panels.len())
            .map(|index| render_panel_svg(figure, index, &options))
            .collect::<zca_render::Result<Vec<String>>>()
    });
    let error = (state.error_msg)().or_else(|| map.as_ref().err().cloned());
    let hint = if MISSING_FIXTURES.is_empty() {
        String::new()
    } else {
        format!("Missing fixtures at build time: {}", MISSING_FIXTURES)
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(err) = error {
                ErrorDisplay { message: err, hint }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let (Some(figure), Some(panels), Ok(map_markup)) = (figure, panels, map) {
                ChartHeader {
                    title: figure.title.clone(),
                    subtitle: format!("Daily {} by latitude band, one line per year", figure.value_label),
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    DatasetSelector {}
                    VisibilityControls {}
                }
                match panels {
                    Ok(panels) => rsx! {
                        div {
                            style: "display: grid; grid-template-columns: repeat({figure.grid.cols}, 1fr); gap: 8px;",
                            div {
                                style: "width: 100%;",
                                dangerous_inner_html: "{map_markup}",
                            }
                            for (panel, svg) in figure.panels.iter().zip(panels) {
                                ChartContainer {
                                    key: "{panel.region}",
                                    id: format!("panel-{}", panel.region),
                                    svg,
                                }
                            }
                        }
                    },
                    Err(e) => rsx! {
                        ErrorDisplay { message: e.to_string() }
                    },
                }
                YearLegend {}
            }
        }
    }
}

/// The embedded map as an `<img>`, or the drawn latitude bands when the
/// PNG fixture was absent at build time. A malformed PNG is an error.
fn embedded_map() -> Result<String, String> {
    let image = MapImage::from_embedded(MAP_PNG, "zonal_subdivisions_map.png").map_err(|e| e.to_string())?;
    let regions = RegionDefinition::default_regions().map_err(|e| e.to_string())?;
    map_markup(image.as_ref(), &regions, &RenderOptions::default()).map_err(|e| {
        log::error!("[ZCA] app: Region map failed: {}", e);
        e.to_string()
    })
}
