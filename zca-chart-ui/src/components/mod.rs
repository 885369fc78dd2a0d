//! Reusable Dioxus RSX components for zonal anomaly chart apps.

mod chart_container;
mod chart_header;
mod dataset_selector;
mod error_display;
mod loading_spinner;
mod visibility_controls;
mod year_legend;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dataset_selector::DatasetSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use visibility_controls::VisibilityControls;
pub use year_legend::YearLegend;
