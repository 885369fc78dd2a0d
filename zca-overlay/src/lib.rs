//! Multi-year overlay construction.
//!
//! Turns an aligned observation table into a [`figure::Figure`]: one layer
//! per (region, year) on a shared day-of-year axis, styled by the year
//! emphasis policy, with a reference map layer in the first grid cell.

pub mod axis;
pub mod builder;
pub mod emphasis;
pub mod figure;
pub mod grid;
pub mod layer;
pub mod visibility;
pub mod years;

pub use builder::OverlayBuilder;
pub use figure::{Figure, LegendEntry, RegionPanel};
pub use layer::{Layer, SeriesLayer, Visibility};
pub use visibility::VisibilityCommand;
pub use years::YearRange;
