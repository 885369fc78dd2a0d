//! Static rendering of overlay figures with plotters: SVG for the whole
//! grid or a single panel, and a standalone HTML export.

pub mod error;
pub mod html;
pub mod image;
pub mod map;
pub mod svg;

pub use error::{RenderError, Result};
pub use image::MapImage;
pub use svg::RenderOptions;

use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor};
use zca_core::color::Rgb;

pub(crate) fn plot_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

pub(crate) fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}
