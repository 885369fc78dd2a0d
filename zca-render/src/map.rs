//! Reference map fallback: latitude bands on an equirectangular frame.

use crate::error::Result;
use crate::{font, plot_color};
use plotters::coord::Shift;
use plotters::prelude::*;
use zca_core::color::Rgb;
use zca_core::region::RegionDefinition;

/// Fill opacity of a region band.
pub const BAND_OPACITY: f64 = 0.3;

/// Longitude where band labels start.
const LABEL_LONGITUDE: f64 = -175.0;

pub fn draw_region_map<DB>(area: &DrawingArea<DB, Shift>, regions: &[RegionDefinition]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(18)
        .y_label_area_size(32)
        .build_cartesian_2d(-180f64..180f64, -90f64..90f64)?;

    chart
        .configure_mesh()
        .x_labels(7)
        .y_labels(7)
        .x_label_formatter(&|lon| format_degrees(*lon, 'E', 'W'))
        .y_label_formatter(&|lat| format_degrees(*lat, 'N', 'S'))
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&plot_color(Rgb::LIGHT_GREY))
        .label_style(font(10.0))
        .draw()?;

    for region in regions {
        let color = plot_color(region.color);
        chart.draw_series(std::iter::once(Rectangle::new(
            [(-180.0, region.lat_min), (180.0, region.lat_max)],
            color.mix(BAND_OPACITY).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            region.map_label(),
            (LABEL_LONGITUDE, region.mid_latitude()),
            font(11.0).color(&BLACK),
        )))?;
    }
    Ok(())
}

/// Axis label for a coordinate, e.g. "60˚N", "120˚W", "0˚".
fn format_degrees(value: f64, positive: char, negative: char) -> String {
    if value == 0.0 {
        return "0˚".to_string();
    }
    let hemisphere = if value > 0.0 { positive } else { negative };
    format!("{}˚{}", value.abs(), hemisphere)
}

#[cfg(test)]
mod tests {
    use super::format_degrees;

    #[test]
    fn degree_labels() {
        assert_eq!(format_degrees(60.0, 'N', 'S'), "60˚N");
        assert_eq!(format_degrees(-120.0, 'E', 'W'), "120˚W");
        assert_eq!(format_degrees(0.0, 'N', 'S'), "0˚");
    }
}
