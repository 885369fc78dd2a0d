use crate::error::{RenderError, Result};
use crate::map::draw_region_map;
use crate::{font, plot_color};
use plotters::coord::Shift;
use plotters::prelude::*;
use zca_core::calendar::{DayOfYearIndex, DAYS_PER_YEAR};
use zca_core::color::Rgb;
use zca_core::region::RegionDefinition;
use zca_overlay::axis::AxisRange;
use zca_overlay::Figure;

/// Output sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whole figure
    pub width: u32,
    pub height: u32,
    /// A single panel or the map on its own
    pub panel_width: u32,
    pub panel_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            panel_width: 460,
            panel_height: 280,
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn panel_size(&self) -> (u32, u32) {
        (self.panel_width, self.panel_height)
    }
}

/// The whole grid: reference map in the first cell, then one panel per
/// region with its visible layers.
pub fn render_figure_svg(figure: &Figure, options: &RenderOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present()?;
    }
    log::info!(
        "[ZCA] render: Figure SVG {}x{} with {} panels",
        options.width,
        options.height,
        figure.panels.len()
    );
    Ok(svg)
}

pub fn render_panel_svg(figure: &Figure, panel_index: usize, options: &RenderOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, options.panel_size()).into_drawing_area();
        root.fill(&WHITE)?;
        draw_panel(&root, figure, panel_index)?;
        root.present()?;
    }
    Ok(svg)
}

/// The latitude band map on its own, used when no map image is supplied.
pub fn render_map_svg(regions: &[RegionDefinition], options: &RenderOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, options.panel_size()).into_drawing_area();
        root.fill(&WHITE)?;
        draw_region_map(&root, regions)?;
        root.present()?;
    }
    Ok(svg)
}

pub fn draw_figure<DB>(root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let body = root.titled(&figure.title, font(22.0))?;
    let cells = body.split_evenly((figure.grid.rows, figure.grid.cols));

    if let Some(reference) = figure.reference().filter(|r| r.visibility.is_visible()) {
        if let Some(cell) = cells.first() {
            draw_region_map(cell, &reference.regions)?;
        }
    }
    for panel_index in 0..figure.panels.len() {
        let (row, col) = figure.grid.panel_cell(panel_index);
        if let Some(cell) = cells.get(row * figure.grid.cols + col) {
            draw_panel(cell, figure, panel_index)?;
        }
    }
    Ok(())
}

/// One region panel: month ticks on x, the panel's y range, and the
/// visible layers in figure order.
pub fn draw_panel<DB>(area: &DrawingArea<DB, Shift>, figure: &Figure, panel_index: usize) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let panel = figure
        .panels
        .get(panel_index)
        .ok_or(RenderError::PanelOutOfRange {
            index: panel_index,
            count: figure.panels.len(),
        })?;
    let y_range = display_range(panel.y_range);
    let ticks = DayOfYearIndex::new().month_ticks();
    let tick_days: Vec<u32> = ticks.iter().map(|(day, _)| *day).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.region, font(14.0))
        .margin(6)
        .x_label_area_size(18)
        .y_label_area_size(36)
        .build_cartesian_2d(
            (1u32..DAYS_PER_YEAR + 1).with_key_points(tick_days),
            y_range.min..y_range.max,
        )?;

    chart
        .configure_mesh()
        .x_labels(ticks.len())
        .y_labels(5)
        .x_label_formatter(&|day| month_label(&ticks, *day))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&plot_color(Rgb::LIGHT_GREY))
        .label_style(font(10.0))
        .draw()?;

    for series in figure
        .panel_series(panel_index)
        .filter(|s| s.visibility.is_visible())
    {
        let style = plot_color(series.style.color)
            .mix(series.style.opacity)
            .stroke_width(series.style.width);
        chart.draw_series(LineSeries::new(series.points.iter().copied(), style))?;
    }
    Ok(())
}

/// A drawable y range; a zero-width range is widened by one unit each side.
pub fn display_range(range: AxisRange) -> AxisRange {
    if !range.min.is_finite() || !range.max.is_finite() {
        return AxisRange::FALLBACK;
    }
    if range.span() > 0.0 {
        return range;
    }
    AxisRange {
        min: range.min.min(range.max) - 1.0,
        max: range.min.max(range.max) + 1.0,
    }
}

fn month_label(ticks: &[(u32, &'static str)], day: u32) -> String {
    ticks
        .iter()
        .find(|(tick, _)| *tick == day)
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use zca_core::calendar::CalendarAligner;
    use zca_core::table::{ObservationTable, DEFAULT_TIME_COLUMN};
    use zca_overlay::{OverlayBuilder, VisibilityCommand, YearRange};

    const CSV: &str = "\
TIME,GLOBAL,TROPICS
2023-01-01,0.1,0.2
2023-03-01,0.2,0.1
2023-07-01,0.4,-0.3
2024-01-01,0.3,0.4
2024-03-01,0.5,-0.1
2024-07-01,0.6,0.2
";

    fn figure(regions: &[&str]) -> Figure {
        let table = ObservationTable::from_csv_str(CSV, DEFAULT_TIME_COLUMN).unwrap();
        let aligned = CalendarAligner::new().align(&table);
        OverlayBuilder::new(
            regions.iter().map(|r| r.to_string()).collect(),
            YearRange::new(2023, 2024).unwrap(),
        )
        .unwrap()
        .build(&aligned)
        .unwrap()
    }

    fn text(svg: &str, content: &str) -> bool {
        svg.contains(&format!(">\n{}\n</text>", content))
    }

    #[test]
    fn hide_all_removes_exactly_the_series_lines() {
        let figure = figure(&["TROPICS"]);
        let options = RenderOptions::default();
        let shown = render_panel_svg(&figure, 0, &options).unwrap();
        let hidden = render_panel_svg(&figure.apply(VisibilityCommand::HideAll), 0, &options).unwrap();
        let isolated = render_panel_svg(&figure.apply(VisibilityCommand::IsolateYear(2024)), 0, &options).unwrap();
        let lines = |svg: &str| svg.matches("<polyline").count();
        assert_eq!(lines(&shown) - lines(&hidden), 2);
        assert_eq!(lines(&isolated) - lines(&hidden), 1);
        // current year in orange, prior year in black
        assert!(shown.contains("stroke=\"#FFA500\""));
        assert!(!hidden.contains("stroke=\"#FFA500\""));
    }

    #[test]
    fn panel_has_caption_and_month_labels() {
        let svg = render_panel_svg(&figure(&["TROPICS"]), 0, &RenderOptions::default()).unwrap();
        assert!(svg.starts_with("<svg width=\"460\" height=\"280\""));
        assert!(text(&svg, "TROPICS"));
        for label in ["J", "F", "M", "A", "S", "O", "N", "D"] {
            assert!(text(&svg, label), "missing month label {label}");
        }
    }

    #[test]
    fn figure_has_title_map_and_every_region() {
        let figure = figure(&["GLOBAL", "TROPICS"]);
        let svg = render_figure_svg(&figure, &RenderOptions::default()).unwrap();
        assert!(svg.starts_with("<svg width=\"1400\" height=\"700\""));
        assert!(text(&svg, "Zonal Contributions (2023-2024)"));
        assert!(text(&svg, "GLOBAL"));
        assert!(text(&svg, "TROPICS"));
        assert!(text(&svg, "Polar (66.5˚N - 90˚N)"));
    }

    #[test]
    fn panel_index_out_of_range() {
        let figure = figure(&["TROPICS"]);
        let err = render_panel_svg(&figure, 5, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::PanelOutOfRange { index: 5, count: 1 }));
    }

    #[test]
    fn map_draws_a_band_and_label_per_region() {
        let regions = RegionDefinition::default_regions().unwrap();
        let svg = render_map_svg(&regions, &RenderOptions::default()).unwrap();
        for region in &regions {
            assert!(text(&svg, &region.map_label()), "missing {}", region.name);
        }
        // background plus one band per region
        assert!(svg.matches("<rect").count() > regions.len());
    }

    #[test]
    fn display_range_keeps_a_proper_range() {
        let range = AxisRange { min: -0.7, max: 1.12 };
        assert_eq!(display_range(range), range);
    }

    #[test]
    fn display_range_widens_a_flat_range() {
        let range = display_range(AxisRange { min: 0.0, max: 0.0 });
        assert_eq!(range, AxisRange { min: -1.0, max: 1.0 });
        let range = display_range(AxisRange { min: 1.4, max: 1.4 });
        assert!(range.min < 1.4 && range.max > 1.4);
    }

    #[test]
    fn display_range_replaces_non_finite_bounds() {
        let range = display_range(AxisRange {
            min: f64::NEG_INFINITY,
            max: 1.0,
        });
        assert_eq!(range, AxisRange::FALLBACK);
    }

    #[test]
    fn month_labels_only_at_month_starts() {
        let ticks = DayOfYearIndex::new().month_ticks();
        assert_eq!(month_label(&ticks, 1), "J");
        assert_eq!(month_label(&ticks, 60), "M");
        assert_eq!(month_label(&ticks, 335), "D");
        assert_eq!(month_label(&ticks, 2), "");
    }

    #[test]
    fn default_options_match_figure_size() {
        let options = RenderOptions::default();
        assert_eq!((options.width, options.height), (1400, 700));
        assert_eq!(options.with_size(800, 600).width, 800);
    }
}
