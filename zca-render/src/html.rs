//! Standalone HTML export.
//!
//! One self-contained document: the title, the map (embedded PNG or the
//! fallback SVG), one inline SVG per region panel in a CSS grid, a year
//! legend, and the figure itself as JSON.

use crate::error::Result;
use crate::image::MapImage;
use crate::svg::{render_map_svg, render_panel_svg, RenderOptions};
use std::fmt::Write as _;
use std::path::Path;
use zca_core::region::RegionDefinition;
use zca_overlay::Figure;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 16px; background: #fff; }
h1 { font-size: 20px; text-align: center; }
.grid { display: grid; gap: 8px; }
.cell svg, .cell img { width: 100%; height: auto; }
.legend { display: flex; flex-wrap: wrap; gap: 6px 14px; margin-top: 12px; font-size: 12px; }
.legend-item { display: inline-flex; align-items: center; gap: 4px; }
.legend-item.hidden { color: #aaa; }
.swatch { display: inline-block; width: 18px; }
";

/// The map image as an inline `<img>`, or the bands drawn from `regions`
/// when there is no image.
pub fn map_markup(map: Option<&MapImage>, regions: &[RegionDefinition], options: &RenderOptions) -> Result<String> {
    match map {
        Some(image) => Ok(format!(
            "<img alt=\"Zonal subdivisions\" style=\"width: 100%;\" src=\"{}\">",
            image.data_uri()
        )),
        None => render_map_svg(regions, options),
    }
}

pub fn export_html(figure: &Figure, map: Option<&MapImage>, options: &RenderOptions) -> Result<String> {
    let regions = figure
        .reference()
        .map(|reference| reference.regions.as_slice())
        .unwrap_or_default();
    let map_markup = map_markup(map, regions, options)?;
    let panels = (0..figure.panels.len())
        .map(|index| render_panel_svg(figure, index, options))
        .collect::<Result<Vec<String>>>()?;
    compose_html(figure, &map_markup, &panels)
}

pub fn write_html(path: &Path, figure: &Figure, map: Option<&MapImage>, options: &RenderOptions) -> Result<()> {
    let html = export_html(figure, map, options)?;
    std::fs::write(path, &html)?;
    log::info!("[ZCA] render: Wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}

/// Assemble the document from already rendered map and panel markup.
pub fn compose_html(figure: &Figure, map_markup: &str, panel_svgs: &[String]) -> Result<String> {
    let title = escape_html(&figure.title);
    let json = serde_json::to_string(figure)?.replace("</", "<\\/");

    let mut html = String::new();
    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    )?;
    writeln!(
        html,
        "<div class=\"grid\" style=\"grid-template-columns: repeat({}, 1fr);\">",
        figure.grid.cols
    )?;
    writeln!(html, "<div class=\"cell map\">{map_markup}</div>")?;
    for (panel, svg) in figure.panels.iter().zip(panel_svgs) {
        writeln!(
            html,
            "<div class=\"cell panel\" data-region=\"{}\">{svg}</div>",
            escape_html(&panel.region)
        )?;
    }
    html.push_str("</div>\n<div class=\"legend\">\n");
    for entry in figure.legend_entries() {
        writeln!(
            html,
            "<span class=\"legend-item{}\" data-year=\"{}\"><span class=\"swatch\" style=\"border-top: {}px solid {}; opacity: {};\"></span>{} ({})</span>",
            if entry.visible { "" } else { " hidden" },
            entry.year,
            entry.style.width * 2,
            entry.style.color.hex(),
            entry.style.opacity,
            entry.year,
            entry.tier.label()
        )?;
    }
    html.push_str("</div>\n");
    writeln!(
        html,
        "<script type=\"application/json\" id=\"figure-data\">{json}</script>"
    )?;
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
