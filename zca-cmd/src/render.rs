use crate::load::load_figure;
use crate::DataArgs;
use anyhow::Context;
use log::info;
use std::path::Path;
use zca_overlay::VisibilityCommand;
use zca_render::html::write_html;
use zca_render::svg::{render_figure_svg, RenderOptions};
use zca_render::MapImage;

pub fn run_render(data: &DataArgs, output: &Path, hide_all: bool, width: u32, height: u32) -> anyhow::Result<()> {
    let (_, mut figure) = load_figure(data)?;
    if hide_all {
        figure = figure.apply(VisibilityCommand::HideAll);
    }
    let options = RenderOptions::default().with_size(width, height);
    let svg = render_figure_svg(&figure, &options).context("Failed to render figure")?;
    std::fs::write(output, svg).with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Rendered {} to {}", figure.title, output.display());
    Ok(())
}

pub fn run_export(data: &DataArgs, output: &Path, map: Option<&Path>) -> anyhow::Result<()> {
    let (_, figure) = load_figure(data)?;
    let map = map
        .map(|path| MapImage::from_path(path).with_context(|| format!("Failed to load map {}", path.display())))
        .transpose()?;
    write_html(output, &figure, map.as_ref(), &RenderOptions::default())
        .with_context(|| format!("Failed to export {}", output.display()))?;
    info!("Exported {} to {}", figure.title, output.display());
    Ok(())
}
