//! Plotters backend for distribution chart grids.
//!
//! Draws a [`ChartGrid`](crate::vis::distribution::ChartGrid) to a PNG
//! file. Only compiled with the `visualization` feature; without it a stub
//! reports the feature as unavailable.

#[cfg(feature = "visualization")]
pub use self::backend::render_grid_png;

#[cfg(feature = "visualization")]
mod backend {
    use std::path::Path;

    use plotters::prelude::*;
    use plotters::style::text_anchor::{HPos, Pos, VPos};
    use plotters::style::{FontTransform, TextStyle};

    use crate::core::error::Result;
    use crate::vis::config::PlotSettings;
    use crate::vis::distribution::ChartGrid;

    /// Render the grid to a PNG file, one subplot per panel, every subplot
    /// sharing the grid's y-axis bound.
    pub fn render_grid_png<P: AsRef<Path>>(
        grid: &ChartGrid,
        path: P,
        settings: &PlotSettings,
    ) -> Result<()> {
        let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let areas = root.split_evenly((grid.rows, grid.cols));
        let color = RGBColor(settings.color.0, settings.color.1, settings.color.2);

        // Keep a usable axis even for an all-zero grid
        let y_max = if grid.y_max > 0.0 { grid.y_max } else { 1.0 };

        for (panel, area) in grid.panels.iter().zip(areas.iter()) {
            let n = panel.categories.len().max(1);

            let mut chart = ChartBuilder::on(area)
                .caption(&panel.title, ("sans-serif", 24).into_font())
                .margin(10)
                .x_label_area_size(70)
                .y_label_area_size(45)
                .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0.0..y_max)?;

            let categories = &panel.categories;
            let label_for = |x: &f64| -> String {
                let idx = x.round();
                if idx < 0.0 {
                    return String::new();
                }
                categories
                    .get(idx as usize)
                    .cloned()
                    .unwrap_or_default()
            };

            let mut label_font = ("sans-serif", 13).into_font();
            if settings.rotate_labels {
                label_font = label_font.transform(FontTransform::Rotate90);
            }

            let mut mesh = chart.configure_mesh();
            mesh.x_labels(n)
                .x_label_formatter(&label_for)
                .x_label_style(label_font)
                .y_desc(grid.mode.as_str());
            if !settings.show_grid {
                mesh.disable_mesh();
            }
            mesh.draw()?;

            chart.draw_series(panel.heights.iter().enumerate().map(|(i, &height)| {
                let x0 = i as f64 - 0.4;
                let x1 = i as f64 + 0.4;
                Rectangle::new([(x0, 0.0), (x1, height)], color.filled())
            }))?;

            // Value labels above each bar
            let value_style = TextStyle::from(("sans-serif", 13).into_font())
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart.draw_series(panel.heights.iter().enumerate().map(|(i, &height)| {
                Text::new(format!("{}", height), (i as f64, height), value_style.clone())
            }))?;
        }

        root.present()?;
        Ok(())
    }
}

/// Fallback when the `visualization` feature is not enabled.
#[cfg(not(feature = "visualization"))]
pub fn render_grid_png<P: AsRef<std::path::Path>>(
    _grid: &crate::vis::distribution::ChartGrid,
    _path: P,
    _settings: &crate::vis::config::PlotSettings,
) -> crate::core::error::Result<()> {
    Err(crate::core::error::Error::FeatureNotAvailable(
        "visualization feature is not enabled; recompile with --features visualization".to_string(),
    ))
}
