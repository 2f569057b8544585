//! The three patient charts.
//!
//! Each operation builds its figure from an enriched table, optionally writes it
//! as PNG and then displays it, blocking until the window is closed.

use crate::charts::{ChartError, Figure, FigureBuilder, StaticChartRenderer};
use crate::config::VizConfig;
use crate::gui;
use polars::prelude::DataFrame;

/// Histogram of `age` with density overlay.
pub fn plot_age_distribution(df: &DataFrame, config: &VizConfig) -> Result<(), ChartError> {
    present(FigureBuilder::age_distribution(df, config)?, config)
}

/// `BMI` against `cholesterol`, colored by `high_cholesterol`.
pub fn plot_bmi_vs_cholesterol(df: &DataFrame, config: &VizConfig) -> Result<(), ChartError> {
    present(FigureBuilder::bmi_vs_cholesterol(df)?, config)
}

/// Histogram of `blood_pressure` with the hypertension threshold marked.
pub fn plot_blood_pressure_distribution(
    df: &DataFrame,
    config: &VizConfig,
) -> Result<(), ChartError> {
    present(FigureBuilder::blood_pressure_distribution(df, config)?, config)
}

fn present(figure: Figure, config: &VizConfig) -> Result<(), ChartError> {
    let [width, height] = config.figure_size;

    if let Some(dir) = &config.export_dir {
        StaticChartRenderer::export_png(&figure, dir, (width, height))?;
    }

    if config.interactive {
        gui::show_figure(figure, config.figure_size)?;
    } else {
        tracing::debug!(figure = %figure.id, "Display disabled, skipping window");
    }

    Ok(())
}
