//! Medviz - Medical Records Chart Viewer
//!
//! Reads `medical_data.csv`, adds BMI and risk flags, and shows three charts in turn.

use anyhow::{Context, Result};
use medviz::config::DEFAULT_CONFIG_PATH;
use medviz::stats::DatasetSummary;
use medviz::{
    plot_age_distribution, plot_blood_pressure_distribution, plot_bmi_vs_cholesterol, DataLoader,
    Enricher, VizConfig,
};
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = VizConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?;

    // Load and enrich
    let df = DataLoader::load_csv(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let df = Enricher::enrich(df, &config.thresholds).context("deriving columns")?;
    DatasetSummary::from_frame(&df)
        .context("summarizing dataset")?
        .log();

    // Visualize
    plot_age_distribution(&df, &config).context("age distribution")?;
    plot_bmi_vs_cholesterol(&df, &config).context("BMI vs. cholesterol")?;
    plot_blood_pressure_distribution(&df, &config).context("blood pressure distribution")?;

    Ok(())
}
