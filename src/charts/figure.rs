//! Figure Builder Module
//! Turns the enriched patient table into renderer-independent chart descriptions.

use crate::config::VizConfig;
use crate::data::columns::{finite_values, flagged_pairs};
use crate::data::{AGE_COL, BLOOD_PRESSURE_COL, BMI_COL, CHOLESTEROL_COL, HIGH_CHOLESTEROL_COL};
use crate::stats::{gaussian_kde, DensityCurve, Histogram};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("No plottable values in column: {0}")]
    NoData(String),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to display chart: {0}")]
    Display(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Plain RGB color shared by the interactive and static renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const HIST_COLOR: Rgb = Rgb(31, 119, 180); // Blue
pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
pub const REFERENCE_RED: Rgb = Rgb(255, 0, 0);

/// Hue colors, indexed by flag value (false, true)
pub const HUE_PALETTE: [Rgb; 2] = [
    Rgb(31, 119, 180), // Blue
    Rgb(255, 127, 14), // Orange
];

/// Dashed vertical marker drawn across a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub x: f64,
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramFigure {
    pub series_label: String,
    pub histogram: Histogram,
    /// KDE already scaled to bar counts
    pub density: Option<DensityCurve>,
    pub color: Rgb,
    pub reference_line: Option<ReferenceLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub hue_label: String,
    pub groups: Vec<ScatterGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FigureBody {
    Histogram(HistogramFigure),
    Scatter(ScatterFigure),
}

/// One chart: titles plus what to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File-name friendly identifier
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub body: FigureBody,
}

impl Figure {
    /// Axis extents `((x_min, x_max), (y_min, y_max))` with a small margin.
    pub fn axis_ranges(&self) -> ((f64, f64), (f64, f64)) {
        match &self.body {
            FigureBody::Histogram(h) => {
                let (mut lo, mut hi) = h.histogram.range().unwrap_or((0.0, 1.0));
                if let Some(line) = &h.reference_line {
                    lo = lo.min(line.x);
                    hi = hi.max(line.x);
                }
                let y_max = h
                    .density
                    .as_ref()
                    .map(DensityCurve::max_y)
                    .unwrap_or(0.0)
                    .max(h.histogram.max_count() as f64);
                (pad(lo, hi, 0.02), (0.0, if y_max > 0.0 { y_max * 1.1 } else { 1.0 }))
            }
            FigureBody::Scatter(s) => {
                let points = s.groups.iter().flat_map(|g| g.points.iter());
                let (mut x_lo, mut x_hi) = (f64::INFINITY, f64::NEG_INFINITY);
                let (mut y_lo, mut y_hi) = (f64::INFINITY, f64::NEG_INFINITY);
                for p in points {
                    x_lo = x_lo.min(p[0]);
                    x_hi = x_hi.max(p[0]);
                    y_lo = y_lo.min(p[1]);
                    y_hi = y_hi.max(p[1]);
                }
                if !x_lo.is_finite() {
                    return ((0.0, 1.0), (0.0, 1.0));
                }
                (pad(x_lo, x_hi, 0.05), pad(y_lo, y_hi, 0.05))
            }
        }
    }
}

fn pad(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * fraction, hi + span * fraction)
}

/// Builds the three patient charts from an enriched table.
pub struct FigureBuilder;

impl FigureBuilder {
    /// Histogram of patient ages with a density overlay.
    pub fn age_distribution(df: &DataFrame, config: &VizConfig) -> Result<Figure, ChartError> {
        let body = Self::histogram_body(df, AGE_COL, config, HIST_COLOR, None)?;
        Ok(Figure {
            id: "age_distribution".to_string(),
            title: "Age Distribution".to_string(),
            x_label: "Age".to_string(),
            y_label: "Frequency".to_string(),
            body,
        })
    }

    /// BMI against cholesterol, colored by the high cholesterol flag.
    pub fn bmi_vs_cholesterol(df: &DataFrame) -> Result<Figure, ChartError> {
        let rows = flagged_pairs(df, BMI_COL, CHOLESTEROL_COL, HIGH_CHOLESTEROL_COL)?;
        if rows.is_empty() {
            return Err(ChartError::NoData(BMI_COL.to_string()));
        }

        let groups = [false, true]
            .into_iter()
            .map(|flag| ScatterGroup {
                label: (if flag { "True" } else { "False" }).to_string(),
                color: HUE_PALETTE[flag as usize],
                points: rows
                    .iter()
                    .filter(|(_, _, f)| *f == flag)
                    .map(|&(x, y, _)| [x, y])
                    .collect(),
            })
            .filter(|g| !g.points.is_empty())
            .collect();

        Ok(Figure {
            id: "bmi_vs_cholesterol".to_string(),
            title: "BMI vs. Cholesterol".to_string(),
            x_label: "BMI".to_string(),
            y_label: "Cholesterol".to_string(),
            body: FigureBody::Scatter(ScatterFigure {
                hue_label: HIGH_CHOLESTEROL_COL.to_string(),
                groups,
            }),
        })
    }

    /// Blood pressure histogram with the hypertension cut-off marked.
    pub fn blood_pressure_distribution(
        df: &DataFrame,
        config: &VizConfig,
    ) -> Result<Figure, ChartError> {
        let threshold = config.thresholds.blood_pressure;
        let line = ReferenceLine {
            x: threshold,
            label: format!("Hypertension ({threshold})"),
            color: REFERENCE_RED,
        };
        let body = Self::histogram_body(df, BLOOD_PRESSURE_COL, config, SKY_BLUE, Some(line))?;
        Ok(Figure {
            id: "blood_pressure_distribution".to_string(),
            title: "Blood Pressure Distribution".to_string(),
            x_label: "Blood Pressure".to_string(),
            y_label: "Frequency".to_string(),
            body,
        })
    }

    fn histogram_body(
        df: &DataFrame,
        column: &str,
        config: &VizConfig,
        color: Rgb,
        reference_line: Option<ReferenceLine>,
    ) -> Result<FigureBody, ChartError> {
        let values = finite_values(df, column)?;
        if values.is_empty() {
            return Err(ChartError::NoData(column.to_string()));
        }

        let histogram = Histogram::from_values(&values, config.histogram_bins);
        let density = gaussian_kde(&values, config.kde_grid_points)
            .map(|kde| kde.scaled_to_counts(values.len(), histogram.bin_width()));

        Ok(FigureBody::Histogram(HistogramFigure {
            series_label: column.to_string(),
            histogram,
            density,
            color,
            reference_line,
        }))
    }
}
