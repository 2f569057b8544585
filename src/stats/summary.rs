//! Dataset Summary Module
//! Headline counts for an enriched patient table.

use crate::data::columns::finite_values;
use crate::data::{BMI_COL, HIGH_CHOLESTEROL_COL, HYPERTENSION_COL};
use polars::prelude::*;
use statrs::statistics::Statistics;

/// Descriptive counts reported after enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub mean_bmi: Option<f64>,
    pub high_cholesterol: usize,
    pub hypertension: usize,
}

impl DatasetSummary {
    /// Summarize a table that already carries the derived columns.
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let bmi = finite_values(df, BMI_COL)?;
        let mean_bmi = (!bmi.is_empty()).then(|| bmi.iter().mean());

        Ok(Self {
            rows: df.height(),
            columns: df.width(),
            mean_bmi,
            high_cholesterol: count_true(df, HIGH_CHOLESTEROL_COL)?,
            hypertension: count_true(df, HYPERTENSION_COL)?,
        })
    }

    pub fn log(&self) {
        tracing::info!(
            rows = self.rows,
            columns = self.columns,
            mean_bmi = %self.mean_bmi.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".into()),
            high_cholesterol = self.high_cholesterol,
            hypertension = self.hypertension,
            "Dataset summary"
        );
    }
}

fn count_true(df: &DataFrame, name: &str) -> PolarsResult<usize> {
    Ok(df
        .column(name)?
        .bool()?
        .into_iter()
        .filter(|v| *v == Some(true))
        .count())
}
