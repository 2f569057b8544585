//! Data Enricher Module
//! Adds the derived BMI and risk-flag columns to the patient table.

use crate::config::Thresholds;
use polars::prelude::*;
use thiserror::Error;

pub const WEIGHT_COL: &str = "weight";
pub const HEIGHT_COL: &str = "height";
pub const CHOLESTEROL_COL: &str = "cholesterol";
pub const BLOOD_PRESSURE_COL: &str = "blood_pressure";

pub const BMI_COL: &str = "BMI";
pub const HIGH_CHOLESTEROL_COL: &str = "high_cholesterol";
pub const HYPERTENSION_COL: &str = "hypertension";

/// Columns the enricher reads.
pub const REQUIRED_COLUMNS: [&str; 4] =
    [WEIGHT_COL, HEIGHT_COL, CHOLESTEROL_COL, BLOOD_PRESSURE_COL];

#[derive(Error, Debug)]
pub enum EnricherError {
    #[error("Required column not found: {0}")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Computes derived columns from the raw patient measurements.
pub struct Enricher;

impl Enricher {
    /// Add `BMI`, `high_cholesterol` and `hypertension`.
    ///
    /// Existing columns with those names are replaced. Height is in centimetres,
    /// weight in kilograms. A missing measurement gives a null BMI and a `false` flag.
    pub fn enrich(df: DataFrame, thresholds: &Thresholds) -> Result<DataFrame, EnricherError> {
        Self::check_required_columns(&df)?;

        let weight = col(WEIGHT_COL).strict_cast(DataType::Float64);
        let height_m = col(HEIGHT_COL).strict_cast(DataType::Float64) / lit(100.0);

        let enriched = df
            .lazy()
            .with_columns([
                (weight / (height_m.clone() * height_m)).alias(BMI_COL),
                col(CHOLESTEROL_COL)
                    .strict_cast(DataType::Float64)
                    .gt(lit(thresholds.cholesterol))
                    .fill_null(lit(false))
                    .alias(HIGH_CHOLESTEROL_COL),
                col(BLOOD_PRESSURE_COL)
                    .strict_cast(DataType::Float64)
                    .gt(lit(thresholds.blood_pressure))
                    .fill_null(lit(false))
                    .alias(HYPERTENSION_COL),
            ])
            .collect()?;

        tracing::debug!(rows = enriched.height(), "Derived columns computed");
        Ok(enriched)
    }

    fn check_required_columns(df: &DataFrame) -> Result<(), EnricherError> {
        let names = df.get_column_names();
        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|name| name.as_str() == required) {
                return Err(EnricherError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }
}
