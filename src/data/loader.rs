//! CSV Data Loader Module
//! Reads the patient record file into a Polars DataFrame.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rows scanned for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Cell values read as missing, in any column.
const NULL_MARKERS: [&str; 16] = [
    "NA", "N/A", "n/a", "#N/A", "#NA", "<NA>", "NULL", "null", "None", "NaN", "nan", "-NaN",
    "-nan", "1.#IND", "1.#QNAN", "-1.#IND",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Loads patient records from delimited files.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with a header row. Column names are kept verbatim.
    ///
    /// Common missing-value markers (`NA`, `N/A`, `null`, ...) load as nulls.
    /// Parse failures are returned as-is; rows are never skipped.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_null_values(Some(NullValues::AllColumns(
                NULL_MARKERS.iter().map(|m| (*m).into()).collect(),
            )))
            .finish()?
            .collect()?;

        tracing::info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "Loaded CSV"
        );

        Ok(df)
    }

    /// Column names in file order.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}
