//! Data module - CSV loading and column derivation

pub mod columns;
mod enricher;
mod loader;

pub use enricher::{
    Enricher, EnricherError, BLOOD_PRESSURE_COL, BMI_COL, CHOLESTEROL_COL, HEIGHT_COL,
    HIGH_CHOLESTEROL_COL, HYPERTENSION_COL, REQUIRED_COLUMNS, WEIGHT_COL,
};
pub use loader::{DataLoader, LoaderError};

/// Age column read by the age distribution chart.
pub const AGE_COL: &str = "age";
