//! Stats module - distributions and dataset summaries

pub mod density;
mod summary;

pub use density::{gaussian_kde, DensityCurve, Histogram, HistogramBin};
pub use summary::DatasetSummary;
