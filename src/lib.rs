//! Medviz - medical records enrichment and chart viewer
//!
//! Loads patient records from CSV, derives BMI and risk flags, and shows
//! three descriptive charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod plots;
pub mod stats;

pub use config::{Thresholds, VizConfig};
pub use data::{DataLoader, Enricher};
pub use plots::{plot_age_distribution, plot_blood_pressure_distribution, plot_bmi_vs_cholesterol};
