//! End-to-end checks: CSV file → enriched table → figures.

use medviz::charts::{FigureBody, FigureBuilder};
use medviz::data::{EnricherError, LoaderError, BMI_COL, HIGH_CHOLESTEROL_COL, HYPERTENSION_COL};
use medviz::{
    plot_age_distribution, plot_blood_pressure_distribution, plot_bmi_vs_cholesterol, DataLoader,
    Enricher, Thresholds, VizConfig,
};
use polars::prelude::*;
use std::io::Write;
use std::path::Path;

const CSV: &str = "age,weight,height,cholesterol,blood_pressure,smoker\n\
                   45,70,175,190,120,no\n\
                   60,95.5,180,240,150,yes\n\
                   33,55,160,200,140,no\n\
                   71,82,170,201,141,yes\n\
                   52,64,158,230,135,no\n";

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn headless_config() -> VizConfig {
    VizConfig {
        interactive: false,
        ..VizConfig::default()
    }
}

#[test]
fn load_and_enrich_medical_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "medical_data.csv", CSV);

    let df = DataLoader::load_csv(&path).unwrap();
    assert_eq!(df.height(), 5);
    assert_eq!(df.width(), 6);

    let df = Enricher::enrich(df, &Thresholds::default()).unwrap();
    assert_eq!(df.width(), 9);

    let weight = df.column("weight").unwrap().cast(&DataType::Float64).unwrap();
    let height = df.column("height").unwrap().cast(&DataType::Float64).unwrap();
    let cholesterol = df.column("cholesterol").unwrap().cast(&DataType::Float64).unwrap();
    let pressure = df.column("blood_pressure").unwrap().cast(&DataType::Float64).unwrap();
    let bmi = df.column(BMI_COL).unwrap();
    let high_chol = df.column(HIGH_CHOLESTEROL_COL).unwrap();
    let hypertension = df.column(HYPERTENSION_COL).unwrap();

    for i in 0..df.height() {
        let w = weight.f64().unwrap().get(i).unwrap();
        let h = height.f64().unwrap().get(i).unwrap();
        let expected = w / (h / 100.0).powi(2);
        assert!((bmi.f64().unwrap().get(i).unwrap() - expected).abs() < 1e-9);

        let c = cholesterol.f64().unwrap().get(i).unwrap();
        assert_eq!(high_chol.bool().unwrap().get(i), Some(c > 200.0));

        let bp = pressure.f64().unwrap().get(i).unwrap();
        assert_eq!(hypertension.bool().unwrap().get(i), Some(bp > 140.0));
    }

    let first_bmi = bmi.f64().unwrap().get(0).unwrap();
    assert!((first_bmi - 22.86).abs() < 0.01);
}

#[test]
fn na_markers_enrich_to_false_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "medical_data.csv",
        "age,weight,height,cholesterol,blood_pressure\n\
         40,70,175,NA,120\n\
         50,80,180,210,150\n",
    );

    let df = DataLoader::load_csv(&path).unwrap();
    let df = Enricher::enrich(df, &Thresholds::default()).unwrap();

    let high_chol = df.column(HIGH_CHOLESTEROL_COL).unwrap().bool().unwrap();
    assert_eq!(high_chol.get(0), Some(false));
    assert_eq!(high_chol.get(1), Some(true));
    assert_eq!(df.column(HYPERTENSION_COL).unwrap().null_count(), 0);
}

#[test]
fn ragged_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "medical_data.csv",
        "age,weight,height,cholesterol,blood_pressure\n40,70,175,190,120,extra\n",
    );

    let result = DataLoader::load_csv(&path);
    assert!(matches!(result, Err(LoaderError::Csv(_))));
}

#[test]
fn missing_file_does_not_yield_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let result = DataLoader::load_csv(dir.path().join("medical_data.csv"));
    assert!(matches!(result, Err(LoaderError::NotFound(_))));
}

#[test]
fn enriching_without_height_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "no_height.csv",
        "age,weight,cholesterol,blood_pressure\n40,70,180,120\n",
    );

    let df = DataLoader::load_csv(&path).unwrap();
    let err = Enricher::enrich(df, &Thresholds::default()).unwrap_err();
    assert!(matches!(err, EnricherError::MissingColumn(c) if c == "height"));
}

#[test]
fn figures_build_from_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "medical_data.csv", CSV);
    let config = headless_config();

    let df = DataLoader::load_csv(&path).unwrap();
    let df = Enricher::enrich(df, &config.thresholds).unwrap();

    let scatter = FigureBuilder::bmi_vs_cholesterol(&df).unwrap();
    let FigureBody::Scatter(scatter) = scatter.body else {
        panic!("expected scatter");
    };
    let total: usize = scatter.groups.iter().map(|g| g.points.len()).sum();
    assert_eq!(total, 5);

    let pressure = FigureBuilder::blood_pressure_distribution(&df, &config).unwrap();
    let FigureBody::Histogram(hist) = pressure.body else {
        panic!("expected histogram");
    };
    assert_eq!(hist.histogram.total(), 5);
    assert_eq!(hist.reference_line.map(|l| l.x), Some(140.0));
}

#[test]
fn headless_plots_succeed_without_writing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "medical_data.csv", CSV);
    let config = headless_config();

    let df = DataLoader::load_csv(&path).unwrap();
    let df = Enricher::enrich(df, &config.thresholds).unwrap();

    plot_age_distribution(&df, &config).unwrap();
    plot_bmi_vs_cholesterol(&df, &config).unwrap();
    plot_blood_pressure_distribution(&df, &config).unwrap();

    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn plotting_unenriched_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "medical_data.csv", CSV);

    let df = DataLoader::load_csv(&path).unwrap();
    assert!(plot_bmi_vs_cholesterol(&df, &headless_config()).is_err());
}
