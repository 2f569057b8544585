//! Column extraction helpers shared by the chart builders.

use polars::prelude::*;

/// Finite values of a numeric column as `f64`. Nulls and NaN are dropped.
pub fn finite_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    let values = df.column(name)?.cast(&DataType::Float64)?;
    let ca = values.f64()?;
    Ok(ca.into_iter().flatten().filter(|v| v.is_finite()).collect())
}

/// Rows where `x`, `y` and `flag` are all present, as `(x, y, flag)`.
pub fn flagged_pairs(
    df: &DataFrame,
    x: &str,
    y: &str,
    flag: &str,
) -> PolarsResult<Vec<(f64, f64, bool)>> {
    let x_col = df.column(x)?.cast(&DataType::Float64)?;
    let y_col = df.column(y)?.cast(&DataType::Float64)?;
    let flag_col = df.column(flag)?.cast(&DataType::Boolean)?;

    let rows = x_col
        .f64()?
        .into_iter()
        .zip(y_col.f64()?.into_iter())
        .zip(flag_col.bool()?.into_iter())
        .filter_map(|((x, y), flag)| match (x, y, flag) {
            (Some(x), Some(y), Some(flag)) if x.is_finite() && y.is_finite() => Some((x, y, flag)),
            _ => None,
        })
        .collect();

    Ok(rows)
}
