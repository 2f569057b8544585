//! Distribution Module
//! Equal-width histograms and Gaussian kernel density estimates.

use rayon::prelude::*;
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

/// One histogram bar covering `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width bins over the observed range of the values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin `values` into `bin_count` equal-width bins spanning [min, max].
    ///
    /// The last bin is closed on the right so the maximum is counted. When all
    /// values are equal a single unit-width bin centred on the value is used.
    pub fn from_values(values: &[f64], bin_count: usize) -> Self {
        if values.is_empty() || bin_count == 0 {
            return Self::default();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max - min <= 0.0 {
            return Self {
                bins: vec![HistogramBin {
                    start: min - 0.5,
                    end: min + 0.5,
                    count: values.len(),
                }],
            };
        }

        let width = (max - min) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for &v in values {
            let idx = (((v - min) / width).floor() as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: min + i as f64 * width,
                end: if i + 1 == bin_count {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count,
            })
            .collect();

        Self { bins }
    }

    pub fn bin_width(&self) -> f64 {
        self.bins.first().map(HistogramBin::width).unwrap_or(0.0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).fold(0, usize::max)
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }
}

/// Sampled density curve, `points[i] = [x, y]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub bandwidth: f64,
    pub points: Vec<[f64; 2]>,
}

impl DensityCurve {
    /// Rescale a probability density so it overlays a count histogram.
    pub fn scaled_to_counts(mut self, n: usize, bin_width: f64) -> Self {
        let factor = n as f64 * bin_width;
        for p in &mut self.points {
            p[1] *= factor;
        }
        self
    }

    pub fn max_y(&self) -> f64 {
        self.points.iter().map(|p| p[1]).fold(0.0, f64::max)
    }
}

/// Scott's rule bandwidth: sample std dev times n^(-1/5).
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let std = values.iter().std_dev();
    let h = std * (values.len() as f64).powf(-0.2);
    (h.is_finite() && h > 0.0).then_some(h)
}

/// Gaussian KDE evaluated at `grid_points` evenly spaced points over [min, max].
///
/// Returns `None` for fewer than two values or zero variance.
pub fn gaussian_kde(values: &[f64], grid_points: usize) -> Option<DensityCurve> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    gaussian_kde_over(values, min, max, grid_points)
}

/// Gaussian KDE evaluated over an explicit `[lo, hi]` grid.
pub fn gaussian_kde_over(
    values: &[f64],
    lo: f64,
    hi: f64,
    grid_points: usize,
) -> Option<DensityCurve> {
    let bandwidth = scott_bandwidth(values)?;
    if grid_points < 2 || !(hi > lo) {
        return None;
    }

    let step = (hi - lo) / (grid_points - 1) as f64;
    let kernel = Normal::standard();
    let norm = values.len() as f64 * bandwidth;

    let points = (0..grid_points)
        .into_par_iter()
        .map(|i| {
            let x = lo + i as f64 * step;
            let sum: f64 = values
                .iter()
                .map(|&xi| kernel.pdf((x - xi) / bandwidth))
                .sum();
            [x, sum / norm]
        })
        .collect();

    Some(DensityCurve { bandwidth, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|v| v as f64).collect();
        let hist = Histogram::from_values(&values, 30);

        assert_eq!(hist.bins.len(), 30);
        assert_eq!(hist.total(), 100);
        assert_eq!(hist.range(), Some((0.0, 99.0)));
    }

    #[test]
    fn histogram_max_lands_in_last_bin() {
        let hist = Histogram::from_values(&[0.0, 5.0, 10.0], 2);

        assert_eq!(hist.bins[0].count, 1);
        assert_eq!(hist.bins[1].count, 2);
        assert!((hist.bin_width() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_of_constant_values_has_one_bin() {
        let hist = Histogram::from_values(&[42.0, 42.0, 42.0], 30);

        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
        assert_eq!(hist.bins[0].center(), 42.0);
    }

    #[test]
    fn histogram_of_nothing_is_empty() {
        let hist = Histogram::from_values(&[], 30);
        assert!(hist.bins.is_empty());
        assert_eq!(hist.range(), None);
    }

    #[test]
    fn scott_bandwidth_matches_rule() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        // sample std of 1..=5 is sqrt(2.5)
        let expected = 2.5f64.sqrt() * 5f64.powf(-0.2);
        assert!((scott_bandwidth(&values).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn kde_integrates_to_one_over_wide_grid() {
        let values = [-3.0, -1.0, 0.0, 0.5, 1.0, 2.0, 2.5, 3.0, 10.0, 20.0];
        let h = scott_bandwidth(&values).unwrap();
        let curve = gaussian_kde_over(&values, -3.0 - 8.0 * h, 20.0 + 8.0 * h, 2000).unwrap();

        let step = curve.points[1][0] - curve.points[0][0];
        let area: f64 = curve.points.iter().map(|p| p[1] * step).sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {area}");
    }

    #[test]
    fn kde_grid_spans_data_range() {
        let curve = gaussian_kde(&[18.0, 30.0, 45.0, 90.0], 200).unwrap();

        assert_eq!(curve.points.len(), 200);
        assert_eq!(curve.points[0][0], 18.0);
        assert!((curve.points[199][0] - 90.0).abs() < 1e-9);
        assert!(curve.points.iter().all(|p| p[1] > 0.0));
    }

    #[test]
    fn kde_needs_spread() {
        assert!(gaussian_kde(&[1.0], 200).is_none());
        assert!(gaussian_kde(&[4.0, 4.0, 4.0], 200).is_none());
    }

    #[test]
    fn scaled_curve_multiplies_by_count_and_width() {
        let curve = DensityCurve {
            bandwidth: 1.0,
            points: vec![[0.0, 0.1], [1.0, 0.2]],
        }
        .scaled_to_counts(50, 2.0);

        assert_eq!(curve.points, vec![[0.0, 10.0], [1.0, 20.0]]);
        assert_eq!(curve.max_y(), 20.0);
    }
}
