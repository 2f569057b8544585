//! Static Chart Renderer
//! Writes figures as PNG images through plotters.

use crate::charts::figure::{ChartError, Figure, FigureBody, HistogramFigure, Rgb, ScatterFigure};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::{Path, PathBuf};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `figure` into `<dir>/<figure.id>.png`, creating `dir` if needed.
    pub fn export_png(figure: &Figure, dir: &Path, size: (u32, u32)) -> Result<PathBuf, ChartError> {
        std::fs::create_dir_all(dir)?;
        let path = Self::export_path(figure, dir);
        Self::render_png(figure, &path, size)?;
        tracing::info!(path = %path.display(), "Exported chart");
        Ok(path)
    }

    pub fn export_path(figure: &Figure, dir: &Path) -> PathBuf {
        dir.join(format!("{}.png", figure.id))
    }

    pub fn render_png(figure: &Figure, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        Self::draw(root, figure).map_err(|e| ChartError::Render(e.to_string()))
    }

    fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, figure: &Figure) -> DrawResult<DB> {
        root.fill(&WHITE)?;

        let ((x_lo, x_hi), (y_lo, y_hi)) = figure.axis_ranges();
        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .draw()?;

        match &figure.body {
            FigureBody::Histogram(hist) => Self::draw_histogram(&mut chart, hist, y_hi)?,
            FigureBody::Scatter(scatter) => Self::draw_scatter(&mut chart, scatter)?,
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    fn draw_histogram<DB: DrawingBackend>(
        chart: &mut Chart<'_, DB>,
        hist: &HistogramFigure,
        y_top: f64,
    ) -> DrawResult<DB> {
        let color = RGBColor::from(hist.color);

        chart
            .draw_series(hist.histogram.bins.iter().map(|bin| {
                Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], color.mix(0.6).filled())
            }))?
            .label(hist.series_label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.mix(0.6).filled()));

        chart.draw_series(hist.histogram.bins.iter().map(|bin| {
            Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], color.stroke_width(1))
        }))?;

        if let Some(curve) = &hist.density {
            chart
                .draw_series(LineSeries::new(
                    curve.points.iter().map(|p| (p[0], p[1])),
                    color.stroke_width(2),
                ))?
                .label("KDE")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        if let Some(marker) = &hist.reference_line {
            let style = RGBColor::from(marker.color).stroke_width(2);
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(marker.x, 0.0), (marker.x, y_top)],
                    8,
                    6,
                    style,
                ))?
                .label(marker.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        Ok(())
    }

    fn draw_scatter<DB: DrawingBackend>(
        chart: &mut Chart<'_, DB>,
        scatter: &ScatterFigure,
    ) -> DrawResult<DB> {
        for group in &scatter.groups {
            let color = RGBColor::from(group.color);
            chart
                .draw_series(
                    group
                        .points
                        .iter()
                        .map(move |p| Circle::new((p[0], p[1]), 3, color.filled())),
                )?
                .label(format!("{} = {}", scatter.hue_label, group.label))
                .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
        }
        Ok(())
    }
}
