//! Chart Plotter Module
//! Draws figures interactively using egui_plot.

use crate::charts::figure::{Figure, FigureBody, HistogramFigure, Rgb, ScatterFigure};
use egui::{Color32, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

/// Draws a [`Figure`] into an egui layout.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the figure filling the remaining space of `ui`.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        let plot = Plot::new(format!("figure_{}", figure.id))
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .legend(Legend::default())
            .allow_scroll(false);

        match &figure.body {
            FigureBody::Histogram(hist) => Self::draw_histogram(ui, plot, hist),
            FigureBody::Scatter(scatter) => Self::draw_scatter(ui, plot, scatter),
        }
    }

    /// Count bars, density line and optional reference marker.
    fn draw_histogram(ui: &mut egui::Ui, plot: Plot, hist: &HistogramFigure) {
        let color: Color32 = hist.color.into();

        plot.include_y(0.0).show(ui, |plot_ui| {
            let bars: Vec<Bar> = hist
                .histogram
                .bins
                .iter()
                .map(|bin| {
                    Bar::new(bin.center(), bin.count as f64)
                        .width(bin.width())
                        .fill(color.gamma_multiply(0.6))
                        .stroke(Stroke::new(1.0, color))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(color).name(&hist.series_label));

            if let Some(curve) = &hist.density {
                plot_ui.line(
                    Line::new(PlotPoints::from(curve.points.clone()))
                        .color(color)
                        .width(2.0)
                        .name("KDE"),
                );
            }

            if let Some(marker) = &hist.reference_line {
                plot_ui.vline(
                    VLine::new(marker.x)
                        .color(Color32::from(marker.color))
                        .style(LineStyle::dashed_loose())
                        .width(1.5)
                        .name(&marker.label),
                );
            }
        });
    }

    /// One point series per hue value.
    fn draw_scatter(ui: &mut egui::Ui, plot: Plot, scatter: &ScatterFigure) {
        plot.show(ui, |plot_ui| {
            for group in &scatter.groups {
                plot_ui.points(
                    Points::new(PlotPoints::from(group.points.clone()))
                        .radius(3.0)
                        .color(Color32::from(group.color))
                        .name(format!("{} = {}", scatter.hue_label, group.label)),
                );
            }
        });
    }
}
