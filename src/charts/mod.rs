//! Charts module - figure building and rendering

mod figure;
mod plotter;
mod renderer;

pub use figure::{
    ChartError, Figure, FigureBody, FigureBuilder, HistogramFigure, ReferenceLine, Rgb,
    ScatterFigure, ScatterGroup,
};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
