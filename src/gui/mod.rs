//! GUI module - native figure windows

mod app;

pub use app::{show_figure, FigureWindow};
