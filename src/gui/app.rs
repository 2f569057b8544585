//! Figure Window
//! Shows a single figure and returns control once the window is closed.

use crate::charts::{ChartError, ChartPlotter, Figure};
use egui::{Key, RichText, ViewportCommand};

/// Window content for one figure.
pub struct FigureWindow {
    figure: Figure,
}

impl FigureWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        egui::TopBottomPanel::bottom("figure_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Close").clicked() {
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
                ui.label(RichText::new("Close this window to continue").weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&self.figure.title).strong());
            });
            ui.add_space(6.0);
            ChartPlotter::draw_figure(ui, &self.figure);
        });
    }
}

/// Open a native window for `figure` and block until it is dismissed.
pub fn show_figure(figure: Figure, size: [u32; 2]) -> Result<(), ChartError> {
    let title = figure.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size[0] as f32, size[1] as f32])
            .with_title(title.as_str()),
        ..Default::default()
    };

    tracing::debug!(figure = %figure.id, "Opening figure window");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(FigureWindow::new(cc, figure)))),
    )
    .map_err(|e| ChartError::Display(e.to_string()))
}
