// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::{
    config::options::export_file_name,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let has_rows = !app.results.is_empty() && !app.running();

    ui.horizontal(|ui| {
        ui.label("Output dir:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(220.0))
            .changed()
        {
            debug!(dir = %app.state.gui.out_dir_text, "UI: out dir changed");
        }

        if has_rows {
            ui.label(egui::RichText::new(export_file_name(&app.results_keyword)).monospace().weak());
        }

        ui.checkbox(&mut app.state.options.export.include_headers, "Include headers");
        ui.checkbox(&mut app.state.gui.show_full_body, "Full bodies");
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(has_rows, egui::Button::new("Export CSV")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, &ctx);
        }
    });
}
