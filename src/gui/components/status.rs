// src/gui/components/status.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.running() {
            ui.spinner();
        }
        ui.label(&app.status);
    });

    if !app.warnings.is_empty() {
        egui::CollapsingHeader::new(format!("Warnings ({})", app.warnings.len()))
            .id_salt("warnings")
            .show(ui, |ui| {
                egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                    for w in &app.warnings {
                        ui.colored_label(ui.visuals().warn_fg_color, w);
                    }
                });
            });
    }
}
