// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over App::results.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{data::HEADERS, gui::app::App};

const ROW_H: f32 = 20.0;
const FULL_ROW_H: f32 = 96.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.results.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No results yet").weak());
        });
        return;
    }

    let full = app.state.gui.show_full_body;
    let row_h = if full { FULL_ROW_H } else { ROW_H };

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(36.0))                                      // No
        .column(Column::initial(260.0).resizable(true).clip(true))        // Title
        .column(Column::initial(110.0).resizable(true).clip(true))        // Author
        .column(Column::initial(90.0).resizable(true).clip(true))         // Date
        .column(Column::initial(220.0).resizable(true).clip(true))        // Link
        .column(Column::remainder().clip(true).at_least(120.0))           // Body
        .min_scrolled_height(0.0)
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(row_h, app.results.len(), |mut row| {
                let Some(r) = app.results.get(row.index()) else { return };

                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(r.seq().to_string()); });
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(r.title()).truncate()).on_hover_text(r.title());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(r.author()).truncate());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(r.date()).truncate());
                });
                row.col(|ui| {
                    ui.hyperlink_to(r.link(), r.link());
                });
                row.col(|ui| {
                    if full {
                        egui::ScrollArea::vertical()
                            .id_salt(("body", r.seq()))
                            .max_height(FULL_ROW_H)
                            .show(ui, |ui| { ui.label(r.body()); });
                    } else {
                        let preview = r.body().lines().find(|l| !l.trim().is_empty()).unwrap_or("");
                        ui.add(egui::Label::new(preview).truncate()).on_hover_text(r.body());
                    }
                });
            });
        });
}
