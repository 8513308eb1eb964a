// src/gui/actions/copy.rs
use eframe::egui;
use tracing::info;

use crate::{csv::to_export_string, data::DataSet, gui::app::App};

/// Copy the results table to the clipboard as CSV text (no BOM).
pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.results.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    let ds = DataSet::from_results(&app.results);
    let text = to_export_string(&ds, app.state.options.export.include_headers);
    ctx.copy_text(text);

    info!(rows = ds.row_count(), "Copy: OK");
    app.status(format!("Copied {} row(s) to clipboard", ds.row_count()));
}
