// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize the dir field first (mutates options) before any &app borrows
    app.state.options.export.set_dir(&app.state.gui.out_dir_text);

    if app.results.is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let result = file::export_results(
        &app.state.options.export,
        &app.results_keyword,
        &app.results,
    );

    let status_msg = match result {
        Ok(path) => {
            info!(path = %path.display(), rows = app.results.len(), "Export: OK");
            format!("Exported {} post(s) to {}", app.results.len(), path.display())
        }
        Err(e) => {
            error!(error = %e, "Export: Error");
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
