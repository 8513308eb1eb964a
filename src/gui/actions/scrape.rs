// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;
use tracing::{error, info};

use crate::{
    gui::app::App,
    gui::progress::{GuiProgress, JobEvent},
    scrape,
};

/// Start a search on one background thread so the window keeps repainting.
/// The scrape itself stays sequential.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running() {
        return;
    }

    let opts = app.state.options.scrape.clone();
    if opts.keyword.trim().is_empty() {
        app.status("Enter a keyword first");
        return;
    }
    if let Err(e) = opts.validate() {
        app.status(format!("Error: {e}"));
        return;
    }

    info!(keyword = %opts.keyword, limit = opts.limit, "Scrape: Begin");
    app.warnings.clear();
    app.status(format!("Searching \"{}\"…", opts.keyword));

    let (tx, rx) = mpsc::channel();
    let worker_ctx = ctx.clone();

    let spawned = thread::Builder::new()
        .name(s!("scrape"))
        .spawn(move || {
            let mut prog = GuiProgress::new(tx.clone(), worker_ctx.clone());

            // → This is where the scrape happens ←
            let outcome = scrape::run(&opts, Some(&mut prog))
                .map(|results| (opts.keyword.clone(), results))
                .map_err(|e| e.to_string());

            let _ = tx.send(JobEvent::Done(outcome));
            worker_ctx.request_repaint();
        });

    match spawned {
        Ok(_) => app.job = Some(rx),
        Err(e) => {
            error!(error = %e, "Scrape: could not start worker");
            app.status(format!("Error: {e}"));
        }
    }
}
