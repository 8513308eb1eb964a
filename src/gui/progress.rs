// src/gui/progress.rs
use std::sync::mpsc::Sender;

use eframe::egui;

use crate::{data::SearchResult, error::Failure, progress::Progress};

/// Worker → UI messages.
pub enum JobEvent {
    Status(String),
    Warning(String),
    /// `(keyword, results)` or the error text.
    Done(Result<(String, Vec<SearchResult>), String>),
}

pub struct GuiProgress {
    tx: Sender<JobEvent>,
    ctx: egui::Context,
    limit: usize,
}

impl GuiProgress {
    pub fn new(tx: Sender<JobEvent>, ctx: egui::Context) -> Self {
        Self { tx, ctx, limit: 0 }
    }

    fn send(&self, ev: JobEvent) {
        // UI gone → nothing to tell
        if self.tx.send(ev).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, limit: usize) {
        self.limit = limit;
        self.send(JobEvent::Status(format!("Searching (up to {limit} posts)…")));
    }
    fn log(&mut self, msg: &str) {
        self.send(JobEvent::Status(s!(msg)));
    }
    fn item_done(&mut self, result: &SearchResult) {
        self.send(JobEvent::Status(format!(
            "Fetched post {} of at most {}: {}",
            result.seq(),
            self.limit,
            result.title()
        )));
    }
    fn warn(&mut self, failure: &Failure) {
        self.send(JobEvent::Warning(failure.to_string()));
    }
    fn finish(&mut self, collected: usize) {
        self.send(JobEvent::Status(format!("Fetch complete ({collected} post(s))")));
    }
}
