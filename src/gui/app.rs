// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use eframe::egui;
use tracing::{info, warn};

use crate::{config::state::AppState, data::SearchResult};

use super::{
    components::{data_table, export_bar, search_form, status},
    fonts,
    progress::JobEvent,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Naver Blog Scraper",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for options (UI thread only)
    pub state: AppState,

    // last finished search
    pub results: Vec<SearchResult>,
    pub results_keyword: String,

    // status line + degraded steps of the last run
    pub status: String,
    pub warnings: Vec<String>,

    // receiver for the running scrape, if any
    pub job: Option<Receiver<JobEvent>>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        match fonts::install_hangul(&cc.egui_ctx) {
            Some(path) => info!(path, "Init: Hangul font loaded"),
            None => warn!("Init: no Hangul font found; Korean text may not render"),
        }

        Self {
            state,
            results: Vec::new(),
            results_keyword: s!(),
            status: s!("Idle"),
            warnings: Vec::new(),
            job: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool { self.job.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Drain worker events. Called once per frame.
    pub fn poll_job(&mut self) {
        let Some(rx) = &self.job else { return };

        let mut finished = None;
        loop {
            match rx.try_recv() {
                Ok(JobEvent::Status(msg)) => self.status = msg,
                Ok(JobEvent::Warning(msg)) => self.warnings.push(msg),
                Ok(JobEvent::Done(outcome)) => {
                    finished = Some(outcome);
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = Some(Err(s!("scrape worker stopped unexpectedly")));
                    break;
                }
            }
        }

        let Some(outcome) = finished else { return };
        self.job = None;

        match outcome {
            Ok((keyword, results)) => {
                info!(keyword = %keyword, rows = results.len(), warnings = self.warnings.len(), "Scrape: OK");
                self.status = format!("Collected {} post(s)", results.len());
                self.results = results;
                self.results_keyword = keyword;
            }
            Err(e) => {
                warn!(error = %e, "Scrape: Error");
                self.status = format!("Error: {e}");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        if self.running() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            search_form::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            export_bar::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
