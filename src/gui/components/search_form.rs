// src/gui/components/search_form.rs
//
// Title, usage notes, keyword field, count slider and the Start button.

use eframe::egui;

use crate::{
    config::consts::{MAX_LIMIT, MIN_LIMIT},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.heading("Naver Blog Scraper");
    ui.label("Enter a keyword to collect Naver blog posts. Results can be exported as CSV.");

    egui::CollapsingHeader::new("How to use")
        .default_open(false)
        .show(ui, |ui| {
            ui.label("1. Type the keyword you want to search for.");
            ui.label("2. Choose how many posts to collect.");
            ui.label("3. Press Start.");
            ui.label("4. When it finishes, review the table and export it as CSV.");
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "Posts outside blog.naver.com are skipped, so you may get fewer than requested.",
            );
        });

    ui.add_space(4.0);

    let running = app.running();
    let mut start = false;

    ui.horizontal(|ui| {
        ui.label("Keyword:");
        let resp = ui.add_enabled(
            !running,
            egui::TextEdit::singleline(&mut app.state.options.scrape.keyword)
                .hint_text("e.g. coffee")
                .desired_width(260.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            start = true;
        }

        ui.label("Posts:");
        ui.add_enabled(
            !running,
            egui::Slider::new(&mut app.state.options.scrape.limit, MIN_LIMIT..=MAX_LIMIT),
        );

        if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
            start = true;
        }
        if running {
            ui.spinner();
            ui.label("Collecting…");
        }
    });

    ui.add_space(4.0);

    if start {
        actions::scrape(app, &ctx);
    }
}
