// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Output directory text field (mapped into ExportOptions on export)
    pub out_dir_text: String,

    /// Results table -> show full bodies instead of a one-line preview
    pub show_full_body: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200.0,
            window_h: 760.0,
            out_dir_text: s!(),
            show_full_body: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new() -> Self {
        let options = AppOptions::default();
        let gui = GuiState {
            out_dir_text: options.export.out_dir().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
