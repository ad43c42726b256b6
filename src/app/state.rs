use crate::chart::HistogramChart;
use crate::errors::HistogramError;
use crate::histogram::RgbHistogram;
use crate::image_loader::{ImageLibrary, ImageSample, ImageSlot};
use crate::settings::Settings;

use eframe::egui::{self, TextureHandle};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

pub enum LoaderMessage {
    ImageLoaded { request: u64, sample: ImageSample },
    LoadError { request: u64, error: HistogramError },
}

pub struct HistogramApp {
    // Settings
    pub settings: Settings,
    pub settings_dirty: bool,

    // Image library and selection
    pub library: Option<Arc<ImageLibrary>>,
    pub selected: Option<String>,

    // Current image state
    pub slot: ImageSlot,
    /// Bumped for every load so late results of an older selection can be told apart
    pub request_id: u64,
    pub preview_texture: Option<TextureHandle>,

    // Result of the last computation
    pub histogram: Option<RgbHistogram>,
    pub chart: Option<HistogramChart>,

    // Feedback
    pub alert: Option<String>,
    pub status_message: Option<(String, Instant)>,

    // Async loading
    pub loader_tx: Sender<LoaderMessage>,
    pub loader_rx: Receiver<LoaderMessage>,

    // Context for repaint requests
    pub ctx: Option<egui::Context>,
}

impl HistogramApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        configure_style(&cc.egui_ctx);

        let mut app = Self::with_settings(settings, Some(cc.egui_ctx.clone()));

        // A folder or an image file can be passed on the command line
        match std::env::args().nth(1).map(PathBuf::from) {
            Some(path) if path.is_file() => app.open_image_file(path),
            Some(path) => app.set_library(path),
            None => {
                let dir = app.settings.library_dir.clone();
                app.set_library(dir);
            }
        }

        app
    }

    /// Builds the app without touching the command line or the library folder.
    pub fn with_settings(settings: Settings, ctx: Option<egui::Context>) -> Self {
        let (tx, rx) = channel();

        Self {
            settings,
            settings_dirty: false,
            library: None,
            selected: None,
            slot: ImageSlot::Empty,
            request_id: 0,
            preview_texture: None,
            histogram: None,
            chart: None,
            alert: None,
            status_message: None,
            loader_tx: tx,
            loader_rx: rx,
            ctx,
        }
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
        // Repaint once more so the message disappears even if nothing else happens
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint_after(STATUS_MESSAGE_TTL);
        }
    }

    /// Logs the error; the ones a user can act on also pop up an alert.
    pub fn report_error(&mut self, error: HistogramError) {
        error.log();
        if error.is_user_visible() {
            self.alert = Some(error.user_message());
        }
        self.set_status_message(error.to_string());
    }

    /// Keeps the last seen window size so the next launch opens at the same size.
    /// Settings are only marked dirty on a real change, not on every frame.
    pub fn remember_window_size(&mut self, size: Option<egui::Vec2>) {
        let Some(size) = size else { return };
        if size.x < 1.0 || size.y < 1.0 {
            return;
        }
        let size = (size.x.round(), size.y.round());
        if self.settings.window_size != size {
            self.settings.window_size = size;
            self.settings_dirty = true;
        }
    }

    pub fn persist_settings_if_dirty(&mut self) {
        if self.settings_dirty {
            self.settings.save();
            self.settings_dirty = false;
        }
    }
}

fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.window_shadow = egui::epaint::Shadow::NONE;
    style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
