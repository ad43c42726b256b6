use crate::chart::plot_histogram;
use crate::errors::{HistogramError, Result};
use crate::histogram;
use crate::image_loader::{ImageLibrary, ImageSample, ImageSlot};
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;

use super::{HistogramApp, LoaderMessage};

impl HistogramApp {
    pub fn spawn_loader<F>(&self, f: F)
    where
        F: FnOnce() -> Option<LoaderMessage> + Send + 'static,
    {
        let tx = self.loader_tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            if let Some(msg) = f() {
                let _ = tx.send(msg);
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    /// Enumerates the images in `dir` and makes it the folder the selector offers.
    pub fn set_library(&mut self, dir: PathBuf) {
        match ImageLibrary::scan(&dir) {
            Ok(library) => {
                self.selected = self
                    .settings
                    .last_image
                    .clone()
                    .filter(|name| library.contains(name))
                    .or_else(|| library.images().first().cloned());

                self.set_status_message(format!(
                    "{} images in {}",
                    library.images().len(),
                    dir.display()
                ));
                if self.settings.library_dir != dir {
                    self.settings.library_dir = dir;
                    self.settings_dirty = true;
                }
                self.library = Some(Arc::new(library));
            }
            Err(e) => {
                self.library = None;
                self.selected = None;
                self.report_error(e);
            }
        }
    }

    pub fn rescan_library(&mut self) {
        let dir = self.settings.library_dir.clone();
        self.set_library(dir);
    }

    pub fn open_image_file(&mut self, path: PathBuf) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            self.report_error(HistogramError::image_unavailable(&path, "not a file path"));
            return;
        };
        let name = name.to_string_lossy().into_owned();

        self.set_library(parent.to_path_buf());
        self.selected = Some(name.clone());
        self.show_image(&name);
    }

    /// Starts loading `name`. The histogram is computed once the decoded image arrives.
    pub fn show_image(&mut self, name: &str) {
        let Some(library) = self.library.clone() else {
            let dir = self.settings.library_dir.join(name);
            self.report_error(HistogramError::image_unavailable(dir, "no image folder is open"));
            return;
        };

        self.request_id += 1;
        self.slot = ImageSlot::Loading {
            name: name.to_string(),
        };
        self.histogram = None;
        self.preview_texture = None;

        if self.settings.last_image.as_deref() != Some(name) {
            self.settings.last_image = Some(name.to_string());
            self.settings_dirty = true;
        }

        let request = self.request_id;
        let name = name.to_string();
        self.spawn_loader(move || {
            Some(match library.load(&name) {
                Ok(sample) => LoaderMessage::ImageLoaded { request, sample },
                Err(error) => LoaderMessage::LoadError { request, error },
            })
        });
    }

    pub fn show_selected(&mut self) {
        if let Some(name) = self.selected.clone() {
            self.show_image(&name);
        }
    }

    pub(crate) fn on_image_loaded(&mut self, sample: ImageSample) {
        self.slot = ImageSlot::Ready(sample);
        self.update_preview_texture();

        match self.compute_histogram() {
            Ok(()) => {
                if let ImageSlot::Ready(sample) = &self.slot {
                    let msg = format!("{}: {} pixels", sample.name(), sample.pixel_count());
                    self.set_status_message(msg);
                }
            }
            Err(e) => self.report_error(e),
        }
    }

    pub(crate) fn on_load_error(&mut self, error: HistogramError) {
        let name = self.slot.name().unwrap_or_default().to_string();
        self.slot = ImageSlot::Failed {
            name,
            message: error.to_string(),
        };
        self.report_error(error);
    }

    /// Counts the current image and swaps the chart for a new one.
    pub fn compute_histogram(&mut self) -> Result<()> {
        let sample = self.slot.sample()?;
        let histogram = histogram::compute_histogram(sample)?;

        self.chart = Some(plot_histogram(self.chart.take(), &histogram));
        self.histogram = Some(histogram);
        Ok(())
    }

    fn update_preview_texture(&mut self) {
        let (Some(ctx), ImageSlot::Ready(sample)) = (&self.ctx, &self.slot) else {
            return;
        };

        let max = self.settings.max_preview_size;
        let image = sample.image();
        let rgba = if image.width() > max || image.height() > max {
            image.thumbnail(max, max).to_rgba8()
        } else {
            image.to_rgba8()
        };

        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        self.preview_texture = Some(ctx.load_texture(
            format!("preview_{}", self.request_id),
            color_image,
            egui::TextureOptions::LINEAR,
        ));
    }
}
