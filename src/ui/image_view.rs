use crate::app::HistogramApp;
use crate::image_loader::ImageSlot;
use egui::{self, RichText, Vec2};

impl HistogramApp {
    pub fn render_main_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &self.slot {
                    ImageSlot::Empty => render_info_section(ui),
                    ImageSlot::Loading { .. } => {
                        ui.centered_and_justified(|ui| ui.spinner());
                    }
                    ImageSlot::Failed { name, .. } => {
                        ui.label(RichText::new(format!("Could not load {}", name)).weak());
                    }
                    ImageSlot::Ready(_) => self.render_image_and_histogram(ui),
                });
        });
    }

    fn render_image_and_histogram(&self, ui: &mut egui::Ui) {
        if self.settings.show_preview {
            if let Some(texture) = &self.preview_texture {
                let max_height = (ui.available_height() - self.settings.chart_height - 16.0).max(120.0);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::new(texture)
                            .max_size(Vec2::new(ui.available_width(), max_height))
                            .maintain_aspect_ratio(true),
                    );
                });
                ui.add_space(8.0);
            }
        }

        match &self.chart {
            Some(chart) => {
                // Drawing problems are not the user's fault, so they only go to the log
                if let Err(e) = chart.show(ui, self.settings.chart_height, self.settings.bar_gap) {
                    e.log();
                }
            }
            None => {
                ui.label(RichText::new("No histogram computed").weak());
            }
        }
    }
}

fn render_info_section(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.heading("Histogram calculator");
        ui.add_space(8.0);
        ui.label("Pick an image in the panel on the left and press \"Show histogram\".");
        ui.label("Every pixel is counted per channel: how many have red 0, red 1, … red 255, and the same for green and blue.");
    });
}
