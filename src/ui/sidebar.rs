use crate::app::HistogramApp;
use crate::image_loader::ImageSlot;
use crate::settings::{Settings, Theme};
use crate::ui::common::{info_row, section, slider_row};
use egui::{self, Margin, RichText};

impl HistogramApp {
    pub fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(260.0)
            .min_width(200.0)
            .max_width(400.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(Margin::same(0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        section(ui, "Images", true, |ui| self.render_image_selector(ui));
                        section(ui, "Image", true, |ui| self.render_image_info(ui));
                        section(ui, "Display", false, |ui| self.render_display_options(ui));
                        ui.add_space(20.0);
                    });
            });
    }

    fn render_image_selector(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(self.settings.library_dir.display().to_string())
                .size(10.0)
                .weak(),
        );

        ui.horizontal(|ui| {
            if ui.button("Open folder…").clicked() {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_directory(&self.settings.library_dir)
                    .pick_folder()
                {
                    self.set_library(dir);
                }
            }
            if ui.button("Rescan").clicked() {
                self.rescan_library();
            }
        });

        ui.add_space(4.0);

        let Some(library) = self.library.clone() else {
            ui.label(RichText::new("No image folder open").weak());
            return;
        };
        if library.is_empty() {
            ui.label(RichText::new("This folder has no images").weak());
            return;
        }

        let selected_text = self.selected.clone().unwrap_or_else(|| "Select an image".to_string());
        egui::ComboBox::from_id_salt("image_selector")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for name in library.images() {
                    ui.selectable_value(&mut self.selected, Some(name.clone()), name);
                }
            });

        ui.add_space(4.0);
        let can_show = self.selected.is_some() && !self.slot.is_loading();
        if ui.add_enabled(can_show, egui::Button::new("Show histogram")).clicked() {
            self.show_selected();
        }
    }

    fn render_image_info(&self, ui: &mut egui::Ui) {
        match &self.slot {
            ImageSlot::Empty => {
                ui.label(RichText::new("Nothing selected").weak());
            }
            ImageSlot::Loading { name } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Loading {}", name));
                });
            }
            ImageSlot::Ready(sample) => {
                info_row(ui, "Name", sample.name());
                info_row(ui, "Size", &format!("{}×{}", sample.width(), sample.height()));
                info_row(ui, "Pixels", &sample.pixel_count().to_string());
                if let Some(histogram) = &self.histogram {
                    info_row(ui, "Tallest bin", &histogram.max_count().to_string());
                }
            }
            ImageSlot::Failed { name, message } => {
                info_row(ui, "Name", name);
                ui.label(RichText::new(message).color(ui.visuals().error_fg_color).size(10.0));
            }
        }
    }

    fn render_display_options(&mut self, ui: &mut egui::Ui) {
        let defaults = Settings::default();
        let mut changed = false;

        ui.horizontal(|ui| {
            changed |= ui.radio_value(&mut self.settings.theme, Theme::Dark, "Dark").changed();
            changed |= ui.radio_value(&mut self.settings.theme, Theme::Light, "Light").changed();
        });
        changed |= ui.checkbox(&mut self.settings.show_preview, "Show image").changed();
        changed |= slider_row(
            ui,
            "Chart height",
            &mut self.settings.chart_height,
            160.0..=800.0,
            defaults.chart_height,
        );
        changed |= slider_row(ui, "Bar gap", &mut self.settings.bar_gap, 0.0..=0.8, defaults.bar_gap);

        if changed {
            self.settings_dirty = true;
        }
    }
}
