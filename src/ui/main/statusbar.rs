use crate::app::{HistogramApp, STATUS_MESSAGE_TTL};
use crate::image_loader::ImageSlot;
use egui::{self, Margin, RichText};

impl HistogramApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match &self.slot {
                        ImageSlot::Ready(sample) => {
                            ui.label(RichText::new(sample.name()).strong().size(12.0));
                            ui.label(
                                RichText::new(format!("{}×{}", sample.width(), sample.height()))
                                    .weak()
                                    .size(11.0),
                            );
                        }
                        ImageSlot::Loading { name } => {
                            ui.spinner();
                            ui.label(RichText::new(name).size(12.0));
                        }
                        ImageSlot::Failed { name, .. } => {
                            ui.label(
                                RichText::new(name)
                                    .color(ui.visuals().error_fg_color)
                                    .size(12.0),
                            );
                        }
                        ImageSlot::Empty => {}
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed() < STATUS_MESSAGE_TTL {
                                ui.label(RichText::new(msg).weak().size(11.0));
                            }
                        }

                        if let Some(library) = &self.library {
                            ui.label(
                                RichText::new(format!("{} images", library.images().len()))
                                    .weak()
                                    .size(11.0),
                            );
                        }
                    });
                });
            });
    }
}
