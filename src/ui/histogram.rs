use crate::chart::{self, HistogramChart, X_TICKS};
use crate::errors::{HistogramError, Result};
use egui::epaint::TextShape;
use egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, Vec2};

// Space around the plot area for tick labels and axis titles
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 28.0;
const MARGIN_BOTTOM: f32 = 40.0;

impl HistogramChart {
    /// Paints the chart into the next `height` pixels of `ui`.
    pub fn show(&self, ui: &mut egui::Ui, height: f32, bar_gap: f32) -> Result<()> {
        let width = ui.available_width();
        if width <= MARGIN_LEFT + MARGIN_RIGHT || height <= MARGIN_TOP + MARGIN_BOTTOM {
            return Err(HistogramError::SurfaceUnavailable {
                message: format!("chart area is only {:.0}x{:.0}", width, height),
            });
        }

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), egui::Sense::hover());
        let rect = response.rect;
        let plot = Rect::from_min_max(
            rect.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP),
            rect.max - Vec2::new(MARGIN_RIGHT, MARGIN_BOTTOM),
        );

        let visuals = ui.visuals();
        let text_color = visuals.text_color();
        let grid_color = visuals.widgets.noninteractive.bg_stroke.color;
        let font = FontId::proportional(11.0);

        painter.rect_filled(rect, CornerRadius::same(2), visuals.extreme_bg_color);

        // Horizontal grid and y tick labels
        let y_max = self.y_max();
        for tick in chart::y_ticks(y_max) {
            let y = plot.bottom() - tick as f32 / y_max as f32 * plot.height();
            painter.hline(plot.x_range(), y, Stroke::new(1.0, grid_color));
            painter.text(
                Pos2::new(plot.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                tick.to_string(),
                font.clone(),
                text_color,
            );
        }

        // Bars, one group of three per intensity
        let spec = self.spec();
        for bin in 0..spec.labels.len() {
            let values = [
                spec.datasets[0].data[bin],
                spec.datasets[1].data[bin],
                spec.datasets[2].data[bin],
            ];
            let rects = chart::bar_rects(plot, bin, values, y_max, bar_gap);
            for (bar, dataset) in rects.iter().zip(&spec.datasets) {
                if bar.height() > 0.0 {
                    painter.rect_filled(*bar, CornerRadius::ZERO, dataset.color);
                }
            }
        }

        // Axes
        let axis = Stroke::new(1.0, text_color);
        painter.hline(plot.x_range(), plot.bottom(), axis);
        painter.vline(plot.left(), plot.y_range(), axis);

        for tick in X_TICKS {
            let x = chart::bin_x(plot, tick);
            painter.vline(x, plot.bottom()..=plot.bottom() + 4.0, axis);
            painter.text(
                Pos2::new(x, plot.bottom() + 6.0),
                Align2::CENTER_TOP,
                &spec.labels[tick as usize],
                font.clone(),
                text_color,
            );
        }

        painter.text(
            Pos2::new(plot.center().x, rect.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            spec.x_title,
            FontId::proportional(12.0),
            text_color,
        );

        let y_title = painter.layout_no_wrap(spec.y_title.to_string(), FontId::proportional(12.0), text_color);
        let y_title_pos = Pos2::new(rect.left() + 6.0, plot.center().y + y_title.size().x / 2.0);
        painter.add(TextShape::new(y_title_pos, y_title, text_color).with_angle(-std::f32::consts::FRAC_PI_2));

        // Legend
        let mut x = plot.right();
        for dataset in spec.datasets.iter().rev() {
            let label = painter.layout_no_wrap(dataset.label.to_string(), font.clone(), text_color);
            x -= label.size().x;
            let y = rect.top() + 8.0;
            painter.galley(Pos2::new(x, y), label, text_color);
            x -= 16.0;
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x, y + 1.0), Vec2::new(12.0, 10.0)),
                CornerRadius::same(2),
                dataset.color,
            );
            x -= 12.0;
        }

        if let Some(pos) = response.hover_pos() {
            if let Some(bin) = chart::bin_at(plot, pos.x) {
                self.paint_hover(&painter, plot, bin, text_color);
            }
        }

        Ok(())
    }

    fn paint_hover(&self, painter: &egui::Painter, plot: Rect, bin: u8, text_color: Color32) {
        let x = chart::bin_x(plot, bin);
        painter.vline(x, plot.y_range(), Stroke::new(1.0, text_color.gamma_multiply(0.5)));

        let spec = self.spec();
        let counts: Vec<String> = spec
            .datasets
            .iter()
            .map(|d| format!("{} {}", d.label, d.data[bin as usize]))
            .collect();
        painter.text(
            Pos2::new(plot.left() + 4.0, plot.top() + 4.0),
            Align2::LEFT_TOP,
            format!("{} {}: {}", spec.x_title, bin, counts.join("  ")),
            FontId::monospace(11.0),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::plot_histogram;
    use crate::histogram::RgbHistogram;

    fn sample_chart() -> HistogramChart {
        let hist = RgbHistogram::from_rgba(&[0, 128, 255, 255, 10, 20, 30, 255]).unwrap();
        plot_histogram(None, &hist)
    }

    /// Runs one headless frame and hands the central panel's `Ui` to `paint`.
    fn in_frame<R>(mut paint: impl FnMut(&mut egui::Ui) -> R) -> R {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            ..Default::default()
        };
        let mut result = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = Some(paint(ui));
            });
        });
        result.unwrap()
    }

    #[test]
    fn test_too_short_area_is_a_diagnostic() {
        let chart = sample_chart();
        let err = in_frame(|ui| chart.show(ui, 10.0, 0.2)).unwrap_err();

        assert_eq!(err.error_code(), "SURFACE_UNAVAILABLE");
        assert!(err.is_recoverable());
        assert!(!err.is_user_visible());
    }

    #[test]
    fn test_too_narrow_area_is_a_diagnostic() {
        let chart = sample_chart();
        let result = in_frame(|ui| {
            ui.allocate_ui(Vec2::new(50.0, 400.0), |ui| chart.show(ui, 300.0, 0.2))
                .inner
        });

        assert!(matches!(result, Err(HistogramError::SurfaceUnavailable { .. })));
    }

    #[test]
    fn test_chart_fits_a_normal_window() {
        let chart = sample_chart();
        assert!(in_frame(|ui| chart.show(ui, 300.0, 0.2)).is_ok());
    }
}
