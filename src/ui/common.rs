use egui::{self, CornerRadius, Rect, RichText, Stroke, Vec2};

/// Collapsible sidebar section with a tinted header strip
pub fn section<R>(
    ui: &mut egui::Ui,
    title: &str,
    default_open: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::CollapsingResponse<R> {
    let header_fill = ui.visuals().faint_bg_color;
    let border = ui.visuals().widgets.noninteractive.bg_stroke;

    let header_rect = ui.available_rect_before_wrap();
    let header_rect = Rect::from_min_size(header_rect.min, Vec2::new(ui.available_width(), 24.0));
    ui.painter().rect_filled(header_rect, CornerRadius::ZERO, header_fill);
    ui.painter().hline(header_rect.x_range(), header_rect.bottom(), border);

    let response = egui::CollapsingHeader::new(RichText::new(title).size(11.0).strong())
        .default_open(default_open)
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Frame::NONE
                .inner_margin(egui::Margin::symmetric(8, 6))
                .show(ui, |ui| add_contents(ui))
                .inner
        });

    ui.painter().hline(
        ui.available_rect_before_wrap().x_range(),
        ui.cursor().top(),
        Stroke::new(1.0, border.color),
    );

    response
}

/// Labelled slider; double-click puts it back to `default`. Returns true on change.
pub fn slider_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    default: f32,
) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            Vec2::new(70.0, 18.0),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.label(RichText::new(label).size(10.0).weak());
            },
        );

        let response = ui.add(egui::Slider::new(value, range).trailing_fill(true));
        changed = response.changed();

        if response.double_clicked() {
            *value = default;
            changed = true;
        }
    });

    changed
}

pub fn info_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{}:", label)).size(10.0).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).size(10.0));
        });
    });
}
