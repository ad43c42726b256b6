pub fn apply_theme(ctx: &egui::Context, settings: &crate::settings::Settings) {
    let visuals = settings.theme.visuals();
    if ctx.style().visuals.dark_mode != visuals.dark_mode {
        ctx.set_visuals(visuals);
    }
}
