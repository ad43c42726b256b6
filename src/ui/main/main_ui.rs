use crate::app::HistogramApp;

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ctx = Some(ctx.clone());

        self.process_loader_messages();

        crate::ui::main::theme::apply_theme(ctx, &self.settings);

        // Panels first so the central view gets what is left
        self.render_statusbar(ctx);
        self.render_sidebar(ctx);
        self.render_main_view(ctx);
        self.render_alert(ctx);

        let window_size = ctx.input(|i| i.viewport().inner_rect.map(|r| r.size()));
        self.remember_window_size(window_size);
        self.persist_settings_if_dirty();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}
