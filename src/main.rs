use eframe::egui;
use histoview::app::HistogramApp;
use histoview::logging;
use histoview::settings::Settings;

fn main() -> eframe::Result<()> {
    let settings = Settings::load();
    logging::init_tracing(settings.debug_logging);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_size.0, settings.window_size.1])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Histoview",
        native_options,
        Box::new(move |cc| Ok(Box::new(HistogramApp::new(cc, settings)))),
    )
}

fn load_icon() -> egui::IconData {
    // Three overlapping bar ramps, one per channel
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let column = x / 4;
            let bar_height = 8 + (column * 37 % 48);
            if size - y > bar_height {
                continue;
            }

            match column % 3 {
                0 => rgba[idx..idx + 4].copy_from_slice(&[230, 60, 60, 255]),
                1 => rgba[idx..idx + 4].copy_from_slice(&[60, 190, 80, 255]),
                _ => rgba[idx..idx + 4].copy_from_slice(&[70, 110, 240, 255]),
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
