//! tilecalc — a four-function keypad calculator

use calccore::CalcConfig;
use eframe::NativeOptions;
use tilecalc::app::CalcApp;

fn main() -> eframe::Result<()> {
    let loaded = CalcConfig::load_default();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => CalcConfig::default(),
    };
    calccore::logging::init(&config.logging);
    if let Err(e) = &loaded {
        tracing::warn!("using default config: {}", e);
    }

    let size = CalcApp::window_size(&config);
    tracing::info!(width = size.x, height = size.y, "starting calculator");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_max_inner_size(size)
            .with_resizable(false)
            .with_maximize_button(false)
            .with_minimize_button(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            let app = CalcApp::new(config);
            app.theme().apply(&cc.egui_ctx);
            Box::new(app)
        }),
    )
}
