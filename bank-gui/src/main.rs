use eframe::egui;

mod app;
mod config;
mod events;
mod service;
mod state;
mod view;

fn main() -> Result<(), eframe::Error> {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _guard = rt.enter();

    env_logger::init();

    let config = config::Config::load().unwrap_or_default();

    // Phone-shaped window: the whole app is a single mobile-style column.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 860.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "GlassBank",
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
    );

    drop(_guard);
    rt.shutdown_timeout(std::time::Duration::from_secs(2));

    result
}
