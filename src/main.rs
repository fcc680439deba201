use eframe::egui;
use pokedex_viewer::app::PokedexApp;
use pokedex_viewer::config::ViewConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pokemon Ultra Sun Search",
        options,
        Box::new(move |_cc| Ok(Box::new(PokedexApp::new(config)))),
    )
}
