use eframe::egui;

use crate::config::ViewConfig;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PokedexApp {
    pub state: AppState,
}

impl PokedexApp {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, metrics, leaderboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::central_panel(ui, &self.state);
        });
    }
}
