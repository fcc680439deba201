use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Leaderboard chart (central panel, below the top-N table)
// ---------------------------------------------------------------------------

/// One bar per leaderboard entry, coloured by primary type.
pub fn leaderboard_chart(ui: &mut Ui, state: &AppState) {
    let bars: Vec<Bar> = state
        .leaderboard
        .iter()
        .enumerate()
        .map(|(rank, r)| {
            Bar::new(rank as f64, f64::from(r.total_stats()))
                .name(&r.name)
                .fill(state.type_colors.color_for(&r.primary_type))
                .width(0.6)
        })
        .collect();

    let chart = BarChart::new(bars).name("Total Stats");

    Plot::new("leaderboard_plot")
        .legend(Legend::default())
        .height(220.0)
        .y_axis_label("Total Stats")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
