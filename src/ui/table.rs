use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Record;
use crate::data::summary::Summary;
use crate::state::AppState;
use crate::ui::plot;

const RECORD_COLUMNS: [&str; 12] = [
    "Name",
    "Type 1",
    "Type 2",
    "Previous Evolution",
    "Next Evolution",
    "Total Stats",
    "HP",
    "Attack",
    "Defense",
    "Sp. Attack",
    "Sp. Defense",
    "Speed",
];

const LEADERBOARD_COLUMNS: [&str; 4] = ["Name", "Type 1", "Type 2", "Total Stats"];

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Central panel: records table, metrics and leaderboard
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ui.heading(format!("Showing {} Pokemon", state.view.len()));
    ui.add_space(4.0);

    let Some(summary) = &state.summary else {
        ui.colored_label(Color32::YELLOW, "No Pokemon match the selected filters.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.push_id("records_table", |ui: &mut Ui| {
                records_table(ui, state);
            });
            ui.separator();

            metrics(ui, summary);

            if state.show_leaderboard() {
                ui.separator();
                ui.heading(format!(
                    "Top {} by Total Stats",
                    state.config.leaderboard_size
                ));
                ui.push_id("leaderboard_table", |ui: &mut Ui| {
                    leaderboard_table(ui, state);
                });
                ui.add_space(8.0);
                plot::leaderboard_chart(ui, state);
            }
        });
}

fn records_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(48.0), RECORD_COLUMNS.len())
        .max_scroll_height(state.config.table_height)
        .header(20.0, |mut header| {
            for title in RECORD_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.view.len(), |mut row| {
                let r: &Record = state.view[row.index()];
                let stats = r.stats();
                row.col(|ui: &mut Ui| {
                    ui.label(r.name.as_str());
                });
                row.col(|ui: &mut Ui| type_label(ui, state, Some(r.primary_type.as_str())));
                row.col(|ui: &mut Ui| type_label(ui, state, r.secondary_type.as_deref()));
                row.col(|ui: &mut Ui| {
                    ui.label(state.or_placeholder(r.prior_form.as_deref()));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(state.or_placeholder(r.next_form.as_deref()));
                });
                row.col(|ui: &mut Ui| {
                    ui.strong(r.total_stats().to_string());
                });
                for value in [
                    stats.hp,
                    stats.attack,
                    stats.defense,
                    stats.sp_attack,
                    stats.sp_defense,
                    stats.speed,
                ] {
                    row.col(|ui: &mut Ui| {
                        ui.label(value.to_string());
                    });
                }
            });
        });
}

fn leaderboard_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(80.0), LEADERBOARD_COLUMNS.len())
        .header(20.0, |mut header| {
            for title in LEADERBOARD_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.leaderboard.len(), |mut row| {
                let r: &Record = state.leaderboard[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(r.name.as_str());
                });
                row.col(|ui: &mut Ui| type_label(ui, state, Some(r.primary_type.as_str())));
                row.col(|ui: &mut Ui| type_label(ui, state, r.secondary_type.as_deref()));
                row.col(|ui: &mut Ui| {
                    ui.strong(r.total_stats().to_string());
                });
            });
        });
}

fn metrics(ui: &mut Ui, summary: &Summary) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Pokemon", summary.count.to_string());
        metric(&mut cols[1], "Avg Total Stats", format!("{:.1}", summary.mean));
        metric(&mut cols[2], "Highest Stats", summary.max.to_string());
        metric(&mut cols[3], "Lowest Stats", summary.min.to_string());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).small());
    ui.heading(value);
}

/// Type name in its palette colour, or the placeholder when absent.
fn type_label(ui: &mut Ui, state: &AppState, ty: Option<&str>) {
    match ty {
        Some(ty) => {
            ui.label(RichText::new(ty).color(state.type_colors.color_for(ty)));
        }
        None => {
            ui.label(state.config.placeholder.as_str());
        }
    }
}
