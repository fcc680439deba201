use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::sort::SortOrder;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Type filter (collapsible) ----
            let catalog = state.catalog;
            let n_selected = state.criteria.types.len();
            let n_total = catalog.categories.len();
            let header_text = format!("Filter by Type  ({n_selected}/{n_total})");

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("type_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_types();
                        }
                        if ui.small_button("None").clicked() {
                            state.clear_types();
                        }
                    });

                    for ty in &catalog.categories {
                        let mut checked = state.criteria.types.contains(ty);
                        let text = RichText::new(ty).color(state.type_colors.color_for(ty));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_type(ty);
                        }
                    }
                });
            ui.separator();

            // ---- Final evolution filter ----
            let mut final_only = state.criteria.final_form_only;
            if ui
                .checkbox(&mut final_only, "Show Final Evolutions Only")
                .changed()
            {
                state.set_final_form_only(final_only);
            }
            ui.separator();

            // ---- Sorting ----
            ui.strong("Sort by Total Stats");
            let mut order = state.sort_order;
            for option in SortOrder::ALL {
                ui.radio_value(&mut order, option, option.to_string());
            }
            state.set_sort_order(order);
            ui.separator();

            ui.strong("How to Use");
            ui.label("• Type Filter: select one or more types to filter Pokemon");
            ui.label("• Final Evolutions: show only Pokemon that don't evolve further");
            ui.label("• Sorting: order by total base stats");
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export view as CSV…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} Pokemon shown",
            state.view.len(),
            state.catalog.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered Pokemon")
        .add_filter("CSV", &["csv"])
        .set_file_name("pokemon.csv")
        .save_file();

    if let Some(path) = file {
        // Failures are already logged and surfaced in the status line.
        let _ = state.export_view(&path);
    }
}
