use std::path::Path;

use anyhow::Result;

use crate::color::ColorMap;
use crate::config::ViewConfig;
use crate::data::catalog::Catalog;
use crate::data::filter::FilterCriteria;
use crate::data::model::Record;
use crate::data::run_query;
use crate::data::sort::SortOrder;
use crate::data::summary::{Summary, top_n};
use crate::export;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: ViewConfig,

    /// Active filter selections.
    pub criteria: FilterCriteria,
    pub sort_order: SortOrder,

    /// Records passing the current filters, in display order (cached).
    pub view: Vec<&'static Record>,
    /// `None` when the view is empty.
    pub summary: Option<Summary>,
    pub leaderboard: Vec<&'static Record>,

    pub type_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl AppState {
    pub fn new(config: ViewConfig) -> Self {
        Self::with_catalog(Catalog::shared(), config)
    }

    pub fn with_catalog(catalog: &'static Catalog, config: ViewConfig) -> Self {
        let mut state = Self {
            catalog,
            config,
            criteria: FilterCriteria::default(),
            sort_order: SortOrder::default(),
            view: Vec::new(),
            summary: None,
            leaderboard: Vec::new(),
            type_colors: ColorMap::new(&catalog.categories),
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Recompute the view, metrics and leaderboard after a selection change.
    pub fn refresh(&mut self) {
        self.view = run_query(&self.catalog.records, &self.criteria, self.sort_order);
        self.summary = Summary::from_records(&self.view).ok();
        self.leaderboard = top_n(&self.view, self.config.leaderboard_size);
        log::debug!(
            "Query {:?} / {}: {} of {} shown",
            self.criteria,
            self.sort_order,
            self.view.len(),
            self.catalog.len()
        );
    }

    /// The leaderboard is only worth showing once the view is large enough.
    pub fn show_leaderboard(&self) -> bool {
        self.view.len() >= self.config.leaderboard_min_rows
    }

    pub fn toggle_type(&mut self, ty: &str) {
        self.criteria.toggle_type(ty);
        self.refresh();
    }

    pub fn select_all_types(&mut self) {
        self.criteria.types = self.catalog.categories.clone();
        self.refresh();
    }

    pub fn clear_types(&mut self) {
        self.criteria.types.clear();
        self.refresh();
    }

    pub fn set_final_form_only(&mut self, on: bool) {
        if self.criteria.final_form_only != on {
            self.criteria.final_form_only = on;
            self.refresh();
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        if self.sort_order != order {
            self.sort_order = order;
            self.refresh();
        }
    }

    /// Text for an optional field.
    pub fn or_placeholder<'a>(&'a self, value: Option<&'a str>) -> &'a str {
        value.unwrap_or(self.config.placeholder.as_str())
    }

    /// Write the current view to `path` and report the outcome in the status line.
    pub fn export_view(&mut self, path: &Path) -> Result<()> {
        match export::save_csv(&self.view, path) {
            Ok(()) => {
                log::info!("Exported {} rows to {}", self.view.len(), path.display());
                self.status_message = Some(format!("Saved {}", path.display()));
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to export view: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }
}
