//! One user's exploration session: selection state plus its derived views.
//!
//! A `Session` owns exactly one [`SelectionState`] and keeps the
//! [`ViewBundle`] consistent with it: every setter re-runs the whole
//! pipeline before returning, so callers can use either the returned
//! bundle (push style) or [`Session::current_views`] (pull style) and see
//! the same thing. The dataset is shared and read-only; concurrent
//! sessions each own their state and never interfere.

use crate::selection::{Scope, SelectionState};
use crate::views::{self, ViewBundle};
use logbook_data::Dataset;
use std::sync::Arc;

pub struct Session {
    dataset: Arc<Dataset>,
    selection: SelectionState,
    views: ViewBundle,
}

impl Session {
    /// Opens a session on the most recent year in the dataset
    /// (overall scope, nothing highlighted).
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let year = dataset.years().first().copied().unwrap_or(0);
        Self::with_year(dataset, year)
    }

    /// Opens a session on a specific year.
    pub fn with_year(dataset: Arc<Dataset>, year: i32) -> Self {
        let selection = SelectionState::new(year);
        let views = views::compute_views(&dataset, &selection);
        Self {
            dataset,
            selection,
            views,
        }
    }

    /// Switches between the overall and by-crag view.
    pub fn set_scope(&mut self, scope: Scope) -> &ViewBundle {
        self.selection.set_scope(scope);
        self.recompute()
    }

    /// Selects a year from the dropdown.
    pub fn set_year(&mut self, year: i32) -> &ViewBundle {
        self.selection.set_year(year);
        self.recompute()
    }

    /// Selects (or clears) a crag via the map.
    pub fn set_crag(&mut self, crag: Option<String>) -> &ViewBundle {
        self.selection.set_crag(crag);
        self.recompute()
    }

    /// Highlights a route by its row index in the current ranked table,
    /// or clears the highlight with `None`.
    ///
    /// An index past the end of the table clears the highlight; a stale
    /// index must never silently filter the new table.
    pub fn set_selected_route(&mut self, row_index: Option<usize>) -> &ViewBundle {
        let route = match row_index {
            Some(index) => match self.views.route_table.get(index) {
                Some(row) => Some(row.route.clone()),
                None => {
                    log::warn!(
                        "table row index {} out of range ({} rows); clearing route selection",
                        index,
                        self.views.route_table.len()
                    );
                    None
                }
            },
            None => None,
        };
        self.selection.set_selected_route(route);
        self.recompute()
    }

    /// The views for the latest selection state.
    pub fn current_views(&self) -> &ViewBundle {
        &self.views
    }

    /// The latest selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The shared dataset this session explores.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn recompute(&mut self) -> &ViewBundle {
        self.views = views::compute_views(&self.dataset, &self.selection);
        &self.views
    }
}
