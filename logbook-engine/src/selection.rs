//! Selection state for one exploration session.

use serde::Serialize;

/// Whether the view covers the whole dataset for a year or one crag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Scope {
    /// All crags for the selected year
    Overall,
    /// One crag, chosen on the map
    ByCrag,
}

/// The current values of the selectors driving the view pipeline.
///
/// `scope`, `year` and `crag` are independent inputs. `selected_route` is
/// dependent state: it names a row of the last ranked route table, so it
/// must be cleared whenever any governing selector changes. A route index
/// from the previous table no longer corresponds to a valid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub scope: Scope,
    pub year: i32,
    /// Crag chosen via the map; ignored while `scope` is `Overall`
    pub crag: Option<String>,
    /// Route highlighted in the ranked table, by name
    pub selected_route: Option<String>,
}

impl SelectionState {
    /// Initial state: overall view of the given year, nothing highlighted.
    pub fn new(year: i32) -> Self {
        Self {
            scope: Scope::Overall,
            year,
            crag: None,
            selected_route: None,
        }
    }

    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
        self.selected_route = None;
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.selected_route = None;
    }

    pub fn set_crag(&mut self, crag: Option<String>) {
        self.crag = crag;
        self.selected_route = None;
    }

    pub fn set_selected_route(&mut self, route: Option<String>) {
        self.selected_route = route;
    }
}
