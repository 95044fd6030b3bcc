//! Filter resolution: from selection state to an explicit row predicate.
//!
//! One resolution happens per selector-change event. The resulting
//! [`RowFilter`] is the single place the year/crag combination is decided,
//! and [`materialize`] evaluates it once into a borrowed subset that every
//! aggregation function consumes.

use crate::selection::{Scope, SelectionState};
use logbook_data::{AscentRecord, Dataset};

/// The boolean predicate a selection resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFilter {
    pub year: i32,
    /// Crag restriction; `None` means the overall (year-only) view
    pub crag: Option<String>,
}

impl RowFilter {
    pub fn matches(&self, record: &AscentRecord) -> bool {
        record.year == self.year
            && self
                .crag
                .as_deref()
                .is_none_or(|crag| record.crag == crag)
    }
}

/// Outcome of resolving a selection against the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub filter: RowFilter,
    /// False iff a chosen crag recorded zero ascents in the chosen year.
    /// An overall selection with zero rows stays valid (empty aggregates).
    pub is_valid: bool,
}

/// Resolves the selection into a predicate and a validity verdict.
///
/// In by-crag scope with no crag chosen yet (no map hover has happened),
/// the filter falls back to the overall case.
pub fn resolve(dataset: &Dataset, selection: &SelectionState) -> Resolution {
    let crag = match selection.scope {
        Scope::Overall => None,
        Scope::ByCrag => selection.crag.clone(),
    };
    let is_valid = match &crag {
        Some(crag) => dataset.crag_active_in_year(crag, selection.year),
        None => true,
    };
    Resolution {
        filter: RowFilter {
            year: selection.year,
            crag,
        },
        is_valid,
    }
}

/// Evaluates the predicate into a borrowed row subset.
///
/// The subset is recomputed on demand and never stored across events. The
/// per-year index bounds the scan; the predicate still decides row by row.
pub fn materialize<'a>(dataset: &'a Dataset, filter: &RowFilter) -> Vec<&'a AscentRecord> {
    dataset
        .rows_for_year(filter.year)
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect()
}
