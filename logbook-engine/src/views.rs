//! Renderer-facing view models and bundle assembly.
//!
//! Everything here is a plain serializable value: ordered label/count
//! pairs, ranked rows, strings, a boolean. This module is the only layer
//! aware of the output shape; the rendering side (figures, HTML table,
//! alert banner) consumes the bundle as-is.

use crate::aggregate;
use crate::filter;
use crate::selection::SelectionState;
use logbook_data::Dataset;
use serde::Serialize;

/// One labeled bar/point of a categorical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub count: usize,
}

/// One row of the ranked route table.
///
/// Field names double as the display column labels
/// (Route, Sector, Grade, Rating).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRow {
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
}

/// Scalar summary of the active year/crag subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Crag the summary is scoped to; `None` in the overall view
    pub crag: Option<String>,
    /// Number of ascents in the subset
    pub count: usize,
    /// Mean of nonzero ratings, one decimal; `None` when nothing is rated
    pub avg_rating: Option<f64>,
}

impl Summary {
    /// The header line the dashboard shows, in its historical format.
    pub fn text(&self) -> String {
        let rating = match self.avg_rating {
            Some(avg) => format!("{:.1}", avg),
            None => "N/A".to_string(),
        };
        match &self.crag {
            Some(crag) => format!(
                " {} // Average Rating: {} //  Ascents: {}",
                crag, rating, self.count
            ),
            None => format!(
                "Overall // Average Rating: {} //  Ascents: {}",
                rating, self.count
            ),
        }
    }
}

/// The full set of derived views for one selection state.
///
/// All members reflect exactly the same filter state. `method_series` and
/// `sex_series` additionally honor the highlighted route; the other views
/// never do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewBundle {
    pub summary: Summary,
    pub grade_series: Vec<SeriesPoint>,
    pub season_series: Vec<SeriesPoint>,
    pub route_table: Vec<RouteRow>,
    pub method_series: Vec<SeriesPoint>,
    pub sex_series: Vec<SeriesPoint>,
    /// False iff the chosen crag has no ascents in the chosen year
    pub is_valid: bool,
}

/// Runs the full pipeline for one selection: resolve, materialize,
/// aggregate, narrow, package.
pub fn compute_views(dataset: &Dataset, selection: &SelectionState) -> ViewBundle {
    let resolution = filter::resolve(dataset, selection);
    let subset = filter::materialize(dataset, &resolution.filter);

    let summary = aggregate::summary(&subset, resolution.filter.crag.clone());
    let grade_series = aggregate::grade_distribution(&subset);
    let season_series = aggregate::seasonal_distribution(&subset);
    let route_table = aggregate::route_ranking(&subset);

    let active = aggregate::narrow_to_route(&subset, selection.selected_route.as_deref());
    let method_series = aggregate::method_distribution(&active);
    let sex_series = aggregate::sex_distribution(&active);

    log::debug!(
        "views: {} rows in scope, {} active for method/sex, {} table rows, valid={}",
        subset.len(),
        active.len(),
        route_table.len(),
        resolution.is_valid
    );

    ViewBundle {
        summary,
        grade_series,
        season_series,
        route_table,
        method_series,
        sex_series,
        is_valid: resolution.is_valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Scope;
    use chrono::NaiveDate;
    use logbook_data::{AscentRecord, Sex};

    fn ascent(crag: &str, route: &str, method_id: u8, rating: u8, year: i32) -> AscentRecord {
        AscentRecord {
            crag: crag.to_string(),
            sector: "Main".to_string(),
            route_name: route.to_string(),
            grade: "6a".to_string(),
            method_id,
            sex: Sex::Male,
            age: None,
            rating,
            year,
            month: 6,
            date: NaiveDate::from_ymd_opt(year, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn summary_text_overall_format() {
        let summary = Summary {
            crag: None,
            count: 3,
            avg_rating: Some(4.5),
        };
        assert_eq!(summary.text(), "Overall // Average Rating: 4.5 //  Ascents: 3");
    }

    #[test]
    fn summary_text_crag_format_and_missing_average() {
        let summary = Summary {
            crag: Some("Sintra".to_string()),
            count: 1,
            avg_rating: None,
        };
        assert_eq!(summary.text(), " Sintra // Average Rating: N/A //  Ascents: 1");
    }

    #[test]
    fn bundle_views_share_one_filter_state() {
        let dataset = Dataset::new(
            vec![
                ascent("Sintra", "Alpha", 1, 4, 2016),
                ascent("Sintra", "Beta", 2, 5, 2016),
                ascent("Farol", "Gamma", 3, 3, 2016),
                ascent("Sintra", "Alpha", 1, 2, 2015),
            ],
            Vec::new(),
        );
        let mut selection = SelectionState::new(2016);
        selection.set_scope(Scope::ByCrag);
        selection.set_crag(Some("Sintra".to_string()));

        let bundle = compute_views(&dataset, &selection);
        assert!(bundle.is_valid);
        assert_eq!(bundle.summary.count, 2);
        assert_eq!(bundle.summary.crag.as_deref(), Some("Sintra"));
        assert_eq!(bundle.grade_series.iter().map(|p| p.count).sum::<usize>(), 2);
        assert_eq!(bundle.season_series.iter().map(|p| p.count).sum::<usize>(), 2);
        assert_eq!(bundle.method_series.iter().map(|p| p.count).sum::<usize>(), 2);
        assert_eq!(bundle.sex_series.iter().map(|p| p.count).sum::<usize>(), 2);
        assert_eq!(bundle.route_table.len(), 2);
    }

    #[test]
    fn route_narrowing_only_touches_method_and_sex() {
        let dataset = Dataset::new(
            vec![
                ascent("Sintra", "Alpha", 1, 4, 2016),
                ascent("Sintra", "Beta", 2, 5, 2016),
            ],
            Vec::new(),
        );
        let mut selection = SelectionState::new(2016);
        selection.set_selected_route(Some("Alpha".to_string()));

        let bundle = compute_views(&dataset, &selection);
        assert_eq!(bundle.method_series.iter().map(|p| p.count).sum::<usize>(), 1);
        assert_eq!(bundle.sex_series.iter().map(|p| p.count).sum::<usize>(), 1);
        // Year-scoped views keep both rows
        assert_eq!(bundle.summary.count, 2);
        assert_eq!(bundle.grade_series.iter().map(|p| p.count).sum::<usize>(), 2);
        assert_eq!(bundle.route_table.len(), 2);
    }

    #[test]
    fn bundle_serializes_with_display_column_names() {
        let row = RouteRow {
            route: "Alpha".to_string(),
            sector: "Main".to_string(),
            grade: "6a".to_string(),
            rating: 4.5,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Route"], "Alpha");
        assert_eq!(json["Rating"], 4.5);
    }
}
