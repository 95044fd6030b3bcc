//! Pure aggregation functions over a materialized row subset.
//!
//! Every function here is total over subsets of any size: an empty subset
//! yields empty series and absent averages rather than a fault.
//! Nothing in this module looks at the selection; the subset it receives is
//! already the active one.

use crate::views::{RouteRow, SeriesPoint, Summary};
use itertools::Itertools;
use logbook_data::grade::compare_grades;
use logbook_data::{AscentRecord, Sex};
use std::cmp::Ordering;

/// Month labels for the seasonal chart, indexed by `month - 1`.
///
/// `Fev` and `Ago` are the labels the historical dashboard shipped with and
/// are kept for display compatibility.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Apr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dec",
];

/// Display mapping for the method chart: upstream code -> bar label, in
/// fixed display position order.
///
/// Code 5 deliberately repeats the "Onsight" label: the historical display
/// shows five bars, two of them labeled Onsight. The duplication is a
/// display rule only; counts stay per code, so the five bars partition
/// the subset.
pub const METHOD_DISPLAY: [(u8, &str); 5] = [
    (1, "Redpoint"),
    (2, "Flash"),
    (3, "Onsight"),
    (4, "Top rope"),
    (5, "Onsight"),
];

/// Display order and labels for the sex chart.
const SEX_DISPLAY: [(Sex, &str); 2] = [(Sex::Male, "Male"), (Sex::Female, "Female")];

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scalar summary of the subset: ascent count and mean of nonzero ratings.
///
/// `crag` is the display scope (a crag name, or `None` for the overall
/// view); it only affects the summary label, never the numbers.
pub fn summary(subset: &[&AscentRecord], crag: Option<String>) -> Summary {
    let rated: Vec<f64> = subset
        .iter()
        .filter(|r| r.is_rated())
        .map(|r| f64::from(r.rating))
        .collect();
    let avg_rating = if rated.is_empty() {
        None
    } else {
        Some(round1(rated.iter().sum::<f64>() / rated.len() as f64))
    };
    Summary {
        crag,
        count: subset.len(),
        avg_rating,
    }
}

/// Ascent counts per grade, ordered by the climbing-grade comparator.
pub fn grade_distribution(subset: &[&AscentRecord]) -> Vec<SeriesPoint> {
    let counts = subset.iter().counts_by(|r| r.grade.as_str());
    counts
        .into_iter()
        .sorted_by(|(a, _), (b, _)| compare_grades(a, b))
        .map(|(grade, count)| SeriesPoint {
            label: grade.to_string(),
            count,
        })
        .collect()
}

/// Ascent counts per month, ascending month order, months present only.
pub fn seasonal_distribution(subset: &[&AscentRecord]) -> Vec<SeriesPoint> {
    let counts = subset.iter().counts_by(|r| r.month);
    counts
        .into_iter()
        .sorted_by_key(|&(month, _)| month)
        .map(|(month, count)| SeriesPoint {
            label: MONTH_LABELS[(month - 1) as usize].to_string(),
            count,
        })
        .collect()
}

/// Ranked route table: one row per (route, sector, grade) group with at
/// least one nonzero rating, mean rating rounded to one decimal, sorted by
/// rating descending with ties broken by route name.
pub fn route_ranking(subset: &[&AscentRecord]) -> Vec<RouteRow> {
    let groups = subset
        .iter()
        .filter(|r| r.is_rated())
        .map(|r| {
            (
                (r.route_name.as_str(), r.sector.as_str(), r.grade.as_str()),
                f64::from(r.rating),
            )
        })
        .into_group_map();

    let mut rows: Vec<RouteRow> = groups
        .into_iter()
        .map(|((route, sector, grade), ratings)| RouteRow {
            route: route.to_string(),
            sector: sector.to_string(),
            grade: grade.to_string(),
            rating: round1(ratings.iter().sum::<f64>() / ratings.len() as f64),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| a.route.cmp(&b.route))
    });
    rows
}

/// Ascent counts per method code in the fixed five-bar display order.
///
/// Bars with no ascents are kept at zero so the display shape is stable.
pub fn method_distribution(subset: &[&AscentRecord]) -> Vec<SeriesPoint> {
    let counts = subset.iter().counts_by(|r| r.method_id);
    METHOD_DISPLAY
        .iter()
        .map(|&(code, label)| SeriesPoint {
            label: label.to_string(),
            count: counts.get(&code).copied().unwrap_or(0),
        })
        .collect()
}

/// Ascent counts per sex, fixed [Male, Female] order.
pub fn sex_distribution(subset: &[&AscentRecord]) -> Vec<SeriesPoint> {
    let counts = subset.iter().counts_by(|r| r.sex);
    SEX_DISPLAY
        .iter()
        .map(|&(sex, label)| SeriesPoint {
            label: label.to_string(),
            count: counts.get(&sex).copied().unwrap_or(0),
        })
        .collect()
}

/// Narrows the active subset to one highlighted route.
///
/// Identity when no route is highlighted. Feeds the method and sex
/// distributions only; grade, seasonal, table and summary stay scoped to
/// the year/crag subset.
pub fn narrow_to_route<'a>(
    subset: &[&'a AscentRecord],
    route_name: Option<&str>,
) -> Vec<&'a AscentRecord> {
    match route_name {
        Some(name) => subset
            .iter()
            .copied()
            .filter(|r| r.route_name == name)
            .collect(),
        None => subset.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use logbook_data::AscentRecord;

    fn ascent(route: &str, grade: &str, method_id: u8, sex: Sex, rating: u8, month: u32) -> AscentRecord {
        AscentRecord {
            crag: "Sintra".to_string(),
            sector: "Main".to_string(),
            route_name: route.to_string(),
            grade: grade.to_string(),
            method_id,
            sex,
            age: Some(30),
            rating,
            year: 2016,
            month,
            date: NaiveDate::from_ymd_opt(2016, month, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn refs(records: &[AscentRecord]) -> Vec<&AscentRecord> {
        records.iter().collect()
    }

    #[test]
    fn summary_counts_rows_and_averages_nonzero_ratings() {
        let records = vec![
            ascent("A", "6a", 1, Sex::Male, 4, 5),
            ascent("A", "6a", 1, Sex::Male, 0, 5),
            ascent("B", "6b", 2, Sex::Female, 5, 6),
        ];
        let summary = summary(&refs(&records), None);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.avg_rating, Some(4.5));
    }

    #[test]
    fn summary_of_unrated_subset_has_no_average() {
        let records = vec![ascent("A", "6a", 1, Sex::Male, 0, 5)];
        let summary = summary(&refs(&records), Some("Sintra".to_string()));
        assert_eq!(summary.count, 1);
        assert_eq!(summary.avg_rating, None);
    }

    #[test]
    fn summary_of_empty_subset_is_zero() {
        let summary = summary(&[], None);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_rating, None);
    }

    #[test]
    fn grade_distribution_is_grade_ordered_and_sums_to_subset() {
        let records = vec![
            ascent("A", "7a", 1, Sex::Male, 3, 5),
            ascent("B", "6a+", 1, Sex::Male, 3, 5),
            ascent("C", "6a+", 1, Sex::Male, 3, 5),
            ascent("D", "6b", 1, Sex::Male, 3, 5),
        ];
        let series = grade_distribution(&refs(&records));
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["6a+", "6b", "7a"]);
        assert_eq!(series.iter().map(|p| p.count).sum::<usize>(), 4);
    }

    #[test]
    fn seasonal_distribution_orders_months_and_skips_absent_ones() {
        let records = vec![
            ascent("A", "6a", 1, Sex::Male, 3, 11),
            ascent("B", "6a", 1, Sex::Male, 3, 2),
            ascent("C", "6a", 1, Sex::Male, 3, 11),
        ];
        let series = seasonal_distribution(&refs(&records));
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Fev", "Nov"]);
        assert_eq!(series[1].count, 2);
        assert_eq!(series.iter().map(|p| p.count).sum::<usize>(), 3);
    }

    #[test]
    fn route_ranking_sorts_descending_and_excludes_unrated() {
        let records = vec![
            ascent("Alpha", "6a", 1, Sex::Male, 3, 5),
            ascent("Alpha", "6a", 1, Sex::Male, 4, 6),
            ascent("Beta", "6b", 1, Sex::Male, 5, 5),
            ascent("Gamma", "6c", 1, Sex::Male, 0, 5),
        ];
        let rows = route_ranking(&refs(&records));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].route, "Beta");
        assert_eq!(rows[0].rating, 5.0);
        assert_eq!(rows[1].route, "Alpha");
        assert_eq!(rows[1].rating, 3.5);
    }

    #[test]
    fn route_ranking_breaks_rating_ties_by_route_name() {
        let records = vec![
            ascent("Zulu", "6a", 1, Sex::Male, 4, 5),
            ascent("Alpha", "6b", 1, Sex::Male, 4, 5),
        ];
        let rows = route_ranking(&refs(&records));
        assert_eq!(rows[0].route, "Alpha");
        assert_eq!(rows[1].route, "Zulu");
    }

    #[test]
    fn route_ranking_splits_same_route_name_across_sectors() {
        let records = vec![
            ascent("Alpha", "6a", 1, Sex::Male, 4, 5),
            {
                let mut r = ascent("Alpha", "6a", 1, Sex::Male, 2, 5);
                r.sector = "Upper".to_string();
                r
            },
        ];
        let rows = route_ranking(&refs(&records));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn method_distribution_has_five_fixed_bars_partitioning_the_subset() {
        let records = vec![
            ascent("A", "6a", 1, Sex::Male, 3, 5),
            ascent("B", "6a", 3, Sex::Male, 3, 5),
            ascent("C", "6a", 5, Sex::Male, 3, 5),
            ascent("D", "6a", 5, Sex::Male, 3, 5),
        ];
        let series = method_distribution(&refs(&records));
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Redpoint", "Flash", "Onsight", "Top rope", "Onsight"]);
        assert_eq!(series[0].count, 1);
        assert_eq!(series[1].count, 0);
        // The two Onsight bars stay distinct
        assert_eq!(series[2].count, 1);
        assert_eq!(series[4].count, 2);
        assert_eq!(series.iter().map(|p| p.count).sum::<usize>(), 4);
    }

    #[test]
    fn sex_distribution_keeps_fixed_order_with_zero_slots() {
        let records = vec![
            ascent("A", "6a", 1, Sex::Female, 3, 5),
            ascent("B", "6a", 1, Sex::Female, 3, 5),
        ];
        let series = sex_distribution(&refs(&records));
        assert_eq!(series[0].label, "Male");
        assert_eq!(series[0].count, 0);
        assert_eq!(series[1].label, "Female");
        assert_eq!(series[1].count, 2);
    }

    #[test]
    fn narrowing_restricts_to_one_route() {
        let records = vec![
            ascent("Alpha", "6a", 1, Sex::Male, 3, 5),
            ascent("Beta", "6b", 2, Sex::Female, 3, 5),
        ];
        let subset = refs(&records);
        let narrowed = narrow_to_route(&subset, Some("Alpha"));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].route_name, "Alpha");
    }

    #[test]
    fn narrowing_without_a_route_is_identity() {
        let records = vec![
            ascent("Alpha", "6a", 1, Sex::Male, 3, 5),
            ascent("Beta", "6b", 2, Sex::Female, 3, 5),
        ];
        let subset = refs(&records);
        assert_eq!(narrow_to_route(&subset, None).len(), 2);
    }

    #[test]
    fn aggregations_over_empty_subset_are_well_defined() {
        assert!(grade_distribution(&[]).is_empty());
        assert!(seasonal_distribution(&[]).is_empty());
        assert!(route_ranking(&[]).is_empty());
        assert_eq!(method_distribution(&[]).len(), 5);
        assert!(method_distribution(&[]).iter().all(|p| p.count == 0));
        assert_eq!(sex_distribution(&[]).len(), 2);
        assert!(narrow_to_route(&[], Some("Alpha")).is_empty());
    }
}
