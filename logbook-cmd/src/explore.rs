//! Exploration command implementations: load the dataset, apply a
//! selection, print the derived views.

use anyhow::Context;
use log::info;
use logbook_data::Dataset;
use logbook_engine::views::SeriesPoint;
use logbook_engine::{Scope, Session, ViewBundle};
use std::sync::Arc;

fn load_dataset(ascents_csv: &str, coords_csv: &str) -> anyhow::Result<Dataset> {
    let ascents = std::fs::read_to_string(ascents_csv)
        .with_context(|| format!("Failed to read ascents CSV: {}", ascents_csv))?;
    let coords = std::fs::read_to_string(coords_csv)
        .with_context(|| format!("Failed to read coordinates CSV: {}", coords_csv))?;
    let dataset = Dataset::from_csv(&ascents, &coords)
        .context("Failed to parse the logbook dataset")?;
    info!(
        "Loaded {} ascents, {} located crags",
        dataset.len(),
        dataset.locations().len()
    );
    Ok(dataset)
}

/// Recompute the view bundle for the given selection and print it.
pub fn run_views(
    ascents_csv: &str,
    coords_csv: &str,
    year: Option<i32>,
    crag: Option<String>,
    route_row: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let dataset = Arc::new(load_dataset(ascents_csv, coords_csv)?);
    let mut session = Session::new(Arc::clone(&dataset));

    if let Some(year) = year {
        session.set_year(year);
    }
    if crag.is_some() {
        session.set_scope(Scope::ByCrag);
        session.set_crag(crag);
    }
    if route_row.is_some() {
        session.set_selected_route(route_row);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(session.current_views())?
        );
    } else {
        print_bundle(session.current_views());
    }
    Ok(())
}

/// List the selectable years, most recent first.
pub fn run_years(ascents_csv: &str, coords_csv: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(ascents_csv, coords_csv)?;
    for year in dataset.years() {
        println!("{}", year);
    }
    Ok(())
}

/// List crag map coordinates.
pub fn run_crags(ascents_csv: &str, coords_csv: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(ascents_csv, coords_csv)?;
    for location in dataset.locations() {
        println!("{}\t{:.5}\t{:.5}", location.crag, location.lat, location.lon);
    }
    Ok(())
}

fn print_series(title: &str, series: &[SeriesPoint]) {
    println!("\n{}", title);
    for point in series {
        println!("  {:<12} {}", point.label, point.count);
    }
}

fn print_bundle(views: &ViewBundle) {
    if !views.is_valid {
        println!(
            "WARNING: the selected crag has no ascents in this year; \
             try another year"
        );
    }
    println!("{}", views.summary.text());

    print_series("Grades", &views.grade_series);
    print_series("Season", &views.season_series);

    println!("\n{:<28} {:<20} {:>6} {:>7}", "Route", "Sector", "Grade", "Rating");
    for row in &views.route_table {
        println!(
            "{:<28} {:<20} {:>6} {:>7.1}",
            row.route, row.sector, row.grade, row.rating
        );
    }

    print_series("Method", &views.method_series);
    print_series("Sex", &views.sex_series);
}
