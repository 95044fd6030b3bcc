//! Command implementations for the logbook CLI.
//!
//! Provides subcommands for exploring the climbing logbook dataset from
//! the command line: recomputing the view bundle for a selection, listing
//! selectable years, and listing crag map coordinates.

use clap::Subcommand;

pub mod explore;

#[derive(Subcommand)]
pub enum Command {
    /// Recompute and print the view bundle for a selection
    Views {
        /// Path to the ascents CSV
        #[arg(short = 'a', long)]
        ascents_csv: String,

        /// Path to the crag coordinates CSV
        #[arg(short = 'c', long)]
        coords_csv: String,

        /// Year to select (defaults to the most recent year in the data)
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Crag to select (switches the view to by-crag scope)
        #[arg(long)]
        crag: Option<String>,

        /// Row index into the ranked route table, narrowing the
        /// method/sex views to that route
        #[arg(long)]
        route_row: Option<usize>,

        /// Emit the bundle as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the selectable years, most recent first
    Years {
        /// Path to the ascents CSV
        #[arg(short = 'a', long)]
        ascents_csv: String,

        /// Path to the crag coordinates CSV
        #[arg(short = 'c', long)]
        coords_csv: String,
    },

    /// List crag map coordinates
    Crags {
        /// Path to the ascents CSV
        #[arg(short = 'a', long)]
        ascents_csv: String,

        /// Path to the crag coordinates CSV
        #[arg(short = 'c', long)]
        coords_csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Views {
            ascents_csv,
            coords_csv,
            year,
            crag,
            route_row,
            json,
        } => explore::run_views(&ascents_csv, &coords_csv, year, crag, route_row, json),
        Command::Years {
            ascents_csv,
            coords_csv,
        } => explore::run_years(&ascents_csv, &coords_csv),
        Command::Crags {
            ascents_csv,
            coords_csv,
        } => explore::run_crags(&ascents_csv, &coords_csv),
    }
}
