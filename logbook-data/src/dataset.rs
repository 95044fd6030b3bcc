//! The immutable in-memory dataset: ascent records plus crag coordinates.
//!
//! Loaded once at startup and read-only afterwards, so it can be shared
//! across exploration sessions without locking. Row lookups by year go
//! through a precomputed index rather than a full-table scan, and the
//! validity check for a (crag, year) pair is a set lookup.

use crate::ascent::AscentRecord;
use crate::crag::CragLocation;
use crate::error::Result;
use csv::ReaderBuilder;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The fixed climbing logbook dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    ascents: Vec<AscentRecord>,
    locations: Vec<CragLocation>,
    /// Row indices per ascent year, including the year-0 sentinel rows
    rows_by_year: BTreeMap<i32, Vec<usize>>,
    /// Crags with at least one ascent per year, for the validity check
    crags_by_year: HashMap<i32, HashSet<String>>,
}

impl Dataset {
    /// Builds a dataset from already-parsed tables, computing the
    /// per-year indexes.
    pub fn new(ascents: Vec<AscentRecord>, locations: Vec<CragLocation>) -> Self {
        let mut rows_by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        let mut crags_by_year: HashMap<i32, HashSet<String>> = HashMap::new();
        for (index, ascent) in ascents.iter().enumerate() {
            rows_by_year.entry(ascent.year).or_default().push(index);
            crags_by_year
                .entry(ascent.year)
                .or_default()
                .insert(ascent.crag.clone());
        }
        Self {
            ascents,
            locations,
            rows_by_year,
            crags_by_year,
        }
    }

    /// Loads both tables from CSV.
    ///
    /// Ascent CSV format (with headers):
    /// `crag,sector,name,fra_routes,method_id,sex,rating,date,year,birth`
    ///
    /// Coordinates CSV format: see [`CragLocation::parse_coords_csv`].
    /// Malformed rows fail ingestion; they are never repaired or skipped.
    pub fn from_csv(ascents_csv: &str, coords_csv: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(ascents_csv.as_bytes());

        let mut ascents = Vec::new();
        for result in rdr.records() {
            let record = result?;
            ascents.push(AscentRecord::try_from(&record)?);
        }

        let locations = CragLocation::parse_coords_csv(coords_csv)?;
        log::info!(
            "loader: loaded {} ascent records across {} located crags",
            ascents.len(),
            locations.len()
        );
        Ok(Self::new(ascents, locations))
    }

    /// All ascent records, in ingestion order.
    pub fn ascents(&self) -> &[AscentRecord] {
        &self.ascents
    }

    /// Crag map coordinates.
    pub fn locations(&self) -> &[CragLocation] {
        &self.locations
    }

    /// Distinct ascent years, most recent first.
    ///
    /// The upstream sentinel year 0 (unknown year) is excluded; those rows
    /// stay in the dataset but are never offered for selection.
    pub fn years(&self) -> Vec<i32> {
        self.rows_by_year
            .keys()
            .rev()
            .copied()
            .filter(|&year| year != 0)
            .collect()
    }

    /// Rows logged in the given year, via the year index.
    pub fn rows_for_year(&self, year: i32) -> Vec<&AscentRecord> {
        self.rows_by_year
            .get(&year)
            .map(|indices| indices.iter().map(|&i| &self.ascents[i]).collect())
            .unwrap_or_default()
    }

    /// True when the crag recorded at least one ascent in the given year.
    pub fn crag_active_in_year(&self, crag: &str, year: i32) -> bool {
        self.crags_by_year
            .get(&year)
            .is_some_and(|crags| crags.contains(crag))
    }

    /// Total number of ascent records.
    pub fn len(&self) -> usize {
        self.ascents.len()
    }

    /// True when no ascents were ingested.
    pub fn is_empty(&self) -> bool {
        self.ascents.is_empty()
    }
}
