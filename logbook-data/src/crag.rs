/// Crag coordinate structures and CSV parsing
use crate::error::{LogbookError, Result};
use csv::ReaderBuilder;
use serde::Serialize;

/// Map coordinates for one crag.
///
/// One location per crag; the table is read-only after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CragLocation {
    /// Crag name, unique within the dataset
    pub crag: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl CragLocation {
    /// Parses the crag coordinates CSV.
    ///
    /// Expected format (with headers): `crag,lat,lon`
    ///
    /// The upstream export has its latitude and longitude columns swapped:
    /// the column labeled `lat` holds longitudes and vice versa. The values
    /// are swapped back here so `lat` is always latitude.
    ///
    /// # Example CSV
    /// ```text
    /// crag,lat,lon
    /// Sintra,-9.39,38.79
    /// ```
    pub fn parse_coords_csv(csv_data: &str) -> Result<Vec<CragLocation>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let mut locations = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let crag = record
                .get(0)
                .ok_or(LogbookError::MissingColumn("crag"))?
                .trim()
                .to_string();
            let lat_column: f64 = parse_coord(record.get(1), "lat")?;
            let lon_column: f64 = parse_coord(record.get(2), "lon")?;

            locations.push(CragLocation {
                crag,
                lat: lon_column,
                lon: lat_column,
            });
        }
        log::info!("loader: loaded {} crag locations", locations.len());
        Ok(locations)
    }
}

fn parse_coord(value: Option<&str>, field: &'static str) -> Result<f64> {
    let raw = value.ok_or(LogbookError::MissingColumn(field))?.trim();
    raw.parse().map_err(|_| LogbookError::FieldParse {
        field,
        value: raw.to_string(),
    })
}
