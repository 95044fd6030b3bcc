//! Domain model and ingestion for the sport-climbing logbook dataset.
//!
//! This crate owns the typed, immutable view of the two upstream tables:
//! ascent records (one row per logged ascent) and crag coordinates (one row
//! per crag). Both are loaded once at startup from CSV and never mutated for
//! the life of the process.
//!
//! The exploration engine (`logbook-engine`) consumes the [`Dataset`]
//! produced here; it never parses files itself.

pub mod ascent;
pub mod crag;
pub mod dataset;
pub mod error;
pub mod grade;

pub use ascent::{AscentRecord, Method, Sex};
pub use crag::CragLocation;
pub use dataset::Dataset;
pub use error::{LogbookError, Result};
