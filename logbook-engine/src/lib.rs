//! Selection-to-views aggregation engine for the climbing logbook explorer.
//!
//! The engine turns a [`SelectionState`] (scope, year, crag, highlighted
//! route) into one consistent [`ViewBundle`]: text summary, grade and
//! seasonal distributions, ranked route table, method and sex distributions,
//! and a validity flag for crag/year combinations with no data.
//!
//! # Architecture
//!
//! - [`filter`] resolves the selection into an explicit row predicate plus a
//!   validity verdict, and materializes the matching subset once per event.
//! - [`aggregate`] holds the pure aggregation functions; each takes an
//!   already-materialized subset and is total over subsets of any size,
//!   including empty ones.
//! - [`views`] packages aggregation outputs into the renderer-agnostic
//!   bundle shape; it is the only layer aware of output format.
//! - [`session`] owns one [`SelectionState`] per user session and re-runs
//!   the whole pipeline on every selector change, so the bundle always
//!   reflects the latest state.
//!
//! The dataset itself is read-only and shared; rendering (figures, HTML,
//! map) is an external collaborator that consumes the bundle.

pub mod aggregate;
pub mod filter;
pub mod selection;
pub mod session;
pub mod views;

pub use selection::{Scope, SelectionState};
pub use session::Session;
pub use views::{RouteRow, SeriesPoint, Summary, ViewBundle};
