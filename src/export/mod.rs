//! Report export
//!
//! One-way exports of produced reports: a trip plan as JSON, a budget's
//! expense ledger as CSV. Both write through `io::Write` so the CLI can
//! target files and tests can target buffers.

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{trip_export, write_trip_json, TripExport};
