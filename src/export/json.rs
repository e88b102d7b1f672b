//! JSON export of a trip plan

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::PlannerResult;
use crate::models::Trip;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A trip plan snapshot with export envelope
#[derive(Debug, Serialize)]
pub struct TripExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// The trip, budget and itinerary included
    pub trip: Trip,

    /// Totals duplicated for quick inspection
    pub total_cost: String,
    pub budget_remaining: String,
}

/// Build the export envelope for a trip
pub fn trip_export(trip: &Trip) -> TripExport {
    TripExport {
        schema_version: EXPORT_SCHEMA_VERSION.to_string(),
        exported_at: Utc::now(),
        total_cost: trip.total_cost().to_string(),
        budget_remaining: trip.budget().remaining().to_string(),
        trip: trip.clone(),
    }
}

/// Serialize a trip export as pretty JSON into a writer
pub fn write_trip_json<W: Write>(trip: &Trip, writer: &mut W) -> PlannerResult<()> {
    let export = trip_export(trip);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writer.write_all(b"\n")?;
    Ok(())
}
