//! Scheduled activities
//!
//! An activity is a time-boxed, priced event placed on an itinerary day.
//! It is immutable once constructed; the cost is captured from the costed
//! item at construction time.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use crate::error::{PlannerError, PlannerResult};

use super::accommodation::Accommodation;
use super::ids::ActivityId;
use super::location::Attraction;
use super::money::Money;
use super::transport::TransportOption;

/// What kind of event an activity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Transport,
    Accommodation,
    Sightseeing,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "Transport"),
            Self::Accommodation => write!(f, "Accommodation"),
            Self::Sightseeing => write!(f, "Sightseeing"),
        }
    }
}

/// A time-boxed, priced event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    id: ActivityId,
    description: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    cost: Money,
    kind: ActivityKind,
}

impl Activity {
    /// Build an activity from raw parts
    ///
    /// Fails when the description is blank or the end precedes the start;
    /// equal start and end is permitted.
    pub fn new(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        cost: Money,
        kind: ActivityKind,
    ) -> PlannerResult<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Activity description cannot be empty".into(),
            ));
        }
        if end < start {
            return Err(PlannerError::InvalidArgument(
                "End time cannot be before start time".into(),
            ));
        }
        Ok(Self {
            id: ActivityId::new(),
            description,
            start,
            end,
            cost,
            kind,
        })
    }

    /// A transport leg anchored at its departure instant; the end follows
    /// from the option's estimated duration
    pub fn transport(start: NaiveDateTime, option: &TransportOption) -> PlannerResult<Self> {
        Self::new(
            format!("{}: {}", option.type_name(), option.route()),
            start,
            start + chrono::Duration::hours(option.estimated_duration_hours()),
            option.total_cost(),
            ActivityKind::Transport,
        )
    }

    /// A stay spanning check-in to check-out
    pub fn stay(
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        accommodation: &Accommodation,
    ) -> PlannerResult<Self> {
        Self::new(
            format!("{}: {}", accommodation.type_name(), accommodation.name()),
            check_in,
            check_out,
            accommodation.total_price(),
            ActivityKind::Accommodation,
        )
    }

    /// A sightseeing visit of the given length
    pub fn sightseeing(
        start: NaiveDateTime,
        duration_hours: u32,
        attraction: &Attraction,
    ) -> PlannerResult<Self> {
        Self::new(
            format!("Sightseeing: {}", attraction.name()),
            start,
            start + chrono::Duration::hours(i64::from(duration_hours)),
            attraction.entry_fee(),
            ActivityKind::Sightseeing,
        )
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn duration_hours(&self) -> i64 {
        let minutes = self.duration_minutes();
        minutes / 60 + i64::from(minutes % 60 != 0)
    }

    /// "09:00 - 12:00"
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.time_range(),
            self.description,
            self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(Activity::new("  ", at(9, 0), at(10, 0), Money::zero(), ActivityKind::Sightseeing)
            .is_err());
        assert!(Activity::new("x", at(10, 0), at(9, 0), Money::zero(), ActivityKind::Sightseeing)
            .is_err());
        // zero-length is permitted
        assert!(Activity::new("x", at(9, 0), at(9, 0), Money::zero(), ActivityKind::Sightseeing)
            .is_ok());
    }

    #[test]
    fn test_transport_activity_derives_end_and_cost() {
        let flight =
            TransportOption::flight("Istanbul", "Paris", Money::from_lira(3000), true).unwrap();
        let activity = Activity::transport(at(9, 0), &flight).unwrap();

        assert_eq!(activity.description(), "Direct Flight: Istanbul → Paris");
        assert_eq!(activity.end(), at(12, 0));
        assert_eq!(activity.cost(), Money::from_lira(4040));
        assert_eq!(activity.kind(), ActivityKind::Transport);
    }

    #[test]
    fn test_stay_spans_window() {
        let hotel = Accommodation::hotel("Grand Pera", Money::from_lira(2000), 3, 4, true).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2025, 6, 4)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let activity = Activity::stay(at(9, 0), check_out, &hotel).unwrap();

        assert_eq!(activity.description(), "4-star Hotel: Grand Pera");
        assert_eq!(activity.cost(), Money::from_lira(6200));
        assert_eq!(activity.kind(), ActivityKind::Accommodation);
    }

    #[test]
    fn test_sightseeing_activity() {
        let louvre = Attraction::new("Louvre Museum", "Art museum", Money::from_lira(17), 4);
        let activity = Activity::sightseeing(at(10, 0), 4, &louvre).unwrap();

        assert_eq!(activity.description(), "Sightseeing: Louvre Museum");
        assert_eq!(activity.end(), at(14, 0));
        assert_eq!(activity.cost(), Money::from_lira(17));
        assert_eq!(activity.duration_hours(), 4);
    }

    #[test]
    fn test_duration_rounds_up_partial_hours() {
        let a = Activity::new("Walk", at(9, 0), at(10, 30), Money::zero(), ActivityKind::Sightseeing)
            .unwrap();
        assert_eq!(a.duration_minutes(), 90);
        assert_eq!(a.duration_hours(), 2);
    }

    #[test]
    fn test_display() {
        let a = Activity::new(
            "Sightseeing: Louvre Museum",
            at(10, 0),
            at(14, 0),
            Money::from_lira(17),
            ActivityKind::Sightseeing,
        )
        .unwrap();
        assert_eq!(a.to_string(), "[10:00 - 14:00] Sightseeing: Louvre Museum (17.00 TL)");
    }
}
