//! Trips
//!
//! A trip owns one budget and one itinerary day per calendar date of its
//! span. Status is a label, not a guarded transition: any status may be set
//! at any time.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use crate::error::{PlannerError, PlannerResult};

use super::activity::Activity;
use super::budget::Budget;
use super::ids::TripId;
use super::itinerary::ItineraryDay;
use super::location::City;
use super::money::Money;
use super::visa::VisaTag;

/// Lifecycle label of a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripStatus {
    Planning,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Broad trip destination class; drives the visa gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripType {
    Domestic,
    Europe,
    Usa,
}

impl TripType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Domestic => "Domestic Trip",
            Self::Europe => "Europe Trip",
            Self::Usa => "USA Trip",
        }
    }

    /// The visa kind an approved application must exist for, if any
    pub fn required_visa(&self) -> Option<VisaTag> {
        match self {
            Self::Domestic => None,
            Self::Europe => Some(VisaTag::Schengen),
            Self::Usa => Some(VisaTag::Us),
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A planned trip: budget, day-by-day itinerary, destination, status
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    id: TripId,
    name: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    budget: Budget,
    days: Vec<ItineraryDay>,
    destination: Option<City>,
    status: TripStatus,
}

impl Trip {
    /// Build a trip over an inclusive date span
    ///
    /// One itinerary day is initialized per calendar date from start to end.
    /// An end on the same date as the start is permitted here; the planning
    /// layer applies its own stricter minimum-duration gate.
    pub fn new(
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        budget: Budget,
    ) -> PlannerResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Trip name cannot be empty".into(),
            ));
        }
        if end < start {
            return Err(PlannerError::InvalidArgument(
                "End date cannot be before start date".into(),
            ));
        }

        let mut trip = Self {
            id: TripId::new(),
            name,
            start,
            end,
            budget,
            days: Vec::new(),
            destination: None,
            status: TripStatus::Planning,
        };
        trip.initialize_days();
        Ok(trip)
    }

    fn initialize_days(&mut self) {
        let mut current = self.start.date();
        let end = self.end.date();
        while current <= end {
            self.days.push(ItineraryDay::new(current));
            current += Duration::days(1);
        }
    }

    /// Insert a day unless one already exists for its date; keeps the
    /// sequence date-sorted
    pub fn add_itinerary_day(&mut self, day: ItineraryDay) {
        if self.days.iter().any(|d| d.date() == day.date()) {
            return;
        }
        self.days.push(day);
        self.days.sort_by_key(ItineraryDay::date);
    }

    pub fn day_by_date(&self, date: NaiveDate) -> Option<&ItineraryDay> {
        self.days.iter().find(|d| d.date() == date)
    }

    pub fn day_by_date_mut(&mut self, date: NaiveDate) -> Option<&mut ItineraryDay> {
        self.days.iter_mut().find(|d| d.date() == date)
    }

    /// Schedule an activity on a date, creating the day when absent
    ///
    /// Dates outside the trip's original span are accepted without
    /// validation; the new day joins the date-sorted sequence.
    pub fn add_activity_to_day(&mut self, date: NaiveDate, activity: Activity) {
        if let Some(day) = self.day_by_date_mut(date) {
            day.add_activity(activity);
        } else {
            let mut day = ItineraryDay::new(date);
            day.add_activity(activity);
            self.add_itinerary_day(day);
        }
    }

    /// Sum over all days' costs
    pub fn total_cost(&self) -> Money {
        self.days.iter().map(ItineraryDay::daily_cost).sum()
    }

    /// Inclusive day count of the original span
    pub fn duration_days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn budget_mut(&mut self) -> &mut Budget {
        &mut self.budget
    }

    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    pub fn destination(&self) -> Option<&City> {
        self.destination.as_ref()
    }

    pub fn set_destination(&mut self, destination: City) {
        self.destination = Some(destination);
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    /// Set the status label; no transition graph is enforced
    pub fn set_status(&mut self, status: TripStatus) {
        self.status = status;
    }

    /// The canonical receipt rendering; byte-reproducible for a given state
    pub fn export_to_text(&self) -> String {
        use crate::display::report::{double_separator, separator};

        let mut out = String::new();
        out.push_str(&double_separator(47));
        out.push('\n');
        out.push_str("              TRIP PLAN\n");
        out.push_str(&double_separator(47));
        out.push('\n');
        out.push_str(&format!("Trip Name    : {}\n", self.name));

        if let Some(destination) = &self.destination {
            out.push_str(&format!("Destination  : {}\n", destination.full_name()));
        }

        out.push_str(&format!(
            "Dates        : {} - {} ({} days)\n",
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y"),
            self.duration_days()
        ));
        out.push_str(&format!("Status       : {}\n", self.status));
        out.push_str(&separator(47));
        out.push('\n');

        out.push_str("BUDGET STATUS:\n");
        out.push_str(&format!("  Limit      : {}\n", self.budget.total_limit()));
        out.push_str(&format!(
            "  Spent      : {} ({:.1}%)\n",
            self.budget.current_spending(),
            self.budget.spending_percentage()
        ));
        out.push_str(&format!("  Remaining  : {}\n", self.budget.remaining()));
        out.push_str(&separator(47));
        out.push('\n');

        out.push_str("DAILY SCHEDULE:\n\n");
        for day in &self.days {
            out.push_str(&day.to_string());
            out.push('\n');
        }

        out.push_str(&double_separator(47));
        out.push('\n');
        out.push_str(&format!("TOTAL COST: {}\n", self.total_cost()));
        out.push_str(&double_separator(47));

        out
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = self
            .destination
            .as_ref()
            .map(|d| format!(" → {}", d.name()))
            .unwrap_or_default();
        write!(
            f,
            "{}{} ({} - {}) [{}]",
            self.name,
            destination,
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y"),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityKind;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn trip(start_day: u32, end_day: u32) -> Trip {
        Trip::new(
            "Paris Getaway",
            date(start_day).and_hms_opt(9, 0, 0).unwrap(),
            date(end_day).and_hms_opt(18, 0, 0).unwrap(),
            Budget::new(Money::from_lira(10_000)).unwrap(),
        )
        .unwrap()
    }

    fn sightseeing(d: u32, cost_lira: i64) -> Activity {
        Activity::new(
            "Sightseeing: Museum",
            date(d).and_hms_opt(10, 0, 0).unwrap(),
            date(d).and_hms_opt(12, 0, 0).unwrap(),
            Money::from_lira(cost_lira),
            ActivityKind::Sightseeing,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_initializes_span_days() {
        let trip = trip(1, 3);
        let dates: Vec<_> = trip.days().iter().map(ItineraryDay::date).collect();
        assert_eq!(dates, [date(1), date(2), date(3)]);
        assert_eq!(trip.duration_days(), 3);
        assert_eq!(trip.status(), TripStatus::Planning);
    }

    #[test]
    fn test_single_day_trip_is_permitted() {
        let trip = trip(1, 1);
        assert_eq!(trip.days().len(), 1);
        assert_eq!(trip.duration_days(), 1);
    }

    #[test]
    fn test_validation() {
        let budget = || Budget::new(Money::from_lira(100)).unwrap();
        let start = date(3).and_hms_opt(9, 0, 0).unwrap();
        let end = date(1).and_hms_opt(18, 0, 0).unwrap();

        assert!(Trip::new("  ", end, start, budget()).is_err());
        assert!(Trip::new("Trip", start, end, budget()).is_err());
    }

    #[test]
    fn test_add_activity_to_existing_day() {
        let mut trip = trip(1, 3);
        trip.add_activity_to_day(date(2), sightseeing(2, 17));

        assert_eq!(trip.day_by_date(date(2)).unwrap().activity_count(), 1);
        assert_eq!(trip.days().len(), 3);
        assert_eq!(trip.total_cost(), Money::from_lira(17));
    }

    #[test]
    fn test_add_activity_outside_span_creates_sorted_day() {
        let mut trip = trip(2, 3);
        trip.add_activity_to_day(date(1), sightseeing(1, 20));

        let dates: Vec<_> = trip.days().iter().map(ItineraryDay::date).collect();
        assert_eq!(dates, [date(1), date(2), date(3)]);
        assert_eq!(trip.total_cost(), Money::from_lira(20));
    }

    #[test]
    fn test_add_itinerary_day_ignores_duplicate_date() {
        let mut trip = trip(1, 2);
        trip.add_itinerary_day(ItineraryDay::new(date(2)));
        assert_eq!(trip.days().len(), 2);
    }

    #[test]
    fn test_status_is_an_unguarded_label() {
        let mut trip = trip(1, 2);
        trip.set_status(TripStatus::Completed);
        trip.set_status(TripStatus::Planning);
        trip.set_status(TripStatus::Cancelled);
        assert_eq!(trip.status(), TripStatus::Cancelled);
    }

    #[test]
    fn test_export_total_matches_total_cost() {
        let mut trip = trip(1, 3);
        trip.add_activity_to_day(date(1), sightseeing(1, 17));
        trip.add_activity_to_day(date(2), sightseeing(2, 24));

        let text = trip.export_to_text();
        assert!(text.contains(&format!("TOTAL COST: {}", trip.total_cost())));
        assert!(text.contains("Dates        : 01.06.2025 - 03.06.2025 (3 days)"));
        // deterministic: same state renders the same bytes
        assert_eq!(text, trip.export_to_text());
    }

    #[test]
    fn test_export_includes_destination_when_set() {
        let mut trip = trip(1, 2);
        trip.set_destination(City::paris());
        assert!(trip.export_to_text().contains("Destination  : Paris, France"));
        assert!(trip.to_string().contains("→ Paris"));
    }

    #[test]
    fn test_required_visa_by_trip_type() {
        assert_eq!(TripType::Domestic.required_visa(), None);
        assert_eq!(TripType::Europe.required_visa(), Some(VisaTag::Schengen));
        assert_eq!(TripType::Usa.required_visa(), Some(VisaTag::Us));
    }
}
