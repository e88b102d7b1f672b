//! Trip planning service
//!
//! The multi-step admission flow that turns a planning request into a
//! registered trip: date-range gate, budget, trip construction, transport
//! and accommodation admission, and only then registration with the user.
//! Failure at any step leaves the user untouched; the partially built trip
//! is simply dropped.

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    Accommodation, Activity, Attraction, Budget, City, ExpenseCategory, Money, TransportOption,
    Trip, TripId, TripStatus, TripType, User,
};

const TRIP_DAY_STARTS: (u32, u32) = (9, 0);
const TRIP_DAY_ENDS: (u32, u32) = (18, 0);

/// Orchestrates trip creation and incremental activity admission
#[derive(Debug, Default)]
pub struct TripPlannerService;

impl TripPlannerService {
    pub fn new() -> Self {
        Self
    }

    /// Date-range gate applied before any trip or budget is built
    ///
    /// Stricter than `Trip::new`: a start in the past is rejected, and so
    /// is a same-day range (a trip must span at least one full day).
    pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> PlannerResult<()> {
        let today = Local::now().date_naive();
        if start < today {
            return Err(PlannerError::InvalidDate(format!(
                "{} - Cannot select a past date",
                start
            )));
        }
        if end < start {
            return Err(PlannerError::InvalidDate(format!(
                "{} - End date cannot be before start date",
                end
            )));
        }
        if end == start {
            return Err(PlannerError::InvalidDate(format!(
                "{} - Trip must be at least 1 day",
                end
            )));
        }
        Ok(())
    }

    /// The visa gate: international trip types need an approved application
    pub fn ensure_visa_approved(&self, user: &User, trip_type: TripType) -> PlannerResult<()> {
        match trip_type.required_visa() {
            Some(tag) if !user.has_approved_visa(Some(tag)) => {
                warn!(trip_type = %trip_type, visa = %tag, "visa gate refused planning");
                Err(PlannerError::VisaNotApproved(tag))
            }
            _ => Ok(()),
        }
    }

    /// Plan a trip with one transport leg and one stay, then register it
    ///
    /// The transport activity is anchored at the start instant; the
    /// accommodation activity spans the whole trip window; both land on the
    /// first itinerary day and both must pass budget admission. Nothing is
    /// registered with the user unless every step succeeds.
    #[allow(clippy::too_many_arguments)]
    pub fn plan_trip(
        &self,
        user: &mut User,
        name: &str,
        budget_limit: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
        transport: &TransportOption,
        accommodation: &Accommodation,
    ) -> PlannerResult<TripId> {
        Self::validate_date_range(start_date, end_date)?;

        let budget = Budget::new(budget_limit)?;
        let start = Self::at(start_date, TRIP_DAY_STARTS);
        let end = Self::at(end_date, TRIP_DAY_ENDS);
        let mut trip = Trip::new(name, start, end, budget)?;

        let transport_activity = Activity::transport(start, transport)?;
        trip.budget_mut().add_expense(
            transport_activity.cost(),
            format!("Transport: {}", transport.route()),
            ExpenseCategory::Transport,
        )?;
        trip.add_activity_to_day(start_date, transport_activity);

        let stay = Activity::stay(start, end, accommodation)?;
        trip.budget_mut().add_expense(
            stay.cost(),
            format!("Accommodation: {}", accommodation.name()),
            ExpenseCategory::Accommodation,
        )?;
        trip.add_activity_to_day(start_date, stay);

        let id = trip.id();
        info!(
            trip = %trip.name(),
            spent = %trip.budget().current_spending(),
            remaining = %trip.budget().remaining(),
            "trip plan created"
        );
        user.add_trip(trip);
        Ok(id)
    }

    fn at(date: NaiveDate, (hour, minute): (u32, u32)) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0)
            .expect("fixed trip hours are valid")
    }

    /// Admit one sightseeing visit: pre-check affordability, then record
    /// the expense and attach the activity. Rejection leaves the trip and
    /// its budget exactly as before.
    pub fn add_sightseeing(
        &self,
        trip: &mut Trip,
        attraction: &Attraction,
        start: NaiveDateTime,
        duration_hours: u32,
    ) -> PlannerResult<()> {
        let activity = Activity::sightseeing(start, duration_hours, attraction)?;
        let cost = activity.cost();

        if !trip.budget().can_afford(cost) {
            warn!(attraction = attraction.name(), cost = %cost, "insufficient budget");
            return Err(PlannerError::BudgetExceeded {
                attempted: cost,
                remaining: trip.budget().remaining(),
            });
        }

        // Free attractions book no ledger line
        if cost.is_positive() {
            trip.budget_mut().add_expense(
                cost,
                format!("Sightseeing: {}", attraction.name()),
                ExpenseCategory::Sightseeing,
            )?;
        }
        trip.add_activity_to_day(start.date(), activity);

        info!(
            attraction = attraction.name(),
            cost = %cost,
            remaining = %trip.budget().remaining(),
            "activity added"
        );
        Ok(())
    }

    pub fn set_destination(&self, trip: &mut Trip, destination: City) {
        info!(destination = %destination.full_name(), "destination set");
        trip.set_destination(destination);
    }

    pub fn confirm_trip(&self, trip: &mut Trip) {
        trip.set_status(TripStatus::Confirmed);
        info!(trip = %trip.name(), "trip confirmed");
    }

    pub fn cancel_trip(&self, trip: &mut Trip) {
        trip.set_status(TripStatus::Cancelled);
        info!(trip = %trip.name(), "trip cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, VisaApplication, VisaKind, VisaStatus, VisaTag};
    use chrono::Duration;

    fn user() -> User {
        User::new(Profile::new("Ada Demir", "ada@example.com").unwrap())
    }

    fn future(days: i64) -> NaiveDate {
        Local::now().date_naive() + Duration::days(days)
    }

    fn bus(fare_lira: i64) -> TransportOption {
        TransportOption::bus("Istanbul", "Ankara", Money::from_lira(fare_lira)).unwrap()
    }

    fn hostel(nightly_lira: i64, nights: u32) -> Accommodation {
        Accommodation::hostel("Backpacker", Money::from_lira(nightly_lira), nights, false, 6)
            .unwrap()
    }

    #[test]
    fn test_date_range_gate() {
        let past = Local::now().date_naive() - Duration::days(1);
        assert!(matches!(
            TripPlannerService::validate_date_range(past, future(3)),
            Err(PlannerError::InvalidDate(_))
        ));
        assert!(matches!(
            TripPlannerService::validate_date_range(future(5), future(3)),
            Err(PlannerError::InvalidDate(_))
        ));
        // same-day is rejected here even though Trip::new permits it
        assert!(matches!(
            TripPlannerService::validate_date_range(future(3), future(3)),
            Err(PlannerError::InvalidDate(_))
        ));
        assert!(TripPlannerService::validate_date_range(future(3), future(5)).is_ok());
    }

    #[test]
    fn test_plan_trip_registers_on_success() {
        let planner = TripPlannerService::new();
        let mut u = user();

        let id = planner
            .plan_trip(
                &mut u,
                "Ankara Run",
                Money::from_lira(10_000),
                future(5),
                future(7),
                &bus(1000),
                &hostel(400, 2),
            )
            .unwrap();

        assert_eq!(u.trip_count(), 1);
        let trip = u.trip(id).unwrap();
        // bus 1000 + hostel 800
        assert_eq!(trip.budget().current_spending(), Money::from_lira(1800));
        assert_eq!(trip.total_cost(), Money::from_lira(1800));
        // both activities land on the first day
        assert_eq!(trip.day_by_date(future(5)).unwrap().activity_count(), 2);
        assert_eq!(trip.duration_days(), 3);
    }

    #[test]
    fn test_plan_trip_fail_fast_leaves_user_untouched() {
        let planner = TripPlannerService::new();
        let mut u = user();

        // cap 1000: transport 600 fits, accommodation 600 does not
        let err = planner
            .plan_trip(
                &mut u,
                "Overbooked",
                Money::from_lira(1000),
                future(5),
                future(7),
                &bus(600),
                &hostel(300, 2),
            )
            .unwrap_err();

        assert_eq!(
            err,
            PlannerError::BudgetExceeded {
                attempted: Money::from_lira(600),
                remaining: Money::from_lira(400),
            }
        );
        assert_eq!(u.trip_count(), 0);
    }

    #[test]
    fn test_plan_trip_rejects_same_day_range() {
        let planner = TripPlannerService::new();
        let mut u = user();
        let err = planner
            .plan_trip(
                &mut u,
                "Day Trip",
                Money::from_lira(1000),
                future(5),
                future(5),
                &bus(100),
                &hostel(100, 1),
            )
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidDate(_)));
        assert_eq!(u.trip_count(), 0);
    }

    #[test]
    fn test_visa_gate() {
        let planner = TripPlannerService::new();
        let mut u = user();

        assert!(planner.ensure_visa_approved(&u, TripType::Domestic).is_ok());
        assert_eq!(
            planner.ensure_visa_approved(&u, TripType::Europe).unwrap_err(),
            PlannerError::VisaNotApproved(VisaTag::Schengen)
        );

        let mut app = VisaApplication::new(VisaKind::schengen("France"), "Ada Demir").unwrap();
        app.set_status(VisaStatus::Approved);
        u.add_visa_application(app);

        assert!(planner.ensure_visa_approved(&u, TripType::Europe).is_ok());
        assert!(planner.ensure_visa_approved(&u, TripType::Usa).is_err());
    }

    #[test]
    fn test_add_sightseeing_books_expense_and_activity() {
        let planner = TripPlannerService::new();
        let mut u = user();
        let id = planner
            .plan_trip(
                &mut u,
                "Ankara Run",
                Money::from_lira(3000),
                future(5),
                future(7),
                &bus(1000),
                &hostel(400, 2),
            )
            .unwrap();

        let trip = u.trip_mut(id).unwrap();
        let museum = Attraction::new("Museum", "History", Money::from_lira(100), 2);
        let start = future(6).and_hms_opt(10, 0, 0).unwrap();

        planner.add_sightseeing(trip, &museum, start, 2).unwrap();

        assert_eq!(trip.budget().current_spending(), Money::from_lira(1900));
        assert_eq!(trip.day_by_date(future(6)).unwrap().activity_count(), 1);
    }

    #[test]
    fn test_add_sightseeing_rejection_is_atomic() {
        let planner = TripPlannerService::new();
        let mut u = user();
        let id = planner
            .plan_trip(
                &mut u,
                "Ankara Run",
                Money::from_lira(2000),
                future(5),
                future(7),
                &bus(1000),
                &hostel(400, 2),
            )
            .unwrap();

        let trip = u.trip_mut(id).unwrap();
        let pricey = Attraction::new("Opera", "Gala night", Money::from_lira(500), 3);
        let start = future(6).and_hms_opt(20, 0, 0).unwrap();

        let err = planner.add_sightseeing(trip, &pricey, start, 3).unwrap_err();
        assert_eq!(
            err,
            PlannerError::BudgetExceeded {
                attempted: Money::from_lira(500),
                remaining: Money::from_lira(200),
            }
        );
        // no expense recorded, no activity attached
        assert_eq!(trip.budget().current_spending(), Money::from_lira(1800));
        assert!(trip.day_by_date(future(6)).unwrap().is_empty());
    }

    #[test]
    fn test_free_attraction_attaches_without_ledger_line() {
        let planner = TripPlannerService::new();
        let mut u = user();
        let id = planner
            .plan_trip(
                &mut u,
                "Ankara Run",
                Money::from_lira(2000),
                future(5),
                future(7),
                &bus(1000),
                &hostel(400, 2),
            )
            .unwrap();

        let trip = u.trip_mut(id).unwrap();
        let park = Attraction::new("City Park", "Green", Money::zero(), 1);
        let start = future(6).and_hms_opt(9, 0, 0).unwrap();

        planner.add_sightseeing(trip, &park, start, 1).unwrap();

        assert_eq!(trip.budget().current_spending(), Money::from_lira(1800));
        assert_eq!(trip.day_by_date(future(6)).unwrap().activity_count(), 1);
    }

    #[test]
    fn test_status_helpers() {
        let planner = TripPlannerService::new();
        let mut u = user();
        let id = planner
            .plan_trip(
                &mut u,
                "Ankara Run",
                Money::from_lira(3000),
                future(5),
                future(7),
                &bus(1000),
                &hostel(400, 2),
            )
            .unwrap();

        let trip = u.trip_mut(id).unwrap();
        planner.confirm_trip(trip);
        assert_eq!(trip.status(), TripStatus::Confirmed);
        planner.cancel_trip(trip);
        assert_eq!(trip.status(), TripStatus::Cancelled);

        planner.set_destination(trip, City::paris());
        assert_eq!(trip.destination().unwrap().name(), "Paris");
    }
}
