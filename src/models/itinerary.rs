//! Itinerary days
//!
//! One calendar date's ordered schedule. Activities are kept sorted by
//! start time; the daily cost is recomputed on demand so it is always
//! consistent with current membership.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::activity::Activity;
use super::ids::ActivityId;
use super::money::Money;

/// A single day's schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryDay {
    date: NaiveDate,
    activities: Vec<Activity>,
    note: String,
}

impl ItineraryDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            activities: Vec::new(),
            note: String::new(),
        }
    }

    /// Insert an activity, keeping the schedule sorted by start time
    ///
    /// The sort is stable: activities sharing a start time stay in
    /// insertion order.
    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
        self.activities.sort_by_key(Activity::start);
    }

    /// Remove an activity by identity; returns it when present
    pub fn remove_activity(&mut self, id: ActivityId) -> Option<Activity> {
        let index = self.activities.iter().position(|a| a.id() == id)?;
        Some(self.activities.remove(index))
    }

    /// Sum of the scheduled activities' costs, recomputed on demand
    pub fn daily_cost(&self) -> Money {
        self.activities.iter().map(Activity::cost).sum()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Snapshot of the day's schedule
    pub fn activities(&self) -> Vec<Activity> {
        self.activities.clone()
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }
}

impl fmt::Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date.format("%d %B %Y, %A"))?;

        if self.activities.is_empty() {
            writeln!(f, "   (No activities planned)")?;
        } else {
            for activity in &self.activities {
                writeln!(f, "   • {}", activity)?;
            }
            writeln!(f, "   ─────────────────────────")?;
            writeln!(f, "   Daily Total: {}", self.daily_cost())?;
        }

        if !self.note.is_empty() {
            writeln!(f, "   Note: {}", self.note)?;
        }

        Ok(())
    }
}
