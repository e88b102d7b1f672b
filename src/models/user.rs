//! Users, profiles, and travel preferences
//!
//! The user is the aggregate root: it owns trips (de-duplicated by id),
//! visa applications (append-only), and preferences (de-duplicated
//! case-insensitively by tag).

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{PlannerError, PlannerResult};

use super::ids::TripId;
use super::money::Money;
use super::trip::Trip;
use super::visa::{VisaApplication, VisaStatus, VisaTag};

/// Contact and identity details
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    full_name: String,
    email: String,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
    nationality: String,
}

impl Profile {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> PlannerResult<Self> {
        let full_name = full_name.into().trim().to_string();
        if full_name.is_empty() {
            return Err(PlannerError::InvalidArgument("Name cannot be empty".into()));
        }
        let email = email.into().trim().to_lowercase();
        if !email.contains('@') {
            return Err(PlannerError::InvalidArgument(
                "A valid email address is required".into(),
            ));
        }
        Ok(Self {
            full_name,
            email,
            phone: None,
            birth_date: None,
            nationality: "TR".into(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = Some(birth_date);
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn set_nationality(&mut self, nationality: impl Into<String>) {
        self.nationality = nationality.into();
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.email)
    }
}

/// Interest bucket a preference falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreferenceCategory {
    Culture,
    Nature,
    Beach,
    City,
    Food,
    Nightlife,
    Relaxation,
    Sports,
}

impl PreferenceCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Culture => "Culture & History",
            Self::Nature => "Nature & Adventure",
            Self::Beach => "Beach & Sea",
            Self::City => "City & Shopping",
            Self::Food => "Gastronomy",
            Self::Nightlife => "Nightlife",
            Self::Relaxation => "Relaxation & SPA",
            Self::Sports => "Sports & Activities",
        }
    }
}

/// A tagged travel preference with a 1-5 priority
///
/// Equality and hashing go through the normalized tag (trimmed, lowercased)
/// so "Museums" and " museums " are the same preference.
#[derive(Debug, Clone, Serialize)]
pub struct Preference {
    tag: String,
    category: PreferenceCategory,
    priority: u8,
}

impl Preference {
    pub fn new(
        tag: impl Into<String>,
        category: PreferenceCategory,
        priority: u8,
    ) -> PlannerResult<Self> {
        let tag = tag.into().trim().to_string();
        if tag.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Preference tag cannot be empty".into(),
            ));
        }
        Ok(Self {
            tag,
            category,
            priority: priority.clamp(1, 5),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn category(&self) -> PreferenceCategory {
        self.category
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: u8) {
        self.priority = priority.clamp(1, 5);
    }

    /// Normalized dedup key
    fn key(&self) -> String {
        self.tag.trim().to_lowercase()
    }
}

impl PartialEq for Preference {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Preference {}

impl Hash for Preference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] (Priority: {})",
            self.tag,
            self.category.display_name(),
            self.priority
        )
    }
}

/// Aggregate root owning trips, visa applications, and preferences
#[derive(Debug, Serialize)]
pub struct User {
    profile: Profile,
    preferences: Vec<Preference>,
    trips: Vec<Trip>,
    visa_applications: Vec<VisaApplication>,
}

impl User {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            preferences: Vec::new(),
            trips: Vec::new(),
            visa_applications: Vec::new(),
        }
    }

    /// Register a trip; a trip already registered (same id) is ignored
    pub fn add_trip(&mut self, trip: Trip) {
        if self.trips.iter().any(|t| t.id() == trip.id()) {
            return;
        }
        self.trips.push(trip);
    }

    pub fn remove_trip(&mut self, id: TripId) -> Option<Trip> {
        let index = self.trips.iter().position(|t| t.id() == id)?;
        Some(self.trips.remove(index))
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id() == id)
    }

    pub fn trip_mut(&mut self, id: TripId) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id() == id)
    }

    pub fn trip_by_name(&self, name: &str) -> Option<&Trip> {
        self.trips
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// File a visa application; the list is append-only
    pub fn add_visa_application(&mut self, application: VisaApplication) {
        self.visa_applications.push(application);
    }

    pub fn visa_applications(&self) -> &[VisaApplication] {
        &self.visa_applications
    }

    pub fn visa_application_mut(&mut self, index: usize) -> Option<&mut VisaApplication> {
        self.visa_applications.get_mut(index)
    }

    /// Does any application of this kind carry the Approved label?
    ///
    /// `None` means the trip needs no visa, which always passes.
    pub fn has_approved_visa(&self, required: Option<VisaTag>) -> bool {
        match required {
            None => true,
            Some(tag) => self
                .visa_applications
                .iter()
                .any(|a| a.kind().tag() == tag && a.status() == VisaStatus::Approved),
        }
    }

    /// Add a preference unless an equal (case-insensitive) tag exists
    pub fn add_preference(&mut self, preference: Preference) {
        if !self.preferences.contains(&preference) {
            self.preferences.push(preference);
        }
    }

    pub fn remove_preference(&mut self, tag: &str) -> bool {
        let key = tag.trim().to_lowercase();
        let before = self.preferences.len();
        self.preferences.retain(|p| p.key() != key);
        self.preferences.len() != before
    }

    pub fn has_preference(&self, tag: &str) -> bool {
        let key = tag.trim().to_lowercase();
        self.preferences.iter().any(|p| p.key() == key)
    }

    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        self.profile.full_name()
    }

    /// Lira spent across every registered trip's budget
    pub fn total_spending(&self) -> Money {
        self.trips.iter().map(|t| t.budget().current_spending()).sum()
    }

    /// Deterministic text projection of the profile and holdings
    pub fn summary(&self) -> String {
        use crate::display::report::{double_separator, separator};

        let mut out = String::new();
        out.push_str(&double_separator(39));
        out.push('\n');
        out.push_str("         USER PROFILE\n");
        out.push_str(&double_separator(39));
        out.push('\n');
        out.push_str(&format!("Full Name  : {}\n", self.profile.full_name()));
        out.push_str(&format!("Email      : {}\n", self.profile.email()));
        out.push_str(&separator(39));
        out.push('\n');
        out.push_str(&format!("Trips      : {} total\n", self.trips.len()));
        out.push_str(&format!(
            "Visa Apps  : {} total\n",
            self.visa_applications.len()
        ));
        out.push_str("Preferences: ");
        if self.preferences.is_empty() {
            out.push_str("(Not specified)\n");
        } else {
            out.push('\n');
            for preference in &self.preferences {
                out.push_str(&format!("  • {}\n", preference.tag()));
            }
        }
        out.push_str(&double_separator(39));
        out
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User: {} | Trips: {} | Preferences: {}",
            self.profile.full_name(),
            self.trips.len(),
            self.preferences.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::Budget;
    use crate::models::visa::VisaKind;

    fn user() -> User {
        User::new(Profile::new("Ada Demir", "Ada@Example.com").unwrap())
    }

    fn trip(name: &str) -> Trip {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 3)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        Trip::new(name, start, end, Budget::new(Money::from_lira(1000)).unwrap()).unwrap()
    }

    #[test]
    fn test_profile_validation_and_normalization() {
        assert!(Profile::new("", "a@b.c").is_err());
        assert!(Profile::new("Ada", "not-an-email").is_err());

        let profile = Profile::new(" Ada Demir ", " Ada@Example.COM ").unwrap();
        assert_eq!(profile.full_name(), "Ada Demir");
        assert_eq!(profile.email(), "ada@example.com");
        assert_eq!(profile.nationality(), "TR");
    }

    #[test]
    fn test_trips_dedup_by_id() {
        let mut u = user();
        let t = trip("Paris");
        let id = t.id();
        u.add_trip(t.clone());
        u.add_trip(t);
        assert_eq!(u.trip_count(), 1);
        assert!(u.trip(id).is_some());
    }

    #[test]
    fn test_trip_by_name_is_case_insensitive() {
        let mut u = user();
        u.add_trip(trip("Paris Getaway"));
        assert!(u.trip_by_name("paris getaway").is_some());
        assert!(u.trip_by_name("rome").is_none());
    }

    #[test]
    fn test_remove_trip() {
        let mut u = user();
        let t = trip("Paris");
        let id = t.id();
        u.add_trip(t);

        assert!(u.remove_trip(id).is_some());
        assert_eq!(u.trip_count(), 0);
        assert!(u.remove_trip(id).is_none());
    }

    #[test]
    fn test_preference_dedup_is_case_insensitive() {
        let mut u = user();
        u.add_preference(Preference::new("Museums", PreferenceCategory::Culture, 4).unwrap());
        u.add_preference(Preference::new(" museums ", PreferenceCategory::Culture, 2).unwrap());

        assert_eq!(u.preferences().len(), 1);
        assert!(u.has_preference("MUSEUMS"));
        // the first upload wins
        assert_eq!(u.preferences()[0].priority(), 4);
    }

    #[test]
    fn test_preference_priority_clamped() {
        let p = Preference::new("Beaches", PreferenceCategory::Beach, 9).unwrap();
        assert_eq!(p.priority(), 5);
        let p = Preference::new("Beaches", PreferenceCategory::Beach, 0).unwrap();
        assert_eq!(p.priority(), 1);
    }

    #[test]
    fn test_remove_preference() {
        let mut u = user();
        u.add_preference(Preference::new("Museums", PreferenceCategory::Culture, 3).unwrap());
        assert!(u.remove_preference(" MUSEUMS "));
        assert!(!u.remove_preference("museums"));
    }

    #[test]
    fn test_visa_lookup_requires_approved_status() {
        let mut u = user();
        assert!(u.has_approved_visa(None));
        assert!(!u.has_approved_visa(Some(VisaTag::Schengen)));

        let mut app = VisaApplication::new(VisaKind::schengen("France"), "Ada Demir").unwrap();
        app.set_status(VisaStatus::Submitted);
        u.add_visa_application(app);
        // submitted is not approved
        assert!(!u.has_approved_visa(Some(VisaTag::Schengen)));

        let mut approved = VisaApplication::new(VisaKind::schengen("France"), "Ada Demir").unwrap();
        approved.set_status(VisaStatus::Approved);
        u.add_visa_application(approved);
        assert!(u.has_approved_visa(Some(VisaTag::Schengen)));
        assert!(!u.has_approved_visa(Some(VisaTag::Us)));
    }

    #[test]
    fn test_total_spending_spans_trips() {
        let mut u = user();
        let mut t1 = trip("Paris");
        t1.budget_mut()
            .add_expense(
                Money::from_lira(300),
                "Train",
                crate::models::expense::ExpenseCategory::Transport,
            )
            .unwrap();
        u.add_trip(t1);
        u.add_trip(trip("Rome"));

        assert_eq!(u.total_spending(), Money::from_lira(300));
    }

    #[test]
    fn test_summary_lists_preferences() {
        let mut u = user();
        u.add_preference(Preference::new("Museums", PreferenceCategory::Culture, 3).unwrap());
        let text = u.summary();
        assert!(text.contains("Full Name  : Ada Demir"));
        assert!(text.contains("• Museums"));
    }
}
