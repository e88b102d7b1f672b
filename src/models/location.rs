//! Destinations: countries, cities, attractions

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Visa regime a country falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisaRegime {
    None,
    Schengen,
    Us,
    Other,
}

impl VisaRegime {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "No Visa Required",
            Self::Schengen => "Schengen Visa",
            Self::Us => "US Visa",
            Self::Other => "Other Visa",
        }
    }
}

/// A country with its visa regime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    name: String,
    code: String,
    visa_regime: VisaRegime,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>, visa_regime: VisaRegime) -> Self {
        Self {
            name: name.into(),
            code: code.into().to_uppercase(),
            visa_regime,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn visa_regime(&self) -> VisaRegime {
        self.visa_regime
    }

    pub fn requires_visa(&self) -> bool {
        self.visa_regime != VisaRegime::None
    }

    pub fn turkey() -> Self {
        Self::new("Turkey", "TR", VisaRegime::None)
    }

    pub fn france() -> Self {
        Self::new("France", "FR", VisaRegime::Schengen)
    }

    pub fn italy() -> Self {
        Self::new("Italy", "IT", VisaRegime::Schengen)
    }

    pub fn usa() -> Self {
        Self::new("United States of America", "US", VisaRegime::Us)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// A sightseeing stop with a deterministic entry fee
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attraction {
    name: String,
    description: String,
    entry_fee: Money,
    estimated_hours: u32,
}

impl Attraction {
    /// Negative fees clamp to free, zero-hour visits clamp to one hour
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        entry_fee: Money,
        estimated_hours: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            entry_fee: if entry_fee.is_negative() {
                Money::zero()
            } else {
                entry_fee
            },
            estimated_hours: estimated_hours.max(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn entry_fee(&self) -> Money {
        self.entry_fee
    }

    pub fn estimated_hours(&self) -> u32 {
        self.estimated_hours
    }

    pub fn is_free(&self) -> bool {
        self.entry_fee.is_zero()
    }
}

impl fmt::Display for Attraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fee = if self.is_free() {
            "Free".to_string()
        } else {
            self.entry_fee.to_string()
        };
        write!(
            f,
            "{} - {} ({}, ~{} hours)",
            self.name, self.description, fee, self.estimated_hours
        )
    }
}

/// A destination city with its headline attractions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    name: String,
    country: Country,
    attractions: Vec<Attraction>,
}

impl City {
    pub fn new(name: impl Into<String>, country: Country) -> Self {
        Self {
            name: name.into(),
            country,
            attractions: Vec::new(),
        }
    }

    pub fn add_attraction(&mut self, attraction: Attraction) {
        self.attractions.push(attraction);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// "Paris, France"
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.name, self.country.name())
    }

    pub fn paris() -> Self {
        let mut city = Self::new("Paris", Country::france());
        city.add_attraction(Attraction::new(
            "Eiffel Tower",
            "City landmark",
            Money::from_lira(28),
            3,
        ));
        city.add_attraction(Attraction::new(
            "Louvre Museum",
            "World-famous art museum",
            Money::from_lira(17),
            4,
        ));
        city
    }

    pub fn rome() -> Self {
        let mut city = Self::new("Rome", Country::italy());
        city.add_attraction(Attraction::new(
            "Colosseum",
            "Ancient Roman amphitheater",
            Money::from_lira(16),
            2,
        ));
        city.add_attraction(Attraction::new(
            "Vatican",
            "Religious and cultural center",
            Money::from_lira(20),
            4,
        ));
        city
    }

    pub fn new_york() -> Self {
        let mut city = Self::new("New York", Country::usa());
        city.add_attraction(Attraction::new(
            "Statue of Liberty",
            "Symbol of America",
            Money::from_lira(24),
            3,
        ));
        city.add_attraction(Attraction::new(
            "Central Park",
            "Giant city park",
            Money::zero(),
            2,
        ));
        city
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
