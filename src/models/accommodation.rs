//! Accommodation options
//!
//! A closed set of priced stays. Hotels and apartments add a flat service
//! or cleaning fee on top of the nightly total; hostels charge a premium
//! for a private room.

use serde::Serialize;
use std::fmt;

use crate::error::{PlannerError, PlannerResult};

use super::money::Money;
use super::pricing::{PriceRange, PriceSource};

const HOTEL_SERVICE_FEE: Money = Money::from_lira(200);
const APARTMENT_CLEANING_FEE: Money = Money::from_lira(350);
const PRIVATE_ROOM_MULTIPLIER: f64 = 1.5;

/// Market nightly-rate bands for default-priced construction
pub const HOTEL_RATES: PriceRange = PriceRange::lira(2000, 8000);
pub const APARTMENT_RATES: PriceRange = PriceRange::lira(1500, 5000);
pub const HOSTEL_RATES: PriceRange = PriceRange::lira(300, 1000);

/// A priced stay for a fixed number of nights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Accommodation {
    Hotel {
        name: String,
        nightly_rate: Money,
        nights: u32,
        stars: u8,
        breakfast: bool,
    },
    Apartment {
        name: String,
        nightly_rate: Money,
        nights: u32,
        bedrooms: u8,
        kitchen: bool,
    },
    Hostel {
        name: String,
        nightly_rate: Money,
        nights: u32,
        private_room: bool,
        beds: u8,
    },
}

impl Accommodation {
    pub fn hotel(
        name: impl Into<String>,
        nightly_rate: Money,
        nights: u32,
        stars: u8,
        breakfast: bool,
    ) -> PlannerResult<Self> {
        let (name, nightly_rate) = Self::admit(name, nightly_rate, nights)?;
        Ok(Self::Hotel {
            name,
            nightly_rate,
            nights,
            stars: stars.clamp(1, 5),
            breakfast,
        })
    }

    /// Four-star hotel with breakfast, priced from the market band
    pub fn hotel_at_market(nights: u32, prices: &mut dyn PriceSource) -> PlannerResult<Self> {
        Self::hotel("Standard Hotel", prices.sample(HOTEL_RATES), nights, 4, true)
    }

    pub fn apartment(
        name: impl Into<String>,
        nightly_rate: Money,
        nights: u32,
        bedrooms: u8,
        kitchen: bool,
    ) -> PlannerResult<Self> {
        let (name, nightly_rate) = Self::admit(name, nightly_rate, nights)?;
        Ok(Self::Apartment {
            name,
            nightly_rate,
            nights,
            bedrooms: bedrooms.max(1),
            kitchen,
        })
    }

    pub fn apartment_at_market(nights: u32, prices: &mut dyn PriceSource) -> PlannerResult<Self> {
        Self::apartment(
            "Standard Apartment",
            prices.sample(APARTMENT_RATES),
            nights,
            2,
            true,
        )
    }

    pub fn hostel(
        name: impl Into<String>,
        nightly_rate: Money,
        nights: u32,
        private_room: bool,
        beds: u8,
    ) -> PlannerResult<Self> {
        let (name, nightly_rate) = Self::admit(name, nightly_rate, nights)?;
        Ok(Self::Hostel {
            name,
            nightly_rate,
            nights,
            private_room,
            beds: if private_room { 1 } else { beds.max(2) },
        })
    }

    pub fn hostel_at_market(nights: u32, prices: &mut dyn PriceSource) -> PlannerResult<Self> {
        Self::hostel("Standard Hostel", prices.sample(HOSTEL_RATES), nights, false, 6)
    }

    fn admit(
        name: impl Into<String>,
        nightly_rate: Money,
        nights: u32,
    ) -> PlannerResult<(String, Money)> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Accommodation name cannot be empty".into(),
            ));
        }
        if nightly_rate.is_negative() {
            return Err(PlannerError::InvalidArgument(
                "Nightly rate cannot be negative".into(),
            ));
        }
        if nights < 1 {
            return Err(PlannerError::InvalidArgument(
                "Stay must be at least 1 night".into(),
            ));
        }
        Ok((name, nightly_rate))
    }

    /// Total price of the stay, rounded to the kuruş
    pub fn total_price(&self) -> Money {
        let nightly_total = self.nightly_rate().scale(self.nights() as f64);
        match self {
            Self::Hotel { .. } => nightly_total + HOTEL_SERVICE_FEE,
            Self::Apartment { .. } => nightly_total + APARTMENT_CLEANING_FEE,
            Self::Hostel { private_room, .. } => {
                if *private_room {
                    nightly_total.scale(PRIVATE_ROOM_MULTIPLIER)
                } else {
                    nightly_total
                }
            }
        }
    }

    /// Fees charged on top of the nightly total
    pub fn extra_fees(&self) -> Money {
        match self {
            Self::Hotel { .. } => HOTEL_SERVICE_FEE,
            Self::Apartment { .. } => APARTMENT_CLEANING_FEE,
            Self::Hostel { .. } => Money::zero(),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Self::Hotel { stars, .. } => format!("{}-star Hotel", stars),
            Self::Apartment { .. } => "Apartment".into(),
            Self::Hostel { private_room: true, .. } => "Hostel (Private Room)".into(),
            Self::Hostel { private_room: false, .. } => "Hostel (Dormitory)".into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Hotel { name, .. } | Self::Apartment { name, .. } | Self::Hostel { name, .. } => {
                name
            }
        }
    }

    pub fn nightly_rate(&self) -> Money {
        match self {
            Self::Hotel { nightly_rate, .. }
            | Self::Apartment { nightly_rate, .. }
            | Self::Hostel { nightly_rate, .. } => *nightly_rate,
        }
    }

    pub fn nights(&self) -> u32 {
        match self {
            Self::Hotel { nights, .. }
            | Self::Apartment { nights, .. }
            | Self::Hostel { nights, .. } => *nights,
        }
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} nights × {} = {})",
            self.type_name(),
            self.name(),
            self.nights(),
            self.nightly_rate(),
            self.total_price()
        )
    }
}
