//! Transport options
//!
//! A closed set of priced transport legs. Each variant computes its total
//! cost from its own fields: flights add a fixed baggage fee and an 18% tax
//! on the base fare, trains scale by seating class, buses ride on the base
//! fare alone.

use serde::Serialize;
use std::fmt;

use crate::error::{PlannerError, PlannerResult};

use super::money::Money;
use super::pricing::{PriceRange, PriceSource};

const BAGGAGE_FEE: Money = Money::from_lira(500);
const FLIGHT_TAX_RATE: f64 = 0.18;

/// Market fare bands for default-priced construction
pub const FLIGHT_FARES: PriceRange = PriceRange::lira(3000, 8000);
pub const BUS_FARES: PriceRange = PriceRange::lira(800, 2000);
pub const TRAIN_FARES: PriceRange = PriceRange::lira(600, 1500);

/// A departure/arrival pair; both ends are trimmed and non-blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    from: String,
    to: String,
}

impl Route {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> PlannerResult<Self> {
        let from = from.into().trim().to_string();
        let to = to.into().trim().to_string();
        if from.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Departure location cannot be empty".into(),
            ));
        }
        if to.is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Arrival location cannot be empty".into(),
            ));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Train seating class; the fare multiplier is part of the fare contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrainClass {
    Economy,
    Business,
    First,
}

impl TrainClass {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Economy => 1.0,
            Self::Business => 1.5,
            Self::First => 2.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
            Self::First => "First Class",
        }
    }
}

/// A priced transport leg
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransportOption {
    Flight {
        route: Route,
        base_fare: Money,
        direct: bool,
    },
    Bus {
        route: Route,
        base_fare: Money,
    },
    Train {
        route: Route,
        base_fare: Money,
        class: TrainClass,
    },
}

impl TransportOption {
    pub fn flight(
        from: impl Into<String>,
        to: impl Into<String>,
        base_fare: Money,
        direct: bool,
    ) -> PlannerResult<Self> {
        Ok(Self::Flight {
            route: Route::new(from, to)?,
            base_fare: Self::admit_fare(base_fare)?,
            direct,
        })
    }

    /// Direct flight priced from the market band
    pub fn flight_at_market(
        from: impl Into<String>,
        to: impl Into<String>,
        prices: &mut dyn PriceSource,
    ) -> PlannerResult<Self> {
        Self::flight(from, to, prices.sample(FLIGHT_FARES), true)
    }

    pub fn bus(
        from: impl Into<String>,
        to: impl Into<String>,
        base_fare: Money,
    ) -> PlannerResult<Self> {
        Ok(Self::Bus {
            route: Route::new(from, to)?,
            base_fare: Self::admit_fare(base_fare)?,
        })
    }

    pub fn bus_at_market(
        from: impl Into<String>,
        to: impl Into<String>,
        prices: &mut dyn PriceSource,
    ) -> PlannerResult<Self> {
        Self::bus(from, to, prices.sample(BUS_FARES))
    }

    pub fn train(
        from: impl Into<String>,
        to: impl Into<String>,
        base_fare: Money,
        class: TrainClass,
    ) -> PlannerResult<Self> {
        Ok(Self::Train {
            route: Route::new(from, to)?,
            base_fare: Self::admit_fare(base_fare)?,
            class,
        })
    }

    /// Economy train priced from the market band
    pub fn train_at_market(
        from: impl Into<String>,
        to: impl Into<String>,
        prices: &mut dyn PriceSource,
    ) -> PlannerResult<Self> {
        Self::train(from, to, prices.sample(TRAIN_FARES), TrainClass::Economy)
    }

    fn admit_fare(fare: Money) -> PlannerResult<Money> {
        if fare.is_negative() {
            return Err(PlannerError::InvalidArgument(
                "Fare cannot be negative".into(),
            ));
        }
        Ok(fare)
    }

    /// Total ticket price, rounded to the kuruş
    pub fn total_cost(&self) -> Money {
        match self {
            Self::Flight { base_fare, .. } => {
                *base_fare + BAGGAGE_FEE + base_fare.scale(FLIGHT_TAX_RATE)
            }
            Self::Bus { base_fare, .. } => *base_fare,
            Self::Train { base_fare, class, .. } => base_fare.scale(class.multiplier()),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Self::Flight { direct: true, .. } => "Direct Flight".into(),
            Self::Flight { direct: false, .. } => "Connecting Flight".into(),
            Self::Bus { .. } => "Bus".into(),
            Self::Train { class, .. } => format!("Train ({})", class.display_name()),
        }
    }

    pub fn estimated_duration_hours(&self) -> i64 {
        match self {
            Self::Flight { direct: true, .. } => 3,
            Self::Flight { direct: false, .. } => 6,
            Self::Bus { .. } => 8,
            Self::Train { .. } => 5,
        }
    }

    pub fn route(&self) -> &Route {
        match self {
            Self::Flight { route, .. } | Self::Bus { route, .. } | Self::Train { route, .. } => {
                route
            }
        }
    }

    pub fn base_fare(&self) -> Money {
        match self {
            Self::Flight { base_fare, .. }
            | Self::Bus { base_fare, .. }
            | Self::Train { base_fare, .. } => *base_fare,
        }
    }
}

impl fmt::Display for TransportOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}, ~{} hours)",
            self.type_name(),
            self.route(),
            self.total_cost(),
            self.estimated_duration_hours()
        )
    }
}
