//! Expense records
//!
//! An expense is an immutable ledger line: once recorded against a budget it
//! never changes. Categories drive the per-category breakdown in reports.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Category an expense is booked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ExpenseCategory {
    Transport,
    Accommodation,
    Food,
    Sightseeing,
    Visa,
    Other,
}

impl ExpenseCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Accommodation => "Accommodation",
            Self::Food => "Food",
            Self::Sightseeing => "Sightseeing",
            Self::Visa => "Visa",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    amount: Money,
    description: String,
    category: ExpenseCategory,
    recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Record an expense line. Amount validation lives in the budget, which
    /// is the only place expenses are created through.
    pub(crate) fn new(
        amount: Money,
        description: impl Into<String>,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            recorded_at: Utc::now(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.description, self.amount)
    }
}
