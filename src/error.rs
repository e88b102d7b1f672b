//! Custom error types for wayfarer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::Money;
use crate::models::visa::{DocumentType, VisaTag};

/// The main error type for wayfarer operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// A caller supplied a structurally impossible value (empty name,
    /// negative price, end before start). Raised at construction, never
    /// deferred.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An expense would breach the budget cap. Recoverable: reduce the
    /// amount, raise the cap, or abandon the addition.
    #[error("Budget exceeded! Attempted: {attempted}, Remaining: {remaining}")]
    BudgetExceeded { attempted: Money, remaining: Money },

    /// Date-range validation raised by the planning layer before any
    /// Trip or Budget is created.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A required visa document type is absent. Recoverable: upload and
    /// re-validate.
    #[error("Missing document: {0}")]
    MissingDocument(DocumentType),

    /// A required document exists but is stale. Not recoverable within the
    /// current application attempt; the document must be replaced.
    #[error("Document has expired: {0}")]
    ExpiredDocument(DocumentType),

    /// The planning gate refused to start: the user has no approved visa
    /// of the kind the trip requires.
    #[error("An approved {0} visa is required for this trip")]
    VisaNotApproved(VisaTag),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this failure can be retried by the caller after adjusting
    /// the input (smaller expense, newly uploaded document)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::BudgetExceeded { .. } | Self::MissingDocument(_) | Self::VisaNotApproved(_)
        )
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for wayfarer operations
pub type PlannerResult<T> = Result<T, PlannerError>;
