//! Wayfarer - Terminal-based personal travel planning application
//!
//! This library provides the core functionality for the wayfarer travel
//! planner: trips with day-by-day itineraries of priced activities, bounded
//! budgets with categorized expense ledgers, and visa applications gated by
//! document completeness.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (trips, budgets, activities, visas, users)
//! - `services`: Business logic layer (planning admission, visa workflow)
//! - `display`: Shared text-report formatting
//! - `export`: JSON/CSV report export
//! - `console`: Interactive prompt/menu glue

pub mod console;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{PlannerError, PlannerResult};
