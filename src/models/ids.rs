//! Strongly-typed ID wrappers for planner entities
//!
//! Newtype wrappers keep trip, activity, and visa-application identities
//! from being mixed up at compile time. Activity removal and trip
//! de-duplication both key on these.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }
    };
}

define_id!(TripId, "trip-");
define_id!(ActivityId, "act-");
define_id!(VisaApplicationId, "visa-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_prefix() {
        let id = TripId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("trip-"));
        assert_eq!(display.len(), 13); // "trip-" + 8 chars
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ActivityId::new(), ActivityId::new());
    }

    #[test]
    fn test_copied_id_is_equal() {
        let id = VisaApplicationId::new();
        let copy = id;
        assert_eq!(id, copy);
    }
}
