//! Common types: fire reports and the fleet validation error.

use std::fmt;

/// Outcome of a single fire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireReport {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a vessel that still has intact segments.
    Hit,
    /// Shot left the struck vessel with no intact segments.
    Sunk,
}

impl fmt::Display for FireReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireReport::Miss => write!(f, "Miss!"),
            FireReport::Hit => write!(f, "Hit!"),
            FireReport::Sunk => write!(f, "Sunk!"),
        }
    }
}

/// Error returned when a fleet layout breaks the placement rules:
/// wrong vessel count, wrong per-length tally, or two vessels touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidationError;

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fleet layout failed validation")
    }
}

impl std::error::Error for FieldValidationError {}
