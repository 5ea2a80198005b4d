//! The `date` kind.
//!
//! Values are UTC timestamps ([`chrono::DateTime<Utc>`]). Every helper is
//! pure: inputs are never mutated, adjusted copies are returned. Calendar
//! arithmetic that falls out of range collapses to the input value.

pub mod check;
pub mod compare;
pub mod configure;
pub mod get;
