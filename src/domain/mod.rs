//! Domain models for ShiftMan
//!
//! Contains the core roster logic without any I/O concerns.

mod time;
mod staff;
mod shift;
mod day;
mod roster;
mod error;

pub use time::{TimeOfDay, TimeRange};
pub use staff::StaffMember;
pub use shift::{Shift, StaffingLevel};
pub use day::{Day, Weekday};
pub use roster::Roster;
pub use error::RosterError;
