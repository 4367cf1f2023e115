//! ShiftMan - Weekly staff roster management for a single shop
//!
//! ShiftMan tracks one shop's week: working hours per weekday, shifts
//! within those hours, registered staff, and staff-to-shift assignment
//! (worker or manager). All state is in-memory and scoped to a single
//! roster; creating a new roster replaces the previous one wholesale.

pub mod domain;
pub mod service;
pub mod cli;

pub use domain::{Day, Roster, RosterError, Shift, StaffMember, StaffingLevel, TimeOfDay, TimeRange, Weekday};
pub use service::RosterService;
