//! Weekdays and the per-day shift collection
//!
//! A day owns its working-hour envelope and its shifts. Every shift-level
//! validation against the envelope and against sibling shifts happens
//! here: shifts must fall within working hours, may not overlap each
//! other, and are kept sorted by start time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RosterError;
use super::shift::{Shift, StaffingLevel};
use super::staff::StaffMember;
use super::time::TimeRange;

/// One of the seven fixed weekday labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The week in Monday-to-Sunday order, the order every cross-day
    /// report iterates in.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the display label.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = RosterError;

    /// Resolves an exact weekday label. Anything else, including casing
    /// differences, is an unknown day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or(RosterError::UnknownDay)
    }
}

/// A weekday's working-hour envelope and its shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    weekday: Weekday,

    /// Unset until working hours are first configured. Shifts cannot be
    /// added while unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    working_hours: Option<TimeRange>,

    /// Shifts sorted by start time. The no-overlap invariant makes the
    /// order total.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    shifts: Vec<Shift>,
}

impl Day {
    /// Creates a day with no working hours and no shifts.
    pub fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            working_hours: None,
            shifts: Vec::new(),
        }
    }

    /// Returns which weekday this is.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the working hours, if set.
    pub fn working_hours(&self) -> Option<&TimeRange> {
        self.working_hours.as_ref()
    }

    /// Returns the shifts in start-time order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Sets (or overwrites) the working hours.
    ///
    /// Existing shifts are never re-validated against the new envelope;
    /// the envelope only constrains shifts added afterwards.
    pub fn set_working_hours(&mut self, start: &str, end: &str) -> Result<(), RosterError> {
        self.working_hours = Some(TimeRange::parse(start, end)?);
        Ok(())
    }

    /// Validates and inserts a new shift, keeping the collection sorted
    /// by start time.
    pub fn add_shift(&mut self, start: &str, end: &str, min_workers: u32) -> Result<(), RosterError> {
        let times = TimeRange::parse(start, end)?;

        let hours = self.working_hours.as_ref().ok_or(RosterError::WorkingHoursNotSet)?;
        if !hours.contains(&times) {
            return Err(RosterError::OutsideWorkingHours);
        }
        if self.shifts.iter().any(|s| s.times().overlaps(&times)) {
            return Err(RosterError::ShiftOverlap);
        }

        let pos = self
            .shifts
            .iter()
            .position(|s| s.times().start() > times.start())
            .unwrap_or(self.shifts.len());
        self.shifts.insert(pos, Shift::new(times, min_workers));
        Ok(())
    }

    /// Looks up the shift with exactly the given times.
    pub fn find_shift(&self, start: &str, end: &str) -> Result<&Shift, RosterError> {
        let times = TimeRange::parse(start, end)?;
        self.shifts
            .iter()
            .find(|s| s.matches(&times))
            .ok_or(RosterError::ShiftNotFound)
    }

    /// Assigns a staff member to the shift with the given times, as
    /// manager or worker.
    pub fn assign(
        &mut self,
        start: &str,
        end: &str,
        staff: StaffMember,
        as_manager: bool,
    ) -> Result<(), RosterError> {
        let times = TimeRange::parse(start, end)?;
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.matches(&times))
            .ok_or(RosterError::ShiftNotFound)?;

        if as_manager {
            shift.assign_manager(staff)
        } else {
            shift.assign_worker(staff)
        }
    }

    /// Everyone assigned to any shift today, workers and managers,
    /// in shift order. May contain duplicates across shifts.
    pub fn assigned_staff(&self) -> Vec<StaffMember> {
        self.shifts
            .iter()
            .flat_map(|s| s.assigned_staff().cloned())
            .collect()
    }

    /// Day-tagged labels of shifts with no manager, in start-time order.
    pub fn shifts_without_manager(&self) -> Vec<String> {
        self.shifts
            .iter()
            .filter(|s| !s.has_manager())
            .map(|s| s.tag(self.weekday))
            .collect()
    }

    /// Day-tagged labels of shifts at the given staffing level, in
    /// start-time order.
    pub fn shifts_with_level(&self, level: StaffingLevel) -> Vec<String> {
        self.shifts
            .iter()
            .filter(|s| s.staffing_level() == level)
            .map(|s| s.tag(self.weekday))
            .collect()
    }

    /// One fully rendered roster line per shift, in start-time order.
    pub fn roster_lines(&self) -> Vec<String> {
        self.shifts.iter().map(|s| s.roster_line(self.weekday)).collect()
    }

    /// Day-tagged labels of shifts where the staff member is a worker.
    pub fn shifts_with_worker(&self, staff: &StaffMember) -> Vec<String> {
        self.shifts
            .iter()
            .filter(|s| s.includes_worker(staff))
            .map(|s| s.tag(self.weekday))
            .collect()
    }

    /// Day-tagged labels of shifts the staff member manages.
    pub fn shifts_managed_by(&self, staff: &StaffMember) -> Vec<String> {
        self.shifts
            .iter()
            .filter(|s| s.managed_by(staff))
            .map(|s| s.tag(self.weekday))
            .collect()
    }
}
