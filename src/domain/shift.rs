//! Shift domain model
//!
//! A shift is a single bounded period of work: a time range, at most one
//! manager, a minimum worker count, and the set of workers assigned to
//! it. The manager never counts toward the staffing level.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::day::Weekday;
use super::error::RosterError;
use super::staff::StaffMember;
use super::time::TimeRange;

/// How a shift's worker count compares to its configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingLevel {
    Understaffed,
    Met,
    Overstaffed,
}

/// A shift within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    times: TimeRange,

    /// Minimum number of workers required, manager excluded.
    min_workers: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    manager: Option<StaffMember>,

    /// Workers assigned to the shift, kept sorted by family then given
    /// name for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    workers: Vec<StaffMember>,
}

impl Shift {
    /// Creates an unstaffed shift covering the given times.
    pub fn new(times: TimeRange, min_workers: u32) -> Self {
        Self {
            times,
            min_workers,
            manager: None,
            workers: Vec::new(),
        }
    }

    /// Returns the shift's time range.
    pub fn times(&self) -> &TimeRange {
        &self.times
    }

    /// Returns the minimum worker count.
    pub fn min_workers(&self) -> u32 {
        self.min_workers
    }

    /// Returns the manager, if one has been assigned.
    pub fn manager(&self) -> Option<&StaffMember> {
        self.manager.as_ref()
    }

    /// Returns the assigned workers in display order.
    pub fn workers(&self) -> &[StaffMember] {
        &self.workers
    }

    /// Assigns a manager. At most one manager per shift.
    pub fn assign_manager(&mut self, staff: StaffMember) -> Result<(), RosterError> {
        if self.manager.is_some() {
            return Err(RosterError::ManagerAlreadyAssigned);
        }
        self.manager = Some(staff);
        Ok(())
    }

    /// Adds a worker, keeping the set sorted. A staff member cannot be
    /// added twice to the same shift.
    pub fn assign_worker(&mut self, staff: StaffMember) -> Result<(), RosterError> {
        match self.workers.binary_search(&staff) {
            Ok(_) => Err(RosterError::WorkerAlreadyAssigned),
            Err(pos) => {
                self.workers.insert(pos, staff);
                Ok(())
            }
        }
    }

    /// Classifies the worker count against the minimum. The manager is
    /// not counted.
    pub fn staffing_level(&self) -> StaffingLevel {
        match (self.workers.len() as u64).cmp(&u64::from(self.min_workers)) {
            std::cmp::Ordering::Less => StaffingLevel::Understaffed,
            std::cmp::Ordering::Equal => StaffingLevel::Met,
            std::cmp::Ordering::Greater => StaffingLevel::Overstaffed,
        }
    }

    /// Returns true if a manager has been assigned.
    pub fn has_manager(&self) -> bool {
        self.manager.is_some()
    }

    /// Returns true if the given staff member manages this shift.
    /// False, never a failure, when no manager is set.
    pub fn managed_by(&self, staff: &StaffMember) -> bool {
        self.manager.as_ref() == Some(staff)
    }

    /// Returns true if the given staff member is in the worker set.
    /// The manager slot does not count.
    pub fn includes_worker(&self, staff: &StaffMember) -> bool {
        self.workers.binary_search(staff).is_ok()
    }

    /// Exact time-range match, used for shift lookup.
    pub fn matches(&self, times: &TimeRange) -> bool {
        &self.times == times
    }

    /// Everyone assigned to the shift: workers, then the manager if set.
    pub fn assigned_staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.workers.iter().chain(self.manager.as_ref())
    }

    /// Short day-prefixed label used by cross-day listings:
    /// `Monday[09:00-12:00]`.
    pub fn tag(&self, day: Weekday) -> String {
        format!("{}{}", day, self)
    }

    /// Full roster line for a day roster:
    /// `Monday[09:00-12:00] Manager:Lee, Ann [No workers assigned]`.
    pub fn roster_line(&self, day: Weekday) -> String {
        let manager = match &self.manager {
            Some(m) => format!("Manager:{}", m.reversed_name()),
            None => "[No manager assigned]".to_string(),
        };

        let workers = if self.workers.is_empty() {
            "No workers assigned".to_string()
        } else {
            self.workers
                .iter()
                .map(StaffMember::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!("{}{} {} [{}]", day, self, manager, workers)
    }
}

impl fmt::Display for Shift {
    /// The bracketed time range, accessed far more often than the
    /// staffing details: `[09:00-12:00]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: &str, end: &str, min_workers: u32) -> Shift {
        Shift::new(TimeRange::parse(start, end).unwrap(), min_workers)
    }

    #[test]
    fn display_is_bracketed_times() {
        assert_eq!(shift("09:00", "12:00", 0).to_string(), "[09:00-12:00]");
    }

    #[test]
    fn second_manager_is_rejected() {
        let mut s = shift("09:00", "12:00", 0);
        s.assign_manager(StaffMember::new("Ann", "Lee")).unwrap();
        assert_eq!(
            s.assign_manager(StaffMember::new("Ben", "Archer")),
            Err(RosterError::ManagerAlreadyAssigned)
        );
        // The original manager is untouched.
        assert!(s.managed_by(&StaffMember::new("Ann", "Lee")));
    }

    #[test]
    fn duplicate_worker_is_rejected() {
        let mut s = shift("09:00", "12:00", 1);
        s.assign_worker(StaffMember::new("Ann", "Lee")).unwrap();
        assert_eq!(
            s.assign_worker(StaffMember::new("Ann", "Lee")),
            Err(RosterError::WorkerAlreadyAssigned)
        );
        assert_eq!(s.workers().len(), 1);
    }

    #[test]
    fn same_person_can_manage_and_work() {
        let mut s = shift("09:00", "12:00", 1);
        let ann = StaffMember::new("Ann", "Lee");
        s.assign_manager(ann.clone()).unwrap();
        s.assign_worker(ann.clone()).unwrap();
        assert!(s.managed_by(&ann));
        assert!(s.includes_worker(&ann));
    }

    #[test]
    fn workers_stay_sorted() {
        let mut s = shift("09:00", "12:00", 0);
        s.assign_worker(StaffMember::new("Zoe", "Young")).unwrap();
        s.assign_worker(StaffMember::new("Ben", "Archer")).unwrap();
        s.assign_worker(StaffMember::new("Ann", "Young")).unwrap();
        let names: Vec<String> = s.workers().iter().map(|w| w.to_string()).collect();
        assert_eq!(names, ["Ben Archer", "Ann Young", "Zoe Young"]);
    }

    #[test]
    fn staffing_level_excludes_manager() {
        let mut s = shift("09:00", "12:00", 2);
        s.assign_manager(StaffMember::new("Ann", "Lee")).unwrap();
        assert_eq!(s.staffing_level(), StaffingLevel::Understaffed);

        s.assign_worker(StaffMember::new("Ben", "Archer")).unwrap();
        assert_eq!(s.staffing_level(), StaffingLevel::Understaffed);

        s.assign_worker(StaffMember::new("Cam", "Brown")).unwrap();
        assert_eq!(s.staffing_level(), StaffingLevel::Met);

        s.assign_worker(StaffMember::new("Dee", "Cole")).unwrap();
        assert_eq!(s.staffing_level(), StaffingLevel::Overstaffed);
    }

    #[test]
    fn managed_by_without_manager_is_false() {
        let s = shift("09:00", "12:00", 0);
        assert!(!s.managed_by(&StaffMember::new("Ann", "Lee")));
    }

    #[test]
    fn roster_line_with_no_staff() {
        let s = shift("09:00", "12:00", 0);
        assert_eq!(
            s.roster_line(Weekday::Monday),
            "Monday[09:00-12:00] [No manager assigned] [No workers assigned]"
        );
    }

    #[test]
    fn roster_line_with_manager_and_workers() {
        let mut s = shift("09:00", "12:00", 1);
        s.assign_manager(StaffMember::new("Ann", "Lee")).unwrap();
        s.assign_worker(StaffMember::new("Zoe", "Young")).unwrap();
        s.assign_worker(StaffMember::new("Ben", "Archer")).unwrap();
        assert_eq!(
            s.roster_line(Weekday::Monday),
            "Monday[09:00-12:00] Manager:Lee, Ann [Ben Archer, Zoe Young]"
        );
    }

    #[test]
    fn tag_is_day_plus_times() {
        let s = shift("09:00", "12:00", 0);
        assert_eq!(s.tag(Weekday::Friday), "Friday[09:00-12:00]");
    }

    #[test]
    fn assigned_staff_includes_manager() {
        let mut s = shift("09:00", "12:00", 0);
        s.assign_worker(StaffMember::new("Ben", "Archer")).unwrap();
        s.assign_manager(StaffMember::new("Ann", "Lee")).unwrap();
        let names: Vec<String> = s.assigned_staff().map(|m| m.to_string()).collect();
        assert_eq!(names, ["Ben Archer", "Ann Lee"]);
    }
}
