//! The weekly roster aggregate
//!
//! A roster is one shop's week: the registered staff and exactly seven
//! days, Monday through Sunday. It resolves day and staff lookups,
//! delegates mutation to the day, and aggregates the cross-day reports.

use serde::{Deserialize, Serialize};

use super::day::{Day, Weekday};
use super::error::RosterError;
use super::shift::StaffingLevel;
use super::staff::StaffMember;

/// A full week of shifts plus the staff registry for one shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    shop_name: String,

    /// Registered staff, kept sorted by family then given name. No
    /// duplicate name pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    staff: Vec<StaffMember>,

    /// The seven days, in Monday-to-Sunday order.
    days: [Day; 7],
}

impl Roster {
    /// Creates an empty roster: no staff, all hours unset, no shifts.
    pub fn new(shop_name: impl Into<String>) -> Self {
        Self {
            shop_name: shop_name.into(),
            staff: Vec::new(),
            days: Weekday::ALL.map(Day::new),
        }
    }

    /// Returns the shop name.
    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    /// Returns the day for the given weekday.
    pub fn day(&self, weekday: Weekday) -> &Day {
        &self.days[weekday as usize]
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut Day {
        &mut self.days[weekday as usize]
    }

    /// Resolves a registered staff member by exact name pair.
    pub fn find_staff(&self, given: &str, family: &str) -> Result<&StaffMember, RosterError> {
        self.staff
            .iter()
            .find(|s| s.given_name() == given && s.family_name() == family)
            .ok_or(RosterError::StaffNotRegistered)
    }

    /// Sets the working hours for a day.
    pub fn set_working_hours(&mut self, day: &str, start: &str, end: &str) -> Result<(), RosterError> {
        let weekday: Weekday = day.parse()?;
        self.day_mut(weekday).set_working_hours(start, end)
    }

    /// Adds a shift to a day.
    pub fn add_shift(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        min_workers: u32,
    ) -> Result<(), RosterError> {
        let weekday: Weekday = day.parse()?;
        self.day_mut(weekday).add_shift(start, end, min_workers)
    }

    /// Registers a new staff member. Names may not be blank and the
    /// (given, family) pair may not already be registered.
    pub fn register_staff(&mut self, given: &str, family: &str) -> Result<(), RosterError> {
        if given.trim().is_empty() || family.trim().is_empty() {
            return Err(RosterError::EmptyStaffName);
        }

        let staff = StaffMember::new(given, family);
        match self.staff.binary_search(&staff) {
            Ok(_) => Err(RosterError::StaffAlreadyRegistered),
            Err(pos) => {
                self.staff.insert(pos, staff);
                Ok(())
            }
        }
    }

    /// Assigns a registered staff member to an existing shift. Resolves
    /// the day first, then the staff member, then the shift.
    pub fn assign_staff(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        given: &str,
        family: &str,
        as_manager: bool,
    ) -> Result<(), RosterError> {
        let weekday: Weekday = day.parse()?;
        let staff = self.find_staff(given, family)?.clone();
        self.day_mut(weekday).assign(start, end, staff, as_manager)
    }

    /// All registered staff in conventional name form, sorted by family
    /// then given name.
    pub fn registered_staff(&self) -> Vec<String> {
        self.staff.iter().map(StaffMember::to_string).collect()
    }

    /// Registered staff not assigned to any shift all week, as worker or
    /// manager, in registry order.
    pub fn unassigned_staff(&self) -> Vec<String> {
        let assigned: Vec<StaffMember> =
            self.days.iter().flat_map(Day::assigned_staff).collect();

        self.staff
            .iter()
            .filter(|s| !assigned.contains(s))
            .map(StaffMember::to_string)
            .collect()
    }

    /// Day-tagged labels of every shift with no manager, Monday to
    /// Sunday.
    pub fn unmanaged_shifts(&self) -> Vec<String> {
        self.days.iter().flat_map(Day::shifts_without_manager).collect()
    }

    /// Day-tagged labels of every shift at the given staffing level,
    /// Monday to Sunday.
    pub fn shifts_with_level(&self, level: StaffingLevel) -> Vec<String> {
        self.days
            .iter()
            .flat_map(|d| d.shifts_with_level(level))
            .collect()
    }

    /// The full roster for one day: shop name, day header with working
    /// hours, then one line per shift. A day with no shifts yields an
    /// empty report, not a failure.
    pub fn roster_for_day(&self, day: &str) -> Result<Vec<String>, RosterError> {
        let weekday: Weekday = day.parse()?;
        let day = self.day(weekday);

        let lines = day.roster_lines();
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let mut roster = Vec::with_capacity(lines.len() + 2);
        roster.push(self.shop_name.clone());
        if let Some(hours) = day.working_hours() {
            roster.push(format!("{} {}", day.weekday(), hours));
        }
        roster.extend(lines);
        Ok(roster)
    }

    /// Every shift the staff member works, across the week: their name
    /// family-first, then one day-tagged label per shift. No shifts
    /// yields an empty report.
    pub fn roster_for_worker(&self, given: &str, family: &str) -> Result<Vec<String>, RosterError> {
        let staff = self.find_staff(given, family)?;
        let shifts: Vec<String> = self
            .days
            .iter()
            .flat_map(|d| d.shifts_with_worker(staff))
            .collect();
        Ok(Self::named_report(staff, shifts))
    }

    /// Every shift the staff member manages, across the week. Same shape
    /// as the worker roster.
    pub fn roster_for_manager(&self, given: &str, family: &str) -> Result<Vec<String>, RosterError> {
        let staff = self.find_staff(given, family)?;
        let shifts: Vec<String> = self
            .days
            .iter()
            .flat_map(|d| d.shifts_managed_by(staff))
            .collect();
        Ok(Self::named_report(staff, shifts))
    }

    fn named_report(staff: &StaffMember, shifts: Vec<String>) -> Vec<String> {
        if shifts.is_empty() {
            return Vec::new();
        }
        let mut report = Vec::with_capacity(shifts.len() + 1);
        report.push(staff.reversed_name());
        report.extend(shifts);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> Roster {
        Roster::new("Shop")
    }

    #[test]
    fn new_roster_is_empty() {
        let roster = shop();
        assert_eq!(roster.shop_name(), "Shop");
        assert!(roster.registered_staff().is_empty());
        for weekday in Weekday::ALL {
            assert!(roster.day(weekday).working_hours().is_none());
            assert!(roster.day(weekday).shifts().is_empty());
        }
    }

    #[test]
    fn registration_rejects_blank_names() {
        let mut roster = shop();
        assert_eq!(roster.register_staff("", "Lee"), Err(RosterError::EmptyStaffName));
        assert_eq!(roster.register_staff("Ann", "  "), Err(RosterError::EmptyStaffName));
        assert!(roster.registered_staff().is_empty());
    }

    #[test]
    fn registration_rejects_duplicates() {
        let mut roster = shop();
        roster.register_staff("Ann", "Lee").unwrap();
        assert_eq!(
            roster.register_staff("Ann", "Lee"),
            Err(RosterError::StaffAlreadyRegistered)
        );
        assert_eq!(roster.registered_staff(), ["Ann Lee"]);
    }

    #[test]
    fn staff_listing_is_sorted_regardless_of_registration_order() {
        let mut roster = shop();
        roster.register_staff("Zoe", "Young").unwrap();
        roster.register_staff("Ann", "Lee").unwrap();
        roster.register_staff("Ben", "Archer").unwrap();
        roster.register_staff("Ann", "Young").unwrap();
        assert_eq!(
            roster.registered_staff(),
            ["Ben Archer", "Ann Lee", "Ann Young", "Zoe Young"]
        );
    }

    #[test]
    fn operations_resolve_the_day_first() {
        let mut roster = shop();
        assert_eq!(
            roster.set_working_hours("Funday", "09:00", "17:00"),
            Err(RosterError::UnknownDay)
        );
        assert_eq!(
            roster.add_shift("Funday", "09:00", "12:00", 0),
            Err(RosterError::UnknownDay)
        );
        assert_eq!(
            roster.assign_staff("Funday", "09:00", "12:00", "Ann", "Lee", false),
            Err(RosterError::UnknownDay)
        );
    }

    #[test]
    fn assignment_requires_registration() {
        let mut roster = shop();
        roster.set_working_hours("Monday", "09:00", "17:00").unwrap();
        roster.add_shift("Monday", "09:00", "12:00", 0).unwrap();
        assert_eq!(
            roster.assign_staff("Monday", "09:00", "12:00", "Ann", "Lee", false),
            Err(RosterError::StaffNotRegistered)
        );
    }

    #[test]
    fn roster_for_day_with_no_shifts_is_empty() {
        let roster = shop();
        assert_eq!(roster.roster_for_day("Tuesday"), Ok(Vec::new()));
        assert_eq!(roster.roster_for_day("Tuesdy"), Err(RosterError::UnknownDay));
    }

    #[test]
    fn roster_for_day_has_header_then_shift_lines() {
        let mut roster = shop();
        roster.set_working_hours("Monday", "09:00", "17:00").unwrap();
        roster.add_shift("Monday", "09:00", "12:00", 0).unwrap();
        roster.register_staff("Ann", "Lee").unwrap();
        roster
            .assign_staff("Monday", "09:00", "12:00", "Ann", "Lee", true)
            .unwrap();

        assert_eq!(
            roster.roster_for_day("Monday").unwrap(),
            [
                "Shop",
                "Monday 09:00-17:00",
                "Monday[09:00-12:00] Manager:Lee, Ann [No workers assigned]",
            ]
        );
    }

    #[test]
    fn unassigned_staff_excludes_workers_and_managers() {
        let mut roster = shop();
        roster.set_working_hours("Monday", "09:00", "17:00").unwrap();
        roster.add_shift("Monday", "09:00", "12:00", 1).unwrap();
        roster.register_staff("Ann", "Lee").unwrap();
        roster.register_staff("Ben", "Archer").unwrap();
        roster.register_staff("Zoe", "Young").unwrap();
        roster
            .assign_staff("Monday", "09:00", "12:00", "Ann", "Lee", true)
            .unwrap();
        roster
            .assign_staff("Monday", "09:00", "12:00", "Ben", "Archer", false)
            .unwrap();

        assert_eq!(roster.unassigned_staff(), ["Zoe Young"]);
    }

    #[test]
    fn cross_day_reports_run_monday_to_sunday() {
        let mut roster = shop();
        for day in ["Sunday", "Wednesday", "Monday"] {
            roster.set_working_hours(day, "09:00", "17:00").unwrap();
            roster.add_shift(day, "10:00", "12:00", 1).unwrap();
        }

        assert_eq!(
            roster.unmanaged_shifts(),
            [
                "Monday[10:00-12:00]",
                "Wednesday[10:00-12:00]",
                "Sunday[10:00-12:00]",
            ]
        );
        assert_eq!(
            roster.shifts_with_level(StaffingLevel::Understaffed),
            [
                "Monday[10:00-12:00]",
                "Wednesday[10:00-12:00]",
                "Sunday[10:00-12:00]",
            ]
        );
        assert!(roster.shifts_with_level(StaffingLevel::Overstaffed).is_empty());
    }

    #[test]
    fn worker_and_manager_rosters_are_separate() {
        let mut roster = shop();
        roster.set_working_hours("Monday", "09:00", "17:00").unwrap();
        roster.set_working_hours("Friday", "09:00", "17:00").unwrap();
        roster.add_shift("Monday", "09:00", "12:00", 1).unwrap();
        roster.add_shift("Friday", "13:00", "15:00", 1).unwrap();
        roster.register_staff("Ann", "Lee").unwrap();
        roster
            .assign_staff("Monday", "09:00", "12:00", "Ann", "Lee", false)
            .unwrap();
        roster
            .assign_staff("Friday", "13:00", "15:00", "Ann", "Lee", true)
            .unwrap();

        assert_eq!(
            roster.roster_for_worker("Ann", "Lee").unwrap(),
            ["Lee, Ann", "Monday[09:00-12:00]"]
        );
        assert_eq!(
            roster.roster_for_manager("Ann", "Lee").unwrap(),
            ["Lee, Ann", "Friday[13:00-15:00]"]
        );
        assert_eq!(
            roster.roster_for_worker("Ben", "Archer"),
            Err(RosterError::StaffNotRegistered)
        );
    }

    #[test]
    fn staff_with_no_shifts_gets_an_empty_report() {
        let mut roster = shop();
        roster.register_staff("Ann", "Lee").unwrap();
        assert_eq!(roster.roster_for_worker("Ann", "Lee"), Ok(Vec::new()));
        assert_eq!(roster.roster_for_manager("Ann", "Lee"), Ok(Vec::new()));
    }
}
