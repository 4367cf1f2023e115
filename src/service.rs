//! Request/response façade over the roster
//!
//! One operation per use case, each taking plain string parameters and
//! returning either a success marker or a pre-rendered `ERROR: …`
//! message. Listing operations return an ordered sequence of strings: an
//! empty sequence when there is legitimately nothing to report, or a
//! single error element when the lookup itself failed or no roster
//! exists yet.
//!
//! The service holds the single active roster as an explicit optional
//! value. Creating a new roster replaces the previous one wholesale.

use crate::domain::{Roster, RosterError, StaffingLevel};

/// Message for operations invoked before any roster has been created.
const NO_ROSTER: &str = "ERROR: No roster has been created";

/// The roster façade. Single-threaded, exclusive access by one caller.
#[derive(Debug, Default)]
pub struct RosterService {
    roster: Option<Roster>,
}

impl RosterService {
    /// Creates a service with no active roster. Every operation except
    /// `new_roster` fails until one is created.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active roster, if any.
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// Creates a new roster for the named shop, discarding all prior
    /// state: days, shifts and staff registrations.
    pub fn new_roster(&mut self, shop_name: &str) -> Result<(), String> {
        if shop_name.trim().is_empty() {
            return Err(render(&RosterError::EmptyShopName));
        }
        self.roster = Some(Roster::new(shop_name));
        Ok(())
    }

    /// Sets the working hours for a day.
    pub fn set_working_hours(&mut self, day: &str, start: &str, end: &str) -> Result<(), String> {
        let roster = self.roster_mut()?;
        roster.set_working_hours(day, start, end).map_err(|e| render(&e))
    }

    /// Adds a shift. The minimum worker count arrives as a string and is
    /// validated here; nothing is mutated when it does not parse.
    pub fn add_shift(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        min_workers: &str,
    ) -> Result<(), String> {
        let roster = self.roster_mut()?;
        let min_workers: u32 = min_workers
            .parse()
            .map_err(|_| render(&RosterError::InvalidMinimumWorkers))?;
        roster
            .add_shift(day, start, end, min_workers)
            .map_err(|e| render(&e))
    }

    /// Registers a staff member.
    pub fn register_staff(&mut self, given: &str, family: &str) -> Result<(), String> {
        let roster = self.roster_mut()?;
        roster.register_staff(given, family).map_err(|e| render(&e))
    }

    /// Assigns a registered staff member to a shift, as manager or
    /// worker.
    pub fn assign_staff(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        given: &str,
        family: &str,
        is_manager: bool,
    ) -> Result<(), String> {
        let roster = self.roster_mut()?;
        roster
            .assign_staff(day, start, end, given, family, is_manager)
            .map_err(|e| render(&e))
    }

    /// All registered staff, sorted.
    pub fn registered_staff(&self) -> Vec<String> {
        match self.roster() {
            Some(roster) => roster.registered_staff(),
            None => no_roster_listing(),
        }
    }

    /// Registered staff with no assignment anywhere in the week.
    pub fn unassigned_staff(&self) -> Vec<String> {
        match self.roster() {
            Some(roster) => roster.unassigned_staff(),
            None => no_roster_listing(),
        }
    }

    /// Every shift with no manager, Monday to Sunday.
    pub fn shifts_without_managers(&self) -> Vec<String> {
        match self.roster() {
            Some(roster) => roster.unmanaged_shifts(),
            None => no_roster_listing(),
        }
    }

    /// Every shift with fewer workers than its minimum.
    pub fn understaffed_shifts(&self) -> Vec<String> {
        match self.roster() {
            Some(roster) => roster.shifts_with_level(StaffingLevel::Understaffed),
            None => no_roster_listing(),
        }
    }

    /// Every shift with more workers than its minimum.
    pub fn overstaffed_shifts(&self) -> Vec<String> {
        match self.roster() {
            Some(roster) => roster.shifts_with_level(StaffingLevel::Overstaffed),
            None => no_roster_listing(),
        }
    }

    /// The roster for one day, or a single-element error listing.
    pub fn roster_for_day(&self, day: &str) -> Vec<String> {
        match self.roster() {
            Some(roster) => listing(roster.roster_for_day(day)),
            None => no_roster_listing(),
        }
    }

    /// The shifts a staff member works, or a single-element error
    /// listing.
    pub fn roster_for_worker(&self, given: &str, family: &str) -> Vec<String> {
        match self.roster() {
            Some(roster) => listing(roster.roster_for_worker(given, family)),
            None => no_roster_listing(),
        }
    }

    /// The shifts a staff member manages, or a single-element error
    /// listing.
    pub fn shifts_managed_by(&self, given: &str, family: &str) -> Vec<String> {
        match self.roster() {
            Some(roster) => listing(roster.roster_for_manager(given, family)),
            None => no_roster_listing(),
        }
    }

    /// Serializes the active roster as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, String> {
        let roster = self.roster.as_ref().ok_or_else(|| NO_ROSTER.to_string())?;
        serde_json::to_string_pretty(roster).map_err(|e| format!("ERROR: {}", e))
    }

    fn roster_mut(&mut self) -> Result<&mut Roster, String> {
        self.roster.as_mut().ok_or_else(|| NO_ROSTER.to_string())
    }
}

/// Renders a domain failure the way the front end surfaces it.
fn render(err: &RosterError) -> String {
    format!("ERROR: {}", err)
}

fn listing(result: Result<Vec<String>, RosterError>) -> Vec<String> {
    match result {
        Ok(lines) => lines,
        Err(e) => vec![render(&e)],
    }
}

fn no_roster_listing() -> Vec<String> {
    vec![NO_ROSTER.to_string()]
}
