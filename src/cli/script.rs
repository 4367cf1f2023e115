//! The roster command script language
//!
//! One command per line, tokens separated by whitespace. Blank lines and
//! `#` comments are skipped. Every command maps to one façade operation;
//! a successful mutation answers `ok`, a failed one answers the
//! `ERROR: …` message verbatim, and listings print one element per line.

use anyhow::{bail, Result};
use std::io::BufRead;

use super::output::Output;
use crate::service::RosterService;

/// A parsed script command.
enum Command {
    NewRoster(String),
    SetHours { day: String, start: String, end: String },
    AddShift { day: String, start: String, end: String, min_workers: String },
    RegisterStaff { given: String, family: String },
    Assign {
        day: String,
        start: String,
        end: String,
        given: String,
        family: String,
        as_manager: bool,
    },
    ListStaff,
    ListUnassigned,
    ListUnmanaged,
    ListUnderstaffed,
    ListOverstaffed,
    DayRoster(String),
    WorkerRoster { given: String, family: String },
    ManagerRoster { given: String, family: String },
    Export,
}

/// Parses one script line. `None` for blank lines and comments.
fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = match (tokens[0], &tokens[1..]) {
        ("roster", rest) if !rest.is_empty() => Command::NewRoster(rest.join(" ")),
        ("roster", _) => bail!("usage: roster <shop name>"),

        ("hours", [day, start, end]) => Command::SetHours {
            day: day.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        },
        ("hours", _) => bail!("usage: hours <day> <start> <end>"),

        ("shift", [day, start, end, min_workers]) => Command::AddShift {
            day: day.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            min_workers: min_workers.to_string(),
        },
        ("shift", _) => bail!("usage: shift <day> <start> <end> <min-workers>"),

        ("staff", [given, family]) => Command::RegisterStaff {
            given: given.to_string(),
            family: family.to_string(),
        },
        ("staff", _) => bail!("usage: staff <given-name> <family-name>"),

        ("assign", [day, start, end, given, family, role]) => {
            let as_manager = match *role {
                "manager" => true,
                "worker" => false,
                other => bail!("unknown role '{other}': expected 'manager' or 'worker'"),
            };
            Command::Assign {
                day: day.to_string(),
                start: start.to_string(),
                end: end.to_string(),
                given: given.to_string(),
                family: family.to_string(),
                as_manager,
            }
        }
        ("assign", _) => {
            bail!("usage: assign <day> <start> <end> <given-name> <family-name> <manager|worker>")
        }

        ("list-staff", []) => Command::ListStaff,
        ("list-unassigned", []) => Command::ListUnassigned,
        ("list-unmanaged", []) => Command::ListUnmanaged,
        ("list-understaffed", []) => Command::ListUnderstaffed,
        ("list-overstaffed", []) => Command::ListOverstaffed,

        ("day", [day]) => Command::DayRoster(day.to_string()),
        ("day", _) => bail!("usage: day <day>"),

        ("worker", [given, family]) => Command::WorkerRoster {
            given: given.to_string(),
            family: family.to_string(),
        },
        ("worker", _) => bail!("usage: worker <given-name> <family-name>"),

        ("manager", [given, family]) => Command::ManagerRoster {
            given: given.to_string(),
            family: family.to_string(),
        },
        ("manager", _) => bail!("usage: manager <given-name> <family-name>"),

        ("export", []) => Command::Export,
        ("export", _) => bail!("usage: export"),

        (other, _) => bail!("unknown command '{other}'"),
    };

    Ok(Some(command))
}

/// Executes one command against the service and prints its response.
fn execute(service: &mut RosterService, command: Command, output: &Output) {
    let respond = |result: Result<(), String>| match result {
        Ok(()) => output.success("ok"),
        Err(message) => output.failure(&message),
    };

    match command {
        Command::NewRoster(shop_name) => respond(service.new_roster(&shop_name)),
        Command::SetHours { day, start, end } => {
            respond(service.set_working_hours(&day, &start, &end))
        }
        Command::AddShift { day, start, end, min_workers } => {
            respond(service.add_shift(&day, &start, &end, &min_workers))
        }
        Command::RegisterStaff { given, family } => {
            respond(service.register_staff(&given, &family))
        }
        Command::Assign { day, start, end, given, family, as_manager } => {
            respond(service.assign_staff(&day, &start, &end, &given, &family, as_manager))
        }
        Command::ListStaff => output.list(&service.registered_staff()),
        Command::ListUnassigned => output.list(&service.unassigned_staff()),
        Command::ListUnmanaged => output.list(&service.shifts_without_managers()),
        Command::ListUnderstaffed => output.list(&service.understaffed_shifts()),
        Command::ListOverstaffed => output.list(&service.overstaffed_shifts()),
        Command::DayRoster(day) => output.list(&service.roster_for_day(&day)),
        Command::WorkerRoster { given, family } => {
            output.list(&service.roster_for_worker(&given, &family))
        }
        Command::ManagerRoster { given, family } => {
            output.list(&service.shifts_managed_by(&given, &family))
        }
        Command::Export => match service.export_json() {
            Ok(json) => output.raw(&json),
            Err(message) => output.failure(&message),
        },
    }
}

/// Runs a whole script against a fresh service. With `echo` set, each
/// command (and comment) is shown before its response in text mode.
pub fn run_reader(reader: impl BufRead, output: &Output, echo: bool) -> Result<()> {
    let mut service = RosterService::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if echo && output.is_text() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                output.raw(trimmed);
            } else if !trimmed.is_empty() {
                output.raw(&format!("> {}", trimmed));
            }
        }

        match parse_line(&line) {
            Ok(Some(command)) => execute(&mut service, command, output),
            Ok(None) => {}
            Err(e) => bail!("line {}: {}", index + 1, e),
        }
    }

    Ok(())
}

/// The built-in walkthrough: a small shop week, including the failure
/// cases and the full-reset behavior of creating a second roster.
const DEMO_SCRIPT: &str = "\
# Working hours cannot be set before a roster exists
hours Monday 09:00 17:00
# Create the roster
roster eScooters R Us
# A day with no shifts has an empty roster
day Monday
# Working hours may not touch midnight
hours Monday 09:00 24:01
hours Monday 09:00 17:00
shift Monday 09:00 12:00 0
# Shifts must fall within working hours
shift Monday 07:00 09:00 0
shift Monday 12:00 13:00 1
staff Bayta Darell
staff Hari Sheldon
assign Monday 09:00 12:00 Bayta Darell manager
assign Monday 12:00 13:00 Hari Sheldon worker
day Monday
list-staff
list-unassigned
list-unmanaged
list-understaffed
# Creating a new roster discards all previous state
roster Socks for Everyone
day Monday
list-staff
";

/// Runs the built-in demo scenario.
pub fn demo(output: &Output) -> Result<()> {
    run_reader(DEMO_SCRIPT.as_bytes(), output, true)
}
