//! ShiftMan - Weekly staff roster management for a single shop

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shiftman::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
