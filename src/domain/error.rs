//! Error taxonomy for roster operations
//!
//! Every validation failure is recoverable and user-facing. Operations
//! check before they mutate, so a failure never leaves partial state
//! behind. The service layer renders these with an `ERROR:` prefix for
//! the front end; the texts here are the messages themselves.

use thiserror::Error;

/// A failure raised by a roster operation at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Time does not match format hh:mm")]
    TimeFormat,

    #[error("Start and/or end time invalid")]
    TimeBounds,

    #[error("Start and/or end time outside of working hours")]
    OutsideWorkingHours,

    #[error("Start and/or end time clashes with existing shifts")]
    ShiftOverlap,

    #[error("Working hours have not been set for this day")]
    WorkingHoursNotSet,

    #[error("Day does not exist in week")]
    UnknownDay,

    #[error("Shift does not exist in day")]
    ShiftNotFound,

    #[error("Staff member is not registered")]
    StaffNotRegistered,

    #[error("Employee has already been registered")]
    StaffAlreadyRegistered,

    #[error("Manager has already been assigned to this shift")]
    ManagerAlreadyAssigned,

    #[error("Staff member has already been assigned to this shift")]
    WorkerAlreadyAssigned,

    #[error("Employee name given is empty")]
    EmptyStaffName,

    #[error("Shop name given is empty")]
    EmptyShopName,

    #[error("Minimum workers must be a non-negative whole number")]
    InvalidMinimumWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            RosterError::TimeFormat.to_string(),
            "Time does not match format hh:mm"
        );
        assert_eq!(
            RosterError::UnknownDay.to_string(),
            "Day does not exist in week"
        );
        assert_eq!(
            RosterError::ShiftOverlap.to_string(),
            "Start and/or end time clashes with existing shifts"
        );
    }
}
