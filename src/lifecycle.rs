//! Appointment lifecycle engine.
//!
//! Pure transition functions over appointment status, parameterized by the
//! acting role. Legal moves:
//!
//! ```text
//! pending   -> confirmed | cancelled
//! confirmed -> completed | cancelled
//! completed -> (terminal)
//! cancelled -> (terminal)
//! ```
//!
//! `confirm` and `cancel` are accepted from any role; `complete` requires the
//! doctor role. The looseness on confirm/cancel matches the portal, where
//! role gating happens by which screens expose which actions rather than as
//! a real authorization boundary.
//!
//! Contract side effect: a transition landing on confirmed or completed must
//! be followed by a roster upsert of the counterpart name — the session store
//! performs it in the same dispatch (see `SessionStore::dispatch`).

use crate::error::DomainError;
use crate::models::enums::{AppointmentAction, AppointmentStatus, Role};
use crate::models::Appointment;

/// Apply `action` to `appointment` as `role`.
///
/// Returns the updated appointment or `InvalidTransition`; never partially
/// mutates and never panics. Repeating a now-invalid action errors rather
/// than mutating further.
pub fn transition(
    appointment: &Appointment,
    action: AppointmentAction,
    role: Role,
) -> Result<Appointment, DomainError> {
    use AppointmentAction::*;
    use AppointmentStatus::*;

    let next = match (appointment.status, action) {
        (Pending, Confirm) => Confirmed,
        (Pending, Cancel) | (Confirmed, Cancel) => Cancelled,
        (Confirmed, Complete) if role == Role::Doctor => Completed,
        (status, action) => {
            return Err(DomainError::InvalidTransition { status, action });
        }
    };

    Ok(appointment.clone().with_status(next))
}

/// Whether the counterpart should be upserted into the patient roster
/// after a transition lands on this status.
pub fn updates_roster(status: AppointmentStatus) -> bool {
    matches!(
        status,
        AppointmentStatus::Confirmed | AppointmentStatus::Completed
    )
}

/// Actions a UI should offer for an appointment in `status`, viewed as `role`.
///
/// Mirrors the card menu: confirm/cancel while pending, complete only on the
/// doctor's view of a confirmed appointment. Narrower than what `transition`
/// accepts (the engine also allows cancelling a confirmed appointment).
pub fn allowed_actions(status: AppointmentStatus, role: Role) -> Vec<AppointmentAction> {
    match (status, role) {
        (AppointmentStatus::Pending, _) => {
            vec![AppointmentAction::Confirm, AppointmentAction::Cancel]
        }
        (AppointmentStatus::Confirmed, Role::Doctor) => vec![AppointmentAction::Complete],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> Appointment {
        Appointment::new("1", "Dr. Priya Sharma", "Cardiologist", "Dec 20, 2025", "10:00 AM")
    }

    #[test]
    fn confirm_from_pending_any_role() {
        for role in [Role::Patient, Role::Doctor, Role::Admin] {
            let next = transition(&pending(), AppointmentAction::Confirm, role).unwrap();
            assert_eq!(next.status, AppointmentStatus::Confirmed);
        }
    }

    #[test]
    fn cancel_from_pending_any_role() {
        for role in [Role::Patient, Role::Doctor, Role::Admin] {
            let next = transition(&pending(), AppointmentAction::Cancel, role).unwrap();
            assert_eq!(next.status, AppointmentStatus::Cancelled);
        }
    }

    #[test]
    fn repeating_an_action_against_the_new_state_errors() {
        let confirmed = transition(&pending(), AppointmentAction::Confirm, Role::Patient).unwrap();
        let err = transition(&confirmed, AppointmentAction::Confirm, Role::Patient).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));

        let cancelled = transition(&pending(), AppointmentAction::Cancel, Role::Patient).unwrap();
        let err = transition(&cancelled, AppointmentAction::Cancel, Role::Patient).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }

    #[test]
    fn complete_requires_doctor_and_confirmed() {
        let confirmed = pending().with_status(AppointmentStatus::Confirmed);
        let done = transition(&confirmed, AppointmentAction::Complete, Role::Doctor).unwrap();
        assert_eq!(done.status, AppointmentStatus::Completed);

        // Patient can never complete, whatever the status.
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            let appt = pending().with_status(status);
            let err = transition(&appt, AppointmentAction::Complete, Role::Patient).unwrap_err();
            assert!(matches!(err, DomainError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn cancel_from_confirmed_is_allowed() {
        let confirmed = pending().with_status(AppointmentStatus::Confirmed);
        let next = transition(&confirmed, AppointmentAction::Cancel, Role::Patient).unwrap();
        assert_eq!(next.status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn terminal_states_reject_everything() {
        for status in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
            let appt = pending().with_status(status);
            for action in [
                AppointmentAction::Confirm,
                AppointmentAction::Cancel,
                AppointmentAction::Complete,
            ] {
                assert!(transition(&appt, action, Role::Doctor).is_err());
            }
        }
    }

    #[test]
    fn failed_transition_leaves_input_untouched() {
        let appt = pending().with_status(AppointmentStatus::Completed);
        let before = appt.clone();
        let _ = transition(&appt, AppointmentAction::Cancel, Role::Admin);
        assert_eq!(appt, before);
    }

    #[test]
    fn roster_updates_on_confirmed_and_completed_only() {
        assert!(updates_roster(AppointmentStatus::Confirmed));
        assert!(updates_roster(AppointmentStatus::Completed));
        assert!(!updates_roster(AppointmentStatus::Pending));
        assert!(!updates_roster(AppointmentStatus::Cancelled));
    }

    #[test]
    fn allowed_actions_mirror_the_card_menu() {
        assert_eq!(
            allowed_actions(AppointmentStatus::Pending, Role::Patient),
            vec![AppointmentAction::Confirm, AppointmentAction::Cancel]
        );
        assert_eq!(
            allowed_actions(AppointmentStatus::Confirmed, Role::Doctor),
            vec![AppointmentAction::Complete]
        );
        assert!(allowed_actions(AppointmentStatus::Confirmed, Role::Patient).is_empty());
        assert!(allowed_actions(AppointmentStatus::Completed, Role::Doctor).is_empty());
    }
}
