use thiserror::Error;

use crate::models::enums::{AppointmentAction, AppointmentStatus};

/// Core error taxonomy. Every variant is recoverable at the call site:
/// a rejected intent leaves prior state intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid transition: cannot {action} an appointment that is {status}")]
    InvalidTransition {
        status: AppointmentStatus,
        action: AppointmentAction,
    },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

impl DomainError {
    /// Shorthand for the not-found case, the most common failure.
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}
