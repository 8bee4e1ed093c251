use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + Display + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DomainError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(AppointmentStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(AppointmentAction {
    Confirm => "confirm",
    Cancel => "cancel",
    Complete => "complete",
});

str_enum!(Role {
    Patient => "patient",
    Doctor => "doctor",
    Admin => "admin",
});

str_enum!(InvoiceStatus {
    Paid => "paid",
    Pending => "pending",
    Overdue => "overdue",
});

str_enum!(RecordType {
    LabReport => "lab_report",
    Prescription => "prescription",
    Diagnosis => "diagnosis",
    Imaging => "imaging",
    Surgery => "surgery",
});

str_enum!(ActivityKind {
    Success => "success",
    Warning => "warning",
    Info => "info",
});

impl AppointmentStatus {
    /// Terminal states admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn appointment_status_round_trip() {
        for (variant, s) in [
            (AppointmentStatus::Pending, "pending"),
            (AppointmentStatus::Confirmed, "confirmed"),
            (AppointmentStatus::Completed, "completed"),
            (AppointmentStatus::Cancelled, "cancelled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn terminal_states() {
        assert!(!AppointmentStatus::Pending.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Role::from_str("nurse").is_err());
        assert!(InvoiceStatus::from_str("refunded").is_err());
        assert!(AppointmentAction::from_str("").is_err());
    }
}
