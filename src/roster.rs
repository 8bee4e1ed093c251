//! Doctor-facing patient roster.
//!
//! Patients appear here when an appointment is confirmed or completed and
//! the counterpart name is not already present. Entries are keyed by display
//! name — duplicate names collapse into one record. Known limitation carried
//! over from the portal, not fixed here.

use crate::models::PatientRecord;

#[derive(Debug, Default)]
pub struct PatientRoster {
    patients: Vec<PatientRecord>,
}

impl PatientRoster {
    pub fn new(patients: Vec<PatientRecord>) -> Self {
        Self { patients }
    }

    pub fn list(&self) -> &[PatientRecord] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patients.iter().any(|p| p.name == name)
    }

    /// Prepend a new record unless the name is already present.
    /// Returns true when a record was added.
    pub fn upsert(
        &mut self,
        name: impl Into<String>,
        last_visit: impl Into<String>,
        condition: impl Into<String>,
    ) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        tracing::debug!(patient = %name, "patient added to roster");
        self.patients.insert(
            0,
            PatientRecord {
                name,
                last_visit: last_visit.into(),
                condition: condition.into(),
            },
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn upsert_prepends_new_patient() {
        let mut roster = PatientRoster::new(seed::patient_roster());
        assert!(roster.upsert("Rahul Mehta", "Today", "Emergency"));
        assert_eq!(roster.list()[0].name, "Rahul Mehta");
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn upsert_existing_name_is_noop() {
        let mut roster = PatientRoster::new(seed::patient_roster());
        let before: Vec<_> = roster.list().to_vec();
        assert!(!roster.upsert("Neha Verma", "Today", "Hypertension"));
        assert_eq!(roster.list(), before.as_slice());
    }
}
