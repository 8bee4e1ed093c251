//! Shared list filter + search combinator.
//!
//! One engine, many call sites: the appointment, medical-record and invoice
//! lists all filter through `filter_list` instead of carrying their own
//! copy of the status/search logic. Filtering is stable — relative order of
//! the input is preserved, nothing is sorted.

use crate::models::enums::{AppointmentStatus, InvoiceStatus, RecordType};
use crate::models::{Appointment, Invoice, MedicalRecord};

/// Status facet of a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    /// Exact match on the item's status label.
    Only(String),
}

impl StatusFilter {
    /// From a selector value: `"all"` matches everything, anything else is
    /// an exact status label.
    pub fn from_selection(value: &str) -> Self {
        if value == "all" {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }
}

/// Anything with a status label the filter can match against.
pub trait HasStatus {
    fn status_label(&self) -> &str;
}

impl HasStatus for Appointment {
    fn status_label(&self) -> &str {
        self.status.as_str()
    }
}

impl HasStatus for Invoice {
    fn status_label(&self) -> &str {
        self.status.as_str()
    }
}

impl HasStatus for MedicalRecord {
    fn status_label(&self) -> &str {
        self.record_type.as_str()
    }
}

/// A list query: status filter AND free-text search over configured fields.
#[derive(Debug, Clone)]
pub struct ListQuery<T> {
    pub status: StatusFilter,
    pub search_text: String,
    /// Which fields the free-text search looks at.
    pub search_fields: Vec<fn(&T) -> &str>,
}

impl<T> ListQuery<T> {
    pub fn new(status: StatusFilter, search_text: impl Into<String>) -> Self {
        Self {
            status,
            search_text: search_text.into(),
            search_fields: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<fn(&T) -> &str>) -> Self {
        self.search_fields = fields;
        self
    }
}

impl ListQuery<Appointment> {
    /// Search by counterpart name or specialty, as the appointment lists do.
    pub fn appointments(status: StatusFilter, search_text: impl Into<String>) -> Self {
        Self::new(status, search_text)
            .with_fields(vec![|a| a.counterpart_name.as_str(), |a| a.specialty.as_str()])
    }
}

impl ListQuery<MedicalRecord> {
    /// Search by title, doctor or department, as the records page does.
    pub fn records(status: StatusFilter, search_text: impl Into<String>) -> Self {
        Self::new(status, search_text).with_fields(vec![
            |r| r.title.as_str(),
            |r| r.doctor.as_str(),
            |r| r.department.as_str(),
        ])
    }
}

impl ListQuery<Invoice> {
    /// Search by id or description.
    pub fn invoices(status: StatusFilter, search_text: impl Into<String>) -> Self {
        Self::new(status, search_text)
            .with_fields(vec![|i| i.id.as_str(), |i| i.description.as_str()])
    }
}

/// Stable filter: keeps items matching the status filter AND the case-folded
/// substring search. Empty search text matches everything.
pub fn filter_list<'a, T: HasStatus>(items: &'a [T], query: &ListQuery<T>) -> Vec<&'a T> {
    let needle = query.search_text.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_filter = match &query.status {
                StatusFilter::All => true,
                StatusFilter::Only(label) => item.status_label() == label,
            };
            let matches_search = needle.is_empty()
                || query
                    .search_fields
                    .iter()
                    .any(|field| field(item).to_lowercase().contains(&needle));
            matches_filter && matches_search
        })
        .collect()
}

/// Convenience shorthands for the common status enums.
impl From<AppointmentStatus> for StatusFilter {
    fn from(status: AppointmentStatus) -> Self {
        StatusFilter::Only(status.as_str().to_string())
    }
}

impl From<InvoiceStatus> for StatusFilter {
    fn from(status: InvoiceStatus) -> Self {
        StatusFilter::Only(status.as_str().to_string())
    }
}

impl From<RecordType> for StatusFilter {
    fn from(record_type: RecordType) -> Self {
        StatusFilter::Only(record_type.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn all_and_empty_search_returns_everything_in_order() {
        let appointments = seed::patient_appointments();
        let query = ListQuery::appointments(StatusFilter::All, "");
        let out = filter_list(&appointments, &query);
        assert_eq!(out.len(), appointments.len());
        let ids: Vec<_> = out.iter().map(|a| a.id.as_str()).collect();
        let expected: Vec<_> = appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn status_and_search_compose_with_and_semantics() {
        let appointments = seed::patient_appointments();
        let query =
            ListQuery::appointments(AppointmentStatus::Confirmed.into(), "sharma");
        let out = filter_list(&appointments, &query);
        // Exactly one confirmed appointment with Dr. Priya Sharma.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].counterpart_name, "Dr. Priya Sharma");
        assert_eq!(out[0].status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let appointments = seed::patient_appointments();
        let query = ListQuery::appointments(StatusFilter::All, "NEUROLOG");
        let out = filter_list(&appointments, &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].counterpart_name, "Dr. Rajesh Patel");
    }

    #[test]
    fn from_selection_maps_all_keyword() {
        assert_eq!(StatusFilter::from_selection("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_selection("pending"),
            StatusFilter::Only("pending".into())
        );
    }

    #[test]
    fn reused_verbatim_for_records() {
        let records = seed::medical_records();
        let query = ListQuery::records(RecordType::Imaging.into(), "wilson");
        let out = filter_list(&records, &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "MRI Brain Scan");
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let invoices = seed::invoices();
        let query = ListQuery::invoices(StatusFilter::All, "does-not-exist");
        assert!(filter_list(&invoices, &query).is_empty());
    }
}
