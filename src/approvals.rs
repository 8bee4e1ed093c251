//! Admin approval workflow.
//!
//! Approve/reject transitions remove an application from the pending queue
//! and append one entry to the bounded recent-activity feed. Approval also
//! increments the active-doctor counter; removal, increment and feed entry
//! happen inside one `&mut self` call — that call is the unit of atomicity
//! if a later version ever adds concurrency.

use crate::config::ACTIVITY_FEED_CAPACITY;
use crate::error::DomainError;
use crate::models::enums::ActivityKind;
use crate::models::{ActivityEntry, DoctorApplication};

/// Result of resolving one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    pub removed: DoctorApplication,
    pub entry: ActivityEntry,
}

#[derive(Debug, Default)]
pub struct ApprovalQueue {
    pending: Vec<DoctorApplication>,
    activity: Vec<ActivityEntry>,
    active_doctors: u32,
}

impl ApprovalQueue {
    pub fn new(
        pending: Vec<DoctorApplication>,
        activity: Vec<ActivityEntry>,
        active_doctors: u32,
    ) -> Self {
        let mut queue = Self {
            pending,
            activity,
            active_doctors,
        };
        queue.activity.truncate(ACTIVITY_FEED_CAPACITY);
        queue
    }

    pub fn pending(&self) -> &[DoctorApplication] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Newest-first recent activity, at most `ACTIVITY_FEED_CAPACITY` entries.
    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn active_doctor_count(&self) -> u32 {
        self.active_doctors
    }

    /// Approve an application: remove it, bump the active-doctor counter,
    /// log a success activity entry.
    pub fn approve(&mut self, id: u32) -> Result<ApprovalOutcome, DomainError> {
        let removed = self.remove(id)?;
        self.active_doctors += 1;
        let entry = ActivityEntry::new(
            ActivityKind::Success,
            format!("{} approved as {} specialist", removed.name, removed.specialty),
            "Just now",
        );
        self.prepend_activity(entry.clone());
        tracing::info!(application_id = id, doctor = %removed.name, "application approved");
        Ok(ApprovalOutcome { removed, entry })
    }

    /// Reject an application: remove it and log a warning activity entry.
    /// The active-doctor counter is untouched.
    pub fn reject(&mut self, id: u32) -> Result<ApprovalOutcome, DomainError> {
        let removed = self.remove(id)?;
        let entry = ActivityEntry::new(
            ActivityKind::Warning,
            format!("{}'s application rejected", removed.name),
            "Just now",
        );
        self.prepend_activity(entry.clone());
        tracing::info!(application_id = id, doctor = %removed.name, "application rejected");
        Ok(ApprovalOutcome { removed, entry })
    }

    fn remove(&mut self, id: u32) -> Result<DoctorApplication, DomainError> {
        let index = self
            .pending
            .iter()
            .position(|app| app.id == id)
            .ok_or_else(|| DomainError::not_found("doctor application", id))?;
        Ok(self.pending.remove(index))
    }

    fn prepend_activity(&mut self, entry: ActivityEntry) {
        self.activity.insert(0, entry);
        self.activity.truncate(ACTIVITY_FEED_CAPACITY);
    }
}
