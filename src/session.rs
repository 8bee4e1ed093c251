//! Session store and command dispatch.
//!
//! `SessionStore` owns every collection a dashboard renders and is the only
//! mutation path into them: the UI sends a `Command`, dispatch routes it to
//! the owning module, and a rejected command leaves all prior state intact.
//! The store is explicitly constructed and passed around — no ambient
//! globals — so tests build isolated instances.
//!
//! Single-threaded by design: exactly one logical actor mutates state at a
//! time, so every `&mut self` method is its own unit of atomicity.

use chrono::Utc;

use crate::approvals::{ApprovalOutcome, ApprovalQueue};
use crate::billing::BillingLedger;
use crate::config::{ATTENDANCE_KEY, PROFILE_KEY};
use crate::error::DomainError;
use crate::lifecycle;
use crate::models::enums::{AppointmentAction, AppointmentStatus, Role};
use crate::models::profile::PROFILE_SCHEMA_VERSION;
use crate::models::{Appointment, Attendance, Invoice, MedicalRecord, UserProfile};
use crate::notifications::NotificationStore;
use crate::query::{self, ListQuery};
use crate::roster::PatientRoster;
use crate::seed;
use crate::store::{LocalStore, StoreError};

// ═══════════════════════════════════════════════════════════
// Commands — the inbound intents a UI can send
// ═══════════════════════════════════════════════════════════

/// A user-triggered request to mutate one entity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    RequestTransition {
        appointment_id: String,
        action: AppointmentAction,
        role: Role,
    },
    MarkNotificationRead { id: u32 },
    DeleteNotification { id: u32 },
    PayInvoice { id: String },
    ApproveApplication { id: u32 },
    RejectApplication { id: u32 },
}

/// What a successfully dispatched command produced, for the UI to render
/// its confirmation from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Transitioned(Appointment),
    NotificationChanged { unread: usize },
    InvoicePaid(Invoice),
    ApplicationResolved(ApprovalOutcome),
}

// ═══════════════════════════════════════════════════════════
// Dashboard summary — derived aggregates, recomputed per call
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub upcoming_appointments: usize,
    pub pending_appointments: usize,
    pub completed_appointments: usize,
    pub cancelled_appointments: usize,
    pub unread_notifications: usize,
    pub total_billed: u32,
    pub paid_amount: u32,
    pub outstanding_amount: u32,
    pub pending_approvals: usize,
    pub active_doctors: u32,
    pub total_patients: usize,
}

// ═══════════════════════════════════════════════════════════
// SessionStore
// ═══════════════════════════════════════════════════════════

pub struct SessionStore {
    viewer_role: Role,
    appointments: Vec<Appointment>,
    records: Vec<MedicalRecord>,
    notifications: NotificationStore,
    billing: BillingLedger,
    approvals: ApprovalQueue,
    roster: PatientRoster,
    profile: Option<UserProfile>,
    attendance: Attendance,
}

impl SessionStore {
    /// Empty store for the given viewer role. Mostly for tests.
    pub fn new(viewer_role: Role) -> Self {
        Self {
            viewer_role,
            appointments: Vec::new(),
            records: Vec::new(),
            notifications: NotificationStore::default(),
            billing: BillingLedger::default(),
            approvals: ApprovalQueue::default(),
            roster: PatientRoster::default(),
            profile: None,
            attendance: Attendance::default(),
        }
    }

    /// Store seeded with the portal's hardcoded data. The appointment list
    /// depends on the viewer: patients see doctors as counterparts, doctors
    /// and admins see patients.
    pub fn seeded(viewer_role: Role) -> Self {
        let appointments = match viewer_role {
            Role::Patient => seed::patient_appointments(),
            Role::Doctor | Role::Admin => seed::doctor_appointments(),
        };
        Self {
            viewer_role,
            appointments,
            records: seed::medical_records(),
            notifications: NotificationStore::new(seed::notifications()),
            billing: BillingLedger::new(seed::invoices()),
            approvals: ApprovalQueue::new(
                seed::pending_applications(),
                seed::recent_activity(),
                seed::SEED_ACTIVE_DOCTORS,
            ),
            roster: PatientRoster::new(seed::patient_roster()),
            profile: None,
            attendance: Attendance::default(),
        }
    }

    // ── Hydration and durable projection ────────────────────

    /// Overlay saved profile and attendance from the durable store at
    /// session start. Nothing saved means nothing changes.
    pub fn hydrate(&mut self, store: &LocalStore) -> Result<(), StoreError> {
        if let Some(profile) = store.get::<UserProfile>(PROFILE_KEY)? {
            tracing::info!(user = %profile.full_name(), "profile rehydrated");
            self.profile = Some(profile);
        }
        if let Some(attendance) = store.get::<Attendance>(ATTENDANCE_KEY)? {
            self.attendance = attendance;
        }
        Ok(())
    }

    /// Set the profile and mirror it into the durable store.
    pub fn save_profile(
        &mut self,
        mut profile: UserProfile,
        store: &LocalStore,
    ) -> Result<(), StoreError> {
        profile.schema_version = PROFILE_SCHEMA_VERSION;
        store.set(PROFILE_KEY, &profile)?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Flip doctor presence. Marking present stamps the current time;
    /// clearing wipes it. Mirrored into the durable store either way.
    pub fn toggle_attendance(&mut self, store: &LocalStore) -> Result<Attendance, StoreError> {
        self.attendance = if self.attendance.present {
            Attendance::default()
        } else {
            Attendance {
                present: true,
                marked_at: Some(Utc::now()),
            }
        };
        store.set(ATTENDANCE_KEY, &self.attendance)?;
        Ok(self.attendance.clone())
    }

    // ── Command dispatch ────────────────────────────────────

    /// Route one intent to its owning module.
    ///
    /// Synchronous and total: always a `CommandOutcome` or a `DomainError`,
    /// never a partial mutation.
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::RequestTransition {
                appointment_id,
                action,
                role,
            } => self.request_transition(&appointment_id, action, role),
            Command::MarkNotificationRead { id } => {
                self.notifications.mark_read(id);
                Ok(CommandOutcome::NotificationChanged {
                    unread: self.notifications.unread_count(),
                })
            }
            Command::DeleteNotification { id } => {
                self.notifications.delete(id);
                Ok(CommandOutcome::NotificationChanged {
                    unread: self.notifications.unread_count(),
                })
            }
            Command::PayInvoice { id } => {
                self.billing.pay(&id).map(CommandOutcome::InvoicePaid)
            }
            Command::ApproveApplication { id } => self
                .approvals
                .approve(id)
                .map(CommandOutcome::ApplicationResolved),
            Command::RejectApplication { id } => self
                .approvals
                .reject(id)
                .map(CommandOutcome::ApplicationResolved),
        }
    }

    fn request_transition(
        &mut self,
        appointment_id: &str,
        action: AppointmentAction,
        role: Role,
    ) -> Result<CommandOutcome, DomainError> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == appointment_id)
            .ok_or_else(|| DomainError::not_found("appointment", appointment_id))?;

        let updated = lifecycle::transition(&self.appointments[index], action, role)?;
        tracing::info!(
            appointment_id,
            %action,
            from = %self.appointments[index].status,
            to = %updated.status,
            "appointment transitioned"
        );

        // Contract side effect: confirmed/completed counterparts join the
        // roster, keyed by name, condition taken from the visit label.
        if lifecycle::updates_roster(updated.status) {
            self.roster
                .upsert(updated.counterpart_name.clone(), "Today", updated.specialty.clone());
        }

        self.appointments[index] = updated.clone();
        Ok(CommandOutcome::Transitioned(updated))
    }

    // ── Snapshot accessors ──────────────────────────────────

    pub fn viewer_role(&self) -> Role {
        self.viewer_role
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn billing(&self) -> &BillingLedger {
        &self.billing
    }

    pub fn approvals(&self) -> &ApprovalQueue {
        &self.approvals
    }

    pub fn roster(&self) -> &PatientRoster {
        &self.roster
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    // ── List queries (one engine, many call sites) ──────────

    pub fn query_appointments(&self, query: &ListQuery<Appointment>) -> Vec<&Appointment> {
        query::filter_list(&self.appointments, query)
    }

    pub fn query_records(&self, query: &ListQuery<MedicalRecord>) -> Vec<&MedicalRecord> {
        query::filter_list(&self.records, query)
    }

    pub fn query_invoices(&self, query: &ListQuery<Invoice>) -> Vec<&Invoice> {
        query::filter_list(self.billing.invoices(), query)
    }

    // ── Derived aggregates ──────────────────────────────────

    /// Everything the dashboard stat cards show, recomputed per call.
    pub fn summary(&self) -> DashboardSummary {
        let count = |status: AppointmentStatus| {
            self.appointments
                .iter()
                .filter(|a| a.status == status)
                .count()
        };
        let pending = count(AppointmentStatus::Pending);
        let confirmed = count(AppointmentStatus::Confirmed);
        DashboardSummary {
            upcoming_appointments: pending + confirmed,
            pending_appointments: pending,
            completed_appointments: count(AppointmentStatus::Completed),
            cancelled_appointments: count(AppointmentStatus::Cancelled),
            unread_notifications: self.notifications.unread_count(),
            total_billed: self.billing.total_amount(),
            paid_amount: self.billing.paid_amount(),
            outstanding_amount: self.billing.outstanding_amount(),
            pending_approvals: self.approvals.pending_count(),
            active_doctors: self.approvals.active_doctor_count(),
            total_patients: self.roster.len(),
        }
    }
}
