//! Portal seed data.
//!
//! Every collection the dashboards render starts from these hardcoded
//! lists; there is no creation workflow for them in scope. Kept verbatim
//! from the portal so derived aggregates and query results line up.

use crate::models::enums::{ActivityKind, AppointmentStatus, InvoiceStatus, RecordType};
use crate::models::{
    ActivityEntry, Appointment, DoctorApplication, Invoice, MedicalRecord, Notification,
    PatientRecord,
};

/// Number of active doctors shown on the admin dashboard before any
/// approvals are processed.
pub const SEED_ACTIVE_DOCTORS: u32 = 48;

/// Patient-facing appointment list (counterpart is the doctor).
pub fn patient_appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    [
        ("1", "Dr. Priya Sharma", "Cardiologist", "Dec 20, 2025", "10:00 AM", Confirmed),
        ("2", "Dr. Rajesh Patel", "Neurologist", "Dec 22, 2025", "2:30 PM", Pending),
        ("3", "Dr. Ananya Gupta", "Dermatologist", "Dec 28, 2025", "11:00 AM", Confirmed),
        ("4", "Dr. Vikram Singh", "Orthopedic", "Dec 15, 2025", "3:00 PM", Completed),
        ("5", "Dr. Meera Reddy", "Pediatrician", "Dec 10, 2025", "9:00 AM", Completed),
        ("6", "Dr. Suresh Kumar", "General Physician", "Dec 5, 2025", "4:00 PM", Cancelled),
    ]
    .into_iter()
    .map(|(id, name, specialty, date, time, status)| {
        Appointment::new(id, name, specialty, date, time).with_status(status)
    })
    .collect()
}

/// Doctor-facing appointment list (counterpart is the patient, label is the
/// visit type).
pub fn doctor_appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    [
        ("1", "Neha Verma", "Regular Checkup", "Today", "9:00 AM", Completed),
        ("2", "Amit Desai", "Follow-up", "Today", "10:30 AM", Completed),
        ("3", "Kavita Nair", "Consultation", "Today", "11:00 AM", Confirmed),
        ("4", "Rahul Mehta", "Emergency", "Today", "2:00 PM", Pending),
        ("5", "Pooja Iyer", "Regular Checkup", "Today", "3:30 PM", Confirmed),
    ]
    .into_iter()
    .map(|(id, name, visit_type, date, time, status)| {
        Appointment::new(id, name, visit_type, date, time).with_status(status)
    })
    .collect()
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, "Appointment confirmed with Dr. Priya Sharma", "2 hours ago"),
        Notification::new(2, "Lab results are ready", "4 hours ago"),
        Notification {
            read: true,
            ..Notification::new(3, "Prescription refilled", "1 day ago")
        },
        Notification::new(4, "Appointment reminder: Tomorrow at 10:00 AM", "1 day ago"),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    use InvoiceStatus::*;
    [
        ("INV-001", "Dec 10, 2025", 450, Paid, "General Checkup"),
        ("INV-002", "Nov 28, 2025", 320, Paid, "Blood Test & Analysis"),
        ("INV-003", "Nov 15, 2025", 280, Pending, "Consultation Fee"),
        ("INV-004", "Oct 30, 2025", 150, Overdue, "Follow-up Visit"),
    ]
    .into_iter()
    .map(|(id, date, amount, status, description)| Invoice {
        id: id.into(),
        date: date.into(),
        amount,
        status,
        description: description.into(),
    })
    .collect()
}

pub fn medical_records() -> Vec<MedicalRecord> {
    use RecordType::*;
    [
        ("1", "Complete Blood Count (CBC)", LabReport, "Dec 15, 2025", "Dr. Sarah Johnson", "Pathology"),
        ("2", "Cardiac Health Assessment", Diagnosis, "Dec 10, 2025", "Dr. Michael Chen", "Cardiology"),
        ("3", "Chest X-Ray Report", Imaging, "Dec 5, 2025", "Dr. Emily Parker", "Radiology"),
        ("4", "Prescription - Hypertension Medication", Prescription, "Nov 28, 2025", "Dr. Sarah Johnson", "Cardiology"),
        ("5", "MRI Brain Scan", Imaging, "Nov 15, 2025", "Dr. James Wilson", "Neurology"),
        ("6", "Annual Health Checkup Report", Diagnosis, "Oct 20, 2025", "Dr. Lisa Anderson", "General Medicine"),
    ]
    .into_iter()
    .map(|(id, title, record_type, date, doctor, department)| MedicalRecord {
        id: id.into(),
        title: title.into(),
        record_type,
        date: date.into(),
        doctor: doctor.into(),
        department: department.into(),
    })
    .collect()
}

pub fn pending_applications() -> Vec<DoctorApplication> {
    [
        (1, "Dr. Dhoni Singh", "Orthopedic", "2 hours ago"),
        (2, "Dr. Suresh Raina", "Pediatrics", "5 hours ago"),
        (3, "Dr. Virat Kohli", "Cardiology", "1 day ago"),
    ]
    .into_iter()
    .map(|(id, name, specialty, submitted)| DoctorApplication {
        id,
        name: name.into(),
        specialty: specialty.into(),
        submitted: submitted.into(),
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    use ActivityKind::*;
    vec![
        ActivityEntry::new(Success, "New patient registered: Emily Davis", "10 mins ago"),
        ActivityEntry::new(Info, "12 new appointments scheduled", "30 mins ago"),
        ActivityEntry::new(Success, "Payment received: ₹450", "1 hour ago"),
        ActivityEntry::new(Warning, "Low stock alert: Medical supplies", "2 hours ago"),
        ActivityEntry::new(Info, "Dr. Sarah Johnson marked present", "3 hours ago"),
    ]
}

pub fn patient_roster() -> Vec<PatientRecord> {
    [
        ("Neha Verma", "Today", "Hypertension"),
        ("Amit Desai", "Today", "Diabetes"),
        ("Sanjay Kapoor", "Yesterday", "Arthritis"),
        ("Deepika Rao", "2 days ago", "Migraine"),
    ]
    .into_iter()
    .map(|(name, last_visit, condition)| PatientRecord {
        name: name.into(),
        last_visit: last_visit.into(),
        condition: condition.into(),
    })
    .collect()
}
