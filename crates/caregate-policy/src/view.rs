//! Projected views: role-filtered partial copies of entity records.
//!
//! Each entity kind has its own view shape, so the set of fields that can
//! legally appear per kind is fixed at compile time. Every gated field is
//! `Option`; serialization skips `None`, so a serialized view contains
//! exactly the keys the role may see.
//!
//! A view is built as a full copy of a record and then narrowed by the
//! projector. Narrowing only ever clears fields, which is what makes
//! repeated projection idempotent.

use serde::{Deserialize, Serialize};

use caregate_core::{
    AppointmentBilling, AppointmentId, AppointmentRecord, DoctorCredentials, DoctorId,
    DoctorRecord, EntityKind, PatientFinancials, PatientId, PatientIdentity, PatientRecord,
};

/// Role-filtered copy of a [`PatientRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientView {
    // Structural anchors, present for every role.
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_type: String,
    pub conditions: Vec<String>,

    // Contact group, gated by canViewPersonalInfo (with the own-record
    // exception for patients).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_doctor: Option<DoctorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    // Clinical group, gated by canViewMedicalHistory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_medications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,

    // Financial group, gated by canViewFinancialData.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_number: Option<String>,
    #[serde(rename = "financialInfo", skip_serializing_if = "Option::is_none")]
    pub financials: Option<PatientFinancials>,

    // Confidential group, gated by canViewConfidentialNotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidential_notes: Option<String>,
    #[serde(rename = "personalInfo", skip_serializing_if = "Option::is_none")]
    pub identity: Option<PatientIdentity>,
}

impl From<&PatientRecord> for PatientView {
    /// Full, unfiltered copy. The projector narrows it afterwards.
    fn from(record: &PatientRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            age: record.age,
            gender: record.gender.clone(),
            blood_type: record.blood_type.clone(),
            conditions: record.conditions.clone(),
            primary_doctor: record.primary_doctor.clone(),
            email: Some(record.email.clone()),
            phone: Some(record.phone.clone()),
            address: Some(record.address.clone()),
            medical_history: Some(record.medical_history.clone()),
            allergies: Some(record.allergies.clone()),
            current_medications: Some(record.current_medications.clone()),
            emergency_contact: Some(record.emergency_contact.clone()),
            insurance_provider: Some(record.insurance_provider.clone()),
            insurance_number: Some(record.insurance_number.clone()),
            financials: record.financials.clone(),
            confidential_notes: record.confidential_notes.clone(),
            identity: record.identity.clone(),
        }
    }
}

/// Role-filtered copy of a [`DoctorRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorView {
    // Structural anchors.
    pub id: DoctorId,
    pub name: String,
    pub specialization: String,
    pub experience: u32,
    pub rating: f64,

    // Personal group, gated by canViewPersonalInfo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patients_count: Option<u32>,

    // Financial group, gated by canViewFinancialData.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,

    // Reporting data, gated by canViewSystemReports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_metrics: Option<serde_json::Value>,

    // Confidential group, gated by canViewConfidentialNotes.
    #[serde(rename = "personalInfo", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DoctorCredentials>,
}

impl From<&DoctorRecord> for DoctorView {
    /// Full, unfiltered copy. The projector narrows it afterwards.
    fn from(record: &DoctorRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            specialization: record.specialization.clone(),
            experience: record.experience,
            rating: record.rating,
            email: Some(record.email.clone()),
            phone: Some(record.phone.clone()),
            patients_count: Some(record.patients_count),
            salary: record.salary,
            performance_metrics: record.performance_metrics.clone(),
            credentials: record.credentials.clone(),
        }
    }
}

/// Role-filtered copy of an [`AppointmentRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    // Structural anchors.
    pub id: AppointmentId,
    pub date: String,
    pub time: String,
    pub status: String,

    // Participant identities, gated by canViewPersonalInfo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<DoctorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,

    // Clinical group, gated by canViewMedicalHistory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,

    // Financial group, gated by canViewFinancialData.
    #[serde(rename = "billingInfo", skip_serializing_if = "Option::is_none")]
    pub billing: Option<AppointmentBilling>,

    // Confidential group, gated by canViewConfidentialNotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidential_notes: Option<String>,
}

impl From<&AppointmentRecord> for AppointmentView {
    /// Full, unfiltered copy. The projector narrows it afterwards.
    fn from(record: &AppointmentRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
            status: record.status.clone(),
            patient_id: Some(record.patient_id.clone()),
            patient_name: Some(record.patient_name.clone()),
            doctor_id: Some(record.doctor_id.clone()),
            doctor_name: Some(record.doctor_name.clone()),
            symptoms: Some(record.symptoms.clone()),
            diagnosis: record.diagnosis.clone(),
            treatment: record.treatment.clone(),
            billing: record.billing.clone(),
            confidential_notes: record.confidential_notes.clone(),
        }
    }
}

/// A projected view of any entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectedView {
    Patient(PatientView),
    Doctor(DoctorView),
    Appointment(AppointmentView),
}

impl ProjectedView {
    /// The entity kind of this view.
    pub const fn kind(&self) -> EntityKind {
        match self {
            ProjectedView::Patient(_) => EntityKind::Patient,
            ProjectedView::Doctor(_) => EntityKind::Doctor,
            ProjectedView::Appointment(_) => EntityKind::Appointment,
        }
    }
}
