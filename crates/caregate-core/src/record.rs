//! Entity records supplied by the external data layer.
//!
//! Records are read-only inputs to the policy engine. Projection derives
//! a partial copy; nothing here is ever mutated in place. Field names on
//! the wire are camelCase to match what the data layer serves.
//!
//! Gated groups that a source record may legitimately omit (confidential
//! notes, financials, nested identity blocks) are `Option`; projection
//! never fabricates a value for an absent field.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{AppointmentId, DoctorId, PatientId};

/// Discriminator for the three entity kinds the policy engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
}

impl EntityKind {
    /// The canonical name of this entity kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patient",
            EntityKind::Doctor => "doctor",
            EntityKind::Appointment => "appointment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient's open-shaped financial block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientFinancials {
    pub outstanding_bills: f64,
    /// Payment entries as served by the billing system; the policy engine
    /// treats them as opaque.
    pub payment_history: Vec<serde_json::Value>,
}

/// Government identity block on a patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    pub date_of_birth: String,
    pub marital_status: String,
}

/// A full patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_type: String,
    pub conditions: Vec<String>,
    /// The treating doctor, when one is assigned. Read by the collection
    /// filter; never validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_doctor: Option<DoctorId>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub medical_history: Vec<String>,
    pub allergies: Vec<String>,
    pub current_medications: Vec<String>,
    pub insurance_provider: String,
    pub insurance_number: String,
    pub emergency_contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidential_notes: Option<String>,
    #[serde(rename = "financialInfo", skip_serializing_if = "Option::is_none")]
    pub financials: Option<PatientFinancials>,
    #[serde(rename = "personalInfo", skip_serializing_if = "Option::is_none")]
    pub identity: Option<PatientIdentity>,
}

/// Credentials block on a doctor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorCredentials {
    pub address: String,
    pub emergency_contact: String,
    pub license_number: String,
}

/// A full doctor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: DoctorId,
    pub name: String,
    pub specialization: String,
    pub experience: u32,
    pub rating: f64,
    pub email: String,
    pub phone: String,
    pub patients_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    /// Aggregated metrics as served by reporting; opaque to the policy
    /// engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_metrics: Option<serde_json::Value>,
    #[serde(rename = "personalInfo", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DoctorCredentials>,
}

/// Billing block on an appointment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentBilling {
    pub amount: f64,
    pub insurance_coverage: f64,
    pub patient_payment: f64,
}

/// A full appointment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidential_notes: Option<String>,
    #[serde(rename = "billingInfo", skip_serializing_if = "Option::is_none")]
    pub billing: Option<AppointmentBilling>,
}

/// One record of any entity kind.
///
/// Used where a caller dispatches on a kind value supplied separately
/// from the record, e.g. the projector's kind-checked entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRecord {
    Patient(PatientRecord),
    Doctor(DoctorRecord),
    Appointment(AppointmentRecord),
}

impl EntityRecord {
    /// The kind of this record.
    pub const fn kind(&self) -> EntityKind {
        match self {
            EntityRecord::Patient(_) => EntityKind::Patient,
            EntityRecord::Doctor(_) => EntityKind::Doctor,
            EntityRecord::Appointment(_) => EntityKind::Appointment,
        }
    }
}

impl From<PatientRecord> for EntityRecord {
    fn from(record: PatientRecord) -> Self {
        EntityRecord::Patient(record)
    }
}

impl From<DoctorRecord> for EntityRecord {
    fn from(record: DoctorRecord) -> Self {
        EntityRecord::Doctor(record)
    }
}

impl From<AppointmentRecord> for EntityRecord {
    fn from(record: AppointmentRecord) -> Self {
        EntityRecord::Appointment(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_patient() -> PatientRecord {
        PatientRecord {
            id: PatientId::new("P1"),
            name: "Jane Roe".into(),
            age: 44,
            gender: "female".into(),
            blood_type: "O+".into(),
            conditions: vec!["hypertension".into()],
            primary_doctor: None,
            email: "jane@example.com".into(),
            phone: "+15551234567".into(),
            address: "12 Elm St".into(),
            medical_history: vec![],
            allergies: vec![],
            current_medications: vec![],
            insurance_provider: "Acme Health".into(),
            insurance_number: "INS-100".into(),
            emergency_contact: "John Roe".into(),
            confidential_notes: None,
            financials: None,
            identity: None,
        }
    }

    #[test]
    fn test_patient_record_wire_names() {
        let json = serde_json::to_value(minimal_patient()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("bloodType"));
        assert!(obj.contains_key("insuranceNumber"));
        // Absent optional groups are omitted, not null.
        assert!(!obj.contains_key("confidentialNotes"));
        assert!(!obj.contains_key("financialInfo"));
        assert!(!obj.contains_key("personalInfo"));
    }

    #[test]
    fn test_entity_record_kind() {
        let record = EntityRecord::from(minimal_patient());
        assert_eq!(record.kind(), EntityKind::Patient);
    }

    #[test]
    fn test_nested_blocks_roundtrip() {
        let mut patient = minimal_patient();
        patient.financials = Some(PatientFinancials {
            outstanding_bills: 120.5,
            payment_history: vec![serde_json::json!({"amount": 60.0})],
        });
        patient.identity = Some(PatientIdentity {
            ssn: Some("000-00-0000".into()),
            date_of_birth: "1982-03-09".into(),
            marital_status: "married".into(),
        });
        let json = serde_json::to_string(&patient).unwrap();
        let back: PatientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(patient, back);
    }
}
