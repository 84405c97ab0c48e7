//! Record fixtures.
//!
//! Fully populated records, so tests can tell "hidden by policy" apart
//! from "absent in the source". Builders for ownership-specific variants
//! used by collection-filter tests.

use caregate_core::{
    AppointmentBilling, AppointmentId, AppointmentRecord, DoctorCredentials, DoctorId,
    DoctorRecord, PatientFinancials, PatientId, PatientIdentity, PatientRecord,
};

/// A patient record with every optional group populated.
pub fn sample_patient() -> PatientRecord {
    PatientRecord {
        id: PatientId::new("P1"),
        name: "Jane Roe".into(),
        age: 44,
        gender: "female".into(),
        blood_type: "O+".into(),
        conditions: vec!["hypertension".into(), "asthma".into()],
        primary_doctor: Some(DoctorId::new("D1")),
        email: "jane.roe@example.com".into(),
        phone: "+15551234567".into(),
        address: "12 Elm Street, Springfield".into(),
        medical_history: vec!["appendectomy 2014".into()],
        allergies: vec!["penicillin".into()],
        current_medications: vec!["lisinopril 10mg".into()],
        insurance_provider: "Acme Health".into(),
        insurance_number: "INS-100-200".into(),
        emergency_contact: "John Roe +15559876543".into(),
        confidential_notes: Some("discussed elective procedure".into()),
        financials: Some(PatientFinancials {
            outstanding_bills: 420.50,
            payment_history: vec![
                serde_json::json!({"date": "2026-01-12", "amount": 120.0}),
                serde_json::json!({"date": "2026-03-02", "amount": 80.5}),
            ],
        }),
        identity: Some(PatientIdentity {
            ssn: Some("000-00-0000".into()),
            date_of_birth: "1982-03-09".into(),
            marital_status: "married".into(),
        }),
    }
}

/// A patient record with a chosen id and primary doctor.
pub fn patient_assigned_to(id: &str, doctor: Option<&str>) -> PatientRecord {
    let mut patient = sample_patient();
    patient.id = PatientId::new(id);
    patient.primary_doctor = doctor.map(DoctorId::new);
    patient
}

/// A doctor record with every optional group populated.
pub fn sample_doctor() -> DoctorRecord {
    DoctorRecord {
        id: DoctorId::new("D1"),
        name: "Gregory Park".into(),
        specialization: "cardiology".into(),
        experience: 12,
        rating: 4.7,
        email: "gregory.park@example.com".into(),
        phone: "+15550001111".into(),
        patients_count: 38,
        salary: Some(185_000.0),
        performance_metrics: Some(serde_json::json!({
            "appointmentsPerWeek": 41,
            "satisfaction": 0.93,
        })),
        credentials: Some(DoctorCredentials {
            address: "3 Oak Avenue, Springfield".into(),
            emergency_contact: "Mina Park +15552223333".into(),
            license_number: "MD-48213".into(),
        }),
    }
}

/// An appointment record with every optional group populated.
pub fn sample_appointment() -> AppointmentRecord {
    appointment_owned_by("A1", "D1", "P1")
}

/// An appointment with chosen identifiers, for ownership tests.
pub fn appointment_owned_by(id: &str, doctor: &str, patient: &str) -> AppointmentRecord {
    AppointmentRecord {
        id: AppointmentId::new(id),
        patient_id: PatientId::new(patient),
        doctor_id: DoctorId::new(doctor),
        patient_name: "Jane Roe".into(),
        doctor_name: "Gregory Park".into(),
        date: "2026-09-14".into(),
        time: "10:30".into(),
        symptoms: "chest pain on exertion".into(),
        diagnosis: Some("stable angina".into()),
        treatment: Some("beta blocker, follow-up in 4 weeks".into()),
        status: "confirmed".into(),
        confidential_notes: Some("family history discussed".into()),
        billing: Some(AppointmentBilling {
            amount: 250.0,
            insurance_coverage: 200.0,
            patient_payment: 50.0,
        }),
    }
}
