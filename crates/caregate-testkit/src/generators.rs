//! Proptest generators for property-based testing.

use proptest::option;
use proptest::prelude::*;

use caregate_core::{
    AppointmentBilling, AppointmentId, AppointmentRecord, DoctorCredentials, DoctorId,
    DoctorRecord, PatientFinancials, PatientId, PatientIdentity, PatientRecord, Role,
};

/// Generate one of the three known roles.
pub fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::Doctor), Just(Role::Patient)]
}

/// Generate a known role, or `None` for the unknown-role case.
pub fn maybe_role() -> impl Strategy<Value = Option<Role>> {
    option::of(role())
}

/// Generate a role session string, valid or garbage.
pub fn role_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("admin".to_owned()),
        Just("doctor".to_owned()),
        Just("patient".to_owned()),
        "[a-zA-Z]{0,12}",
    ]
}

/// Generate a human name.
pub fn person_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8} [A-Z][a-z]{2,10}".prop_map(String::from)
}

/// Generate an email address.
pub fn email() -> impl Strategy<Value = String> {
    "[a-z]{1,12}@[a-z]{2,10}\\.(com|org|net)".prop_map(String::from)
}

/// Generate an international phone number.
pub fn phone() -> impl Strategy<Value = String> {
    "\\+[0-9]{7,14}".prop_map(String::from)
}

/// Generate a patient identifier.
pub fn patient_id() -> impl Strategy<Value = PatientId> {
    "P[0-9]{1,4}".prop_map(|s| PatientId::new(s))
}

/// Generate a doctor identifier.
pub fn doctor_id() -> impl Strategy<Value = DoctorId> {
    "D[0-9]{1,4}".prop_map(|s| DoctorId::new(s))
}

/// Generate an appointment identifier.
pub fn appointment_id() -> impl Strategy<Value = AppointmentId> {
    "A[0-9]{1,4}".prop_map(|s| AppointmentId::new(s))
}

fn string_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{3,20}".prop_map(String::from), 0..4)
}

/// Generate a full patient record with optional groups present or absent.
pub fn patient_record() -> impl Strategy<Value = PatientRecord> {
    let structural = (
        patient_id(),
        person_name(),
        1u32..110,
        prop_oneof![Just("female".to_owned()), Just("male".to_owned())],
        prop_oneof![Just("O+".to_owned()), Just("A-".to_owned()), Just("AB+".to_owned())],
        string_list(),
        option::of(doctor_id()),
    );
    let contact = (
        email(),
        phone(),
        "[A-Za-z0-9 ]{5,30}".prop_map(String::from),
    );
    let clinical = (string_list(), string_list(), string_list());
    let insurance = (
        "[A-Za-z ]{4,16}".prop_map(String::from),
        "INS-[0-9]{3,6}".prop_map(String::from),
    );
    let sensitive = (
        option::of("[a-z ]{5,40}".prop_map(String::from)),
        option::of((0.0f64..10_000.0).prop_map(|bills| PatientFinancials {
            outstanding_bills: bills,
            payment_history: Vec::new(),
        })),
        option::of("[0-9]{3}-[0-9]{2}-[0-9]{4}".prop_map(|ssn| PatientIdentity {
            ssn: Some(ssn),
            date_of_birth: "1980-01-01".into(),
            marital_status: "single".into(),
        })),
    );

    (structural, contact, clinical, insurance, sensitive).prop_map(
        |(
            (id, name, age, gender, blood_type, conditions, primary_doctor),
            (email, phone, address),
            (medical_history, allergies, current_medications),
            (insurance_provider, insurance_number),
            (confidential_notes, financials, identity),
        )| PatientRecord {
            id,
            name,
            age,
            gender,
            blood_type,
            conditions,
            primary_doctor,
            email,
            phone,
            address,
            medical_history,
            allergies,
            current_medications,
            insurance_provider,
            insurance_number,
            emergency_contact: "next of kin".into(),
            confidential_notes,
            financials,
            identity,
        },
    )
}

/// Generate a full doctor record.
pub fn doctor_record() -> impl Strategy<Value = DoctorRecord> {
    let structural = (
        doctor_id(),
        person_name(),
        "[a-z]{5,15}".prop_map(String::from),
        0u32..50,
        0.0f64..5.0,
    );
    let personal = (email(), phone(), 0u32..500);
    let sensitive = (
        option::of(40_000.0f64..400_000.0),
        option::of(Just(DoctorCredentials {
            address: "1 Main St".into(),
            emergency_contact: "front desk".into(),
            license_number: "MD-00001".into(),
        })),
    );

    (structural, personal, sensitive).prop_map(
        |(
            (id, name, specialization, experience, rating),
            (email, phone, patients_count),
            (salary, credentials),
        )| DoctorRecord {
            id,
            name,
            specialization,
            experience,
            rating,
            email,
            phone,
            patients_count,
            salary,
            performance_metrics: None,
            credentials,
        },
    )
}

/// Generate a full appointment record.
pub fn appointment_record() -> impl Strategy<Value = AppointmentRecord> {
    let participants = (
        appointment_id(),
        patient_id(),
        doctor_id(),
        person_name(),
        person_name(),
    );
    let clinical = (
        "[a-z ]{5,30}".prop_map(String::from),
        option::of("[a-z ]{5,30}".prop_map(String::from)),
        option::of("[a-z ]{5,30}".prop_map(String::from)),
    );
    let rest = (
        prop_oneof![
            Just("pending".to_owned()),
            Just("confirmed".to_owned()),
            Just("completed".to_owned()),
        ],
        option::of("[a-z ]{5,40}".prop_map(String::from)),
        option::of((0.0f64..2_000.0).prop_map(|amount| AppointmentBilling {
            amount,
            insurance_coverage: amount * 0.8,
            patient_payment: amount * 0.2,
        })),
    );

    (participants, clinical, rest).prop_map(
        |(
            (id, patient_id, doctor_id, patient_name, doctor_name),
            (symptoms, diagnosis, treatment),
            (status, confidential_notes, billing),
        )| AppointmentRecord {
            id,
            patient_id,
            doctor_id,
            patient_name,
            doctor_name,
            date: "2026-09-14".into(),
            time: "10:30".into(),
            symptoms,
            diagnosis,
            treatment,
            status,
            confidential_notes,
            billing,
        },
    )
}
