//! Collection filtering: list-level access control.
//!
//! Orthogonal to field projection. Callers apply both in sequence:
//! filter the collection down to what the role may enumerate, then
//! project each surviving record.

use caregate_core::{AppointmentRecord, DoctorId, DoctorRecord, PatientId, PatientRecord, Role};

/// Ownership relations the collection filter reads off a record.
///
/// The policy engine does not own or validate these relations; it only
/// compares them against the requesting identity.
pub trait Owned {
    /// The doctor this record belongs to, if the record carries one.
    fn doctor_owner(&self) -> Option<&DoctorId>;

    /// The patient this record belongs to, if the record carries one.
    fn patient_owner(&self) -> Option<&PatientId>;
}

impl Owned for AppointmentRecord {
    fn doctor_owner(&self) -> Option<&DoctorId> {
        Some(&self.doctor_id)
    }

    fn patient_owner(&self) -> Option<&PatientId> {
        Some(&self.patient_id)
    }
}

impl Owned for PatientRecord {
    fn doctor_owner(&self) -> Option<&DoctorId> {
        self.primary_doctor.as_ref()
    }

    fn patient_owner(&self) -> Option<&PatientId> {
        Some(&self.id)
    }
}

impl Owned for DoctorRecord {
    // Doctor listings are enumerated through the canViewAllDoctors
    // capability, not through ownership, so a doctor record has no
    // owner relation of either kind.
    fn doctor_owner(&self) -> Option<&DoctorId> {
        None
    }

    fn patient_owner(&self) -> Option<&PatientId> {
        None
    }
}

/// Reduce a collection to the records a role may enumerate.
///
/// - Admin: the whole collection, untouched.
/// - Doctor: records whose doctor owner equals `requester`.
/// - Patient: records whose patient owner equals `requester`.
/// - Unknown role, or Doctor/Patient with no requester identity: empty.
///
/// A pure filter: original relative order, no dedup, no pagination.
pub fn filter_collection<'a, T: Owned>(
    records: &'a [T],
    role: Option<Role>,
    requester: Option<&str>,
) -> Vec<&'a T> {
    match role {
        Some(Role::Admin) => records.iter().collect(),
        Some(Role::Doctor) => {
            let Some(who) = requester else {
                return Vec::new();
            };
            records
                .iter()
                .filter(|record| record.doctor_owner().map(DoctorId::as_str) == Some(who))
                .collect()
        }
        Some(Role::Patient) => {
            let Some(who) = requester else {
                return Vec::new();
            };
            records
                .iter()
                .filter(|record| record.patient_owner().map(PatientId::as_str) == Some(who))
                .collect()
        }
        None => Vec::new(),
    }
}
