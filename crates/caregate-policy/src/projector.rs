//! Field projection: derive the view of one record for one role.
//!
//! Projection is a two-step pipeline: copy the record into a full view,
//! then narrow the view by clearing every group the role's profile does
//! not grant. Narrowing a view that is already narrowed is a no-op, so
//! projection is idempotent.
//!
//! Precondition: callers filter collections (see [`crate::filter`])
//! before projecting. Projection does not re-check ownership; a record
//! passed in here is assumed to be one the role may enumerate.

use caregate_core::{
    AppointmentRecord, CapabilityProfile, DoctorRecord, EntityKind, EntityRecord, PatientRecord,
    Role,
};

use crate::error::{PolicyError, Result};
use crate::view::{AppointmentView, DoctorView, PatientView, ProjectedView};

/// Project a patient record for a role.
///
/// `requester` is the identity of the calling user, used only for the
/// own-record exception: a patient viewing their own record always sees
/// their contact fields.
pub fn project_patient(
    record: &PatientRecord,
    role: Option<Role>,
    requester: Option<&str>,
) -> PatientView {
    restrict_patient(PatientView::from(record), role, requester)
}

/// Narrow an existing patient view for a role.
///
/// Only ever clears fields. Restricting twice with the same arguments
/// yields the same view.
pub fn restrict_patient(
    mut view: PatientView,
    role: Option<Role>,
    requester: Option<&str>,
) -> PatientView {
    // Admin override: full record, checked before any per-field rule.
    if role == Some(Role::Admin) {
        return view;
    }

    let profile = CapabilityProfile::for_role(role);
    let own_record =
        role == Some(Role::Patient) && requester.is_some_and(|who| who == view.id.as_str());

    if !profile.can_view_personal_info && !own_record {
        view.primary_doctor = None;
        view.email = None;
        view.phone = None;
        view.address = None;
    }
    if !profile.can_view_medical_history {
        view.medical_history = None;
        view.allergies = None;
        view.current_medications = None;
        view.emergency_contact = None;
    }
    if !profile.can_view_financial_data {
        view.insurance_provider = None;
        view.insurance_number = None;
        view.financials = None;
    }
    if !profile.can_view_confidential_notes {
        view.confidential_notes = None;
        view.identity = None;
    }

    view
}

/// Project a doctor record for a role.
pub fn project_doctor(record: &DoctorRecord, role: Option<Role>) -> DoctorView {
    restrict_doctor(DoctorView::from(record), role)
}

/// Narrow an existing doctor view for a role.
pub fn restrict_doctor(mut view: DoctorView, role: Option<Role>) -> DoctorView {
    if role == Some(Role::Admin) {
        return view;
    }

    let profile = CapabilityProfile::for_role(role);

    if !profile.can_view_personal_info {
        view.email = None;
        view.phone = None;
        view.patients_count = None;
    }
    if !profile.can_view_financial_data {
        view.salary = None;
    }
    if !profile.can_view_system_reports {
        view.performance_metrics = None;
    }
    if !profile.can_view_confidential_notes {
        view.credentials = None;
    }

    view
}

/// Project an appointment record for a role.
pub fn project_appointment(record: &AppointmentRecord, role: Option<Role>) -> AppointmentView {
    restrict_appointment(AppointmentView::from(record), role)
}

/// Narrow an existing appointment view for a role.
pub fn restrict_appointment(mut view: AppointmentView, role: Option<Role>) -> AppointmentView {
    if role == Some(Role::Admin) {
        return view;
    }

    let profile = CapabilityProfile::for_role(role);

    if !profile.can_view_personal_info {
        view.patient_id = None;
        view.patient_name = None;
        view.doctor_id = None;
        view.doctor_name = None;
    }
    if !profile.can_view_medical_history {
        view.symptoms = None;
        view.diagnosis = None;
        view.treatment = None;
    }
    if !profile.can_view_financial_data {
        view.billing = None;
    }
    if !profile.can_view_confidential_notes {
        view.confidential_notes = None;
    }

    view
}

/// Kind-checked projection entry point.
///
/// The caller declares the entity kind it believes it is holding; a
/// mismatch with the record's actual kind is a caller/schema defect and
/// fails fast rather than producing a silently wrong projection.
pub fn project(
    record: &EntityRecord,
    kind: EntityKind,
    role: Option<Role>,
    requester: Option<&str>,
) -> Result<ProjectedView> {
    if record.kind() != kind {
        return Err(PolicyError::EntityKindMismatch {
            declared: kind,
            actual: record.kind(),
        });
    }

    Ok(match record {
        EntityRecord::Patient(patient) => {
            ProjectedView::Patient(project_patient(patient, role, requester))
        }
        EntityRecord::Doctor(doctor) => ProjectedView::Doctor(project_doctor(doctor, role)),
        EntityRecord::Appointment(appointment) => {
            ProjectedView::Appointment(project_appointment(appointment, role))
        }
    })
}
