//! The access context: one caller's role and identity, made explicit.
//!
//! The surrounding application resolves "who is asking" once per
//! request/session and builds an [`AccessContext`] from it. Every method
//! forwards to the pure policy functions with the stored role and
//! requester; nothing here reads ambient state.

use tracing::{debug, warn};

use caregate_core::{
    AppointmentRecord, CapabilityProfile, DoctorRecord, EntityKind, EntityRecord, PatientRecord,
    Role,
};
use caregate_policy::{
    can_access, filter_collection, is_admin, mask, project, project_appointment, project_doctor,
    project_patient, AppointmentView, DoctorView, Owned, PatientView, ProjectedView, Result,
};

/// An immutable bundle of role and requesting identity.
///
/// Cheap to clone, safe to share across threads; the policy functions it
/// forwards to hold no state of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    role: Option<Role>,
    requester: Option<String>,
}

impl AccessContext {
    /// Build a context from an already-parsed role and identity.
    pub fn new(role: Option<Role>, requester: Option<String>) -> Self {
        Self { role, requester }
    }

    /// Build a context from raw session values.
    ///
    /// An unrecognized role string degrades to the unknown role rather
    /// than failing, matching the rest of the engine.
    pub fn from_session(role: &str, requester: Option<&str>) -> Self {
        let parsed = Role::parse(role);
        if parsed.is_none() {
            debug!(role, "unrecognized session role, using restricted profile");
        }
        Self {
            role: parsed,
            requester: requester.map(str::to_owned),
        }
    }

    /// An anonymous context: unknown role, no identity.
    pub fn anonymous() -> Self {
        Self {
            role: None,
            requester: None,
        }
    }

    /// The context's role.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The context's requesting identity.
    pub fn requester(&self) -> Option<&str> {
        self.requester.as_deref()
    }

    /// The capability profile for this context's role.
    pub fn profile(&self) -> &'static CapabilityProfile {
        CapabilityProfile::for_role(self.role)
    }

    /// Whether this context holds the capability with the given name.
    pub fn can(&self, capability: &str) -> bool {
        let granted = can_access(capability, self.role);
        if !granted {
            debug!(capability, role = ?self.role, "capability denied");
        }
        granted
    }

    /// Whether this context is an admin.
    pub fn is_admin(&self) -> bool {
        is_admin(self.role)
    }

    /// Project one patient record for this context.
    pub fn project_patient(&self, record: &PatientRecord) -> PatientView {
        project_patient(record, self.role, self.requester())
    }

    /// Project one doctor record for this context.
    pub fn project_doctor(&self, record: &DoctorRecord) -> DoctorView {
        project_doctor(record, self.role)
    }

    /// Project one appointment record for this context.
    pub fn project_appointment(&self, record: &AppointmentRecord) -> AppointmentView {
        project_appointment(record, self.role)
    }

    /// Kind-checked projection of any entity record.
    pub fn project(&self, record: &EntityRecord, kind: EntityKind) -> Result<ProjectedView> {
        let view = project(record, kind, self.role, self.requester());
        if let Err(ref err) = view {
            warn!(%err, "projection rejected");
        }
        view
    }

    /// Reduce a collection to the records this context may enumerate.
    pub fn filter<'a, T: Owned>(&self, records: &'a [T]) -> Vec<&'a T> {
        let kept = filter_collection(records, self.role, self.requester());
        if kept.is_empty() && !records.is_empty() {
            debug!(
                role = ?self.role,
                requester = ?self.requester,
                total = records.len(),
                "collection filtered to empty"
            );
        }
        kept
    }

    /// Mask a sensitive scalar for this context's role.
    pub fn mask(&self, value: &str) -> String {
        mask(value, self.role)
    }
}
