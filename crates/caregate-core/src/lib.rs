//! # Caregate Core
//!
//! Strong types for the caregate data-visibility policy: roles, the fixed
//! capability table, and the hospital entity records it governs.
//!
//! This crate contains no I/O and no policy logic. It is pure data: the
//! policy engine in `caregate-policy` consumes these types and derives
//! projected views from them.
//!
//! ## Key Types
//!
//! - [`Role`] - The acting party's category (admin, doctor, patient)
//! - [`CapabilityProfile`] - The fixed per-role capability table
//! - [`PatientRecord`], [`DoctorRecord`], [`AppointmentRecord`] - Entity
//!   records as served by the external data layer
//!
//! ## Fail-closed defaults
//!
//! Unknown role strings parse to `None` and map to the all-false
//! [`CapabilityProfile::RESTRICTED`] profile. Unknown capability names
//! parse to `None`. Neither is an error.

pub mod capability;
pub mod record;
pub mod role;
pub mod types;

pub use capability::{Capability, CapabilityProfile};
pub use record::{
    AppointmentBilling, AppointmentRecord, DoctorCredentials, DoctorRecord, EntityKind,
    EntityRecord, PatientFinancials, PatientIdentity, PatientRecord,
};
pub use role::Role;
pub use types::{AppointmentId, DoctorId, PatientId};
