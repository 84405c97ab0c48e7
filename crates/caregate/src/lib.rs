//! # Caregate
//!
//! The unified API for caregate - role-based data visibility for
//! hospital patient, doctor, and appointment records.
//!
//! ## Overview
//!
//! Caregate decides, given a user role, which fields of a record may be
//! exposed, which records of a collection may be enumerated, and how
//! sensitive scalars are partially masked:
//!
//! - **Permission table**: a fixed role-to-capability mapping, the
//!   single authority for what a role may do
//! - **Field projection**: typed, per-entity views containing only the
//!   fields a role may see
//! - **Collection filtering**: ownership-based list access, applied
//!   before projection
//! - **Redaction**: partial masking of phone numbers and emails
//!
//! The engine is pure and stateless: role and identity are explicit
//! arguments everywhere, there is no I/O, and concurrent callers need no
//! coordination.
//!
//! ## Usage
//!
//! ```rust
//! use caregate::AccessContext;
//! use caregate_testkit::fixtures::{appointment_owned_by, sample_patient};
//!
//! let ctx = AccessContext::from_session("doctor", Some("D1"));
//!
//! // List-level: which appointments may this doctor enumerate?
//! let all = vec![
//!     appointment_owned_by("A1", "D1", "P1"),
//!     appointment_owned_by("A2", "D2", "P2"),
//! ];
//! let mine = ctx.filter(&all);
//! assert_eq!(mine.len(), 1);
//!
//! // Field-level: project what survived.
//! let view = ctx.project_appointment(mine[0]);
//! assert!(view.billing.is_none());
//!
//! // Scalar-level: mask what gets displayed.
//! assert_eq!(ctx.mask("jane.roe@example.com"), "ja******@example.com");
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `caregate::core` - roles, capability table, entity records
//! - `caregate::policy` - projection, filtering, redaction, queries

pub mod context;

// Re-export component crates
pub use caregate_core as core;
pub use caregate_policy as policy;

// Re-export main types for convenience
pub use context::AccessContext;

// Re-export commonly used core and policy types
pub use caregate_core::{
    AppointmentId, AppointmentRecord, Capability, CapabilityProfile, DoctorId, DoctorRecord,
    EntityKind, EntityRecord, PatientId, PatientRecord, Role,
};
pub use caregate_policy::{
    can_access, filter_collection, mask, project, AppointmentView, DoctorView, Owned, PatientView,
    PolicyError, ProjectedView,
};
