//! # Caregate Policy
//!
//! The role-based data-visibility engine: field projection, collection
//! filtering, redaction, and capability queries.
//!
//! ## Overview
//!
//! Every operation is a pure, synchronous, total function over its
//! explicit inputs. Role and requesting identity are always parameters,
//! never read from ambient state, so the engine is independently
//! testable and safe to call from any thread without coordination.
//!
//! ## Operations
//!
//! - [`project_patient`] / [`project_doctor`] / [`project_appointment`] /
//!   [`project`] - derive the view of one record for one role
//! - [`filter_collection`] - reduce a collection to what a role may
//!   enumerate, by ownership
//! - [`mask`] - partially obscure a sensitive scalar (phone, email)
//! - [`can_access`] - boolean gate for a named capability
//!
//! ## Fail-closed behavior
//!
//! Unknown roles project structural fields only and enumerate nothing.
//! A missing requester identity enumerates nothing. Unknown capability
//! names are false. The only hard error is the projector's entity-kind
//! mismatch, which is a call-site defect and must not be swallowed.
//!
//! ## Usage
//!
//! ```rust
//! use caregate_core::Role;
//! use caregate_policy::{can_access, mask};
//!
//! let role = Role::parse("doctor");
//! assert!(can_access("canViewMedicalHistory", role));
//! assert_eq!(mask("+15551234567", role), "+155********");
//! ```

pub mod error;
pub mod filter;
pub mod projector;
pub mod query;
pub mod redact;
pub mod view;

pub use error::{PolicyError, Result};
pub use filter::{filter_collection, Owned};
pub use projector::{
    project, project_appointment, project_doctor, project_patient, restrict_appointment,
    restrict_doctor, restrict_patient,
};
pub use query::{
    can_access, can_access_admin_features, has_admin_privileges, holds, is_admin,
    should_show_admin_links,
};
pub use redact::{mask, MASK_CHAR};
pub use view::{AppointmentView, DoctorView, PatientView, ProjectedView};
