//! # Caregate Testkit
//!
//! Testing utilities for the caregate policy engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: fully populated sample records and ownership-specific
//!   builders for filter tests
//! - **Generators**: proptest strategies over roles, identifiers, and
//!   whole entity records
//!
//! ## Fixtures
//!
//! ```rust
//! use caregate_testkit::fixtures::{appointment_owned_by, sample_patient};
//!
//! let patient = sample_patient();
//! assert_eq!(patient.id.as_str(), "P1");
//!
//! let appointment = appointment_owned_by("A1", "D2", "P1");
//! assert_eq!(appointment.doctor_id.as_str(), "D2");
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use caregate_testkit::generators::{maybe_role, patient_record};
//!
//! proptest! {
//!     #[test]
//!     fn projection_never_panics(record in patient_record(), role in maybe_role()) {
//!         let _ = caregate_policy::project_patient(&record, role, None);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{
    appointment_owned_by, patient_assigned_to, sample_appointment, sample_doctor, sample_patient,
};
pub use generators::{
    appointment_record, doctor_record, maybe_role, patient_record, role, role_string,
};
