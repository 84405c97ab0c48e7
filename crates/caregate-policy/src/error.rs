//! Error types for the policy engine.
//!
//! Almost everything in this crate fails closed by value (empty
//! collection, all-false profile, identity string) rather than by error.
//! The one true error is a caller/schema mismatch on the projector's
//! kind-checked entry point, which must surface loudly instead of
//! degrading to an empty projection.

use thiserror::Error;

use caregate_core::EntityKind;

/// Errors that can occur during policy operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The caller declared one entity kind but supplied a record of
    /// another. A defect at the call site, not a runtime condition.
    #[error("entity kind mismatch: caller declared {declared}, record is {actual}")]
    EntityKindMismatch {
        declared: EntityKind,
        actual: EntityKind,
    },
}

/// Result type for policy operations.
pub type Result<T> = std::result::Result<T, PolicyError>;
