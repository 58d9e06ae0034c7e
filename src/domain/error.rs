//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations of the parcel store.
/// All of them are recoverable and leave the tree unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown station: {0}")]
    UnknownStation(String),

    #[error("unsupported carrier code: {0}")]
    UnknownCarrier(String),

    #[error("parcel {record_id} already stored under {carrier} at {station}")]
    DuplicateRecord {
        station: String,
        carrier: String,
        record_id: String,
    },

    #[error("no parcel with pickup code {code} at {station}")]
    NotFound { station: String, code: String },

    #[error("parcel {record_id} has already been picked up")]
    AlreadyPicked { record_id: String },

    #[error("invalid pickup code: {0:?}")]
    InvalidPickupCode(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
