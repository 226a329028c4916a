use thiserror::Error;

/// Client-input failures of the roster operations.
///
/// All three variants describe bad requests, not system faults: given a known
/// activity and a consistent roster, the operations cannot fail. Transports
/// map [`ActivityNotFound`](RosterError::ActivityNotFound) to a missing-resource
/// response and the other two to a bad-request response.
///
/// The `Display` strings are part of the external contract and are echoed
/// verbatim to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

/// Shorthand for results of roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
