//! Error taxonomy shared by record construction and queue operations.

use thiserror::Error;

use crate::employee::EmployeeId;

/// Errors raised by the roster core.
///
/// Every failure is synchronous and raised at the point of violation.
/// A failing queue operation returns before any mutation, so the queue
/// is unchanged after an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A constructor or `insert` argument violated its contract:
    /// empty name, zero id, or a duplicate id on insertion.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// `remove` was given an id with no matching member.
    #[error("no employee with id {id}")]
    NotFound { id: EmployeeId },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = RosterError::InvalidArgument {
            reason: "employee name cannot be empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: employee name cannot be empty"
        );
    }

    #[test]
    fn test_display_not_found() {
        let err = RosterError::NotFound { id: 1007 };
        assert_eq!(err.to_string(), "no employee with id 1007");
    }
}
