use thiserror::Error;

use crate::features::farms::models::FarmStatus;

/// Errors raised by the farm record's guarded mutators.
///
/// Both variants leave the record exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FarmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot {action} farm in {from} status")]
    InvalidStateTransition {
        from: FarmStatus,
        action: &'static str,
    },
}

impl FarmError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        FarmError::InvalidArgument(message.into())
    }

    pub(crate) fn transition(from: FarmStatus, action: &'static str) -> Self {
        FarmError::InvalidStateTransition { from, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_message_names_status_and_action() {
        let err = FarmError::transition(FarmStatus::Suspended, "activate");

        assert_eq!(err.to_string(), "Cannot activate farm in SUSPENDED status");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = FarmError::invalid_argument("Crop type must not be blank");

        assert_eq!(err.to_string(), "Invalid argument: Crop type must not be blank");
    }
}
