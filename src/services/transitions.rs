use crate::models::assignment::AssignmentStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: AssignmentStatus,
        to: AssignmentStatus,
    },
}

/// Validates if an assignment status transition is allowed
pub fn validate_transition(
    from: AssignmentStatus,
    to: AssignmentStatus,
) -> Result<(), TransitionError> {
    use AssignmentStatus::*;

    match (from, to) {
        // Same state is always valid (no-op)
        (a, b) if a == b => Ok(()),

        // Valid transitions
        (Pending, Active) => Ok(()),
        (Active, Returned) => Ok(()),
        (Active, Overdue) => Ok(()),
        (Active, Lost) => Ok(()),
        (Active, Damaged) => Ok(()),
        (Overdue, Returned) => Ok(()),
        (Overdue, Lost) => Ok(()),

        // All other transitions are invalid
        _ => Err(TransitionError::InvalidTransition { from, to }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_state_valid() {
        assert!(validate_transition(AssignmentStatus::Active, AssignmentStatus::Active).is_ok());
    }

    #[test]
    fn test_pending_to_active_valid() {
        assert!(validate_transition(AssignmentStatus::Pending, AssignmentStatus::Active).is_ok());
    }

    #[test]
    fn test_active_to_returned_valid() {
        assert!(validate_transition(AssignmentStatus::Active, AssignmentStatus::Returned).is_ok());
    }

    #[test]
    fn test_active_to_overdue_valid() {
        assert!(validate_transition(AssignmentStatus::Active, AssignmentStatus::Overdue).is_ok());
    }

    #[test]
    fn test_active_to_lost_valid() {
        assert!(validate_transition(AssignmentStatus::Active, AssignmentStatus::Lost).is_ok());
    }

    #[test]
    fn test_overdue_to_returned_valid() {
        assert!(validate_transition(AssignmentStatus::Overdue, AssignmentStatus::Returned).is_ok());
    }

    #[test]
    fn test_returned_to_active_invalid() {
        let result = validate_transition(AssignmentStatus::Returned, AssignmentStatus::Active);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            TransitionError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn test_pending_to_returned_invalid() {
        assert!(validate_transition(AssignmentStatus::Pending, AssignmentStatus::Returned).is_err());
    }

    #[test]
    fn test_lost_to_active_invalid() {
        assert!(validate_transition(AssignmentStatus::Lost, AssignmentStatus::Active).is_err());
    }

    #[test]
    fn test_damaged_to_returned_invalid() {
        assert!(
            validate_transition(AssignmentStatus::Damaged, AssignmentStatus::Returned).is_err()
        );
    }
}
