//! Submission status values

use super::validation::ValidationError;

/// Why a submission attempt ended in failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// One or more fields failed validation; no request was made
    Invalid(Vec<ValidationError>),
    /// Terms or newsletter consent not given; no request was made
    ConsentRequired,
    /// No connection to the endpoint could be made
    Offline(String),
    /// The request was made and did not succeed
    Network(String),
}

/// Lifecycle of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_in_flight_states() {
        assert!(SubmissionStatus::Validating.is_in_flight());
        assert!(SubmissionStatus::Submitting.is_in_flight());
        assert!(!SubmissionStatus::Succeeded.is_in_flight());
        assert!(!SubmissionStatus::Failed(FailureReason::ConsentRequired).is_in_flight());
    }
}
