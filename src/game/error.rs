use crate::*;

/// Why a match stopped before playing every requested round.
#[derive(Debug)]
pub enum MatchError {
    Decision {
        round: usize,
        seat: Seat,
        error: DecisionError,
    },
    Belief {
        round: usize,
        seat: Seat,
        error: BeliefError,
    },
}

impl MatchError {
    pub fn round(&self) -> usize {
        match self {
            Self::Decision { round, .. } | Self::Belief { round, .. } => *round,
        }
    }
    pub fn seat(&self) -> Seat {
        match self {
            Self::Decision { seat, .. } | Self::Belief { seat, .. } => *seat,
        }
    }
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decision { round, seat, error } => {
                write!(f, "round {} P{} decision failed: {}", round, seat, error)
            }
            Self::Belief { round, seat, error } => {
                write!(f, "round {} P{} belief update failed: {}", round, seat, error)
            }
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decision { error, .. } => Some(error),
            Self::Belief { error, .. } => Some(error),
        }
    }
}
