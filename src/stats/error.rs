/// Statistics were requested over a history with no rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHistory;

impl std::fmt::Display for EmptyHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no rounds have been played")
    }
}

impl std::error::Error for EmptyHistory {}
