/// A decision that could not be turned into a legal move.
#[derive(Debug)]
pub enum DecisionError {
    /// The text-generation call itself failed.
    Generation(anyhow::Error),
    /// The completion held no characters once trimmed.
    Empty,
    /// The extracted token is not one of the move letters.
    Unrecognized(char),
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation(e) => write!(f, "generation failed: {:#}", e),
            Self::Empty => write!(f, "empty completion"),
            Self::Unrecognized(c) => write!(f, "unrecognized move token {:?}", c),
        }
    }
}

impl std::error::Error for DecisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generation(e) => Some(&**e),
            _ => None,
        }
    }
}
