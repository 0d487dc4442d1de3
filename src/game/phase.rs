/// Where a game currently sits in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Players seated, no round started.
    Setup,
    /// Waiting on decisions for the given round.
    Deciding(usize),
    /// Payoffs settled and recorded for the given round.
    Scored(usize),
    /// Players revising their beliefs after the given round.
    Reflecting(usize),
    /// All requested rounds played.
    Finished,
    /// Stopped early by an error in the given round.
    Aborted(usize),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Deciding(n) => write!(f, "deciding round {}", n),
            Self::Scored(n) => write!(f, "scored round {}", n),
            Self::Reflecting(n) => write!(f, "reflecting on round {}", n),
            Self::Finished => write!(f, "finished"),
            Self::Aborted(n) => write!(f, "aborted in round {}", n),
        }
    }
}
