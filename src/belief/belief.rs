/// Seed text for both halves of a fresh belief.
pub const NO_INFORMATION: &str = "No information yet.";

/// Which half of a belief a revision targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Own,
    Opponent,
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Own => write!(f, "self-belief"),
            Self::Opponent => write!(f, "opponent-belief"),
        }
    }
}

/// An agent's free-text picture of itself and of its opponent.
///
/// Opaque: the text is only ever spliced into prompts, never inspected.
/// Replaced as a whole after each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Belief {
    own: String,
    opponent: String,
}

impl Default for Belief {
    fn default() -> Self {
        Self::new(NO_INFORMATION, NO_INFORMATION)
    }
}

impl Belief {
    pub fn new(own: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            own: own.into(),
            opponent: opponent.into(),
        }
    }
    pub fn own(&self) -> &str {
        &self.own
    }
    pub fn opponent(&self) -> &str {
        &self.opponent
    }
    pub fn aspect(&self, aspect: Aspect) -> &str {
        match aspect {
            Aspect::Own => &self.own,
            Aspect::Opponent => &self.opponent,
        }
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "self: {} | opponent: {}", self.own, self.opponent)
    }
}
