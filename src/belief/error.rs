use super::*;

/// A belief revision that failed; the prior belief stays in place.
#[derive(Debug)]
pub enum BeliefError {
    /// The text-generation call for one half of the belief failed.
    Generation(Aspect, anyhow::Error),
    /// The model answered with nothing to use as the revised view.
    Blank(Aspect),
}

impl BeliefError {
    pub fn aspect(&self) -> Aspect {
        match self {
            Self::Generation(aspect, _) | Self::Blank(aspect) => *aspect,
        }
    }
}

impl std::fmt::Display for BeliefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation(aspect, e) => write!(f, "{} revision failed: {:#}", aspect, e),
            Self::Blank(aspect) => write!(f, "{} revision came back blank", aspect),
        }
    }
}

impl std::error::Error for BeliefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generation(_, e) => Some(&**e),
            Self::Blank(_) => None,
        }
    }
}
