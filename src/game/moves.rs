use serde::Serialize;

/// A player's choice for one round.
/// Crosses text boundaries as the single letters `C` and `D`.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
pub enum Move {
    #[serde(rename = "C")]
    Cooperate,
    #[serde(rename = "D")]
    Defect,
}

impl Move {
    /// Every move, in matrix order.
    pub const ALL: [Move; 2] = [Move::Cooperate, Move::Defect];

    /// Row/column index into the payoff matrix.
    pub fn index(&self) -> usize {
        match self {
            Self::Cooperate => 0,
            Self::Defect => 1,
        }
    }
    pub fn token(&self) -> char {
        char::from(*self)
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cooperate => "cooperate",
            Self::Defect => "defect",
        }
    }
}

impl From<Move> for char {
    fn from(m: Move) -> Self {
        match m {
            Move::Cooperate => 'C',
            Move::Defect => 'D',
        }
    }
}

impl TryFrom<char> for Move {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Self::Cooperate),
            'D' => Ok(Self::Defect),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
