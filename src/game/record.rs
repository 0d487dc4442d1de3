use super::*;
use crate::*;

/// Snapshot of one completed round from the table's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    round: usize,
    decisions: [Move; 2],
    payoffs: [Payoff; 2],
}

impl Record {
    pub fn new(round: usize, decisions: [Move; 2], payoffs: [Payoff; 2]) -> Self {
        Self {
            round,
            decisions,
            payoffs,
        }
    }
    /// One-based round index.
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn decision(&self, seat: Seat) -> Move {
        self.decisions[seat]
    }
    pub fn payoff(&self, seat: Seat) -> Payoff {
        self.payoffs[seat]
    }
    pub fn decisions(&self) -> [Move; 2] {
        self.decisions
    }
    pub fn payoffs(&self) -> [Payoff; 2] {
        self.payoffs
    }
    /// The round as the player in `seat` experienced it.
    pub fn view(&self, seat: Seat) -> Outcome {
        Outcome::new(
            self.decisions[seat],
            self.decisions[1 - seat],
            self.payoffs[seat],
        )
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "round {:>3}: {} vs {} -> {} / {}",
            self.round, self.decisions[0], self.decisions[1], self.payoffs[0], self.payoffs[1]
        )
    }
}

/// Ordered round-by-round log owned by the game.
pub type History = Vec<Record>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective() {
        let record = Record::new(1, [Move::Cooperate, Move::Defect], [0, 5]);
        assert_eq!(record.view(0), Outcome::new(Move::Cooperate, Move::Defect, 0));
        assert_eq!(record.view(1), Outcome::new(Move::Defect, Move::Cooperate, 5));
    }
}
