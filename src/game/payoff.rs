use super::*;
use crate::*;

/// Fixed Prisoner's Dilemma payoffs, `MATRIX[own][opponent] = (own, opponent)`.
pub const MATRIX: [[(Payoff, Payoff); 2]; 2] = [
    [(REWARD, REWARD), (SUCKER, TEMPTATION)],
    [(TEMPTATION, SUCKER), (PUNISHMENT, PUNISHMENT)],
];

/// Utility pair earned when `mine` meets `theirs`.
pub fn payoff(mine: Move, theirs: Move) -> (Payoff, Payoff) {
    MATRIX[mine.index()][theirs.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_entries() {
        assert_eq!(payoff(Move::Cooperate, Move::Cooperate), (3, 3));
        assert_eq!(payoff(Move::Cooperate, Move::Defect), (0, 5));
        assert_eq!(payoff(Move::Defect, Move::Cooperate), (5, 0));
        assert_eq!(payoff(Move::Defect, Move::Defect), (1, 1));
    }

    #[test]
    fn diagonal_symmetry() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(payoff(a, b).0, payoff(b, a).1);
            }
        }
    }
}
