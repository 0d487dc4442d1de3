use super::*;
use crate::*;

/// Post-hoc aggregates over a (possibly partial) match history.
pub struct Statistics;

impl Statistics {
    /// Mean payoff per player.
    pub fn average_payoff(history: &[Record]) -> Result<(Utility, Utility), EmptyHistory> {
        let (one, two) = Self::total_payoff(history)?;
        let n = history.len() as Utility;
        Ok((one as Utility / n, two as Utility / n))
    }

    /// Sum of payoffs per player.
    pub fn total_payoff(history: &[Record]) -> Result<(Payoff, Payoff), EmptyHistory> {
        Self::nonempty(history)?;
        Ok(history
            .iter()
            .fold((0, 0), |(a, b), r| (a + r.payoff(0), b + r.payoff(1))))
    }

    /// Most frequent move per player, ties going to whichever appeared first.
    pub fn most_common_move(history: &[Record]) -> Result<(Move, Move), EmptyHistory> {
        let one = Self::mode(history.iter().map(|r| r.decision(0))).ok_or(EmptyHistory)?;
        let two = Self::mode(history.iter().map(|r| r.decision(1))).ok_or(EmptyHistory)?;
        Ok((one, two))
    }

    /// Share of rounds in which each player cooperated.
    pub fn cooperation_rate(history: &[Record]) -> Result<(Utility, Utility), EmptyHistory> {
        Self::nonempty(history)?;
        let n = history.len() as Utility;
        let count = |seat: Seat| {
            history
                .iter()
                .filter(|r| r.decision(seat) == Move::Cooperate)
                .count() as Utility
        };
        Ok((count(0) / n, count(1) / n))
    }

    fn nonempty(history: &[Record]) -> Result<(), EmptyHistory> {
        match history.is_empty() {
            true => Err(EmptyHistory),
            false => Ok(()),
        }
    }

    /// Counts in first-seen order; only a strictly higher count displaces the leader.
    fn mode(moves: impl Iterator<Item = Move>) -> Option<Move> {
        let mut counts = Vec::<(Move, usize)>::new();
        for m in moves {
            match counts.iter_mut().find(|(seen, _)| *seen == m) {
                Some((_, n)) => *n += 1,
                None => counts.push((m, 1)),
            }
        }
        counts
            .into_iter()
            .fold(None, |best: Option<(Move, usize)>, (m, n)| match best {
                Some((_, top)) if top >= n => best,
                _ => Some((m, n)),
            })
            .map(|(m, _)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(rows: &[(Move, Move)]) -> History {
        rows.iter()
            .enumerate()
            .map(|(i, &(a, b))| {
                let (p1, p2) = payoff(a, b);
                Record::new(i + 1, [a, b], [p1, p2])
            })
            .collect()
    }

    use Move::Cooperate as C;
    use Move::Defect as D;

    #[test]
    fn average_payoff() {
        let history = history(&[(C, C), (C, D)]);
        assert_eq!(Statistics::average_payoff(&history), Ok((1.5, 4.0)));
    }

    #[test]
    fn total_payoff() {
        let history = history(&[(C, C), (C, D), (D, D)]);
        assert_eq!(Statistics::total_payoff(&history), Ok((4, 9)));
    }

    #[test]
    fn most_common_move() {
        let history = history(&[(C, D), (D, D), (D, C)]);
        assert_eq!(Statistics::most_common_move(&history), Ok((D, D)));
    }

    #[test]
    fn ties_go_to_first_seen() {
        let history = history(&[(C, D), (D, C), (C, D), (D, C)]);
        assert_eq!(Statistics::most_common_move(&history), Ok((C, D)));
    }

    #[test]
    fn mode_of_nothing_is_none() {
        assert_eq!(Statistics::mode(std::iter::empty()), None);
        assert_eq!(Statistics::mode([D].into_iter()), Some(D));
    }

    #[test]
    fn cooperation_rate() {
        let history = history(&[(C, D), (C, D), (D, D), (C, C)]);
        assert_eq!(Statistics::cooperation_rate(&history), Ok((0.75, 0.25)));
    }

    #[test]
    fn empty_history() {
        assert_eq!(Statistics::average_payoff(&[]), Err(EmptyHistory));
        assert_eq!(Statistics::most_common_move(&[]), Err(EmptyHistory));
        assert_eq!(Statistics::total_payoff(&[]), Err(EmptyHistory));
        assert_eq!(Statistics::cooperation_rate(&[]), Err(EmptyHistory));
    }
}
