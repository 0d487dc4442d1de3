use super::*;
use crate::*;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeTuple;

/// One round seen from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    mine: Move,
    theirs: Move,
    payoff: Payoff,
}

impl Outcome {
    pub fn new(mine: Move, theirs: Move, payoff: Payoff) -> Self {
        Self {
            mine,
            theirs,
            payoff,
        }
    }
    pub fn mine(&self) -> Move {
        self.mine
    }
    pub fn theirs(&self) -> Move {
        self.theirs
    }
    pub fn payoff(&self) -> Payoff {
        self.payoff
    }
    /// What the opponent earned, read off the matrix from their side.
    pub fn their_payoff(&self) -> Payoff {
        payoff(self.theirs, self.mine).0
    }
}

/// Rendered as a `(decision, opponent decision, payoff)` tuple.
impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.mine)?;
        tuple.serialize_element(&self.theirs)?;
        tuple.serialize_element(&self.payoff)?;
        tuple.end()
    }
}

/// Private append-only log of a player's past rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Memory(Vec<Outcome>);

impl Memory {
    pub fn push(&mut self, outcome: Outcome) {
        self.0.push(outcome);
    }
    pub fn last(&self) -> Option<&Outcome> {
        self.0.last()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.0.iter()
    }
    /// JSON array of `[decision, opponent decision, payoff]` tuples.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .expect("outcome tuples of letters and integers always serialize")
    }
}

impl From<Vec<Outcome>> for Memory {
    fn from(outcomes: Vec<Outcome>) -> Self {
        Self(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_tuples() {
        let memory = Memory::from(vec![
            Outcome::new(Move::Cooperate, Move::Defect, 0),
            Outcome::new(Move::Defect, Move::Defect, 1),
        ]);
        assert_eq!(memory.to_json(), r#"[["C","D",0],["D","D",1]]"#);
    }

    #[test]
    fn empty_memory_renders_as_empty_array() {
        assert_eq!(Memory::default().to_json(), "[]");
    }

    #[test]
    fn opponent_payoff_from_matrix() {
        let outcome = Outcome::new(Move::Cooperate, Move::Defect, 0);
        assert_eq!(outcome.their_payoff(), 5);
    }
}
