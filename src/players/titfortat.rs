use crate::*;

/// Cooperates first, then repeats whatever the opponent did last.
#[derive(Debug, Clone)]
pub struct TitForTat {
    name: String,
    memory: Memory,
}

impl TitForTat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memory: Memory::default(),
        }
    }
    pub fn respond(opponent: &Memory) -> Move {
        opponent
            .last()
            .map(Outcome::mine)
            .unwrap_or(Move::Cooperate)
    }
}

#[async_trait::async_trait]
impl Player for TitForTat {
    fn name(&self) -> &str {
        &self.name
    }
    fn memory(&self) -> &Memory {
        &self.memory
    }
    async fn decide(&mut self, opponent: &Memory) -> Result<Move, DecisionError> {
        Ok(Self::respond(opponent))
    }
    fn record(&mut self, outcome: Outcome) {
        self.memory.push(outcome);
    }
}
