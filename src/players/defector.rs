use crate::*;

/// Defects every round, whatever happens.
#[derive(Debug, Clone)]
pub struct AlwaysDefect {
    name: String,
    memory: Memory,
}

impl AlwaysDefect {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memory: Memory::default(),
        }
    }
}

#[async_trait::async_trait]
impl Player for AlwaysDefect {
    fn name(&self) -> &str {
        &self.name
    }
    fn memory(&self) -> &Memory {
        &self.memory
    }
    async fn decide(&mut self, _: &Memory) -> Result<Move, DecisionError> {
        Ok(Move::Defect)
    }
    fn record(&mut self, outcome: Outcome) {
        self.memory.push(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_defects() {
        let mut player = AlwaysDefect::new("grim");
        let histories = [
            Memory::default(),
            Memory::from(vec![Outcome::new(Move::Cooperate, Move::Cooperate, 3)]),
            Memory::from(vec![Outcome::new(Move::Defect, Move::Defect, 1)]),
        ];
        for history in histories.iter() {
            assert_eq!(player.decide(history).await.unwrap(), Move::Defect);
            player.record(Outcome::new(Move::Defect, Move::Cooperate, 5));
        }
        assert_eq!(player.memory().len(), 3);
    }
}
