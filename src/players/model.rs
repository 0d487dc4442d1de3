use crate::*;
use std::sync::Arc;

/// Player whose moves come from a language model and who keeps a
/// theory-of-mind belief about itself and its opponent.
pub struct ModelPlayer {
    name: String,
    memory: Memory,
    belief: Belief,
    decisions: DecisionModel,
    beliefs: BeliefModel,
}

impl ModelPlayer {
    pub fn new(name: impl Into<String>, decisions: DecisionModel, beliefs: BeliefModel) -> Self {
        Self {
            name: name.into(),
            memory: Memory::default(),
            belief: Belief::default(),
            decisions,
            beliefs,
        }
    }
    /// Both models backed by the same generator.
    pub fn build(
        name: impl Into<String>,
        generator: Arc<dyn Generator>,
        rulebook: &Rulebook,
        kind: &str,
        mode: Mode,
    ) -> Result<Self, ConfigError> {
        let decisions = DecisionModel::new(generator.clone(), rulebook, kind, mode)?;
        let beliefs = BeliefModel::new(generator);
        Ok(Self::new(name, decisions, beliefs))
    }
}

#[async_trait::async_trait]
impl Player for ModelPlayer {
    fn name(&self) -> &str {
        &self.name
    }
    fn memory(&self) -> &Memory {
        &self.memory
    }
    async fn decide(&mut self, _: &Memory) -> Result<Move, DecisionError> {
        self.decisions.decide(&self.belief, &self.memory).await
    }
    fn record(&mut self, outcome: Outcome) {
        self.memory.push(outcome);
    }
    async fn reflect(&mut self, history: &[Record], seat: Seat) -> Result<(), BeliefError> {
        let Some(latest) = history.last().map(|r| r.view(seat)) else {
            return Ok(());
        };
        self.belief = self.beliefs.revise(&self.belief, &latest).await?;
        log::info!("[agent] {} now believes {}", self.name, self.belief);
        Ok(())
    }
    fn belief(&self) -> Option<&Belief> {
        Some(&self.belief)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(script: Arc<Scripted>) -> ModelPlayer {
        ModelPlayer::build(
            "alice",
            script,
            &Rulebook::default(),
            PRISONERS_DILEMMA,
            Mode::Beliefs,
        )
        .unwrap()
    }

    fn history() -> History {
        vec![Record::new(1, [Move::Cooperate, Move::Defect], [0, 5])]
    }

    #[test]
    fn starts_without_information() {
        let player = player(Arc::new(Scripted::default()));
        assert_eq!(player.belief(), Some(&Belief::default()));
        assert!(player.memory().is_empty());
    }

    #[test]
    fn unknown_game_kind_fails_construction() {
        let result = ModelPlayer::build(
            "alice",
            Arc::new(Scripted::default()),
            &Rulebook::default(),
            "Chicken",
            Mode::History,
        );
        assert!(matches!(result, Err(ConfigError::MissingTemplate(_))));
    }

    #[tokio::test]
    async fn decision_reads_own_belief() {
        let script = Arc::new(Scripted::default().reply("wary").reply("hostile").reply("D"));
        let mut player = player(script.clone());
        player.reflect(&history(), 0).await.unwrap();
        let choice = player.decide(&Memory::default()).await.unwrap();
        assert_eq!(choice, Move::Defect);
        let prompts = script.prompts();
        assert!(prompts[2].contains("wary"));
        assert!(prompts[2].contains("hostile"));
    }

    #[tokio::test]
    async fn reflection_swaps_belief() {
        let script = Arc::new(Scripted::default().reply("wary").reply("hostile"));
        let mut player = player(script);
        player.reflect(&history(), 0).await.unwrap();
        assert_eq!(player.belief(), Some(&Belief::new("wary", "hostile")));
    }

    #[tokio::test]
    async fn failed_reflection_keeps_prior_belief() {
        let script = Arc::new(
            Scripted::default()
                .reply("wary")
                .reply("hostile")
                .reply("overwritten?")
                .fail("rate limited"),
        );
        let mut player = player(script);
        player.reflect(&history(), 0).await.unwrap();
        let before = player.belief().cloned();
        let result = player.reflect(&history(), 0).await;
        assert!(matches!(result, Err(BeliefError::Generation(Aspect::Opponent, _))));
        assert_eq!(player.belief().cloned(), before);
        assert_eq!(player.belief().unwrap().own(), "wary");
        assert_eq!(player.belief().unwrap().opponent(), "hostile");
    }

    #[tokio::test]
    async fn reflection_on_empty_history_is_a_no_op() {
        let script = Arc::new(Scripted::default());
        let mut player = player(script.clone());
        player.reflect(&[], 0).await.unwrap();
        assert!(script.prompts().is_empty());
        assert_eq!(player.belief(), Some(&Belief::default()));
    }

    #[tokio::test]
    async fn invalid_decision_is_not_coerced() {
        let mut player = player(Arc::new(Scripted::default().reply("maybe?")));
        let result = player.decide(&Memory::default()).await;
        assert!(matches!(result, Err(DecisionError::Unrecognized('e'))));
    }
}
