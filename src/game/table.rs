use super::*;
use crate::*;

/// Two seated players and the rounds they have played.
///
/// Each round runs Deciding → Scored → Reflecting. Decisions are taken in seat
/// order, each player seeing only the rounds already completed. After scoring,
/// both memories and the shared history grow by one entry, then every player
/// gets to revise its beliefs from the full history.
pub struct Game {
    players: [Box<dyn Player>; 2],
    history: History,
    settings: Settings,
    phase: Phase,
    tolerated: Vec<MatchError>,
}

impl Game {
    pub fn new(players: [Box<dyn Player>; 2], settings: Settings) -> Self {
        Self {
            players,
            settings,
            history: History::new(),
            phase: Phase::Setup,
            tolerated: Vec::new(),
        }
    }
    /// Seats two players with default settings.
    pub fn seat<A, B>(one: A, two: B) -> Self
    where
        A: Player + 'static,
        B: Player + 'static,
    {
        Self::new([Box::new(one), Box::new(two)], Settings::default())
    }
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn player(&self, seat: Seat) -> &dyn Player {
        &*self.players[seat]
    }
    /// Belief failures the match played through under `Tolerance::Continue`.
    pub fn tolerated(&self) -> &[MatchError] {
        &self.tolerated
    }
}

impl Game {
    /// Plays `iterations` rounds back to back and returns the full history.
    ///
    /// On error the match stops in `Phase::Aborted`; completed rounds stay
    /// available from [`Game::history`].
    pub async fn play_match(&mut self, iterations: usize) -> Result<History, MatchError> {
        for i in 0..iterations {
            let record = self.play_round().await?;
            self.reflect(record.round()).await?;
            if i + 1 < iterations && !self.settings.pace.is_zero() {
                tokio::time::sleep(self.settings.pace).await;
            }
        }
        self.phase = Phase::Finished;
        log::info!("[game] finished after {} rounds", self.history.len());
        Ok(self.history.clone())
    }

    /// Collects both decisions, scores them, and records the round.
    pub async fn play_round(&mut self) -> Result<Record, MatchError> {
        let round = self.history.len() + 1;
        self.phase = Phase::Deciding(round);
        let one = self.ask(0, round).await?;
        let two = self.ask(1, round).await?;
        let (p1, p2) = payoff(one, two);
        self.players[0].record(Outcome::new(one, two, p1));
        self.players[1].record(Outcome::new(two, one, p2));
        let record = Record::new(round, [one, two], [p1, p2]);
        self.history.push(record);
        self.phase = Phase::Scored(round);
        log::info!(
            "[game] round {}: {} chose {}, {} chose {} | payoffs {} / {}",
            round,
            self.players[0].name(),
            one,
            self.players[1].name(),
            two,
            p1,
            p2
        );
        Ok(record)
    }

    /// Lets each player revise its beliefs from the history so far.
    pub async fn reflect(&mut self, round: usize) -> Result<(), MatchError> {
        self.phase = Phase::Reflecting(round);
        for seat in 0..self.players.len() {
            let Err(error) = self.players[seat].reflect(&self.history, seat).await else {
                continue;
            };
            let error = MatchError::Belief { round, seat, error };
            match self.settings.on_belief_failure {
                Tolerance::Abort => return Err(self.abort(round, error)),
                Tolerance::Continue => {
                    log::warn!("[game] {}; keeping prior belief", error);
                    self.tolerated.push(error);
                }
            }
        }
        Ok(())
    }
}

impl Game {
    /// One decision, retried up to `settings.retries` extra times.
    async fn ask(&mut self, seat: Seat, round: usize) -> Result<Move, MatchError> {
        let opponent = self.players[1 - seat].memory().clone();
        let mut attempt = 0;
        loop {
            match self.players[seat].decide(&opponent).await {
                Ok(choice) => return Ok(choice),
                Err(error) if attempt < self.settings.retries => {
                    attempt += 1;
                    log::warn!(
                        "[game] round {} P{} decision failed ({}), retry {}/{}",
                        round,
                        seat,
                        error,
                        attempt,
                        self.settings.retries
                    );
                }
                Err(error) => {
                    return Err(self.abort(round, MatchError::Decision { round, seat, error }));
                }
            }
        }
    }

    fn abort(&mut self, round: usize, error: MatchError) -> MatchError {
        log::warn!("[game] aborting: {}", error);
        self.phase = Phase::Aborted(round);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn model(name: &str, script: Arc<Scripted>) -> ModelPlayer {
        ModelPlayer::build(
            name,
            script,
            &Rulebook::default(),
            PRISONERS_DILEMMA,
            Mode::Beliefs,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn match_produces_contiguous_history() {
        let mut game = Game::seat(TitForTat::new("tft"), AlwaysDefect::new("grim"));
        let history = game.play_match(5).await.unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(
            history.iter().map(Record::round).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.player(0).memory().len(), 5);
        assert_eq!(game.player(1).memory().len(), 5);
    }

    #[tokio::test]
    async fn tit_for_tat_against_defector() {
        let mut game = Game::seat(TitForTat::new("tft"), AlwaysDefect::new("grim"));
        let history = game.play_match(3).await.unwrap();
        assert_eq!(history[0].decisions(), [Move::Cooperate, Move::Defect]);
        assert_eq!(history[0].payoffs(), [0, 5]);
        assert_eq!(history[1].decisions(), [Move::Defect, Move::Defect]);
        assert_eq!(history[2].payoffs(), [1, 1]);
    }

    #[tokio::test]
    async fn decisions_do_not_see_the_current_round() {
        let mut game = Game::seat(TitForTat::new("a"), TitForTat::new("b"));
        let record = game.play_round().await.unwrap();
        assert_eq!(record.decisions(), [Move::Cooperate, Move::Cooperate]);
        assert_eq!(game.phase(), Phase::Scored(1));
        assert_eq!(game.history().len(), 1);
    }

    #[tokio::test]
    async fn memories_are_recorded_from_each_side() {
        let mut game = Game::seat(TitForTat::new("tft"), AlwaysDefect::new("grim"));
        game.play_round().await.unwrap();
        let mine = *game.player(0).memory().last().unwrap();
        let theirs = *game.player(1).memory().last().unwrap();
        assert_eq!(mine, Outcome::new(Move::Cooperate, Move::Defect, 0));
        assert_eq!(theirs, Outcome::new(Move::Defect, Move::Cooperate, 5));
    }

    #[tokio::test]
    async fn model_player_updates_beliefs_each_round() {
        let script = Arc::new(
            Scripted::default()
                .reply("I will open kindly.\n\nC")
                .reply("I was exploited")
                .reply("they always defect")
                .reply("They defect.\n\nD.")
                .reply("I retaliated")
                .reply("still defecting"),
        );
        let mut game = Game::seat(model("alice", script.clone()), AlwaysDefect::new("grim"));
        let history = game.play_match(2).await.unwrap();
        assert_eq!(history[0].decision(0), Move::Cooperate);
        assert_eq!(history[1].decision(0), Move::Defect);
        assert_eq!(
            game.player(0).belief(),
            Some(&Belief::new("I retaliated", "still defecting"))
        );
        assert!(script.prompts()[3].contains("they always defect"));
        assert_eq!(script.remaining(), 0);
    }

    #[tokio::test]
    async fn decision_failure_aborts_with_partial_history() {
        let script = Arc::new(
            Scripted::default()
                .reply("C")
                .reply("self")
                .reply("other")
                .reply("no idea"),
        );
        let mut game = Game::seat(model("alice", script), TitForTat::new("tft"));
        let error = game.play_match(3).await.unwrap_err();
        assert!(matches!(
            error,
            MatchError::Decision {
                round: 2,
                seat: 0,
                error: DecisionError::Unrecognized('a'),
            }
        ));
        assert_eq!(error.round(), 2);
        assert_eq!(game.player(error.seat()).name(), "alice");
        assert_eq!(game.phase(), Phase::Aborted(2));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.player(1).memory().len(), 1);
    }

    #[tokio::test]
    async fn retries_recover_a_bad_decision() {
        let script = Arc::new(Scripted::default().fail("timeout").reply("D").reply("s").reply("o"));
        let settings = Settings {
            retries: 1,
            ..Settings::default()
        };
        let mut game =
            Game::seat(model("alice", script), TitForTat::new("tft")).with_settings(settings);
        let history = game.play_match(1).await.unwrap();
        assert_eq!(history[0].decisions(), [Move::Defect, Move::Cooperate]);
    }

    #[tokio::test]
    async fn belief_failure_continues_on_stale_belief() {
        let script = Arc::new(
            Scripted::default()
                .reply("C")
                .fail("quota")
                .reply("C"),
        );
        let mut game = Game::seat(model("alice", script.clone()), TitForTat::new("tft"));
        game.play_round().await.unwrap();
        game.reflect(1).await.unwrap();
        assert_eq!(game.player(0).belief(), Some(&Belief::default()));
        assert_eq!(game.tolerated().len(), 1);
        assert_eq!(game.tolerated()[0].round(), 1);
        assert_eq!(game.tolerated()[0].seat(), 0);
        game.play_round().await.unwrap();
        assert!(script.prompts()[2].contains(NO_INFORMATION));
    }

    #[tokio::test]
    async fn belief_failure_can_abort() {
        let script = Arc::new(Scripted::default().reply("C").reply("self").fail("quota"));
        let settings = Settings {
            on_belief_failure: Tolerance::Abort,
            ..Settings::default()
        };
        let mut game =
            Game::seat(model("alice", script), TitForTat::new("tft")).with_settings(settings);
        let error = game.play_match(2).await.unwrap_err();
        assert!(matches!(error, MatchError::Belief { round: 1, seat: 0, .. }));
        assert_eq!(game.phase(), Phase::Aborted(1));
        assert_eq!(game.player(0).belief(), Some(&Belief::default()));
        assert_eq!(game.history().len(), 1);
    }
}
