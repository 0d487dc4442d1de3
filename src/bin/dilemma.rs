//! Dilemma Binary
//!
//! Plays one iterated Prisoner's Dilemma match and prints a summary.
//!
//! Options: --config, --rounds, --player1, --player2, --retries, --abort-on-stale, --pace-ms

use clap::Parser;
use clap::ValueEnum;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tomdilemma::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Language model reasoning from its beliefs.
    Model,
    /// Language model reasoning from the raw history.
    ModelHistory,
    TitForTat,
    AlwaysDefect,
}

#[derive(Debug, Parser)]
#[command(name = "dilemma", about = "Iterated Prisoner's Dilemma between language-model agents")]
struct Args {
    /// TOML configuration file; only required when a model player is seated.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    #[arg(long)]
    rounds: Option<usize>,
    #[arg(long, value_enum, default_value_t = Kind::Model)]
    player1: Kind,
    #[arg(long, value_enum, default_value_t = Kind::Model)]
    player2: Kind,
    /// Extra attempts after a failed decision.
    #[arg(long)]
    retries: Option<usize>,
    /// Stop the match when a belief update fails.
    #[arg(long)]
    abort_on_stale: bool,
    #[arg(long)]
    pace_ms: Option<u64>,
    #[arg(long, default_value = PRISONERS_DILEMMA)]
    game: String,
}

impl Args {
    fn needs_model(&self) -> bool {
        [self.player1, self.player2]
            .iter()
            .any(|k| matches!(k, Kind::Model | Kind::ModelHistory))
    }
}

/// Lazily built shared generator plus the rules it plays by.
struct Seating {
    generator: Option<Arc<dyn Generator>>,
    rulebook: Rulebook,
    kind: String,
}

impl Seating {
    fn player(&self, name: &str, kind: Kind) -> anyhow::Result<Box<dyn Player>> {
        let mode = match kind {
            Kind::TitForTat => return Ok(Box::new(TitForTat::new(name))),
            Kind::AlwaysDefect => return Ok(Box::new(AlwaysDefect::new(name))),
            Kind::Model => Mode::Beliefs,
            Kind::ModelHistory => Mode::History,
        };
        let generator = self
            .generator
            .clone()
            .ok_or_else(|| anyhow::anyhow!("model player requested without an llm endpoint"))?;
        Ok(Box::new(ModelPlayer::build(
            name,
            generator,
            &self.rulebook,
            &self.kind,
            mode,
        )?))
    }
}

fn summarize(game: &Game) {
    let history = game.history();
    let (one, two) = (game.player(0), game.player(1));
    for record in history.iter() {
        println!("{}", record);
    }
    match (
        Statistics::average_payoff(history),
        Statistics::total_payoff(history),
        Statistics::most_common_move(history),
        Statistics::cooperation_rate(history),
    ) {
        (Ok(avg), Ok(total), Ok(mode), Ok(rate)) => {
            println!("{}", "------".dimmed());
            for (seat, player) in [one, two].into_iter().enumerate() {
                let (a, t, m, r) = match seat {
                    0 => (avg.0, total.0, mode.0, rate.0),
                    _ => (avg.1, total.1, mode.1, rate.1),
                };
                println!(
                    "{:<10} average {} total {} most common {} cooperation {:.0}%",
                    player.name().bold(),
                    format!("{:.2}", a).green(),
                    format!("{}", t).yellow(),
                    format!("{}", m).cyan(),
                    r * 100.0
                );
            }
        }
        _ => println!("{}", "no rounds completed".red()),
    }
    for player in [one, two] {
        if let Some(belief) = player.belief() {
            println!("{} believes {}", player.name().bold(), belief);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logfile = log()?;
    log::debug!("[main] logging to {}", logfile.display());
    let args = Args::parse();
    let config = match args.config.exists() {
        true => Some(Config::load(&args.config)?),
        false if args.needs_model() => Some(Config::load(&args.config)?),
        false => None,
    };
    let mut settings = config.as_ref().map(Config::settings).unwrap_or_else(|| Settings {
        pace: std::time::Duration::from_millis(DEFAULT_PACE_MS),
        ..Settings::default()
    });
    if let Some(retries) = args.retries {
        settings.retries = retries;
    }
    if let Some(pace) = args.pace_ms {
        settings.pace = std::time::Duration::from_millis(pace);
    }
    if args.abort_on_stale {
        settings.on_belief_failure = Tolerance::Abort;
    }
    let rounds = args
        .rounds
        .or(config.as_ref().map(|c| c.game.rounds))
        .unwrap_or(DEFAULT_ROUNDS);
    let seating = Seating {
        generator: match config.as_ref() {
            Some(c) if args.needs_model() => {
                Some(Arc::new(Chat::new(c.llm.clone())?) as Arc<dyn Generator>)
            }
            _ => None,
        },
        rulebook: match config.as_ref() {
            Some(c) => c.rulebook()?,
            None => Rulebook::default(),
        },
        kind: args.game.clone(),
    };
    let mut game = Game::new(
        [
            seating.player("Alice", args.player1)?,
            seating.player("Bob", args.player2)?,
        ],
        settings,
    );
    log::info!("[main] playing {} rounds of {}", rounds, args.game);
    let result = game.play_match(rounds).await;
    summarize(&game);
    if let Err(error) = &result {
        println!(
            "{} stopped the match in round {}",
            game.player(error.seat()).name().bold(),
            error.round()
        );
    }
    result.map(|_| ()).map_err(anyhow::Error::from)
}
