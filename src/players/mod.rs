//! The closed set of players that can sit at a game.
//!
//! - [`ModelPlayer`] asks a language model, guided by its beliefs or history
//! - [`TitForTat`] opens with cooperation, then mirrors the opponent
//! - [`AlwaysDefect`] never cooperates
mod defector;
mod model;
mod player;
mod titfortat;

pub use defector::*;
pub use model::*;
pub use player::*;
pub use titfortat::*;
