mod error;
mod memory;
mod moves;
mod payoff;
mod phase;
mod record;
mod settings;
mod table;

pub use error::*;
pub use memory::*;
pub use moves::*;
pub use payoff::*;
pub use phase::*;
pub use record::*;
pub use settings::*;
pub use table::*;
