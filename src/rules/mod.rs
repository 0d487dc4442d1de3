mod rulebook;

pub use rulebook::*;
