mod error;
mod statistics;

pub use error::*;
pub use statistics::*;
