mod belief;
mod error;
mod model;

pub use belief::*;
pub use error::*;
pub use model::*;
