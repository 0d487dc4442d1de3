mod error;
mod extract;
mod mode;
mod model;

pub use error::*;
pub use extract::*;
pub use mode::*;
pub use model::*;
