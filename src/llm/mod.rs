mod chat;
mod generator;
mod sampling;
#[cfg(test)]
mod scripted;

pub use chat::*;
pub use generator::*;
pub use sampling::*;
#[cfg(test)]
pub use scripted::*;
