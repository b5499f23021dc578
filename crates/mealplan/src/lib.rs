mod assembler;
mod error;
mod filter;
mod ingredients;
mod planner;
mod query;
mod scaling;
mod settings;
mod sink;
mod types;

#[cfg(test)]
mod testing;

pub use assembler::*;
pub use error::*;
pub use filter::*;
pub use ingredients::*;
pub use planner::*;
pub use query::*;
pub use scaling::*;
pub use settings::*;
pub use sink::*;
pub use types::*;
