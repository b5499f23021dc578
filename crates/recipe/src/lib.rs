mod diet;
mod repository;
mod types;

pub use diet::*;
pub use repository::*;
pub use types::*;
