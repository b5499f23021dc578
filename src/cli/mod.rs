mod generate;
mod migrate;
mod server;

pub use generate::*;
pub use migrate::*;
pub use server::*;
