pub mod config;
pub use config::Config;

pub mod context;
pub use context::Context;

pub mod model;

pub mod board;
pub use board::{BoardError, BoardResult};

pub mod transfer;

pub mod ext;

#[cfg(test)]
pub(crate) mod testing;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
