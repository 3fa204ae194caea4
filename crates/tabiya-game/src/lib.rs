//! Turn-by-turn game management on top of the chess rules core.

pub mod config;
pub mod error;
mod history;
pub mod result;
pub mod state;

pub use config::GameConfig;
pub use error::GameError;
pub use result::{EndReason, GameResult};
pub use state::GameState;
