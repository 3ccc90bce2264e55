mod app;
mod config;
mod poke;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use poke::PokeError;
