//! Pokémon pair-matching game: card fetching, board layout and the turn
//! state machine. The GTK front end lives in the binary.

pub mod config;
pub mod error;
pub mod game;
pub mod provider;

pub use config::GameConfig;
pub use error::{Error, Result};
