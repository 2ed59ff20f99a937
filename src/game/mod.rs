pub mod difficulty;
pub mod grid;
pub mod session;

pub use difficulty::{DIFFICULTY_OPTIONS, Difficulty};
pub use grid::{Card, Grid, Position};
pub use session::{ClickOutcome, GameOutcome, Session, TurnState};
