//! The game-state engine: moves, travel log, generation, transition, winner.

pub mod game;
mod generator;
pub mod log;
pub mod moves;
mod winner;

pub use game::GameState;
pub use log::LogEntry;
pub use moves::{DoubleMove, Move, SingleMove};
