//! # rust-pursuit
//!
//! A hidden-movement pursuit game engine on location graphs: one fugitive
//! moves in secret except on scheduled reveal turns, several seekers move
//! openly, and every move spends from a finite ticket economy.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `advance` takes a state and a move and returns a
//!    new state. Old states stay valid; any number of readers can hold them.
//!    Persistent data structures (`im`) keep successor construction cheap.
//!
//! 2. **Eager Evaluation**: the legal-move set and the winning side are
//!    computed once, while a state is constructed, and stored. Queries are
//!    plain reads and can never disagree with each other.
//!
//! 3. **Value Identity**: pieces, players, moves and log entries are plain
//!    values with value equality. Nothing in the engine compares by pointer.
//!
//! ## Modules
//!
//! - `core`: pieces, tickets, players, RNG, errors
//! - `board`: the location graph and the game setup
//! - `state`: moves, travel log, move generation, win evaluation, the
//!   immutable `GameState` and its `advance` transition
//! - `model`: the observable wrapper around a sequence of states
//! - `strategy`: shortest paths and distance-scoring move selection

pub mod board;
pub mod core;
pub mod model;
pub mod state;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, Piece, Player, SeekerId, TicketBook, TicketKind, Transport,
};

pub use crate::board::{Graph, GraphBuilder, NodeId, Setup};

pub use crate::state::{DoubleMove, GameState, LogEntry, Move, SingleMove};

pub use crate::model::{Event, Model, Observer};

pub use crate::strategy::{distance_between, distances_from, DistanceStrategy, Strategy};
