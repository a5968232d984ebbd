//! Core value types: pieces, tickets, players, RNG, errors.
//!
//! Everything here is a plain value. The state machinery in `state` combines
//! these into immutable game states.

pub mod error;
pub mod piece;
pub mod player;
pub mod rng;
pub mod ticket;

pub use error::GameError;
pub use piece::{Piece, SeekerId};
pub use player::Player;
pub use rng::GameRng;
pub use ticket::{TicketBook, TicketKind, Transport};
