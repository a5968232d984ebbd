//! Players: a piece, a location, a ticket book.
//!
//! `Player` is a plain `Copy` value. Updates (`at`, `spend`, `give`) return a
//! new value instead of mutating, so a state transition can rebuild its player
//! set while every older state keeps its own.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::piece::Piece;
use super::ticket::{TicketBook, TicketKind};
use crate::board::NodeId;

/// A mover: identity, current location and ticket ledger.
///
/// ```
/// use rust_pursuit::core::{Piece, Player, TicketBook, TicketKind};
/// use rust_pursuit::board::NodeId;
///
/// let book = TicketBook::new().with(TicketKind::Taxi, 2);
/// let fugitive = Player::new(Piece::Fugitive, book, NodeId::new(42));
///
/// let moved = fugitive.at(NodeId::new(17)).spend(TicketKind::Taxi).unwrap();
/// assert_eq!(moved.location(), NodeId::new(17));
/// assert_eq!(moved.tickets().count(TicketKind::Taxi), 1);
///
/// // The original value is unchanged
/// assert_eq!(fugitive.location(), NodeId::new(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    tickets: TicketBook,
    location: NodeId,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub const fn new(piece: Piece, tickets: TicketBook, location: NodeId) -> Self {
        Self {
            piece,
            tickets,
            location,
        }
    }

    /// This player's piece.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// This player's current location.
    #[must_use]
    pub const fn location(&self) -> NodeId {
        self.location
    }

    /// This player's ticket ledger.
    #[must_use]
    pub const fn tickets(&self) -> &TicketBook {
        &self.tickets
    }

    /// Check possession of at least one ticket of `kind`.
    #[must_use]
    pub const fn has(&self, kind: TicketKind) -> bool {
        self.tickets.has(kind)
    }

    /// Check possession of at least `n` tickets of `kind`.
    #[must_use]
    pub const fn at_least(&self, kind: TicketKind, n: u32) -> bool {
        self.tickets.at_least(kind, n)
    }

    /// Relocate, returning the moved player.
    #[must_use]
    pub const fn at(mut self, destination: NodeId) -> Self {
        self.location = destination;
        self
    }

    /// Consume one ticket, returning the reduced player.
    pub fn spend(mut self, kind: TicketKind) -> Result<Self, GameError> {
        self.tickets = self.tickets.spend(kind)?;
        Ok(self)
    }

    /// Receive one ticket, returning the grown player.
    #[must_use]
    pub const fn give(mut self, kind: TicketKind) -> Self {
        self.tickets = self.tickets.give(kind);
        self
    }
}
