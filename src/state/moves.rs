//! Moves: the closed union of everything a piece can do on its turn.
//!
//! A `Move` is either a single hop or, for the fugitive only, a compound
//! double hop. Behavior that differs between the two (tickets consumed, log
//! entries written) is dispatched by exhaustive `match`, so adding a variant
//! breaks every site that must care.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::NodeId;
use crate::core::{Piece, TicketKind};

/// One hop: mover, source, the ticket used and the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket: TicketKind,
    pub destination: NodeId,
}

impl SingleMove {
    /// Create a single move.
    #[must_use]
    pub const fn new(piece: Piece, source: NodeId, ticket: TicketKind, destination: NodeId) -> Self {
        Self {
            piece,
            source,
            ticket,
            destination,
        }
    }
}

/// Two hops back to back, authorized by a Double ticket. Fugitive only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket1: TicketKind,
    pub destination1: NodeId,
    pub ticket2: TicketKind,
    pub destination2: NodeId,
}

impl DoubleMove {
    /// Create a double move.
    #[must_use]
    pub const fn new(
        piece: Piece,
        source: NodeId,
        ticket1: TicketKind,
        destination1: NodeId,
        ticket2: TicketKind,
        destination2: NodeId,
    ) -> Self {
        Self {
            piece,
            source,
            ticket1,
            destination1,
            ticket2,
            destination2,
        }
    }
}

/// A complete move.
///
/// ```
/// use rust_pursuit::state::{Move, SingleMove};
/// use rust_pursuit::core::{Piece, TicketKind};
/// use rust_pursuit::board::NodeId;
///
/// let mv = Move::single(Piece::Fugitive, NodeId::new(1), TicketKind::Taxi, NodeId::new(2));
/// assert_eq!(mv.piece(), Piece::Fugitive);
/// assert_eq!(mv.destination(), NodeId::new(2));
/// assert_eq!(mv.tickets().as_slice(), &[TicketKind::Taxi]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// Create a single move.
    #[must_use]
    pub const fn single(piece: Piece, source: NodeId, ticket: TicketKind, destination: NodeId) -> Self {
        Move::Single(SingleMove::new(piece, source, ticket, destination))
    }

    /// Create a double move.
    #[must_use]
    pub const fn double(
        piece: Piece,
        source: NodeId,
        ticket1: TicketKind,
        destination1: NodeId,
        ticket2: TicketKind,
        destination2: NodeId,
    ) -> Self {
        Move::Double(DoubleMove::new(
            piece,
            source,
            ticket1,
            destination1,
            ticket2,
            destination2,
        ))
    }

    /// The piece that commences this move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match self {
            Move::Single(mv) => mv.piece,
            Move::Double(mv) => mv.piece,
        }
    }

    /// The node the move starts from.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        match self {
            Move::Single(mv) => mv.source,
            Move::Double(mv) => mv.source,
        }
    }

    /// The node the mover ends on.
    #[must_use]
    pub const fn destination(&self) -> NodeId {
        match self {
            Move::Single(mv) => mv.destination,
            Move::Double(mv) => mv.destination2,
        }
    }

    /// Every ticket this move consumes.
    ///
    /// A double move consumes its two leg tickets plus one Double.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[TicketKind; 3]> {
        match self {
            Move::Single(mv) => SmallVec::from_slice(&[mv.ticket]),
            Move::Double(mv) => {
                SmallVec::from_slice(&[mv.ticket1, mv.ticket2, TicketKind::Double])
            }
        }
    }

    /// Check if this is a double move.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }
}

impl From<SingleMove> for Move {
    fn from(mv: SingleMove) -> Self {
        Move::Single(mv)
    }
}

impl From<DoubleMove> for Move {
    fn from(mv: DoubleMove) -> Self {
        Move::Double(mv)
    }
}
