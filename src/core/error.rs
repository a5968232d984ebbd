//! Engine errors.
//!
//! Construction errors are fatal for the state being built; `InvalidMove`
//! rejects only the attempted transition and leaves the current state usable.
//! Query misses (unknown piece) are `None` returns, not errors.

use thiserror::Error;

use super::piece::Piece;
use super::ticket::TicketKind;
use crate::board::NodeId;

/// All failures the engine reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("reveal schedule is empty")]
    EmptySchedule,

    #[error("at least one seeker is required")]
    NoSeekers,

    #[error("{0} cannot fill that role")]
    RoleMismatch(Piece),

    #[error("{0} appears more than once")]
    DuplicateSeeker(Piece),

    #[error("two seekers share location {0}")]
    SharedLocation(NodeId),

    #[error("{piece} may not hold {ticket} tickets")]
    ForbiddenTicket { piece: Piece, ticket: TicketKind },

    #[error("no {0} ticket available")]
    TicketUnavailable(TicketKind),

    #[error("move is not in the current legal set")]
    InvalidMove,

    #[error("observer is already registered")]
    ObserverRegistered,

    #[error("observer was never registered")]
    ObserverMissing,

    #[error("not enough distinct starting positions for {0} seekers")]
    TooManySeekers(usize),
}
