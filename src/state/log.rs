//! The fugitive's travel log.
//!
//! One entry per fugitive hop. A revealed entry shows ticket and destination;
//! a hidden entry shows only the ticket. Which is written is decided by the
//! reveal schedule, never by the mover.

use serde::{Deserialize, Serialize};

use crate::board::NodeId;
use crate::core::TicketKind;

/// One recorded fugitive hop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntry {
    /// Ticket and destination are public.
    Revealed {
        ticket: TicketKind,
        destination: NodeId,
    },
    /// Only the ticket is public.
    Hidden { ticket: TicketKind },
}

impl LogEntry {
    /// Create a revealed entry.
    #[must_use]
    pub const fn revealed(ticket: TicketKind, destination: NodeId) -> Self {
        LogEntry::Revealed {
            ticket,
            destination,
        }
    }

    /// Create a hidden entry.
    #[must_use]
    pub const fn hidden(ticket: TicketKind) -> Self {
        LogEntry::Hidden { ticket }
    }

    /// The ticket used on this hop.
    #[must_use]
    pub const fn ticket(&self) -> TicketKind {
        match self {
            LogEntry::Revealed { ticket, .. } | LogEntry::Hidden { ticket } => *ticket,
        }
    }

    /// The destination, if this entry is revealed.
    #[must_use]
    pub const fn destination(&self) -> Option<NodeId> {
        match self {
            LogEntry::Revealed { destination, .. } => Some(*destination),
            LogEntry::Hidden { .. } => None,
        }
    }

    /// Check if this entry is revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self, LogEntry::Revealed { .. })
    }
}
