//! Tickets and transports.
//!
//! ## TicketKind
//!
//! The five kinds of move authorization. Taxi, Bus and Underground are tied
//! to their transports. Secret substitutes for any transport and hides the
//! destination of that leg in the travel log. Double authorizes a compound
//! two-leg fugitive move.
//!
//! ## Transport
//!
//! The edge annotations of the location graph. Each transport names the
//! ticket it consumes; the ferry is only usable with a Secret ticket.
//!
//! ## TicketBook
//!
//! Per-player ledger of ticket-kind → count. A fixed-size array indexed by
//! kind, so the book is `Copy` and states never share ledgers.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::GameError;

/// A kind of move authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TicketKind {
    Taxi,
    Bus,
    Underground,
    /// Substitutes for any transport; hides the destination of that leg.
    Secret,
    /// Authorizes a compound two-leg fugitive move.
    Double,
}

impl TicketKind {
    /// All ticket kinds, in ledger order.
    pub const ALL: [TicketKind; 5] = [
        TicketKind::Taxi,
        TicketKind::Bus,
        TicketKind::Underground,
        TicketKind::Secret,
        TicketKind::Double,
    ];

    /// Ledger slot for this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for TicketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TicketKind::Taxi => "Taxi",
            TicketKind::Bus => "Bus",
            TicketKind::Underground => "Underground",
            TicketKind::Secret => "Secret",
            TicketKind::Double => "Double",
        };
        write!(f, "{}", name)
    }
}

/// A transport kind annotating a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    /// The ticket consumed when travelling by this transport.
    ///
    /// The ferry has no ticket of its own and requires a Secret ticket.
    #[must_use]
    pub const fn required_ticket(self) -> TicketKind {
        match self {
            Transport::Taxi => TicketKind::Taxi,
            Transport::Bus => TicketKind::Bus,
            Transport::Underground => TicketKind::Underground,
            Transport::Ferry => TicketKind::Secret,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Taxi => "Taxi",
            Transport::Bus => "Bus",
            Transport::Underground => "Underground",
            Transport::Ferry => "Ferry",
        };
        write!(f, "{}", name)
    }
}

/// Per-player ticket ledger.
///
/// ```
/// use rust_pursuit::core::{TicketBook, TicketKind};
///
/// let book = TicketBook::new().with(TicketKind::Taxi, 2);
///
/// assert!(book.has(TicketKind::Taxi));
/// assert!(book.at_least(TicketKind::Taxi, 2));
/// assert!(!book.has(TicketKind::Bus));
/// assert_eq!(book.total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketBook {
    counts: [u32; 5],
}

impl TicketBook {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 5] }
    }

    /// Set the count for one kind, builder style.
    #[must_use]
    pub const fn with(mut self, kind: TicketKind, count: u32) -> Self {
        self.counts[kind.index()] = count;
        self
    }

    /// Get the count for one kind.
    #[must_use]
    pub const fn count(&self, kind: TicketKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Check possession of at least one ticket of `kind`.
    #[must_use]
    pub const fn has(&self, kind: TicketKind) -> bool {
        self.count(kind) > 0
    }

    /// Check possession of at least `n` tickets of `kind`.
    #[must_use]
    pub const fn at_least(&self, kind: TicketKind, n: u32) -> bool {
        self.count(kind) >= n
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Consume one ticket of `kind`, returning the reduced ledger.
    ///
    /// Fails if no ticket of that kind is held.
    pub fn spend(mut self, kind: TicketKind) -> Result<Self, GameError> {
        if !self.has(kind) {
            return Err(GameError::TicketUnavailable(kind));
        }
        self.counts[kind.index()] -= 1;
        Ok(self)
    }

    /// Add one ticket of `kind`, returning the grown ledger.
    ///
    /// Used to return a consumed seeker ticket to the fugitive's pool.
    #[must_use]
    pub const fn give(mut self, kind: TicketKind) -> Self {
        self.counts[kind.index()] += 1;
        self
    }
}

impl Index<TicketKind> for TicketBook {
    type Output = u32;

    fn index(&self, kind: TicketKind) -> &Self::Output {
        &self.counts[kind.index()]
    }
}

impl FromIterator<(TicketKind, u32)> for TicketBook {
    fn from_iter<I: IntoIterator<Item = (TicketKind, u32)>>(iter: I) -> Self {
        let mut book = TicketBook::new();
        for (kind, count) in iter {
            book.counts[kind.index()] += count;
        }
        book
    }
}
