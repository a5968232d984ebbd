//! Game setup: the graph plus the reveal schedule.
//!
//! Also carries the standard game data — the 24-move reveal schedule, the
//! default ticket books and the start-location pools — so a standard game
//! only needs a graph.

use serde::{Deserialize, Serialize};

use super::graph::{Graph, NodeId};
use crate::core::{GameError, GameRng, TicketBook, TicketKind};

/// Moves (1-indexed) on which the fugitive is revealed in a standard game.
pub const STANDARD_REVEAL_MOVES: [usize; 5] = [3, 8, 13, 18, 24];

/// Length of the standard game in fugitive moves.
pub const STANDARD_MOVE_COUNT: usize = 24;

/// Start locations the fugitive may be dealt in a standard game.
pub const FUGITIVE_START_LOCATIONS: [u16; 13] =
    [35, 45, 51, 71, 78, 104, 106, 127, 132, 146, 166, 170, 172];

/// Start locations the seekers may be dealt in a standard game.
pub const SEEKER_START_LOCATIONS: [u16; 16] = [
    13, 26, 29, 34, 50, 53, 91, 94, 103, 112, 117, 123, 138, 141, 155, 174,
];

/// The reveal schedule of a standard 24-move game.
#[must_use]
pub fn standard_reveal_schedule() -> Vec<bool> {
    (1..=STANDARD_MOVE_COUNT)
        .map(|turn| STANDARD_REVEAL_MOVES.contains(&turn))
        .collect()
}

/// The ticket book a standard game deals to the fugitive.
#[must_use]
pub fn fugitive_tickets() -> TicketBook {
    TicketBook::new()
        .with(TicketKind::Taxi, 4)
        .with(TicketKind::Bus, 3)
        .with(TicketKind::Underground, 3)
        .with(TicketKind::Secret, 5)
        .with(TicketKind::Double, 2)
}

/// The ticket book a standard game deals to each seeker.
#[must_use]
pub fn seeker_tickets() -> TicketBook {
    TicketBook::new()
        .with(TicketKind::Taxi, 11)
        .with(TicketKind::Bus, 8)
        .with(TicketKind::Underground, 4)
}

/// Deal pairwise-distinct start locations for one fugitive and
/// `seeker_count` seekers from the standard pools.
///
/// Deterministic for a given RNG seed.
pub fn deal_start_locations(
    rng: &mut GameRng,
    seeker_count: usize,
) -> Result<(NodeId, Vec<NodeId>), GameError> {
    if seeker_count > SEEKER_START_LOCATIONS.len() {
        return Err(GameError::TooManySeekers(seeker_count));
    }

    let fugitive = *rng
        .choose(&FUGITIVE_START_LOCATIONS)
        .expect("fugitive pool is non-empty");

    let mut pool = SEEKER_START_LOCATIONS;
    rng.shuffle(&mut pool);
    let seekers = pool[..seeker_count].iter().map(|&n| NodeId::new(n)).collect();

    Ok((NodeId::new(fugitive), seekers))
}

/// A graph plus a fixed-length reveal schedule.
///
/// Position `i` of the schedule says whether the fugitive's `i`-th move is
/// publicly revealed. The schedule length bounds the game: once the travel
/// log fills it, the fugitive has survived.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Setup {
    graph: Graph,
    reveal_schedule: Vec<bool>,
}

impl Setup {
    /// Create a setup from a graph and an explicit schedule.
    #[must_use]
    pub fn new(graph: Graph, reveal_schedule: Vec<bool>) -> Self {
        Self {
            graph,
            reveal_schedule,
        }
    }

    /// Create a setup with the standard 24-move schedule.
    #[must_use]
    pub fn with_standard_schedule(graph: Graph) -> Self {
        Self::new(graph, standard_reveal_schedule())
    }

    /// The location graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The reveal schedule.
    #[must_use]
    pub fn reveal_schedule(&self) -> &[bool] {
        &self.reveal_schedule
    }

    /// Number of fugitive moves in the game.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.reveal_schedule.len()
    }

    /// Whether the fugitive move writing log index `index` is revealed.
    ///
    /// Indices past the schedule are hidden; the engine never generates a
    /// fugitive move without schedule room, so this is purely defensive.
    #[must_use]
    pub fn reveals(&self, index: usize) -> bool {
        self.reveal_schedule.get(index).copied().unwrap_or(false)
    }
}
