//! Fugitive move selection by seeker-distance scoring.
//!
//! Every available move is applied to a scratch copy of the state and the
//! outcome is scored: log-scaled distance to each seeker, a ticket-value
//! adjustment depending on how close the nearest seeker is, and a small
//! bonus per destination neighbour no seeker can reach next turn. A
//! destination a seeker can step onto scores zero.

use crate::state::{GameState, Move};
use crate::core::TicketKind;
use crate::board::NodeId;

use super::shortest_path::distance_between;

/// Picks a move from a state's available set.
pub trait Strategy {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Choose a move. `None` when the state has no available moves.
    fn pick_move(&self, state: &GameState) -> Option<Move>;
}

/// The shipped fugitive strategy: keep your distance, spend cheap tickets.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceStrategy;

impl DistanceStrategy {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Ticket adjustment when a seeker is within one hop: escape with whatever
/// works, with a nudge towards the longer-range transports.
fn ticket_value_close(ticket: TicketKind) -> f64 {
    match ticket {
        TicketKind::Bus | TicketKind::Underground => 0.001,
        _ => 0.0,
    }
}

/// Ticket adjustment at long range: hoard the Secret tickets.
fn ticket_value_long(ticket: TicketKind) -> f64 {
    match ticket {
        TicketKind::Secret => -0.3,
        _ => 0.0,
    }
}

/// Check if any seeker could step onto `node` next turn.
fn seeker_can_reach(state: &GameState, node: NodeId) -> bool {
    let graph = state.setup().graph();
    state
        .players()
        .filter_map(|piece| state.seeker_location(piece))
        .any(|location| graph.adjacent_nodes(location).any(|adjacent| adjacent == node))
}

/// Score `mv` against the state it produced. Higher is better.
fn score_move(after: &GameState, mv: &Move) -> f64 {
    let graph = after.setup().graph();
    let destination = mv.destination();

    let mut score = -1.0;
    let mut closest = u32::MAX;

    for piece in after.players() {
        let Some(location) = after.seeker_location(piece) else {
            continue;
        };
        let Some(distance) = distance_between(graph, location, destination) else {
            continue;
        };

        // Longer distances help, with diminishing returns
        score += 1.5 * f64::from(distance + 1).ln();
        closest = closest.min(distance);
    }

    let tickets = mv.tickets();
    if closest <= 1 {
        // A double is worth its price when cornered
        if tickets.len() == 3 {
            score += 0.75;
        }
        for &ticket in tickets.iter().filter(|&&t| t != TicketKind::Double) {
            score += ticket_value_close(ticket);
        }
    } else {
        if tickets.len() == 3 {
            score -= 0.75;
        }
        for &ticket in tickets.iter().filter(|&&t| t != TicketKind::Double) {
            score += ticket_value_long(ticket);
        }
    }

    // The more open the destination, the better
    for adjacent in graph.adjacent_nodes(destination) {
        if !seeker_can_reach(after, adjacent) {
            score += 0.01;
        }
    }

    // A destination a seeker can step onto is as good as lost
    if seeker_can_reach(after, destination) {
        score = 0.0;
    }

    score
}

impl Strategy for DistanceStrategy {
    fn name(&self) -> &str {
        "distance scoring"
    }

    fn pick_move(&self, state: &GameState) -> Option<Move> {
        let mut best: Option<(f64, Move)> = None;

        for mv in state.available_moves() {
            let Ok(after) = state.advance(mv) else {
                continue;
            };
            let score = score_move(&after, mv);
            tracing::trace!(?mv, score, "scored move");

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, *mv));
            }
        }

        let picked = best.map(|(_, mv)| mv);
        tracing::debug!(?picked, "picked move");
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Graph, Setup};
    use crate::core::{Piece, Player, SeekerId, TicketBook, Transport};
    use crate::state::GameState;

    fn node(id: u16) -> NodeId {
        NodeId::new(id)
    }

    /// A line 1-2-3-4-5; the fugitive should run away along it.
    fn line_state(fugitive_at: u16, seeker_at: u16) -> GameState {
        let graph = Graph::builder()
            .edge(1, 2, Transport::Taxi)
            .edge(2, 3, Transport::Taxi)
            .edge(3, 4, Transport::Taxi)
            .edge(4, 5, Transport::Taxi)
            .build();
        let setup = Setup::new(graph, vec![false; 10]);
        let fugitive = Player::new(
            Piece::Fugitive,
            TicketBook::new().with(TicketKind::Taxi, 8),
            node(fugitive_at),
        );
        let seeker = Player::new(
            Piece::Seeker(SeekerId::new(0)),
            TicketBook::new().with(TicketKind::Taxi, 8),
            node(seeker_at),
        );
        GameState::build(setup, fugitive, vec![seeker]).unwrap()
    }

    #[test]
    fn test_picks_a_legal_move() {
        let state = line_state(3, 1);
        let strategy = DistanceStrategy::new();

        let mv = strategy.pick_move(&state).unwrap();
        assert!(state.available_moves().contains(&mv));
    }

    #[test]
    fn test_flees_towards_open_ground() {
        let state = line_state(3, 1);
        let strategy = DistanceStrategy::new();

        // Moving to 2 puts the fugitive in the seeker's reach; 4 doubles
        // the distance
        let mv = strategy.pick_move(&state).unwrap();
        assert_eq!(mv.destination(), node(4));
    }

    #[test]
    fn test_none_when_game_is_over() {
        // Cornered fugitive: only exit occupied
        let graph = Graph::builder().edge(1, 2, Transport::Taxi).build();
        let setup = Setup::new(graph, vec![false; 4]);
        let fugitive = Player::new(
            Piece::Fugitive,
            TicketBook::new().with(TicketKind::Taxi, 2),
            node(1),
        );
        let seeker = Player::new(
            Piece::Seeker(SeekerId::new(0)),
            TicketBook::new().with(TicketKind::Taxi, 2),
            node(2),
        );
        let state = GameState::build(setup, fugitive, vec![seeker]).unwrap();

        assert!(state.is_over());
        assert_eq!(DistanceStrategy::new().pick_move(&state), None);
    }

    #[test]
    fn test_capture_risk_zeroes_the_score() {
        let graph = Graph::builder()
            .edge(1, 2, Transport::Taxi)
            .edge(2, 3, Transport::Taxi)
            .edge(3, 4, Transport::Taxi)
            .build();
        let setup = Setup::new(graph, vec![false; 10]);
        let fugitive = Player::new(
            Piece::Fugitive,
            TicketBook::new().with(TicketKind::Taxi, 8),
            node(2),
        );
        let seeker = Player::new(
            Piece::Seeker(SeekerId::new(0)),
            TicketBook::new().with(TicketKind::Taxi, 8),
            node(4),
        );
        let state = GameState::build(setup, fugitive, vec![seeker]).unwrap();

        // Moving to 3 walks into the seeker's reach; moving to 1 is safe
        let mv = DistanceStrategy::new().pick_move(&state).unwrap();
        assert_eq!(mv.destination(), node(1));
    }
}
