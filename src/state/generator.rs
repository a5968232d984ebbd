//! Legal-move generation.
//!
//! Free functions over plain values: the setup, the current seeker players
//! and the mover. `GameState` calls these once at construction and caches
//! the result; nothing here looks at cached state.

use rustc_hash::FxHashSet;

use super::moves::{DoubleMove, SingleMove};
use crate::board::{NodeId, Setup};
use crate::core::{Player, TicketKind};

/// All legal single moves for `player` standing at `source`.
///
/// Every mover is excluded from nodes a seeker occupies. For each transport
/// on a usable edge the required-ticket move is emitted, plus a Secret
/// variant whenever the player holds a Secret ticket. The final filter keeps
/// only moves whose ticket the player actually possesses — it is what drops
/// the required-ticket candidate when only Secret made the edge usable.
pub(crate) fn single_moves(
    setup: &Setup,
    seekers: &[Player],
    player: &Player,
    source: NodeId,
) -> FxHashSet<SingleMove> {
    let mut moves = FxHashSet::default();
    let graph = setup.graph();

    for destination in graph.adjacent_nodes(source) {
        let occupied = seekers.iter().any(|seeker| seeker.location() == destination);
        if occupied {
            continue;
        }

        for transport in graph.transports(source, destination) {
            let required = transport.required_ticket();
            if player.has(required) || player.has(TicketKind::Secret) {
                moves.insert(SingleMove::new(player.piece(), source, required, destination));

                if player.has(TicketKind::Secret) {
                    moves.insert(SingleMove::new(
                        player.piece(),
                        source,
                        TicketKind::Secret,
                        destination,
                    ));
                }
            }
        }
    }

    moves.retain(|mv| player.has(mv.ticket));
    moves
}

/// All legal double moves for the fugitive standing at `source`.
///
/// Empty unless the player holds a Double ticket and the travel log has room
/// for two more entries. Each first-leg single move is paired with the single
/// moves from its destination; a pairing is valid iff the same ticket kind is
/// held at least twice, or two different kinds are each held at least once.
pub(crate) fn double_moves(
    setup: &Setup,
    seekers: &[Player],
    player: &Player,
    source: NodeId,
    log_len: usize,
) -> FxHashSet<DoubleMove> {
    let mut moves = FxHashSet::default();

    if !player.has(TicketKind::Double) || log_len + 1 >= setup.move_count() {
        return moves;
    }

    for first in single_moves(setup, seekers, player, source) {
        for second in single_moves(setup, seekers, player, first.destination) {
            let valid = if first.ticket == second.ticket {
                player.at_least(first.ticket, 2)
            } else {
                player.has(first.ticket) && player.has(second.ticket)
            };

            if valid {
                moves.insert(DoubleMove::new(
                    player.piece(),
                    source,
                    first.ticket,
                    first.destination,
                    second.ticket,
                    second.destination,
                ));
            }
        }
    }

    moves
}
