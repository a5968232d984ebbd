//! Win-condition evaluation.
//!
//! Runs exactly once, while a state is being constructed, against the moves
//! generated for that state. The result is stored in the state and never
//! recomputed; queries read the stored set.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashSet;

use super::moves::Move;
use crate::board::Setup;
use crate::core::{Piece, Player};

/// Decide the winning side, if any.
///
/// Seeker conditions are checked first: a capture or a cornered fugitive
/// beats a simultaneously full log. `candidate_moves` are the moves
/// generated for this state before any winner gating.
pub(crate) fn evaluate(
    setup: &Setup,
    remaining: &ImHashSet<Piece>,
    log_len: usize,
    fugitive: &Player,
    seekers: &[Player],
    candidate_moves: &FxHashSet<Move>,
) -> ImHashSet<Piece> {
    let captured = seekers
        .iter()
        .any(|seeker| seeker.location() == fugitive.location());
    let cornered = remaining.contains(&Piece::Fugitive) && candidate_moves.is_empty();

    if captured || cornered {
        return seekers.iter().map(Player::piece).collect();
    }

    let log_full = log_len == setup.move_count();
    // Exhaustion only decides the game once the fugitive's pending move is
    // made; until then the fugitive still gets that move
    let seekers_exhausted = !remaining.contains(&Piece::Fugitive)
        && seekers.iter().all(|seeker| seeker.tickets().total() == 0);

    if log_full || seekers_exhausted {
        return ImHashSet::unit(Piece::Fugitive);
    }

    ImHashSet::new()
}
