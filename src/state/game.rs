//! The immutable game state.
//!
//! A `GameState` is produced either by the `build` factory (initial state) or
//! by `advance` (successor states), and is never mutated afterwards. The
//! legal-move set and the winning side are computed once, inside
//! construction, and stored; every query is a plain read. Many readers can
//! hold many states at once — the setup is shared behind an `Arc` and the
//! log and piece sets are persistent structures.

use std::sync::Arc;

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHashSet;

use super::generator;
use super::log::LogEntry;
use super::moves::Move;
use super::winner;
use crate::board::{NodeId, Setup};
use crate::core::{GameError, Piece, Player, TicketBook, TicketKind};

/// One immutable position of the pursuit.
///
/// ```
/// use rust_pursuit::board::{Graph, NodeId, Setup};
/// use rust_pursuit::core::{Piece, Player, SeekerId, TicketBook, TicketKind, Transport};
/// use rust_pursuit::state::GameState;
///
/// let graph = Graph::builder()
///     .edge(1, 2, Transport::Taxi)
///     .edge(2, 3, Transport::Taxi)
///     .build();
/// let setup = Setup::new(graph, vec![true, false]);
///
/// let fugitive = Player::new(
///     Piece::Fugitive,
///     TicketBook::new().with(TicketKind::Taxi, 2),
///     NodeId::new(1),
/// );
/// let seeker = Player::new(
///     Piece::Seeker(SeekerId::new(0)),
///     TicketBook::new().with(TicketKind::Taxi, 2),
///     NodeId::new(3),
/// );
///
/// let state = GameState::build(setup, fugitive, vec![seeker]).unwrap();
/// assert!(state.winner().is_empty());
///
/// let mv = state.available_moves().iter().next().copied().unwrap();
/// let next = state.advance(&mv).unwrap();
/// assert_eq!(next.travel_log().len(), 1);
/// assert!(state.travel_log().is_empty()); // The old state is untouched
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    setup: Arc<Setup>,
    /// Pieces whose turn is still pending this round.
    remaining: ImHashSet<Piece>,
    log: Vector<LogEntry>,
    fugitive: Player,
    seekers: Vec<Player>,
    /// Legal moves, fixed at construction. Empty once a winner is decided.
    moves: FxHashSet<Move>,
    /// Winning side, fixed at construction. Empty while the game continues.
    winner: ImHashSet<Piece>,
}

impl GameState {
    /// Build the initial state of a game.
    ///
    /// Fails on an empty graph or schedule, no seekers, a player in the
    /// wrong role, duplicate seeker pieces or locations, or a seeker
    /// holding Secret or Double tickets.
    pub fn build(
        setup: Setup,
        fugitive: Player,
        seekers: Vec<Player>,
    ) -> Result<Self, GameError> {
        if !fugitive.piece().is_fugitive() {
            return Err(GameError::RoleMismatch(fugitive.piece()));
        }
        for (i, seeker) in seekers.iter().enumerate() {
            if !seeker.piece().is_seeker() {
                return Err(GameError::RoleMismatch(seeker.piece()));
            }
            if seekers[..i].iter().any(|other| other.piece() == seeker.piece()) {
                return Err(GameError::DuplicateSeeker(seeker.piece()));
            }
        }

        Self::with_parts(
            Arc::new(setup),
            ImHashSet::unit(Piece::Fugitive),
            Vector::new(),
            fugitive,
            seekers,
        )
    }

    /// Construct a state, validate its invariants and derive its caches.
    ///
    /// The single construction path for initial and successor states alike.
    fn with_parts(
        setup: Arc<Setup>,
        remaining: ImHashSet<Piece>,
        log: Vector<LogEntry>,
        fugitive: Player,
        seekers: Vec<Player>,
    ) -> Result<Self, GameError> {
        if setup.graph().is_empty() {
            return Err(GameError::EmptyGraph);
        }
        if setup.move_count() == 0 {
            return Err(GameError::EmptySchedule);
        }
        if seekers.is_empty() {
            return Err(GameError::NoSeekers);
        }
        for (i, seeker) in seekers.iter().enumerate() {
            if seekers[..i].iter().any(|other| other.location() == seeker.location()) {
                return Err(GameError::SharedLocation(seeker.location()));
            }
            for ticket in [TicketKind::Secret, TicketKind::Double] {
                if seeker.has(ticket) {
                    return Err(GameError::ForbiddenTicket {
                        piece: seeker.piece(),
                        ticket,
                    });
                }
            }
        }

        let candidates = Self::candidate_moves(&setup, &remaining, log.len(), &fugitive, &seekers);
        let winner = winner::evaluate(&setup, &remaining, log.len(), &fugitive, &seekers, &candidates);
        let moves = if winner.is_empty() {
            candidates
        } else {
            FxHashSet::default()
        };

        Ok(Self {
            setup,
            remaining,
            log,
            fugitive,
            seekers,
            moves,
            winner,
        })
    }

    /// Every legal move for the pieces still to move this round.
    fn candidate_moves(
        setup: &Setup,
        remaining: &ImHashSet<Piece>,
        log_len: usize,
        fugitive: &Player,
        seekers: &[Player],
    ) -> FxHashSet<Move> {
        let mut moves = FxHashSet::default();

        for piece in remaining {
            match piece {
                Piece::Fugitive => {
                    let source = fugitive.location();
                    moves.extend(
                        generator::single_moves(setup, seekers, fugitive, source)
                            .into_iter()
                            .map(Move::Single),
                    );
                    moves.extend(
                        generator::double_moves(setup, seekers, fugitive, source, log_len)
                            .into_iter()
                            .map(Move::Double),
                    );
                }
                Piece::Seeker(_) => {
                    if let Some(seeker) = seekers.iter().find(|s| s.piece() == *piece) {
                        moves.extend(
                            generator::single_moves(setup, seekers, seeker, seeker.location())
                                .into_iter()
                                .map(Move::Single),
                        );
                    }
                }
            }
        }

        moves
    }

    // === Queries ===

    /// The game setup.
    #[must_use]
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// All pieces in the game.
    pub fn players(&self) -> impl Iterator<Item = Piece> + '_ {
        self.seekers
            .iter()
            .map(Player::piece)
            .chain(std::iter::once(self.fugitive.piece()))
    }

    /// Pieces whose turn is still pending this round.
    pub fn remaining(&self) -> impl Iterator<Item = Piece> + '_ {
        self.remaining.iter().copied()
    }

    /// A seeker's current location.
    ///
    /// `None` for unknown pieces and for the fugitive, whose location is
    /// only ever published through the travel log.
    #[must_use]
    pub fn seeker_location(&self, piece: Piece) -> Option<NodeId> {
        self.seekers
            .iter()
            .find(|seeker| seeker.piece() == piece)
            .map(Player::location)
    }

    /// A piece's ticket ledger. `None` for unknown pieces.
    #[must_use]
    pub fn tickets(&self, piece: Piece) -> Option<&TicketBook> {
        if piece.is_fugitive() {
            return Some(self.fugitive.tickets());
        }
        self.seekers
            .iter()
            .find(|seeker| seeker.piece() == piece)
            .map(Player::tickets)
    }

    /// A piece's count for one ticket kind. `None` for unknown pieces.
    #[must_use]
    pub fn ticket_count(&self, piece: Piece, kind: TicketKind) -> Option<u32> {
        self.tickets(piece).map(|book| book.count(kind))
    }

    /// The fugitive's travel log.
    #[must_use]
    pub fn travel_log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// The winning side. Empty while the game continues.
    #[must_use]
    pub fn winner(&self) -> &ImHashSet<Piece> {
        &self.winner
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.winner.is_empty()
    }

    /// The legal moves of this state. Empty once a winner is decided.
    #[must_use]
    pub fn available_moves(&self) -> &FxHashSet<Move> {
        &self.moves
    }

    // === Transition ===

    /// Apply a legal move, producing the successor state.
    ///
    /// Fails with `GameError::InvalidMove` if `mv` is not in this state's
    /// legal-move set. This state is left untouched either way.
    pub fn advance(&self, mv: &Move) -> Result<GameState, GameError> {
        if !self.moves.contains(mv) {
            return Err(GameError::InvalidMove);
        }

        let remaining = self.next_remaining(mv.piece());

        match *mv {
            Move::Single(single) if single.piece.is_fugitive() => {
                let fugitive = self.fugitive.at(single.destination).spend(single.ticket)?;

                let mut log = self.log.clone();
                log.push_back(self.log_entry(single.ticket, single.destination, self.log.len()));

                Self::with_parts(
                    Arc::clone(&self.setup),
                    remaining,
                    log,
                    fugitive,
                    self.seekers.clone(),
                )
            }
            Move::Single(single) => {
                let mut seekers = self.seekers.clone();
                let mover = seekers
                    .iter_mut()
                    .find(|seeker| seeker.piece() == single.piece)
                    .ok_or(GameError::InvalidMove)?;
                *mover = mover.spend(single.ticket)?.at(single.destination);

                // The seeker's spent ticket joins the fugitive's pool
                let fugitive = self.fugitive.give(single.ticket);

                Self::with_parts(
                    Arc::clone(&self.setup),
                    remaining,
                    self.log.clone(),
                    fugitive,
                    seekers,
                )
            }
            Move::Double(double) => {
                let fugitive = self
                    .fugitive
                    .at(double.destination2)
                    .spend(double.ticket1)?
                    .spend(double.ticket2)?
                    .spend(TicketKind::Double)?;

                let mut log = self.log.clone();
                log.push_back(self.log_entry(double.ticket1, double.destination1, self.log.len()));
                log.push_back(self.log_entry(double.ticket2, double.destination2, self.log.len() + 1));

                Self::with_parts(
                    Arc::clone(&self.setup),
                    remaining,
                    log,
                    fugitive,
                    self.seekers.clone(),
                )
            }
        }
    }

    /// Turn handoff, decided by who commenced the move.
    fn next_remaining(&self, mover: Piece) -> ImHashSet<Piece> {
        if mover.is_fugitive() {
            // Seekers with no tickets left sit the round out
            self.seekers
                .iter()
                .filter(|seeker| seeker.tickets().total() > 0)
                .map(Player::piece)
                .collect()
        } else if self.remaining.len() > 1 {
            self.remaining.without(&mover)
        } else {
            ImHashSet::unit(Piece::Fugitive)
        }
    }

    /// The log entry for a fugitive hop, gated by the reveal schedule.
    fn log_entry(&self, ticket: TicketKind, destination: NodeId, index: usize) -> LogEntry {
        if self.setup.reveals(index) {
            LogEntry::revealed(ticket, destination)
        } else {
            LogEntry::hidden(ticket)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Graph;
    use crate::core::{SeekerId, Transport};

    fn node(id: u16) -> NodeId {
        NodeId::new(id)
    }

    fn seeker_piece(id: u8) -> Piece {
        Piece::Seeker(SeekerId::new(id))
    }

    /// A 2x2 grid with taxi edges plus one bus edge across the diagonal.
    ///
    /// ```text
    /// 1 -- 2
    /// |    |   plus bus 1-3
    /// 4 -- 3
    /// ```
    fn grid() -> Graph {
        Graph::builder()
            .edge(1, 2, Transport::Taxi)
            .edge(2, 3, Transport::Taxi)
            .edge(3, 4, Transport::Taxi)
            .edge(4, 1, Transport::Taxi)
            .edge(1, 3, Transport::Bus)
            .build()
    }

    fn fugitive(location: u16, tickets: TicketBook) -> Player {
        Player::new(Piece::Fugitive, tickets, node(location))
    }

    fn seeker(id: u8, location: u16, tickets: TicketBook) -> Player {
        Player::new(seeker_piece(id), tickets, node(location))
    }

    fn taxis(n: u32) -> TicketBook {
        TicketBook::new().with(TicketKind::Taxi, n)
    }

    fn build_grid_game() -> GameState {
        let setup = Setup::new(grid(), vec![false, true, false, false, false]);
        GameState::build(
            setup,
            fugitive(1, taxis(5).with(TicketKind::Double, 1).with(TicketKind::Bus, 1)),
            vec![seeker(0, 3, taxis(3))],
        )
        .unwrap()
    }

    fn single_to(state: &GameState, piece: Piece, destination: u16) -> Move {
        *state
            .available_moves()
            .iter()
            .find(|mv| {
                mv.piece() == piece && !mv.is_double() && mv.destination() == node(destination)
            })
            .expect("expected a matching single move")
    }

    #[test]
    fn test_build_rejects_empty_graph() {
        let setup = Setup::new(Graph::builder().build(), vec![true]);
        let result = GameState::build(setup, fugitive(1, taxis(1)), vec![seeker(0, 2, taxis(1))]);

        assert_eq!(result.unwrap_err(), GameError::EmptyGraph);
    }

    #[test]
    fn test_build_rejects_empty_schedule() {
        let setup = Setup::new(grid(), vec![]);
        let result = GameState::build(setup, fugitive(1, taxis(1)), vec![seeker(0, 2, taxis(1))]);

        assert_eq!(result.unwrap_err(), GameError::EmptySchedule);
    }

    #[test]
    fn test_build_rejects_no_seekers() {
        let setup = Setup::new(grid(), vec![true]);
        let result = GameState::build(setup, fugitive(1, taxis(1)), vec![]);

        assert_eq!(result.unwrap_err(), GameError::NoSeekers);
    }

    #[test]
    fn test_build_rejects_shared_seeker_location() {
        let setup = Setup::new(grid(), vec![true]);
        let result = GameState::build(
            setup,
            fugitive(1, taxis(1)),
            vec![seeker(0, 3, taxis(1)), seeker(1, 3, taxis(1))],
        );

        assert_eq!(result.unwrap_err(), GameError::SharedLocation(node(3)));
    }

    #[test]
    fn test_build_rejects_forbidden_tickets() {
        let setup = Setup::new(grid(), vec![true]);
        let sneaky = seeker(0, 3, taxis(1).with(TicketKind::Secret, 1));
        let result = GameState::build(setup, fugitive(1, taxis(1)), vec![sneaky]);

        assert_eq!(
            result.unwrap_err(),
            GameError::ForbiddenTicket {
                piece: seeker_piece(0),
                ticket: TicketKind::Secret
            }
        );
    }

    #[test]
    fn test_build_rejects_wrong_roles() {
        let setup = Setup::new(grid(), vec![true]);
        let result = GameState::build(
            setup.clone(),
            seeker(0, 1, taxis(1)),
            vec![seeker(1, 3, taxis(1))],
        );
        assert_eq!(result.unwrap_err(), GameError::RoleMismatch(seeker_piece(0)));

        let result = GameState::build(
            setup.clone(),
            fugitive(1, taxis(1)),
            vec![fugitive(3, taxis(1))],
        );
        assert_eq!(result.unwrap_err(), GameError::RoleMismatch(Piece::Fugitive));

        let result = GameState::build(
            setup,
            fugitive(1, taxis(1)),
            vec![seeker(0, 3, taxis(1)), seeker(0, 4, taxis(1))],
        );
        assert_eq!(result.unwrap_err(), GameError::DuplicateSeeker(seeker_piece(0)));
    }

    #[test]
    fn test_initial_turn_is_the_fugitives() {
        let state = build_grid_game();

        let remaining: Vec<_> = state.remaining().collect();
        assert_eq!(remaining, vec![Piece::Fugitive]);
        assert!(state
            .available_moves()
            .iter()
            .all(|mv| mv.piece() == Piece::Fugitive));
    }

    #[test]
    fn test_queries() {
        let state = build_grid_game();

        let mut players: Vec<_> = state.players().collect();
        players.sort();
        assert_eq!(players, vec![Piece::Fugitive, seeker_piece(0)]);

        assert_eq!(state.seeker_location(seeker_piece(0)), Some(node(3)));
        assert_eq!(state.seeker_location(seeker_piece(9)), None);
        assert_eq!(state.seeker_location(Piece::Fugitive), None);

        assert_eq!(state.ticket_count(seeker_piece(0), TicketKind::Taxi), Some(3));
        assert_eq!(state.ticket_count(Piece::Fugitive, TicketKind::Double), Some(1));
        assert_eq!(state.ticket_count(seeker_piece(9), TicketKind::Taxi), None);

        assert!(state.travel_log().is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn test_advance_rejects_foreign_move() {
        let state = build_grid_game();
        let foreign = Move::single(Piece::Fugitive, node(1), TicketKind::Taxi, node(3));

        assert_eq!(state.advance(&foreign).unwrap_err(), GameError::InvalidMove);
    }

    #[test]
    fn test_fugitive_single_move_effects() {
        let state = build_grid_game();
        let mv = single_to(&state, Piece::Fugitive, 2);

        let next = state.advance(&mv).unwrap();

        // Ticket burned, log grown by a hidden entry (move 1 is not revealed)
        assert_eq!(next.ticket_count(Piece::Fugitive, TicketKind::Taxi), Some(4));
        assert_eq!(next.travel_log().len(), 1);
        assert!(!next.travel_log()[0].is_revealed());

        // Turn handed to the seekers
        let remaining: Vec<_> = next.remaining().collect();
        assert_eq!(remaining, vec![seeker_piece(0)]);

        // The prior state is untouched
        assert_eq!(state.travel_log().len(), 0);
        assert_eq!(state.ticket_count(Piece::Fugitive, TicketKind::Taxi), Some(5));
    }

    #[test]
    fn test_second_fugitive_move_is_revealed() {
        let state = build_grid_game();

        let state = state.advance(&single_to(&state, Piece::Fugitive, 2)).unwrap();
        let state = state.advance(&single_to(&state, seeker_piece(0), 4)).unwrap();
        let state = state.advance(&single_to(&state, Piece::Fugitive, 1)).unwrap();

        assert_eq!(state.travel_log().len(), 2);
        assert!(!state.travel_log()[0].is_revealed());
        assert_eq!(
            state.travel_log()[1],
            LogEntry::revealed(TicketKind::Taxi, node(1))
        );
    }

    #[test]
    fn test_seeker_move_transfers_ticket() {
        let state = build_grid_game();
        let state = state.advance(&single_to(&state, Piece::Fugitive, 2)).unwrap();

        let before = state.ticket_count(Piece::Fugitive, TicketKind::Taxi).unwrap();
        let next = state.advance(&single_to(&state, seeker_piece(0), 4)).unwrap();

        assert_eq!(next.ticket_count(seeker_piece(0), TicketKind::Taxi), Some(2));
        assert_eq!(
            next.ticket_count(Piece::Fugitive, TicketKind::Taxi),
            Some(before + 1)
        );
        assert_eq!(next.seeker_location(seeker_piece(0)), Some(node(4)));

        // Seeker moves never touch the log
        assert_eq!(next.travel_log().len(), state.travel_log().len());
    }

    #[test]
    fn test_last_seeker_hands_turn_to_fugitive() {
        let state = build_grid_game();
        let state = state.advance(&single_to(&state, Piece::Fugitive, 2)).unwrap();
        let state = state.advance(&single_to(&state, seeker_piece(0), 4)).unwrap();

        let remaining: Vec<_> = state.remaining().collect();
        assert_eq!(remaining, vec![Piece::Fugitive]);
    }

    #[test]
    fn test_seeker_round_shrinks_one_mover_at_a_time() {
        let setup = Setup::new(grid(), vec![false; 5]);
        let state = GameState::build(
            setup,
            fugitive(1, taxis(5)),
            vec![seeker(0, 2, taxis(3)), seeker(1, 3, taxis(3))],
        )
        .unwrap();

        let state = state.advance(&single_to(&state, Piece::Fugitive, 4)).unwrap();
        assert_eq!(state.remaining().count(), 2);

        // Seeker 1 moves away; seeker 0 is still pending
        let state = state.advance(&single_to(&state, seeker_piece(1), 2)).unwrap();
        let remaining: Vec<_> = state.remaining().collect();
        assert_eq!(remaining, vec![seeker_piece(0)]);
        assert!(state
            .available_moves()
            .iter()
            .all(|mv| mv.piece() == seeker_piece(0)));
    }

    #[test]
    fn test_broke_seekers_sit_out_the_round() {
        let setup = Setup::new(grid(), vec![false; 5]);
        let state = GameState::build(
            setup,
            fugitive(1, taxis(5)),
            vec![seeker(0, 2, taxis(1)), seeker(1, 3, taxis(3))],
        )
        .unwrap();

        // Seeker 0 spends its last taxi this round
        let state = state.advance(&single_to(&state, Piece::Fugitive, 4)).unwrap();
        let state = state.advance(&single_to(&state, seeker_piece(0), 1)).unwrap();
        let state = state.advance(&single_to(&state, seeker_piece(1), 2)).unwrap();

        // Next fugitive move starts a round without the broke seeker
        let state = state.advance(&single_to(&state, Piece::Fugitive, 3)).unwrap();
        let remaining: Vec<_> = state.remaining().collect();
        assert_eq!(remaining, vec![seeker_piece(1)]);
    }

    #[test]
    fn test_double_move_effects() {
        let state = build_grid_game();
        let mv = *state
            .available_moves()
            .iter()
            .find(|mv| mv.is_double() && mv.destination() == node(1))
            .expect("expected a double move bouncing home");

        let next = state.advance(&mv).unwrap();

        assert_eq!(next.travel_log().len(), 2);
        assert_eq!(next.ticket_count(Piece::Fugitive, TicketKind::Double), Some(0));
        // Two leg tickets burned on top of the Double
        assert_eq!(
            next.tickets(Piece::Fugitive).unwrap().total(),
            state.tickets(Piece::Fugitive).unwrap().total() - 3
        );

        // Second entry lands on the revealed slot of the schedule
        assert!(!next.travel_log()[0].is_revealed());
        assert!(next.travel_log()[1].is_revealed());
    }

    #[test]
    fn test_capture_ends_the_game() {
        let setup = Setup::new(grid(), vec![false; 5]);
        let state = GameState::build(
            setup,
            fugitive(1, taxis(5)),
            vec![seeker(0, 3, taxis(3))],
        )
        .unwrap();

        // Fugitive steps next to the seeker; the seeker lands on it
        let state = state.advance(&single_to(&state, Piece::Fugitive, 2)).unwrap();
        assert!(state.winner().is_empty());

        let caught = state.advance(&single_to(&state, seeker_piece(0), 2)).unwrap();

        assert_eq!(caught.winner(), &ImHashSet::unit(seeker_piece(0)));
        assert!(caught.available_moves().is_empty());
    }

    #[test]
    fn test_winner_freezes_available_moves() {
        // Fugitive with one move left on a one-move schedule: after the
        // move the log is full and the fugitive wins
        let setup = Setup::new(grid(), vec![false]);
        let state = GameState::build(
            setup,
            fugitive(1, taxis(2)),
            vec![seeker(0, 3, taxis(3))],
        )
        .unwrap();

        let won = state.advance(&single_to(&state, Piece::Fugitive, 2)).unwrap();

        assert_eq!(won.winner(), &ImHashSet::unit(Piece::Fugitive));
        assert!(won.available_moves().is_empty());
        assert!(won.is_over());

        let replay = Move::single(seeker_piece(0), node(3), TicketKind::Taxi, node(2));
        assert_eq!(won.advance(&replay).unwrap_err(), GameError::InvalidMove);
    }
}
