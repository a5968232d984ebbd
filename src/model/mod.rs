//! The observable game model.
//!
//! Wraps the growing sequence of states behind a small mutable facade:
//! `choose_move` advances the newest state and broadcasts the outcome to
//! every registered observer. The states themselves stay immutable; the
//! model only ever appends.

use std::rc::Rc;

use crate::board::Setup;
use crate::core::{GameError, Player};
use crate::state::{GameState, Move};

/// What a broadcast is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A move was applied and the game continues.
    MoveMade,
    /// A move was applied and decided the game.
    GameOver,
}

/// Receives a broadcast after every successful `choose_move`.
pub trait Observer {
    /// Called with the freshly produced state.
    fn state_changed(&self, state: &GameState, event: Event);
}

/// The sequence of states plus its observers.
///
/// Observers are identified by pointer: registering the same `Rc` twice is
/// an error, as is unregistering one that was never registered.
pub struct Model {
    states: Vec<GameState>,
    observers: Vec<Rc<dyn Observer>>,
}

impl Model {
    /// Build a model around a freshly constructed initial state.
    pub fn build(setup: Setup, fugitive: Player, seekers: Vec<Player>) -> Result<Self, GameError> {
        let initial = GameState::build(setup, fugitive, seekers)?;
        Ok(Self {
            states: vec![initial],
            observers: Vec::new(),
        })
    }

    /// The newest state.
    #[must_use]
    pub fn current(&self) -> &GameState {
        self.states.last().expect("model always holds a state")
    }

    /// Number of states seen so far, the initial one included.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Register an observer for future broadcasts.
    pub fn register(&mut self, observer: Rc<dyn Observer>) -> Result<(), GameError> {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            return Err(GameError::ObserverRegistered);
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Remove a previously registered observer.
    pub fn unregister(&mut self, observer: &Rc<dyn Observer>) -> Result<(), GameError> {
        let position = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
            .ok_or(GameError::ObserverMissing)?;
        self.observers.remove(position);
        Ok(())
    }

    /// Currently registered observers.
    #[must_use]
    pub fn observers(&self) -> &[Rc<dyn Observer>] {
        &self.observers
    }

    /// Advance the newest state with `mv` and broadcast the outcome.
    pub fn choose_move(&mut self, mv: &Move) -> Result<(), GameError> {
        let next = self.current().advance(mv)?;

        let event = if next.winner().is_empty() {
            Event::MoveMade
        } else {
            Event::GameOver
        };
        tracing::debug!(?event, states = self.states.len() + 1, "move applied");

        self.states.push(next);
        let current = self.current();
        for observer in &self.observers {
            observer.state_changed(current, event);
        }
        Ok(())
    }
}
