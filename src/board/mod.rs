//! The board: location graph and game setup.

pub mod graph;
pub mod setup;

pub use graph::{EdgeTransports, Graph, GraphBuilder, NodeId};
pub use setup::{
    deal_start_locations, fugitive_tickets, seeker_tickets, standard_reveal_schedule, Setup,
    FUGITIVE_START_LOCATIONS, SEEKER_START_LOCATIONS, STANDARD_MOVE_COUNT, STANDARD_REVEAL_MOVES,
};
