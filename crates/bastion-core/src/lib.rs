//! Bastion Core - Turn-Based Stronghold Simulation Engine
//!
//! A deterministic rules engine for a campaign-style stronghold/economy
//! game: facility construction, staffing, once-per-turn orders, a weighted
//! random event table, and wall construction traced around the floorplan.
//!
//! # Architecture
//!
//! State is a single serializable aggregate ([`state::GameState`]) that is
//! never mutated in place: the pure [`store::transition`] function maps
//! (state, action) to a complete new snapshot. All randomness flows through
//! injected `Rng` parameters so runs can be replayed from a seed.
//!
//! # Example
//!
//! ```rust
//! use bastion_core::prelude::*;
//!
//! let mut store = GameStore::new(42);
//! store.dispatch(Action::QueueWalls { sections: 2 });
//! store.dispatch(Action::EndTurn { selection: None });
//! assert_eq!(store.state().bastion.current_turn, 2);
//! ```

pub mod actions;
pub mod events;
pub mod facilities;
pub mod floorplan;
pub mod hirelings;
pub mod orders;
pub mod persistence;
pub mod state;
pub mod store;
pub mod turn;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::actions::{Action, OrderSelection};
    pub use crate::state::GameState;
    pub use crate::store::{transition, GameStore};
    pub use bastion_logic::catalog::{Order, Space};
}
