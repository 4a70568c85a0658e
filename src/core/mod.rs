//! Core engine types: players, inventories, RNG.
//!
//! These are the building blocks the rest of the engine is assembled
//! from; they carry no game rules themselves.

pub mod player;
pub mod rng;

pub use player::{DiceInventory, Player, PlayerId, MAX_ROUNDS};
pub use rng::GameRng;
