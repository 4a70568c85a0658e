//! # chroma-dice
//!
//! Round engine for a turn-based multiplayer colour-dice scoring game.
//! Players accumulate typed dice across ten rounds, roll them each
//! round for points under a randomly drawn round modifier, and choose
//! reward dice from randomized offers; the highest total wins, ties
//! shared.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: the engine does no I/O and knows nothing
//!    about transports. Actions go in one at a time, results come out.
//!
//! 2. **Explicit sessions**: a game is a [`GameSession`] value, not a
//!    process-wide global. Any number of sessions can coexist.
//!
//! 3. **Injected randomness**: every draw flows through a seedable
//!    [`GameRng`], so whole games replay deterministically under test.
//!
//! ## Modules
//!
//! - `core`: player records, dice inventories, RNG
//! - `dice`: the seven die kinds and their face tables
//! - `modifier`: round-scoped scoring modifiers
//! - `scoring`: the roll resolution pipeline
//! - `offer`: post-round reward menus
//! - `session`: the round/turn state machine
//! - `contract`: the transport-facing action/message contract

pub mod contract;
pub mod core;
pub mod dice;
pub mod modifier;
pub mod offer;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DiceInventory, GameRng, Player, PlayerId, MAX_ROUNDS};

pub use crate::dice::{DieKind, ScoreRule, GOLD_FACE};

pub use crate::modifier::{
    draw_modifier, Modifier, ModifierKind, BASE_GAMBLE_CHANCE, GAMBLE_TIME_CHANCE,
    NO_MODIFIER_CHANCE,
};

pub use crate::scoring::{score_roll, KindScore, RollResult, RoundRules};

pub use crate::offer::{draw_offers, OfferMap, OfferMenu, GOLD_OFFER_CHANCE};

pub use crate::session::{
    DieStack, GameSession, GameSnapshot, PlayerSnapshot, RoundOutcome,
};

pub use crate::contract::{handle_action, ClientAction, Recipient, ServerMessage};
