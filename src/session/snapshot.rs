//! Immutable state snapshots for broadcast.
//!
//! The original habit this replaces is deep-copying the whole player
//! table before every send. A snapshot is built once per broadcast,
//! owns all its data, and serializes cleanly over any transport.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};
use crate::dice::DieKind;
use crate::modifier::Modifier;

/// A kind and how many of it a player holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieStack {
    pub kind: DieKind,
    pub count: u32,
}

/// One player's publicly visible state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    /// All seven kinds in canonical order, zero counts included.
    pub dice: Vec<DieStack>,
    /// Per-round scores; `None` for rounds not yet scored.
    pub history: Vec<Option<i32>>,
    pub rolled: bool,
    pub picked: bool,
}

impl PlayerSnapshot {
    pub(crate) fn of(id: PlayerId, player: &Player) -> Self {
        Self {
            id,
            name: player.name.clone(),
            dice: player
                .dice
                .stacks()
                .map(|(kind, count)| DieStack { kind, count })
                .collect(),
            history: player.history.to_vec(),
            rolled: player.rolled,
            picked: player.picked,
        }
    }
}

/// The full observable game state at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// All players, sorted by id.
    pub players: Vec<PlayerSnapshot>,
    /// 0 in the lobby, else 1..=10.
    pub current_round: u32,
    pub started: bool,
    /// The modifier in force this round, if any.
    pub modifier: Option<Modifier>,
}
