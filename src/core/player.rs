//! Player identification and per-player game records.
//!
//! ## PlayerId
//!
//! Type-safe participant identifier. Ids are assigned by the transport
//! layer (one per connection) and are opaque to the engine; they only
//! need to be unique within a session.
//!
//! ## Player
//!
//! Everything the engine tracks per participant: the dice inventory,
//! the per-round score history, and the per-round `rolled`/`picked`
//! flags that gate the turn state machine.

use serde::{Deserialize, Serialize};

use crate::dice::DieKind;

/// Number of rounds in a full game.
pub const MAX_ROUNDS: usize = 10;

/// Participant identifier, unique within a session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Per-kind die counts for one player.
///
/// Backed by a fixed array indexed by [`DieKind`]. A fresh inventory
/// holds exactly one Yellow die and nothing else; that seed die is the
/// only thing a player owns before the first reward pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceInventory {
    counts: [u32; DieKind::COUNT],
}

impl DiceInventory {
    /// The starting inventory: one Yellow die.
    #[must_use]
    pub fn seed() -> Self {
        let mut counts = [0; DieKind::COUNT];
        counts[DieKind::Yellow.index()] = 1;
        Self { counts }
    }

    /// Number of dice of the given kind.
    #[must_use]
    pub fn count(&self, kind: DieKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Add one die of the given kind.
    pub fn add(&mut self, kind: DieKind) {
        self.counts[kind.index()] += 1;
    }

    /// Total number of dice held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over all kinds and their counts, in canonical kind order.
    pub fn stacks(&self) -> impl Iterator<Item = (DieKind, u32)> + '_ {
        DieKind::ALL.iter().map(move |&kind| (kind, self.count(kind)))
    }
}

impl Default for DiceInventory {
    fn default() -> Self {
        Self::seed()
    }
}

/// One participant's record within a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, set once at registration.
    pub name: String,

    /// Dice owned, grown by one per round via reward picks.
    pub dice: DiceInventory,

    /// Score per round, `None` until that round's roll completes.
    /// Each slot is written exactly once per game.
    pub history: [Option<i32>; MAX_ROUNDS],

    /// Whether this player has rolled in the current round.
    pub rolled: bool,

    /// Whether this player has picked a reward die this round.
    /// Not required before round 1.
    pub picked: bool,
}

impl Player {
    /// Create a freshly-registered player with the seed inventory.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dice: DiceInventory::seed(),
            history: [None; MAX_ROUNDS],
            rolled: false,
            picked: false,
        }
    }

    /// Reinitialize everything except the name, as on game reset.
    pub(crate) fn reset(&mut self) {
        self.dice = DiceInventory::seed();
        self.history = [None; MAX_ROUNDS];
        self.rolled = false;
        self.picked = false;
    }

    /// Total score across all rounds played so far.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.history.iter().flatten().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_inventory_is_one_yellow() {
        let inv = DiceInventory::seed();
        assert_eq!(inv.count(DieKind::Yellow), 1);
        assert_eq!(inv.total(), 1);
        for kind in DieKind::ALL {
            if kind != DieKind::Yellow {
                assert_eq!(inv.count(kind), 0);
            }
        }
    }

    #[test]
    fn add_increments_single_kind() {
        let mut inv = DiceInventory::seed();
        inv.add(DieKind::Red);
        inv.add(DieKind::Red);
        inv.add(DieKind::Gold);
        assert_eq!(inv.count(DieKind::Red), 2);
        assert_eq!(inv.count(DieKind::Gold), 1);
        assert_eq!(inv.total(), 4);
    }

    #[test]
    fn total_score_treats_unplayed_rounds_as_zero() {
        let mut player = Player::new("ann");
        assert_eq!(player.total_score(), 0);

        player.history[0] = Some(12);
        player.history[1] = Some(-3);
        assert_eq!(player.total_score(), 9);
    }

    #[test]
    fn reset_restores_registration_state() {
        let mut player = Player::new("bob");
        player.dice.add(DieKind::Green);
        player.history[0] = Some(5);
        player.rolled = true;
        player.picked = true;

        player.reset();

        assert_eq!(player.name, "bob");
        assert_eq!(player.dice, DiceInventory::seed());
        assert_eq!(player.history, [None; MAX_ROUNDS]);
        assert!(!player.rolled);
        assert!(!player.picked);
    }
}
