//! The round engine: one `GameSession` per running game.
//!
//! A session owns the player table, the round counter, the readiness
//! count and the active modifier, and exposes the full turn state
//! machine: register, start, pick, roll, round completion, reset.
//!
//! The session is a plain synchronous object. It performs no I/O and
//! holds no locks; the surrounding transport layer is responsible for
//! invoking it one action at a time. Out-of-order duplicates (say, two
//! roll actions for the same player) are rejected by the per-player
//! `rolled` guard, not by synchronization.
//!
//! A player who never rolls blocks round completion for everyone.
//! That is deliberate: the engine has no timeout concept, and any
//! forced-completion policy belongs to the host.

mod snapshot;

pub use snapshot::{DieStack, GameSnapshot, PlayerSnapshot};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, PlayerId, MAX_ROUNDS};
use crate::dice::DieKind;
use crate::modifier::{draw_modifier, Modifier};
use crate::offer::{draw_offers, OfferMap};
use crate::scoring::{score_roll, RollResult, RoundRules};

/// What a completed round resolves to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A round before the last finished; the game moves on.
    RoundEnd {
        /// The 1-based round that just finished.
        finished_round: u32,
        /// Reward menus per player.
        offers: OfferMap,
        /// The modifier for the round now starting, if any.
        modifier: Option<Modifier>,
    },
    /// The final round finished; the game is over.
    ///
    /// The session is left in its terminal state. Starting over is the
    /// caller's move, via [`GameSession::reset_game`].
    GameEnd {
        /// Every player with the maximal summed history. Ties mean
        /// multiple winners.
        winners: Vec<PlayerId>,
        /// Final totals, sorted by player id.
        totals: Vec<(PlayerId, i32)>,
    },
}

/// One game's complete state and rules.
///
/// Sessions are explicit values, not globals; any number of them can
/// coexist, each with its own RNG.
#[derive(Clone, Debug)]
pub struct GameSession {
    players: FxHashMap<PlayerId, Player>,
    current_round: u32,
    ready_count: usize,
    started: bool,
    active_modifier: Option<Modifier>,
    rng: GameRng,
}

impl GameSession {
    /// Create a session with a fixed RNG seed. Seeded sessions replay
    /// identically, which the tests rely on.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a session seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            players: FxHashMap::default(),
            current_round: 0,
            ready_count: 0,
            started: false,
            active_modifier: None,
            rng,
        }
    }

    // === Queries ===

    /// Whether the game has started.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Current round: 0 before the game starts, else 1..=10.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Players who have rolled in the current round.
    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.ready_count
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The modifier in force this round, if any.
    #[must_use]
    pub fn active_modifier(&self) -> Option<&Modifier> {
        self.active_modifier.as_ref()
    }

    /// Look up a player's record.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// All player ids, ascending.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.players.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    // === Lifecycle ===

    /// Register a new player. Rejected once the game has started.
    pub fn register_player(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        if self.started {
            return false;
        }
        self.players.insert(id, Player::new(name));
        true
    }

    /// Remove a player unconditionally. Idempotent.
    ///
    /// Round counters are untouched even mid-round; a disconnect is
    /// not an automatic roll.
    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.remove(&id);
    }

    /// Start the game. Fails if already started or nobody registered.
    ///
    /// Round 1 always begins with no modifier.
    pub fn start_game(&mut self) -> bool {
        if self.started || self.players.is_empty() {
            return false;
        }
        self.started = true;
        self.current_round = 1;
        self.active_modifier = None;
        true
    }

    /// Return to the lobby. Unconditional.
    ///
    /// Players are retained but re-seeded: inventory back to one
    /// Yellow, history cleared, flags cleared.
    pub fn reset_game(&mut self) {
        self.started = false;
        self.current_round = 0;
        self.ready_count = 0;
        self.active_modifier = None;
        for player in self.players.values_mut() {
            player.reset();
        }
    }

    // === Turn actions ===

    /// Take one die of the given kind as this round's reward.
    ///
    /// At most one pick per round per player; a second call is a
    /// no-op returning false.
    pub fn pick_die(&mut self, id: PlayerId, kind: DieKind) -> bool {
        let Some(player) = self.players.get_mut(&id) else {
            return false;
        };
        if player.picked {
            return false;
        }
        player.dice.add(kind);
        player.picked = true;
        true
    }

    /// Roll all of a player's dice for the current round.
    ///
    /// Returns `None`, mutating nothing, unless the game has started,
    /// the player is known, has not yet rolled, and (for rounds after
    /// the first) has picked a reward die. On success the round score
    /// is written into the player's history slot for this round, once
    /// and only once per game.
    pub fn roll_dice(&mut self, id: PlayerId) -> Option<RollResult> {
        if !self.started {
            return None;
        }
        let round = self.current_round;
        let rules = RoundRules::from_modifier(self.active_modifier.as_ref());

        let player = self.players.get_mut(&id)?;
        if player.rolled || (round > 1 && !player.picked) {
            return None;
        }

        player.rolled = true;
        let result = score_roll(&player.dice, &rules, &mut self.rng);
        player.history[(round - 1) as usize] = Some(result.round_score);
        self.ready_count += 1;
        Some(result)
    }

    /// Every player whose score for the given 0-based round index is
    /// the maximum. Sorted ascending.
    #[must_use]
    pub fn top_scorers(&self, round_idx: usize) -> Vec<PlayerId> {
        let Some(max) = self
            .players
            .values()
            .filter_map(|p| p.history.get(round_idx).copied().flatten())
            .max()
        else {
            return Vec::new();
        };
        let mut tops: Vec<_> = self
            .players
            .iter()
            .filter(|(_, p)| p.history.get(round_idx).copied().flatten() == Some(max))
            .map(|(id, _)| *id)
            .collect();
        tops.sort_unstable();
        tops
    }

    /// Resolve the round if every player has rolled.
    ///
    /// Returns `None` while anyone is still to roll (or the session is
    /// not in a running state). On the final round this yields
    /// [`RoundOutcome::GameEnd`] and leaves the session terminal; on
    /// earlier rounds it deals offers, advances the round, clears the
    /// per-round flags and draws the next modifier.
    pub fn check_round_complete(&mut self) -> Option<RoundOutcome> {
        if !self.started || self.players.is_empty() {
            return None;
        }
        if self.ready_count < self.players.len() {
            return None;
        }

        let finished = self.current_round;
        if finished >= MAX_ROUNDS as u32 {
            let mut totals: Vec<(PlayerId, i32)> = self
                .players
                .iter()
                .map(|(id, p)| (*id, p.total_score()))
                .collect();
            totals.sort_unstable_by_key(|&(id, _)| id);
            let best = totals.iter().map(|&(_, total)| total).max()?;
            let winners = totals
                .iter()
                .filter(|&&(_, total)| total == best)
                .map(|&(id, _)| id)
                .collect();
            return Some(RoundOutcome::GameEnd { winners, totals });
        }

        let tops = self.top_scorers((finished - 1) as usize);
        let offers = draw_offers(&self.player_ids(), &tops, &mut self.rng);

        self.current_round += 1;
        self.ready_count = 0;
        for player in self.players.values_mut() {
            player.rolled = false;
            player.picked = false;
        }
        self.active_modifier = draw_modifier(&mut self.rng);

        Some(RoundOutcome::RoundEnd {
            finished_round: finished,
            offers,
            modifier: self.active_modifier.clone(),
        })
    }

    /// An immutable copy of everything observers may see.
    ///
    /// This is the only value that crosses the transport boundary for
    /// broadcasts; internal state never leaks by reference. Players
    /// are sorted by id.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut players: Vec<PlayerSnapshot> = self
            .players
            .iter()
            .map(|(&id, player)| PlayerSnapshot::of(id, player))
            .collect();
        players.sort_unstable_by_key(|p| p.id);

        GameSnapshot {
            players,
            current_round: self.current_round,
            started: self.started,
            modifier: self.active_modifier.clone(),
        }
    }
}
