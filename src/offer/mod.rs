//! Reward offers: the die menus handed out after each round.
//!
//! One candidate triple is drawn per round end and shared by every
//! player. Top scorers of the finished round are restricted to a
//! single randomly-chosen candidate of the three; everyone else sees
//! the identical full triple. Either way the player ultimately gains
//! exactly one die, via the pick operation.

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use crate::core::{GameRng, PlayerId};
use crate::dice::DieKind;

/// Probability that a single offer candidate is Gold.
pub const GOLD_OFFER_CHANCE: f64 = 0.03;

/// The menu one player gets to choose from: one or three kinds.
pub type OfferMenu = SmallVec<[DieKind; 3]>;

/// Reward menus per player for one round end.
pub type OfferMap = FxHashMap<PlayerId, OfferMenu>;

/// Draw one offer candidate: Gold with its long-shot chance, else
/// uniform over the six-kind pool.
fn draw_candidate(rng: &mut GameRng) -> DieKind {
    if rng.gen_bool(GOLD_OFFER_CHANCE) {
        DieKind::Gold
    } else {
        DieKind::OFFER_POOL[rng.gen_range_usize(0..DieKind::OFFER_POOL.len())]
    }
}

/// Draw the offers for every player after a round.
///
/// `players` must be sorted; the per-top-scorer single picks consume
/// the RNG in that order, which keeps seeded sessions reproducible.
pub fn draw_offers(
    players: &[PlayerId],
    top_scorers: &[PlayerId],
    rng: &mut GameRng,
) -> OfferMap {
    let triple = [
        draw_candidate(rng),
        draw_candidate(rng),
        draw_candidate(rng),
    ];

    let mut offers = OfferMap::default();
    for &id in players {
        let menu: OfferMenu = if top_scorers.contains(&id) {
            smallvec![triple[rng.gen_range_usize(0..triple.len())]]
        } else {
            SmallVec::from_slice(&triple)
        };
        offers.insert(id, menu);
    }
    offers
}
