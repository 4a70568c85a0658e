//! The seven die kinds: face tables, scoring categories, colours.
//!
//! The taxonomy is a fixed domain constant, not runtime-extensible.
//! Every kind has a face distribution and a scoring rule; Gold is the
//! odd one out, always landing on 20 with no randomness at all.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Faces of the odd-only Blue die.
const BLUE_FACES: [i32; 5] = [1, 3, 5, 7, 9];

/// Faces of the even-only Pink die.
const PINK_FACES: [i32; 5] = [2, 4, 6, 8, 10];

/// The one face a Gold die ever shows.
pub const GOLD_FACE: i32 = 20;

/// One of the seven fixed die kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum DieKind {
    /// 1-6 uniform. The seed die every player starts with.
    Yellow,
    /// 1-20 uniform.
    Green,
    /// Odd faces only: 1, 3, 5, 7, 9.
    Blue,
    /// Even faces only: 2, 4, 6, 8, 10.
    Pink,
    /// 1-6 uniform; the summed result is doubled.
    Purple,
    /// 1-6 uniform; each die may flip negative, sum scaled by die count.
    Red,
    /// Always 20; rare, never rolled randomly.
    Gold,
}

/// How a kind's rolled values combine into a subtotal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreRule {
    /// Subtotal = sum of adjusted values.
    Sum,
    /// Subtotal = sum of adjusted values, doubled.
    Doubled,
    /// Each die may flip negative; subtotal = signed sum x die count.
    Risky,
    /// Subtotal = fixed face x die count; no randomness, no adjustment.
    Fixed,
}

impl DieKind {
    /// All kinds, in canonical scoring/display order.
    pub const ALL: [DieKind; 7] = [
        DieKind::Yellow,
        DieKind::Green,
        DieKind::Blue,
        DieKind::Pink,
        DieKind::Purple,
        DieKind::Red,
        DieKind::Gold,
    ];

    /// Number of die kinds.
    pub const COUNT: usize = 7;

    /// The kinds reward offers draw from uniformly. Gold is excluded
    /// here; it only enters offers via its own 3% long shot.
    pub const OFFER_POOL: [DieKind; 6] = [
        DieKind::Yellow,
        DieKind::Purple,
        DieKind::Red,
        DieKind::Green,
        DieKind::Blue,
        DieKind::Pink,
    ];

    /// Stable index for array-backed per-kind storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maximum face value, the cap for the Fever adjustment.
    #[must_use]
    pub const fn max_face(self) -> i32 {
        match self {
            DieKind::Yellow | DieKind::Purple | DieKind::Red => 6,
            DieKind::Green => 20,
            DieKind::Blue => 9,
            DieKind::Pink => 10,
            DieKind::Gold => GOLD_FACE,
        }
    }

    /// The scoring rule this kind follows.
    #[must_use]
    pub const fn rule(self) -> ScoreRule {
        match self {
            DieKind::Yellow | DieKind::Green | DieKind::Blue | DieKind::Pink => ScoreRule::Sum,
            DieKind::Purple => ScoreRule::Doubled,
            DieKind::Red => ScoreRule::Risky,
            DieKind::Gold => ScoreRule::Fixed,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DieKind::Yellow => "Yellow",
            DieKind::Green => "Green",
            DieKind::Blue => "Blue",
            DieKind::Pink => "Pink",
            DieKind::Purple => "Purple",
            DieKind::Red => "Red",
            DieKind::Gold => "Gold",
        }
    }

    /// Display colour, as a CSS hex string.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            DieKind::Yellow => "#ffd43b",
            DieKind::Green => "#8ce99a",
            DieKind::Blue => "#74c0fc",
            DieKind::Pink => "#ff99c8",
            DieKind::Purple => "#b197fc",
            DieKind::Red => "#ff6b6b",
            DieKind::Gold => "#ffd700",
        }
    }

    /// Roll one raw face value for this kind.
    pub fn roll_face(self, rng: &mut GameRng) -> i32 {
        match self {
            DieKind::Yellow | DieKind::Purple | DieKind::Red => rng.gen_range(1..7),
            DieKind::Green => rng.gen_range(1..21),
            DieKind::Blue => BLUE_FACES[rng.gen_range_usize(0..BLUE_FACES.len())],
            DieKind::Pink => PINK_FACES[rng.gen_range_usize(0..PINK_FACES.len())],
            DieKind::Gold => GOLD_FACE,
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_stay_within_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..500 {
            for kind in DieKind::ALL {
                let face = kind.roll_face(&mut rng);
                assert!(face >= 1, "{kind} rolled {face}");
                assert!(face <= kind.max_face(), "{kind} rolled {face}");
            }
        }
    }

    #[test]
    fn blue_is_odd_pink_is_even() {
        let mut rng = GameRng::new(9);
        for _ in 0..200 {
            assert_eq!(DieKind::Blue.roll_face(&mut rng) % 2, 1);
            assert_eq!(DieKind::Pink.roll_face(&mut rng) % 2, 0);
        }
    }

    #[test]
    fn gold_never_varies() {
        let mut rng = GameRng::new(1);
        for _ in 0..50 {
            assert_eq!(DieKind::Gold.roll_face(&mut rng), GOLD_FACE);
        }
    }

    #[test]
    fn offer_pool_excludes_gold() {
        assert!(!DieKind::OFFER_POOL.contains(&DieKind::Gold));
        assert_eq!(DieKind::OFFER_POOL.len(), DieKind::COUNT - 1);
    }

    #[test]
    fn indices_match_canonical_order() {
        for (position, kind) in DieKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&DieKind::Gold).unwrap();
        assert_eq!(json, "\"gold\"");
        let back: DieKind = serde_json::from_str("\"yellow\"").unwrap();
        assert_eq!(back, DieKind::Yellow);
    }
}
