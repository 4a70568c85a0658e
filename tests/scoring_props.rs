//! Randomized scoring properties.
//!
//! Exact outcomes are random, but the scoring rules put hard bounds on
//! every subtotal; these hold for any seed.

use chroma_dice::{
    score_roll, DiceInventory, DieKind, GameRng, RoundRules,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn yellow_only_rolls_stay_within_face_bounds(seed in any::<u64>(), extra in 0u32..6) {
        let mut dice = DiceInventory::seed();
        for _ in 0..extra {
            dice.add(DieKind::Yellow);
        }
        let n = (1 + extra) as i32;

        let mut rng = GameRng::new(seed);
        let result = score_roll(&dice, &RoundRules::default(), &mut rng);

        prop_assert_eq!(result.breakdown.len(), 1);
        prop_assert!(result.round_score >= n);
        prop_assert!(result.round_score <= 6 * n);
    }

    #[test]
    fn purple_subtotals_are_always_even(seed in any::<u64>(), count in 1u32..5) {
        let mut dice = DiceInventory::seed();
        for _ in 0..count {
            dice.add(DieKind::Purple);
        }

        let mut rng = GameRng::new(seed);
        let result = score_roll(&dice, &RoundRules::default(), &mut rng);
        let purple = result
            .breakdown
            .iter()
            .find(|line| line.kind == DieKind::Purple)
            .unwrap();

        prop_assert_eq!(purple.points % 2, 0);
        prop_assert!(purple.points >= 2 * count as i32);
        prop_assert!(purple.points <= 12 * count as i32);
    }

    #[test]
    fn gold_ignores_the_seed_entirely(seed in any::<u64>(), count in 1u32..6) {
        let mut dice = DiceInventory::seed();
        for _ in 0..count {
            dice.add(DieKind::Gold);
        }

        let mut rng = GameRng::new(seed);
        let result = score_roll(&dice, &RoundRules::default(), &mut rng);
        let gold = result
            .breakdown
            .iter()
            .find(|line| line.kind == DieKind::Gold)
            .unwrap();

        prop_assert_eq!(gold.points, 20 * count as i32);
    }

    #[test]
    fn forced_gamble_never_scores_positive(seed in any::<u64>(), count in 1u32..4) {
        let mut dice = DiceInventory::seed();
        for _ in 0..count {
            dice.add(DieKind::Red);
        }
        let rules = RoundRules {
            gamble_chance: 1.0,
            ..RoundRules::default()
        };

        let mut rng = GameRng::new(seed);
        let result = score_roll(&dice, &rules, &mut rng);
        let red = result
            .breakdown
            .iter()
            .find(|line| line.kind == DieKind::Red)
            .unwrap();

        // Every die flipped: signed sum in -6n..-n, times n.
        let n = count as i32;
        prop_assert!(red.points <= -n * n);
        prop_assert!(red.points >= -6 * n * n);
    }

    #[test]
    fn scoring_is_a_pure_function_of_seed_and_inventory(seed in any::<u64>()) {
        let mut dice = DiceInventory::seed();
        dice.add(DieKind::Green);
        dice.add(DieKind::Red);
        dice.add(DieKind::Blue);

        let mut rng1 = GameRng::new(seed);
        let mut rng2 = GameRng::new(seed);
        let a = score_roll(&dice, &RoundRules::default(), &mut rng1);
        let b = score_roll(&dice, &RoundRules::default(), &mut rng2);

        prop_assert_eq!(a, b);
    }
}
