//! Roll resolution: adjustments, per-kind subtotals, round scores.
//!
//! A roll walks the player's inventory in canonical kind order. For
//! each kind it draws the raw faces, runs them through the adjustment
//! pipeline, combines them per the kind's scoring rule, and finally
//! applies the Colour Focus doubling if that kind is the target.
//!
//! The adjustment order is fixed and load-bearing:
//! fever cap, then odd doubling, then even halving.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DiceInventory, GameRng};
use crate::dice::{DieKind, ScoreRule, GOLD_FACE};
use crate::modifier::{Modifier, ModifierKind, BASE_GAMBLE_CHANCE, GAMBLE_TIME_CHANCE};

/// The scoring parameters in force for one round, resolved from the
/// active modifier.
///
/// Building this by hand (instead of via [`RoundRules::from_modifier`])
/// is the deterministic seam the tests use, e.g. forcing
/// `gamble_chance` to 1.0 so every Red die flips.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundRules {
    /// +2 per raw face, capped at the kind's max face.
    pub fever: bool,
    /// Double odd adjusted values.
    pub odd_boost: bool,
    /// Halve even adjusted values, rounding up.
    pub even_break: bool,
    /// Probability that a Red die flips negative.
    pub gamble_chance: f64,
    /// Kind whose subtotal is doubled, if Colour Focus is active.
    pub focus: Option<DieKind>,
}

impl RoundRules {
    /// Resolve the rules for a round with the given active modifier.
    #[must_use]
    pub fn from_modifier(modifier: Option<&Modifier>) -> Self {
        let mut rules = Self::default();
        let Some(modifier) = modifier else {
            return rules;
        };
        match modifier.kind {
            ModifierKind::OddBoost => rules.odd_boost = true,
            ModifierKind::EvenBreak => rules.even_break = true,
            ModifierKind::Fever => rules.fever = true,
            ModifierKind::GambleTime => rules.gamble_chance = GAMBLE_TIME_CHANCE,
            ModifierKind::ColourFocus => rules.focus = modifier.focus,
        }
        rules
    }
}

impl Default for RoundRules {
    /// Rules for a round with no modifier.
    fn default() -> Self {
        Self {
            fever: false,
            odd_boost: false,
            even_break: false,
            gamble_chance: BASE_GAMBLE_CHANCE,
            focus: None,
        }
    }
}

/// One kind's contribution to a round score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KindScore {
    pub kind: DieKind,
    /// Points scored by this kind, Colour Focus included.
    pub points: i32,
    /// Human-readable working, e.g. `(2 + 5) x2 = 14`.
    pub formula: String,
}

/// The outcome of one player's roll for one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    /// Sum of all kind subtotals. Can be negative thanks to Red dice.
    pub round_score: i32,
    /// Per-kind subtotals in canonical kind order; kinds with zero
    /// dice are omitted.
    pub breakdown: Vec<KindScore>,
}

/// Apply the adjustment pipeline to one raw (positive) face value.
fn adjust(raw: i32, max: i32, rules: &RoundRules) -> i32 {
    let mut value = raw;
    if rules.fever {
        value = (value + 2).min(max);
    }
    if rules.odd_boost && value % 2 != 0 {
        value *= 2;
    }
    if rules.even_break && value % 2 == 0 {
        value = (value + 1) / 2;
    }
    value
}

/// Roll `count` faces of `kind` and adjust each.
fn roll_adjusted(kind: DieKind, count: u32, rules: &RoundRules, rng: &mut GameRng) -> Vec<i32> {
    // Raw faces are drawn up front so the sign flips below (for Red)
    // consume the RNG in a stable order.
    let raws: SmallVec<[i32; 8]> = (0..count).map(|_| kind.roll_face(rng)).collect();
    raws.iter()
        .map(|&raw| adjust(raw, kind.max_face(), rules))
        .collect()
}

/// Roll Red dice: flip each raw value negative with the gamble chance,
/// adjust the absolute value, then reapply the sign.
fn roll_signed(count: u32, rules: &RoundRules, rng: &mut GameRng) -> Vec<i32> {
    let raws: SmallVec<[i32; 8]> = (0..count).map(|_| DieKind::Red.roll_face(rng)).collect();
    let flips: SmallVec<[bool; 8]> = raws
        .iter()
        .map(|_| rng.gen_bool(rules.gamble_chance))
        .collect();
    raws.iter()
        .zip(&flips)
        .map(|(&raw, &flipped)| {
            let adjusted = adjust(raw, DieKind::Red.max_face(), rules);
            if flipped {
                -adjusted
            } else {
                adjusted
            }
        })
        .collect()
}

fn join_plus(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn join_signed(values: &[i32]) -> String {
    values
        .iter()
        .map(|&v| {
            if v >= 0 {
                format!("+{v}")
            } else {
                v.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score a full roll of the given inventory under the given rules.
///
/// Returns the round score and the per-kind breakdown; kinds the
/// player holds no dice of are skipped entirely.
pub fn score_roll(dice: &DiceInventory, rules: &RoundRules, rng: &mut GameRng) -> RollResult {
    let mut round_score = 0;
    let mut breakdown = Vec::new();

    for kind in DieKind::ALL {
        let count = dice.count(kind);
        if count == 0 {
            continue;
        }
        let focused = rules.focus == Some(kind);

        let (points, formula) = match kind.rule() {
            ScoreRule::Sum => {
                let adjusted = roll_adjusted(kind, count, rules, rng);
                let mut points: i32 = adjusted.iter().sum();
                if focused {
                    points *= 2;
                }
                (points, format!("{} = {points}", join_plus(&adjusted)))
            }
            ScoreRule::Doubled => {
                let adjusted = roll_adjusted(kind, count, rules, rng);
                let mut points: i32 = adjusted.iter().sum::<i32>() * 2;
                if focused {
                    points *= 2;
                }
                (points, format!("({}) x2 = {points}", join_plus(&adjusted)))
            }
            ScoreRule::Risky => {
                let signed = roll_signed(count, rules, rng);
                let mut points: i32 = signed.iter().sum::<i32>() * count as i32;
                if focused {
                    points *= 2;
                }
                (
                    points,
                    format!("({}) x {count} = {points}", join_signed(&signed)),
                )
            }
            ScoreRule::Fixed => {
                let mut points = GOLD_FACE * count as i32;
                if focused {
                    points *= 2;
                }
                (points, format!("{count} x {GOLD_FACE} = {points}"))
            }
        };

        round_score += points;
        breakdown.push(KindScore {
            kind,
            points,
            formula,
        });
    }

    RollResult {
        round_score,
        breakdown,
    }
}
