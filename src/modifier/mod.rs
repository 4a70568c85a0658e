//! Round-scoped scoring modifiers.
//!
//! At every round advance (never for round 1) the session draws a
//! modifier: half the time none, otherwise one of five kinds with equal
//! chance. A modifier lives for exactly one round and alters how rolls
//! are adjusted or how probabilities behave; the catalog is a fixed
//! domain constant.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::dice::DieKind;

/// Probability that a round has no modifier at all.
pub const NO_MODIFIER_CHANCE: f64 = 0.5;

/// Baseline probability that a Red die flips negative.
pub const BASE_GAMBLE_CHANCE: f64 = 0.33;

/// Red flip probability while Gamble Time is active.
pub const GAMBLE_TIME_CHANCE: f64 = 0.75;

/// The five modifier kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ModifierKind {
    /// Odd adjusted values are doubled.
    OddBoost,
    /// Even adjusted values are halved, rounding up.
    EvenBreak,
    /// Every die gets +2 on its raw face, capped at the kind's max.
    Fever,
    /// Red dice flip negative 75% of the time instead of 33%.
    GambleTime,
    /// One kind's whole subtotal is doubled.
    ColourFocus,
}

impl ModifierKind {
    const ALL: [ModifierKind; 5] = [
        ModifierKind::OddBoost,
        ModifierKind::EvenBreak,
        ModifierKind::Fever,
        ModifierKind::GambleTime,
        ModifierKind::ColourFocus,
    ];
}

/// An active round modifier, with its display metadata.
///
/// For every kind except Colour Focus the name, description and colour
/// are fixed catalog entries; Colour Focus derives its description and
/// colour from the focused kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub name: String,
    pub description: String,
    /// Display colour, as a CSS hex string.
    pub color: String,
    /// The doubled kind, present only for Colour Focus.
    pub focus: Option<DieKind>,
}

impl Modifier {
    /// The fixed catalog entry for a non-focus kind.
    /// Colour Focus is built via [`Modifier::colour_focus`] instead.
    pub(crate) fn fixed(kind: ModifierKind) -> Self {
        let (name, description, color) = match kind {
            ModifierKind::OddBoost => ("Odd Boost", "Odd rolls score double!", "#ff922b"),
            ModifierKind::EvenBreak => ("Even Break", "Even rolls are halved!", "#0ca678"),
            ModifierKind::Fever => ("Panda Fever", "Every die +2, up to its max face", "#339af0"),
            ModifierKind::GambleTime => {
                ("Gamble Time", "Red dice go negative 75% of the time!", "#fa5252")
            }
            ModifierKind::ColourFocus => unreachable!("colour focus has no fixed entry"),
        };
        Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            focus: None,
        }
    }

    /// Colour Focus targeting the given kind.
    #[must_use]
    pub fn colour_focus(target: DieKind) -> Self {
        Self {
            kind: ModifierKind::ColourFocus,
            name: "Colour Focus".to_string(),
            description: format!("{} scores double!", target.label()),
            color: target.hex().to_string(),
            focus: Some(target),
        }
    }
}

/// Draw the modifier for a new round.
///
/// Returns `None` half the time. Otherwise picks uniformly among the
/// five kinds; Colour Focus then picks its target uniformly from the
/// full kind set, Gold included.
pub fn draw_modifier(rng: &mut GameRng) -> Option<Modifier> {
    if rng.gen_bool(NO_MODIFIER_CHANCE) {
        return None;
    }
    let kind = ModifierKind::ALL[rng.gen_range_usize(0..ModifierKind::ALL.len())];
    if kind == ModifierKind::ColourFocus {
        let target = DieKind::ALL[rng.gen_range_usize(0..DieKind::ALL.len())];
        Some(Modifier::colour_focus(target))
    } else {
        Some(Modifier::fixed(kind))
    }
}
