//! Automatic quest completion and ending detection.
//!
//! Most quests finish inside the verb that earns them. The rest are
//! described by [`QUEST_RULES`] and checked after every non-combat turn.

use std::fmt;

use wc_core::Flag;

use crate::condition::Condition;
use crate::rules::{CAPTURE_WANTED, NOTORIOUS_WANTED};
use crate::state::GameState;

/// The three Glyph Stone fragments.
pub const GLYPH_FRAGMENTS: &[&str] = &["glyph_frag_1", "glyph_frag_2", "glyph_frag_3"];

/// A quest that completes as soon as its condition holds.
#[derive(Debug, Clone, Copy)]
pub struct QuestRule {
    /// Quest id to complete.
    pub quest: &'static str,
    /// When it completes.
    pub when: Condition,
    /// Outcome text recorded on completion.
    pub outcome: &'static str,
}

/// Condition-driven quest completions, in evaluation order.
pub const QUEST_RULES: &[QuestRule] = &[
    QuestRule {
        quest: "main",
        when: Condition::CarryingAll(GLYPH_FRAGMENTS),
        outcome: "Fragments secured. Decode them with a cipher lens.",
    },
    QuestRule {
        quest: "broker",
        when: Condition::Flag(Flag::RuinUnlocked),
        outcome: "Key delivered.",
    },
];

/// Complete every quest whose rule now holds. Returns the announcements.
pub fn evaluate_quests(state: &mut GameState) -> Vec<String> {
    let mut lines = Vec::new();
    for rule in QUEST_RULES {
        if rule.when.evaluate(state) {
            lines.extend(state.complete_quest(rule.quest, rule.outcome));
        }
    }
    lines
}

/// How a game can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Hit points ran out.
    Defeated,
    /// Entered cursed water with a fruit active.
    Drowned,
    /// Wanted level reached the capture threshold.
    Captured,
    /// Escaped with the treasure while a fruit was active.
    CursedEscape,
    /// Escaped with the treasure with the Navy in pursuit.
    NotoriousEscape,
    /// Escaped with the treasure cleanly.
    CleanEscape,
    /// The rival pirate took the treasure core.
    TreasureLost,
}

impl Ending {
    /// Closing narration.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Defeated => "You slump to the ground. The Bluecoat Navy captures you.",
            Self::Drowned => "The sea claims you for daring its curse.",
            Self::Captured => "Bluecoat Navy corners you. Chains clamp shut.",
            Self::CursedEscape => "You escape with the treasure, but the curse twists your fate.",
            Self::NotoriousEscape => {
                "You slip away with the treasure, Bluecoat sails hounding your wake. The sea will always hunt you."
            }
            Self::CleanEscape => "You vanish into the Wild Current with the treasure.",
            Self::TreasureLost => "The rival pirate steals the treasure core. Your legend ends in a whimper.",
        }
    }

    /// Whether the player got away with the treasure.
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::CursedEscape | Self::NotoriousEscape | Self::CleanEscape)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Defeated => "defeated",
            Self::Drowned => "drowned",
            Self::Captured => "captured",
            Self::CursedEscape => "cursed escape",
            Self::NotoriousEscape => "notorious escape",
            Self::CleanEscape => "clean escape",
            Self::TreasureLost => "treasure lost",
        };
        f.write_str(name)
    }
}

/// The ending the state has reached, if any. The first matching check wins.
pub fn check_ending(state: &GameState) -> Option<Ending> {
    if state.player.hp <= 0 {
        return Some(Ending::Defeated);
    }
    if state.flags.has(Flag::Drowned) {
        return Some(Ending::Drowned);
    }
    if state.wanted >= CAPTURE_WANTED {
        return Some(Ending::Captured);
    }
    if state.flags.has(Flag::TreasureEscaped) {
        let ending = if state.player.active_fruit.is_some() {
            Ending::CursedEscape
        } else if state.wanted >= NOTORIOUS_WANTED {
            Ending::NotoriousEscape
        } else {
            Ending::CleanEscape
        };
        return Some(ending);
    }
    if state.flags.has(Flag::TreasureLost) {
        return Some(Ending::TreasureLost);
    }
    None
}
