//! Predicates over the game state, shared by the gating and quest tables.

use wc_core::{Flag, FruitPower};

use crate::state::GameState;

/// A condition that can be evaluated against the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// A flag is raised.
    Flag(Flag),
    /// The player carries at least one copy of an item.
    Carrying(&'static str),
    /// The player carries every listed item.
    CarryingAll(&'static [&'static str]),
    /// Any fruit power is active.
    AnyFruit,
    /// A specific fruit power is active.
    Power(FruitPower),
    /// Wanted level is at or above the threshold.
    WantedAtLeast(u32),
    /// Logical NOT.
    Not(&'static Condition),
}

impl Condition {
    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, state: &GameState) -> bool {
        match self {
            Condition::Flag(flag) => state.flags.has(*flag),
            Condition::Carrying(item) => state.player.has_item(item),
            Condition::CarryingAll(items) => items.iter().all(|i| state.player.has_item(i)),
            Condition::AnyFruit => state.player.active_fruit.is_some(),
            Condition::Power(power) => state.active_power() == Some(*power),
            Condition::WantedAtLeast(level) => state.wanted >= *level,
            Condition::Not(inner) => !inner.evaluate(state),
        }
    }
}
