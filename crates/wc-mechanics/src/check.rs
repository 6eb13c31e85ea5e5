//! d20 skill checks.

use crate::dice::Roller;

/// Total a check must reach to pass.
pub const CHECK_TARGET: i32 = 12;

/// The three player stats a check can draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Toughness and menace.
    Grit,
    /// Persuasion and poise.
    Charm,
    /// Cunning and perception.
    Wits,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grit => write!(f, "grit"),
            Self::Charm => write!(f, "charm"),
            Self::Wits => write!(f, "wits"),
        }
    }
}

/// The outcome of one skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    /// The natural d20 roll.
    pub roll: i32,
    /// Roll plus stat plus half the morale.
    pub total: i32,
    /// Whether the total reached [`CHECK_TARGET`].
    pub passed: bool,
}

/// Roll d20 + `stat` + `morale / 2` against [`CHECK_TARGET`].
pub fn skill_check(roller: &mut dyn Roller, stat: i32, morale: i32) -> CheckResult {
    let roll = roller.d20();
    let total = roll + stat + morale / 2;
    let passed = total >= CHECK_TARGET;
    tracing::debug!(roll, total, passed, "skill check");
    CheckResult {
        roll,
        total,
        passed,
    }
}
