//! World-progress flags.
//!
//! Flags are a closed vocabulary: a typo is a compile error, and a save
//! file naming an unknown flag fails to decode instead of being ignored.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A named boolean fact about world progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// A Bluecoat has been paid off; the outpost gate opens.
    Bribed,
    /// The stone key turned in the ruins gate.
    RuinUnlocked,
    /// The storm lantern woke the inner door of the glyph hall.
    InnerUnlocked,
    /// The sky shrine accepted an offering.
    ShrineBlessing,
    /// The glyph fragments were decoded into the treasure core.
    CoordsDecoded,
    /// The player entered cursed water while carrying a fruit's power.
    Drowned,
    /// The player sailed off with the treasure.
    TreasureEscaped,
    /// The rival pirate took the treasure core.
    TreasureLost,
    /// The player ended the session.
    Quit,
}

impl Flag {
    /// The snake_case name used in save files and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bribed => "bribed",
            Self::RuinUnlocked => "ruin_unlocked",
            Self::InnerUnlocked => "inner_unlocked",
            Self::ShrineBlessing => "shrine_blessing",
            Self::CoordsDecoded => "coords_decoded",
            Self::Drowned => "drowned",
            Self::TreasureEscaped => "treasure_escaped",
            Self::TreasureLost => "treasure_lost",
            Self::Quit => "quit",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of flags currently raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(BTreeSet<Flag>);

impl FlagSet {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a flag is raised.
    pub fn has(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    /// Raise a flag. Returns `true` if it was not raised before.
    pub fn set(&mut self, flag: Flag) -> bool {
        self.0.insert(flag)
    }

    /// Lower a flag. Returns `true` if it was raised.
    pub fn clear(&mut self, flag: Flag) -> bool {
        self.0.remove(&flag)
    }

    /// Iterate raised flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.0.iter().copied()
    }

    /// Number of raised flags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no flag is raised.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
