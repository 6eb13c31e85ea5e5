//! What happened during an exchange.

use std::fmt;

/// One recorded step of a fight.
///
/// The engine applies the mechanical parts ([`CombatEvent::hp_loss`],
/// [`CombatEvent::wanted_gain`]); `Display` gives the narration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The player landed a blow and the enemy is still standing.
    PlayerHit {
        /// Damage dealt.
        damage: i32,
    },
    /// The player's blow finished the enemy.
    EnemyDown {
        /// Enemy display name.
        enemy: String,
        /// Damage dealt.
        damage: i32,
        /// Wanted level earned for the kill.
        wanted_gain: u32,
    },
    /// The player's swing went nowhere.
    PlayerMiss,
    /// The enemy ran instead of striking.
    EnemyFled {
        /// Enemy display name.
        enemy: String,
    },
    /// The enemy struck the player.
    EnemyHit {
        /// Enemy display name.
        enemy: String,
        /// Damage taken.
        damage: i32,
    },
    /// The enemy's strike missed.
    EnemyMiss {
        /// Enemy display name.
        enemy: String,
    },
    /// An attack was attempted after the fight ended.
    AlreadyResolved,
}

impl CombatEvent {
    /// Hit points the player loses from this event.
    pub fn hp_loss(&self) -> i32 {
        match self {
            Self::EnemyHit { damage, .. } => *damage,
            _ => 0,
        }
    }

    /// Wanted level the player gains from this event.
    pub fn wanted_gain(&self) -> u32 {
        match self {
            Self::EnemyDown { wanted_gain, .. } => *wanted_gain,
            _ => 0,
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerHit { damage } => write!(f, "You hit for {damage} damage."),
            Self::EnemyDown { enemy, damage, .. } => {
                write!(f, "You strike true for {damage} damage. {enemy} collapses.")
            }
            Self::PlayerMiss => write!(f, "You miss and stumble."),
            Self::EnemyFled { enemy } => write!(f, "{enemy} flees into the shadows."),
            Self::EnemyHit { enemy, damage } => write!(f, "{enemy} hits you for {damage} damage."),
            Self::EnemyMiss { enemy } => write!(f, "{enemy} swings wide."),
            Self::AlreadyResolved => write!(f, "Combat already resolved."),
        }
    }
}
