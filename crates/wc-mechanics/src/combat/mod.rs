//! The two-actor combat state machine.
//!
//! A [`Combat`] holds a private snapshot of the enemy's stats, taken from the
//! catalog template when the fight starts. Nothing outside the snapshot is
//! changed here: the exchange returns [`CombatEvent`]s and the caller applies
//! their effects to the player.

pub mod action;

pub use action::CombatEvent;

use wc_core::{Enemy, FruitPower};

use crate::dice::Roller;

/// Player hit chance without any power.
pub const BASE_ACCURACY: f64 = 0.65;
/// Player hit chance with the gale power.
pub const GALE_ACCURACY: f64 = 0.8;
/// Lowest base damage of a player hit, before grit.
pub const MIN_PLAYER_DAMAGE: i32 = 3;
/// Highest base damage of a player hit, before grit.
pub const MAX_PLAYER_DAMAGE: i32 = 6;
/// Extra damage per hit with the spark power.
pub const SPARK_BONUS: i32 = 2;
/// Damage soaked per enemy hit with the stone power.
pub const STONE_SOAK: i32 = 2;
/// Chance that a non-fleeing enemy connects.
pub const ENEMY_ACCURACY: f64 = 0.5;

/// A fight's copy of an enemy's stats.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySnapshot {
    /// Catalog id of the template.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Remaining hit points.
    pub hp: i32,
    /// Lowest damage per hit.
    pub min_damage: i32,
    /// Highest damage per hit.
    pub max_damage: i32,
    /// Added to the wanted level on defeat.
    pub wanted_gain: u32,
    /// Chance per exchange of running.
    pub flee_chance: f64,
}

impl From<&Enemy> for EnemySnapshot {
    fn from(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id.clone(),
            name: enemy.name.clone(),
            hp: enemy.hp,
            min_damage: enemy.min_damage,
            max_damage: enemy.max_damage,
            wanted_gain: enemy.wanted_gain,
            flee_chance: enemy.flee_chance,
        }
    }
}

/// How a fight stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Still fighting.
    Ongoing,
    /// The enemy's HP reached zero.
    EnemyDown,
    /// The enemy ran.
    EnemyFled,
}

/// The player's side of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fighter {
    /// Added to every hit.
    pub grit: i32,
    /// The active fruit power, if any.
    pub power: Option<FruitPower>,
}

/// A live encounter.
#[derive(Debug, Clone)]
pub struct Combat {
    /// The enemy as this fight knows it.
    pub enemy: EnemySnapshot,
    /// Exchange counter, starting at 1.
    pub turn: u32,
    /// Set once the fight has an outcome.
    pub resolved: bool,
    /// How the fight stands.
    pub outcome: CombatOutcome,
}

impl Combat {
    /// Start a fight against a fresh snapshot of `enemy`.
    pub fn new(enemy: &Enemy) -> Self {
        Self {
            enemy: EnemySnapshot::from(enemy),
            turn: 1,
            resolved: false,
            outcome: CombatOutcome::Ongoing,
        }
    }

    /// The player's half of an exchange.
    pub fn player_attack(&mut self, fighter: &Fighter, roller: &mut dyn Roller) -> CombatEvent {
        if self.resolved {
            return CombatEvent::AlreadyResolved;
        }
        let accuracy = match fighter.power {
            Some(FruitPower::Gale) => GALE_ACCURACY,
            _ => BASE_ACCURACY,
        };
        if !roller.chance(accuracy) {
            return CombatEvent::PlayerMiss;
        }

        let mut damage = roller.between(MIN_PLAYER_DAMAGE, MAX_PLAYER_DAMAGE) + fighter.grit;
        if fighter.power == Some(FruitPower::Spark) {
            damage += SPARK_BONUS;
        }
        self.enemy.hp -= damage;
        tracing::debug!(enemy = %self.enemy.id, damage, hp = self.enemy.hp, "player hit");

        if self.enemy.hp <= 0 {
            self.finish(CombatOutcome::EnemyDown);
            return CombatEvent::EnemyDown {
                enemy: self.enemy.name.clone(),
                damage,
                wanted_gain: self.enemy.wanted_gain,
            };
        }
        CombatEvent::PlayerHit { damage }
    }

    /// The enemy's half of an exchange. `None` once the fight is over.
    pub fn enemy_attack(&mut self, fighter: &Fighter, roller: &mut dyn Roller) -> Option<CombatEvent> {
        if self.resolved {
            return None;
        }
        let enemy = self.enemy.name.clone();
        if roller.chance(self.enemy.flee_chance) {
            self.finish(CombatOutcome::EnemyFled);
            return Some(CombatEvent::EnemyFled { enemy });
        }
        if !roller.chance(ENEMY_ACCURACY) {
            return Some(CombatEvent::EnemyMiss { enemy });
        }

        let mut damage = roller.between(self.enemy.min_damage, self.enemy.max_damage);
        if fighter.power == Some(FruitPower::Stone) {
            damage = (damage - STONE_SOAK).max(1);
        }
        tracing::debug!(enemy = %self.enemy.id, damage, "enemy hit");
        Some(CombatEvent::EnemyHit { enemy, damage })
    }

    /// A full exchange: the player strikes, then the enemy answers if it
    /// can. Advances the turn counter while the fight goes on.
    pub fn exchange(&mut self, fighter: &Fighter, roller: &mut dyn Roller) -> Vec<CombatEvent> {
        let mut events = vec![self.player_attack(fighter, roller)];
        if let Some(answer) = self.enemy_attack(fighter, roller) {
            events.push(answer);
        }
        if !self.resolved {
            self.turn += 1;
        }
        events
    }

    fn finish(&mut self, outcome: CombatOutcome) {
        self.resolved = true;
        self.outcome = outcome;
        tracing::debug!(enemy = %self.enemy.id, ?outcome, turn = self.turn, "combat resolved");
    }
}
