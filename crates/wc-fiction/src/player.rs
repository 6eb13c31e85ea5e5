//! Player state management.

use serde::{Deserialize, Serialize};
use wc_core::{ItemId, RoomId};
use wc_mechanics::Stat;

use crate::rules::{MAX_SLOTS, START_HP, START_STAT};

/// What the player has in hand. Carried in save files; no verb changes it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipped {
    /// Weapon slot.
    pub weapon: Option<ItemId>,
    /// Charm slot.
    pub charm: Option<ItemId>,
    /// Tool slot.
    pub tool: Option<ItemId>,
}

impl Equipped {
    /// Item ids in all filled slots.
    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        [&self.weapon, &self.charm, &self.tool]
            .into_iter()
            .flatten()
    }
}

/// The player's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Current room id.
    pub location: RoomId,
    /// Carried item ids, in pickup order.
    pub inventory: Vec<ItemId>,
    /// Items in hand.
    #[serde(default)]
    pub equipped: Equipped,
    /// Inventory capacity in slots.
    pub max_slots: u32,
    /// Current hit points.
    pub hp: i32,
    /// Hit point ceiling.
    pub max_hp: i32,
    /// Toughness. Adds to damage and threats.
    pub grit: i32,
    /// Persuasion.
    pub charm: i32,
    /// Cunning.
    pub wits: i32,
    /// Id of the eaten fruit whose power is active.
    #[serde(default)]
    pub active_fruit: Option<ItemId>,
}

impl Player {
    /// Create a fresh player standing in `location`.
    pub fn new(location: impl Into<RoomId>) -> Self {
        Self {
            location: location.into(),
            inventory: Vec::new(),
            equipped: Equipped::default(),
            max_slots: MAX_SLOTS,
            hp: START_HP,
            max_hp: START_HP,
            grit: START_STAT,
            charm: START_STAT,
            wits: START_STAT,
            active_fruit: None,
        }
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item_id: impl Into<ItemId>) {
        self.inventory.push(item_id.into());
    }

    /// Remove one copy of an item. Returns false if it wasn't carried.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|id| id == item_id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Current value of a stat.
    pub fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Grit => self.grit,
            Stat::Charm => self.charm,
            Stat::Wits => self.wits,
        }
    }

    /// Restore up to `amount` HP without passing the maximum. Returns the
    /// amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }
}
