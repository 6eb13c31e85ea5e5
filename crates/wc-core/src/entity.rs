use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Identifier of a room in the catalog.
pub type RoomId = String;
/// Identifier of an item in the catalog.
pub type ItemId = String;
/// Identifier of an NPC in the catalog.
pub type NpcId = String;
/// Identifier of an enemy template in the catalog.
pub type EnemyId = String;
/// Identifier of a quest in the catalog.
pub type QuestId = String;
/// Identifier of an island in the catalog.
pub type IslandId = String;

/// What an item is for. Only informational; behavior is keyed by item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Gear that does something when used.
    Tool,
    /// Progress item tied to a quest.
    Quest,
    /// Used up on use.
    Consumable,
    /// Valuable mostly as a trade good.
    Trade,
    /// Flavor text.
    Lore,
    /// Illegal to carry.
    Contraband,
    /// A weapon.
    Weapon,
    /// A cursed fruit granting a power.
    Fruit,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tool => "tool",
            Self::Quest => "quest",
            Self::Consumable => "consumable",
            Self::Trade => "trade",
            Self::Lore => "lore",
            Self::Contraband => "contraband",
            Self::Weapon => "weapon",
            Self::Fruit => "fruit",
        };
        f.write_str(name)
    }
}

/// The power a cursed fruit grants once eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FruitPower {
    /// Wind answers the player: better accuracy in combat.
    Gale,
    /// Stone skin: incoming damage is reduced, but the body is heavy.
    Stone,
    /// Crackling strikes: extra damage on every hit.
    Spark,
}

/// Behavior tags attached to rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomTag {
    /// Trading is possible here.
    Shop,
    /// Hostile territory.
    Danger,
    /// Part of a quest line.
    Quest,
    /// A place to moor a ship.
    Dock,
}

/// An NPC's relationship with the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Glad to help.
    Friendly,
    /// Indifferent, not yet spoken to.
    Neutral,
    /// Indifferent, but has spoken with the player.
    Met,
    /// Refuses to talk.
    Hostile,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Friendly => "friendly",
            Self::Neutral => "neutral",
            Self::Met => "met",
            Self::Hostile => "hostile",
        };
        f.write_str(name)
    }
}

/// An item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Shown by EXAMINE.
    pub description: String,
    /// What sort of item it is.
    pub kind: ItemKind,
    /// Inventory slots the item occupies.
    pub slots: u32,
    /// Base price in coins.
    pub value: u32,
    /// Carrying it raises the wanted level when picked up.
    #[serde(default)]
    pub contraband: bool,
    /// Set for cursed fruits; eating one grants this power.
    #[serde(default)]
    pub power: Option<FruitPower>,
}

impl Item {
    /// Create an ordinary item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
        slots: u32,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
            slots,
            value,
            contraband: false,
            power: None,
        }
    }

    /// Mark the item as contraband.
    pub fn contraband(mut self) -> Self {
        self.contraband = true;
        self
    }

    /// Mark the item as a fruit granting `power`.
    pub fn fruit(mut self, power: FruitPower) -> Self {
        self.kind = ItemKind::Fruit;
        self.power = Some(power);
        self
    }

    /// Whether this item is a cursed fruit.
    pub fn is_fruit(&self) -> bool {
        self.power.is_some()
    }
}

/// A non-player character definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    /// Unique id.
    pub id: NpcId,
    /// Display name.
    pub name: String,
    /// Shown by EXAMINE.
    pub description: String,
    /// What the NPC says when talked to.
    pub talk: String,
    /// Starting disposition; the live value is tracked by the game state.
    pub disposition: Disposition,
    /// Items this NPC trades in.
    #[serde(default)]
    pub shop: Vec<ItemId>,
}

impl Npc {
    /// Create an NPC with no shop.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        talk: impl Into<String>,
        disposition: Disposition,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            talk: talk.into(),
            disposition,
            shop: Vec::new(),
        }
    }

    /// Give the NPC a list of wares.
    pub fn with_shop(mut self, items: &[&str]) -> Self {
        self.shop = items.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// An enemy template. Rooms hold references to it, never copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique id.
    pub id: EnemyId,
    /// Display name.
    pub name: String,
    /// Shown by EXAMINE.
    pub description: String,
    /// Starting hit points of every encounter.
    pub hp: i32,
    /// Lowest damage per hit.
    pub min_damage: i32,
    /// Highest damage per hit.
    pub max_damage: i32,
    /// Added to the wanted level when this enemy is defeated.
    pub wanted_gain: u32,
    /// Probability per exchange that the enemy runs instead of striking.
    pub flee_chance: f64,
    /// The rival captain and similar set pieces.
    #[serde(default)]
    pub boss: bool,
}

impl Enemy {
    /// Create an enemy template.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        hp: i32,
        damage: (i32, i32),
        wanted_gain: u32,
        flee_chance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            hp,
            min_damage: damage.0,
            max_damage: damage.1,
            wanted_gain,
            flee_chance,
            boss: false,
        }
    }

    /// Mark the enemy as a boss.
    pub fn boss(mut self) -> Self {
        self.boss = true;
        self
    }
}

/// A quest record.
///
/// `outcome` is non-empty exactly when `done` is true; [`Quest::complete`]
/// is the only way to flip `done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique id.
    pub id: QuestId,
    /// Display name.
    pub name: String,
    /// What the player is asked to do.
    pub description: String,
    /// Listed in the quest log.
    pub active: bool,
    /// Completed.
    pub done: bool,
    /// How it was completed. Empty while open.
    #[serde(default)]
    pub outcome: String,
}

impl Quest {
    /// Create an active, unfinished quest.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            active: true,
            done: false,
            outcome: String::new(),
        }
    }

    /// Mark the quest done with the given outcome text.
    ///
    /// Returns `false` and leaves the record alone if it was already done.
    pub fn complete(&mut self, outcome: impl Into<String>) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        self.outcome = outcome.into();
        true
    }
}

/// A named group of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Island {
    /// Unique id.
    pub id: IslandId,
    /// Display name.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Member rooms, in map order.
    pub rooms: Vec<RoomId>,
}

impl Island {
    /// Create an island grouping the given rooms.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        rooms: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            rooms: rooms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A room definition with its starting contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique id.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Id of the island this room belongs to.
    pub island: IslandId,
    /// Shown by LOOK.
    pub description: String,
    /// Where each direction leads.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items lying here at the start of a game.
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// NPCs who live here.
    #[serde(default)]
    pub npcs: Vec<NpcId>,
    /// Enemies lurking here at the start of a game.
    #[serde(default)]
    pub enemies: Vec<EnemyId>,
    /// Shop, dock, danger and quest markers.
    #[serde(default)]
    pub tags: BTreeSet<RoomTag>,
    /// Map layout coordinates.
    #[serde(default)]
    pub coords: (i32, i32),
}

impl Room {
    /// Create an empty room.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        island: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            island: island.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            npcs: Vec::new(),
            enemies: Vec::new(),
            tags: BTreeSet::new(),
            coords: (0, 0),
        }
    }

    /// Place the room on the map.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.coords = (x, y);
        self
    }

    /// Add an exit.
    pub fn exit(mut self, direction: Direction, to: impl Into<String>) -> Self {
        self.exits.insert(direction, to.into());
        self
    }

    /// Set the starting items.
    pub fn items(mut self, ids: &[&str]) -> Self {
        self.items = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the resident NPCs.
    pub fn npcs(mut self, ids: &[&str]) -> Self {
        self.npcs = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the starting enemies.
    pub fn enemies(mut self, ids: &[&str]) -> Self {
        self.enemies = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the behavior tags.
    pub fn tags(mut self, tags: &[RoomTag]) -> Self {
        self.tags = tags.iter().copied().collect();
        self
    }

    /// Whether the room carries a tag.
    pub fn has_tag(&self, tag: RoomTag) -> bool {
        self.tags.contains(&tag)
    }
}
