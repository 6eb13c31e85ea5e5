use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::entity::{Enemy, Island, Item, Npc, Quest, Room};
use crate::error::{CoreError, CoreResult};

/// The static content of a game: every room, item, NPC, enemy template,
/// quest and island, keyed by id.
///
/// A catalog is built once and never mutated during play. The live game
/// state copies whatever it needs to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Display title of the content set.
    #[serde(default)]
    pub title: String,
    /// Room the player starts in.
    pub start_room: String,
    /// Rooms by id.
    #[serde(default)]
    pub rooms: BTreeMap<String, Room>,
    /// Item definitions by id.
    #[serde(default)]
    pub items: BTreeMap<String, Item>,
    /// NPCs by id.
    #[serde(default)]
    pub npcs: BTreeMap<String, Npc>,
    /// Enemy templates by id.
    #[serde(default)]
    pub enemies: BTreeMap<String, Enemy>,
    /// Quest definitions by id.
    #[serde(default)]
    pub quests: BTreeMap<String, Quest>,
    /// Islands by id, in display order.
    #[serde(default)]
    pub islands: BTreeMap<String, Island>,
}

impl Catalog {
    /// Create an empty catalog starting in `start_room`.
    pub fn new(title: impl Into<String>, start_room: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_room: start_room.into(),
            ..Self::default()
        }
    }

    /// Decode a catalog from JSON and validate it.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Encode the catalog as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Insert or replace a room.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    /// Insert or replace an item.
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Insert or replace an NPC.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.insert(npc.id.clone(), npc);
    }

    /// Insert or replace an enemy template.
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.insert(enemy.id.clone(), enemy);
    }

    /// Insert or replace a quest.
    pub fn add_quest(&mut self, quest: Quest) {
        self.quests.insert(quest.id.clone(), quest);
    }

    /// Insert or replace an island.
    pub fn add_island(&mut self, island: Island) {
        self.islands.insert(island.id.clone(), island);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get a room by id, or fail with [`CoreError::UnknownRoom`].
    pub fn require_room(&self, id: &str) -> CoreResult<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| CoreError::UnknownRoom(id.to_string()))
    }

    /// Get an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Get an NPC by id.
    pub fn npc(&self, id: &str) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// Get an enemy template by id.
    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    /// Get an island by id.
    pub fn island(&self, id: &str) -> Option<&Island> {
        self.islands.get(id)
    }

    /// Display name of a room's island, falling back to the island id.
    pub fn island_name<'a>(&'a self, room: &'a Room) -> &'a str {
        self.islands
            .get(&room.island)
            .map(|i| i.name.as_str())
            .unwrap_or(room.island.as_str())
    }

    /// Find a room by id or case-insensitive name.
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        let needle = name.trim().to_lowercase();
        self.rooms
            .get(needle.as_str())
            .or_else(|| self.rooms.values().find(|r| r.name.to_lowercase() == needle))
    }

    /// Among `ids`, find the item whose id or lowercased name equals `name`.
    pub fn find_item<'a>(&self, name: &str, ids: &'a [String]) -> Option<&'a str> {
        let needle = name.to_lowercase();
        ids.iter()
            .find(|id| {
                id.as_str() == needle
                    || self
                        .items
                        .get(id.as_str())
                        .is_some_and(|i| i.name.to_lowercase() == needle)
            })
            .map(String::as_str)
    }

    /// Among `ids`, find the NPC whose id or lowercased name equals `name`.
    pub fn find_npc<'a>(&self, name: &str, ids: &'a [String]) -> Option<&'a str> {
        let needle = name.to_lowercase();
        ids.iter()
            .find(|id| {
                id.as_str() == needle
                    || self
                        .npcs
                        .get(id.as_str())
                        .is_some_and(|n| n.name.to_lowercase() == needle)
            })
            .map(String::as_str)
    }

    /// Among `ids`, find the enemy whose id or lowercased name equals `name`.
    pub fn find_enemy<'a>(&self, name: &str, ids: &'a [String]) -> Option<&'a str> {
        let needle = name.to_lowercase();
        ids.iter()
            .find(|id| {
                id.as_str() == needle
                    || self
                        .enemies
                        .get(id.as_str())
                        .is_some_and(|e| e.name.to_lowercase() == needle)
            })
            .map(String::as_str)
    }

    /// Total slot cost of the given item ids. Unknown ids cost nothing.
    pub fn slot_cost(&self, ids: &[String]) -> u32 {
        ids.iter()
            .filter_map(|id| self.items.get(id))
            .map(|i| i.slots)
            .sum()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check that every cross-reference resolves and every map key matches
    /// the id of the definition stored under it.
    pub fn validate(&self) -> CoreResult<()> {
        self.check_keys()?;

        if !self.rooms.contains_key(&self.start_room) {
            return Err(CoreError::UnknownRoom(self.start_room.clone()));
        }

        let mut placed = BTreeSet::new();
        for room in self.rooms.values() {
            let from = format!("room {}", room.id);
            if let Some(id) = room.items.iter().find(|id| !placed.insert(id.as_str())) {
                return Err(CoreError::Validation(format!(
                    "item {id} is placed more than once ({from})"
                )));
            }
            for target in room.exits.values() {
                if !self.rooms.contains_key(target) {
                    return Err(reference("room", target, &from));
                }
            }
            for id in &room.items {
                if !self.items.contains_key(id) {
                    return Err(reference("item", id, &from));
                }
            }
            for id in &room.npcs {
                if !self.npcs.contains_key(id) {
                    return Err(reference("npc", id, &from));
                }
            }
            for id in &room.enemies {
                if !self.enemies.contains_key(id) {
                    return Err(reference("enemy", id, &from));
                }
            }
            if !self.islands.contains_key(&room.island) {
                return Err(reference("island", &room.island, &from));
            }
        }

        for npc in self.npcs.values() {
            for id in &npc.shop {
                if !self.items.contains_key(id) {
                    return Err(reference("item", id, &format!("npc {}", npc.id)));
                }
            }
        }

        for island in self.islands.values() {
            let from = format!("island {}", island.id);
            for id in &island.rooms {
                let room = self
                    .rooms
                    .get(id)
                    .ok_or_else(|| reference("room", id, &from))?;
                if room.island != island.id {
                    return Err(CoreError::Validation(format!(
                        "room {} is listed by island {} but belongs to {}",
                        room.id, island.id, room.island
                    )));
                }
            }
        }

        for enemy in self.enemies.values() {
            if enemy.hp <= 0 || enemy.min_damage > enemy.max_damage {
                return Err(CoreError::Validation(format!(
                    "enemy {} has inconsistent stats",
                    enemy.id
                )));
            }
            if !(0.0..=1.0).contains(&enemy.flee_chance) {
                return Err(CoreError::Validation(format!(
                    "enemy {} flee chance {} is not a probability",
                    enemy.id, enemy.flee_chance
                )));
            }
        }

        for quest in self.quests.values() {
            if quest.done != !quest.outcome.is_empty() {
                return Err(CoreError::Validation(format!(
                    "quest {} outcome does not match its done flag",
                    quest.id
                )));
            }
        }

        Ok(())
    }

    fn check_keys(&self) -> CoreResult<()> {
        fn check<'a, T: 'a>(
            kind: &str,
            entries: impl IntoIterator<Item = (&'a String, &'a T)>,
            id: impl Fn(&T) -> &str,
        ) -> CoreResult<()> {
            for (key, value) in entries {
                if key != id(value) {
                    return Err(CoreError::Validation(format!(
                        "{kind} stored under \"{key}\" has id \"{}\"",
                        id(value)
                    )));
                }
            }
            Ok(())
        }
        check("room", &self.rooms, |r| r.id.as_str())?;
        check("item", &self.items, |i| i.id.as_str())?;
        check("npc", &self.npcs, |n| n.id.as_str())?;
        check("enemy", &self.enemies, |e| e.id.as_str())?;
        check("quest", &self.quests, |q| q.id.as_str())?;
        check("island", &self.islands, |i| i.id.as_str())
    }
}

fn reference(kind: &'static str, id: &str, from: &str) -> CoreError {
    CoreError::InvalidReference {
        kind,
        id: id.to_string(),
        from: from.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::entity::{Disposition, ItemKind};

    fn tiny() -> Catalog {
        let mut catalog = Catalog::new("Tiny", "deck");
        catalog.add_island(Island::new("ship", "Ship", "Home.", &["deck", "hold"]));
        catalog.add_room(
            Room::new("deck", "Deck", "ship", "Planks.")
                .exit(Direction::South, "hold")
                .items(&["rope"])
                .npcs(&["cook"]),
        );
        catalog.add_room(Room::new("hold", "Hold", "ship", "Dark.").exit(Direction::North, "deck"));
        catalog.add_item(Item::new("rope", "Coil of Rope", "Rope.", ItemKind::Tool, 1, 15));
        catalog.add_npc(Npc::new("cook", "Ship Cook", "Ladle.", "Eat.", Disposition::Friendly));
        catalog
    }

    #[test]
    fn tiny_catalog_is_valid() {
        tiny().validate().unwrap();
    }

    #[test]
    fn dangling_exit_rejected() {
        let mut catalog = tiny();
        catalog.add_room(
            Room::new("hold", "Hold", "ship", "Dark.").exit(Direction::East, "nowhere"),
        );
        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidReference { kind: "room", ref id, .. } if id == "nowhere"
        ));
    }

    #[test]
    fn unknown_start_room_rejected() {
        let mut catalog = tiny();
        catalog.start_room = "galley".to_string();
        assert!(matches!(catalog.validate(), Err(CoreError::UnknownRoom(_))));
    }

    #[test]
    fn shop_item_must_exist() {
        let mut catalog = tiny();
        catalog.add_npc(
            Npc::new("cook", "Ship Cook", "", "", Disposition::Friendly).with_shop(&["stew"]),
        );
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn item_placed_twice_rejected() {
        let mut catalog = tiny();
        catalog.add_room(
            Room::new("deck", "Deck", "ship", "Salt.")
                .exit(Direction::South, "hold")
                .items(&["rope"]),
        );
        catalog.add_room(
            Room::new("hold", "Hold", "ship", "Dark.")
                .exit(Direction::North, "deck")
                .items(&["rope"]),
        );
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("item rope is placed more than once"));
    }

    #[test]
    fn mismatched_key_rejected() {
        let mut catalog = tiny();
        let rope = catalog.items["rope"].clone();
        catalog.items.insert("cord".to_string(), rope);
        assert!(matches!(catalog.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn find_by_id_or_name() {
        let catalog = tiny();
        let here = vec!["rope".to_string()];
        assert_eq!(catalog.find_item("rope", &here), Some("rope"));
        assert_eq!(catalog.find_item("COIL OF ROPE", &here), Some("rope"));
        assert_eq!(catalog.find_item("coil", &here), None);
        assert_eq!(catalog.find_item("rope", &[]), None);
    }

    #[test]
    fn json_round_trip_validates() {
        let catalog = tiny();
        let json = catalog.to_json().unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn bad_json_is_decode_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CoreError::Decode(_))
        ));
    }
}
