//! The mutable world aggregate.
//!
//! A [`GameState`] is built from a [`Catalog`] at new-game time: the
//! catalog's per-room items and enemies are copied into live
//! [`RoomState`]s, NPC dispositions into an override map, and quests into
//! per-game records. From then on the catalog is only read; every verb
//! mutates the state in place.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wc_core::{
    Catalog, Disposition, EnemyId, FlagSet, FruitPower, Item, ItemId, NpcId, Quest, QuestId, Room,
    RoomId,
};
use wc_mechanics::{Combat, Fighter};

use crate::clock::Clock;
use crate::error::FictionResult;
use crate::journal::{LogKind, TurnLog};
use crate::player::Player;
use crate::rules::START_MONEY;

/// Live contents of one room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    /// Item ids lying here (shop stock included).
    pub items: Vec<ItemId>,
    /// Enemy template ids, one per live occurrence.
    pub enemies: Vec<EnemyId>,
}

static EMPTY_ROOM: RoomState = RoomState {
    items: Vec::new(),
    enemies: Vec::new(),
};

/// Opening lines of every new game.
pub const INTRO: [&str; 2] = [
    "You are a rookie captain chasing legendary treasure across the Wild Current.",
    "Try LOOK, INVENTORY, and GO NORTH to begin.",
];

/// The whole mutable simulation.
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: Arc<Catalog>,
    /// The player character.
    pub player: Player,
    /// Live room contents, keyed by room id.
    pub rooms: BTreeMap<RoomId, RoomState>,
    /// World progress flags.
    pub flags: FlagSet,
    /// Current disposition of every NPC.
    pub dispositions: BTreeMap<NpcId, Disposition>,
    /// Navy attention. Gates, patrols and prices read it.
    pub wanted: u32,
    /// Crew spirit. Good morale lowers prices and helps skill checks.
    pub morale: i32,
    /// Coins in the purse.
    pub money: u32,
    /// In-world day and hour.
    pub clock: Clock,
    /// Room ids the player has charted.
    pub discovered: BTreeSet<RoomId>,
    /// Per-game quest records.
    pub quests: BTreeMap<QuestId, Quest>,
    /// The live encounter. While set, only combat turns are accepted.
    pub combat: Option<Combat>,
    /// Narration history. Never saved.
    pub log: TurnLog,
}

impl GameState {
    /// Start a new game in `start_room`.
    pub fn new(catalog: Arc<Catalog>, start_room: &str) -> FictionResult<Self> {
        let start = catalog.require_room(start_room)?;

        let rooms = catalog
            .rooms
            .values()
            .map(|room| {
                let live = RoomState {
                    items: room.items.clone(),
                    enemies: room.enemies.clone(),
                };
                (room.id.clone(), live)
            })
            .collect();
        let dispositions = catalog
            .npcs
            .values()
            .map(|npc| (npc.id.clone(), npc.disposition))
            .collect();

        // The home island is charted from the start
        let mut discovered: BTreeSet<RoomId> = catalog
            .island(&start.island)
            .map(|island| island.rooms.iter().cloned().collect())
            .unwrap_or_default();
        discovered.insert(start.id.clone());

        let clock = Clock::default();
        let mut log = TurnLog::new();
        log.push(&clock, LogKind::Story, INTRO[0]);
        log.push(&clock, LogKind::Hint, INTRO[1]);

        Ok(Self {
            player: Player::new(start.id.clone()),
            rooms,
            flags: FlagSet::new(),
            dispositions,
            wanted: 0,
            morale: 0,
            money: START_MONEY,
            clock,
            discovered,
            quests: catalog.quests.clone(),
            combat: None,
            log,
            catalog,
        })
    }

    /// A new game on the built-in content, for unit tests.
    #[cfg(test)]
    pub(crate) fn fresh() -> Self {
        Self::new(Arc::new(Catalog::wild_current()), wc_core::START_ROOM)
            .expect("built-in catalog starts cleanly")
    }

    /// The static content this game runs on.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A shared handle to the catalog.
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Catalog definition of the current room.
    pub fn here(&self) -> Option<&Room> {
        self.catalog.room(&self.player.location)
    }

    /// Live contents of the current room.
    pub fn contents(&self) -> &RoomState {
        self.rooms.get(&self.player.location).unwrap_or(&EMPTY_ROOM)
    }

    /// Mutable live contents of the current room.
    pub fn contents_mut(&mut self) -> &mut RoomState {
        self.rooms.entry(self.player.location.clone()).or_default()
    }

    /// NPC ids present in the current room.
    pub fn npcs_here(&self) -> &[NpcId] {
        self.here().map(|r| r.npcs.as_slice()).unwrap_or_default()
    }

    /// Slots taken by the inventory.
    pub fn slots_used(&self) -> u32 {
        self.catalog.slot_cost(&self.player.inventory)
    }

    /// Whether `item` fits, optionally after `freed` leaves the inventory.
    pub fn fits(&self, item: &Item, freed: Option<&str>) -> bool {
        let freed = freed
            .and_then(|id| self.catalog.item(id))
            .map_or(0, |i| i.slots);
        self.slots_used().saturating_sub(freed) + item.slots <= self.player.max_slots
    }

    /// The power of the active fruit, if any.
    pub fn active_power(&self) -> Option<FruitPower> {
        self.player
            .active_fruit
            .as_deref()
            .and_then(|id| self.catalog.item(id))
            .and_then(|item| item.power)
    }

    /// The player's side of a fight.
    pub fn fighter(&self) -> Fighter {
        Fighter {
            grit: self.player.grit,
            power: self.active_power(),
        }
    }

    /// Current disposition of an NPC, falling back to its catalog default.
    pub fn disposition(&self, npc_id: &str) -> Disposition {
        self.dispositions
            .get(npc_id)
            .copied()
            .or_else(|| self.catalog.npc(npc_id).map(|n| n.disposition))
            .unwrap_or(Disposition::Neutral)
    }

    /// Remove one copy of an item from whichever room holds it. Returns
    /// the room it was lying in.
    pub fn take_from_rooms(&mut self, item_id: &str) -> Option<RoomId> {
        for (room_id, room) in &mut self.rooms {
            if let Some(pos) = room.items.iter().position(|id| id == item_id) {
                room.items.remove(pos);
                return Some(room_id.clone());
            }
        }
        None
    }

    /// Chart a room. Returns `false` if it was already charted.
    pub fn mark_discovered(&mut self, room_id: &str) -> bool {
        self.discovered.insert(room_id.to_string())
    }

    /// Trade price of an item worth `base` under current wanted and morale.
    pub fn price(&self, base: u32) -> u32 {
        crate::rules::price(base, self.wanted, self.morale)
    }

    /// Mark a quest done. Returns the announcement on the first completion
    /// only; unknown or finished quests yield `None`.
    pub fn complete_quest(&mut self, quest_id: &str, outcome: &str) -> Option<String> {
        let quest = self.quests.get_mut(quest_id)?;
        if !quest.complete(outcome) {
            return None;
        }
        tracing::debug!(quest = quest_id, "quest complete");
        Some(format!("Quest complete: {}.", quest.name))
    }

    /// Whether the turn must go through combat handling.
    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_defaults() {
        let state = GameState::fresh();
        assert_eq!(state.player.location, "ship_deck");
        assert_eq!(state.money, 80);
        assert_eq!(state.wanted, 0);
        assert_eq!(state.clock, Clock::at(1, 9));
        assert!(state.flags.is_empty());
        assert!(!state.in_combat());
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn home_island_is_charted() {
        let state = GameState::fresh();
        let discovered: Vec<&str> = state.discovered.iter().map(String::as_str).collect();
        assert_eq!(discovered, vec!["ship_cabin", "ship_deck"]);
    }

    #[test]
    fn rooms_copy_catalog_contents() {
        let state = GameState::fresh();
        assert_eq!(state.contents().items, vec!["rope".to_string(), "flare".to_string()]);
        assert_eq!(state.rooms["reef_shallows"].enemies, vec!["reef_beast".to_string()]);
    }

    #[test]
    fn unknown_start_room_is_an_error() {
        let result = GameState::new(Arc::new(Catalog::wild_current()), "atlantis");
        assert!(result.is_err());
    }

    #[test]
    fn discovery_is_idempotent() {
        let mut state = GameState::fresh();
        assert!(state.mark_discovered("dock"));
        assert!(!state.mark_discovered("dock"));
        assert!(!state.mark_discovered("ship_deck"));
    }

    #[test]
    fn fits_accounts_for_freed_slot() {
        let mut state = GameState::fresh();
        state.player.max_slots = 2;
        state.player.add_item("rum");
        let key = state.catalog().item("stone_key").cloned().expect("stone key");
        assert!(!state.fits(&key, None));
        assert!(state.fits(&key, Some("rum")));
    }

    #[test]
    fn take_from_rooms_finds_the_holder() {
        let mut state = GameState::fresh();
        assert_eq!(state.take_from_rooms("sun_coin").as_deref(), Some("ruins_gate"));
        assert!(state.rooms["ruins_gate"].items.is_empty());
        assert_eq!(state.take_from_rooms("sun_coin"), None);
    }

    #[test]
    fn quest_completes_once() {
        let mut state = GameState::fresh();
        assert_eq!(
            state.complete_quest("rival", "You bested the rival pirate.").as_deref(),
            Some("Quest complete: Rival Showdown.")
        );
        assert_eq!(state.complete_quest("rival", "again"), None);
        assert_eq!(state.quests["rival"].outcome, "You bested the rival pirate.");
        assert_eq!(state.complete_quest("nope", "x"), None);
    }

    #[test]
    fn dispositions_track_catalog() {
        let mut state = GameState::fresh();
        assert_eq!(state.disposition("officer"), Disposition::Hostile);
        state.dispositions.insert("officer".into(), Disposition::Friendly);
        assert_eq!(state.disposition("officer"), Disposition::Friendly);
    }
}
