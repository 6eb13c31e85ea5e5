//! Save documents.
//!
//! A [`SaveData`] carries only the mutable part of a game. Loading rebuilds
//! a fresh [`GameState`] from the catalog and overlays the saved fields, so
//! content missing from an older save keeps its new-game defaults. Every id
//! in the document is checked against the catalog before anything is
//! applied.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wc_core::{Catalog, Disposition, EnemyId, Flag, FlagSet, ItemId, NpcId, Quest, QuestId, RoomId};

use crate::clock::{Clock, HOURS_PER_DAY};
use crate::error::{FictionError, FictionResult};
use crate::player::Player;
use crate::state::GameState;

/// The persisted slice of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    /// Location, inventory, stats and active fruit.
    pub player: Player,
    #[serde(default)]
    /// Item ids lying in each room.
    pub room_items: BTreeMap<RoomId, Vec<ItemId>>,
    #[serde(default)]
    /// Enemy ids lurking in each room.
    pub room_enemies: BTreeMap<RoomId, Vec<EnemyId>>,
    #[serde(default)]
    /// World progress flags.
    pub flags: FlagSet,
    #[serde(default)]
    /// NPC dispositions at save time.
    pub dispositions: BTreeMap<NpcId, Disposition>,
    /// Wanted level.
    pub wanted: u32,
    /// Crew morale.
    pub morale: i32,
    /// Coins in the purse.
    pub money: u32,
    /// Clock day, from 1.
    pub day: u32,
    /// Clock hour, 0 to 23.
    pub hour: u32,
    #[serde(default)]
    /// Charted room ids.
    pub discovered: BTreeSet<RoomId>,
    #[serde(default)]
    /// Quest records.
    pub quests: BTreeMap<QuestId, Quest>,
}

/// Capture the mutable state. The turn log and a live encounter are not
/// part of a save.
pub fn snapshot(state: &GameState) -> SaveData {
    SaveData {
        player: state.player.clone(),
        room_items: state
            .rooms
            .iter()
            .map(|(id, room)| (id.clone(), room.items.clone()))
            .collect(),
        room_enemies: state
            .rooms
            .iter()
            .map(|(id, room)| (id.clone(), room.enemies.clone()))
            .collect(),
        flags: state.flags.clone(),
        dispositions: state.dispositions.clone(),
        wanted: state.wanted,
        morale: state.morale,
        money: state.money,
        day: state.clock.day,
        hour: state.clock.hour,
        discovered: state.discovered.clone(),
        quests: state.quests.clone(),
    }
}

fn reject(what: &str, id: &str) -> FictionError {
    FictionError::Snapshot(format!("unknown {what} \"{id}\""))
}

fn check_items<'a>(catalog: &Catalog, ids: impl IntoIterator<Item = &'a ItemId>) -> FictionResult<()> {
    for id in ids {
        if catalog.item(id).is_none() {
            return Err(reject("item", id));
        }
    }
    Ok(())
}

fn check_room(catalog: &Catalog, id: &str) -> FictionResult<()> {
    match catalog.room(id) {
        Some(_) => Ok(()),
        None => Err(reject("room", id)),
    }
}

/// Reject a document that does not fit `catalog`.
pub fn validate(catalog: &Catalog, data: &SaveData) -> FictionResult<()> {
    let player = &data.player;
    check_room(catalog, &player.location)?;
    check_items(catalog, &player.inventory)?;
    check_items(catalog, player.equipped.items())?;
    let not_a_fruit = player
        .active_fruit
        .as_ref()
        .filter(|id| !catalog.item(id).is_some_and(|i| i.is_fruit()));
    if let Some(id) = not_a_fruit {
        return Err(FictionError::Snapshot(format!("\"{id}\" is not a fruit")));
    }
    if catalog.slot_cost(&player.inventory) > player.max_slots {
        return Err(FictionError::Snapshot("inventory exceeds capacity".to_string()));
    }

    for (room, items) in &data.room_items {
        check_room(catalog, room)?;
        check_items(catalog, items)?;
    }
    for (room, enemies) in &data.room_enemies {
        check_room(catalog, room)?;
        if let Some(id) = enemies.iter().find(|id| catalog.enemy(id).is_none()) {
            return Err(reject("enemy", id));
        }
    }
    if let Some(id) = data.dispositions.keys().find(|id| catalog.npc(id).is_none()) {
        return Err(reject("npc", id));
    }
    let mut placed = BTreeSet::new();
    let mut everywhere = data.room_items.values().flatten().chain(&player.inventory);
    if let Some(id) = everywhere.find(|id| !placed.insert(id.as_str())) {
        return Err(FictionError::Snapshot(format!("item \"{id}\" is in more than one place")));
    }
    for room in &data.discovered {
        check_room(catalog, room)?;
    }
    for (id, quest) in &data.quests {
        if !catalog.quests.contains_key(id) {
            return Err(reject("quest", id));
        }
        if quest.done == quest.outcome.is_empty() {
            return Err(FictionError::Snapshot(format!("quest \"{id}\" outcome does not match its state")));
        }
    }
    if data.day == 0 || data.hour >= HOURS_PER_DAY {
        return Err(FictionError::Snapshot(format!("invalid time: day {} hour {}", data.day, data.hour)));
    }
    Ok(())
}

/// Rebuild a game from a save document.
pub fn restore(catalog: Arc<Catalog>, data: SaveData) -> FictionResult<GameState> {
    validate(&catalog, &data)?;
    let mut state = GameState::new(catalog, &data.player.location)?;

    for (room, items) in data.room_items {
        state.rooms.entry(room).or_default().items = items;
    }
    for (room, enemies) in data.room_enemies {
        state.rooms.entry(room).or_default().enemies = enemies;
    }
    state.dispositions.extend(data.dispositions);
    state.quests.extend(data.quests);
    if !data.discovered.is_empty() {
        state.discovered = data.discovered;
    }

    state.player = data.player;
    state.flags = data.flags;
    state.flags.clear(Flag::Quit);
    state.wanted = data.wanted;
    state.morale = data.morale;
    state.money = data.money;
    state.clock = Clock::at(data.day, data.hour);
    Ok(state)
}

/// Write a save document as JSON.
pub fn save_to(path: &Path, data: &SaveData) -> FictionResult<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

/// Read a save document.
pub fn load_from(path: &Path) -> FictionResult<SaveData> {
    let json = fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    tracing::info!(path = %path.display(), "game loaded");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played() -> GameState {
        let mut state = GameState::fresh();
        state.player.location = "market_lane".to_string();
        state.take_from_rooms("rope");
        state.player.add_item("rope");
        state.contents_mut().items.retain(|i| i != "spice");
        state.flags.set(Flag::Bribed);
        state.dispositions.insert("officer".into(), Disposition::Friendly);
        state.wanted = 2;
        state.morale = 3;
        state.money = 41;
        state.clock = Clock::at(2, 5);
        state.mark_discovered("market_lane");
        state.complete_quest("rival", "You bested the rival pirate.");
        state
    }

    #[test]
    fn snapshot_restores_every_field() {
        let state = played();
        let data = snapshot(&state);
        let back = restore(state.catalog_handle(), data.clone()).unwrap();
        assert_eq!(snapshot(&back), data);
        assert_eq!(back.player.location, "market_lane");
        assert!(!back.rooms["market_lane"].items.contains(&"spice".to_string()));
        assert_eq!(back.clock, Clock::at(2, 5));
    }

    #[test]
    fn json_round_trip() {
        let data = snapshot(&played());
        let json = serde_json::to_string(&data).unwrap();
        let back: SaveData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
        assert!(json.contains(r#""flags":["bribed"]"#));
    }

    #[test]
    fn older_documents_get_defaults() {
        let state = GameState::fresh();
        let mut data = snapshot(&state);
        data.room_items.clear();
        data.room_enemies.clear();
        data.quests.clear();
        data.discovered.clear();
        let back = restore(state.catalog_handle(), data).unwrap();
        assert_eq!(back.rooms["reef_shallows"].enemies, vec!["reef_beast".to_string()]);
        assert_eq!(back.quests.len(), 7);
        assert!(back.discovered.contains("ship_cabin"));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let state = GameState::fresh();

        let mut data = snapshot(&state);
        data.player.inventory.push("kraken_tooth".to_string());
        assert!(matches!(restore(state.catalog_handle(), data), Err(FictionError::Snapshot(_))));

        let mut data = snapshot(&state);
        data.player.location = "atlantis".to_string();
        assert!(restore(state.catalog_handle(), data).is_err());

        let mut data = snapshot(&state);
        data.player.active_fruit = Some("rum".to_string());
        assert!(restore(state.catalog_handle(), data).is_err());

        let mut data = snapshot(&state);
        data.hour = 24;
        assert!(restore(state.catalog_handle(), data).is_err());
    }

    #[test]
    fn items_in_two_places_are_rejected() {
        let state = GameState::fresh();

        let mut data = snapshot(&state);
        data.player.inventory.push("rope".to_string());
        let err = restore(state.catalog_handle(), data).unwrap_err();
        assert_eq!(err.to_string(), "snapshot rejected: item \"rope\" is in more than one place");

        let mut data = snapshot(&state);
        if let Some(items) = data.room_items.get_mut("dock") {
            items.push("sun_coin".to_string());
        }
        assert!(matches!(restore(state.catalog_handle(), data), Err(FictionError::Snapshot(_))));
    }

    #[test]
    fn quit_flag_is_not_restored() {
        let mut state = GameState::fresh();
        state.flags.set(Flag::Quit);
        let back = restore(state.catalog_handle(), snapshot(&state)).unwrap();
        assert!(!back.flags.has(Flag::Quit));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let data = snapshot(&played());
        save_to(&path, &data).unwrap();
        assert_eq!(load_from(&path).unwrap(), data);
    }

    #[test]
    fn missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_from(&missing), Err(FictionError::Io(_))));

        let corrupt = dir.path().join("bad.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert!(matches!(load_from(&corrupt), Err(FictionError::Json(_))));
    }
}
