//! Read-only views of the state: room descriptions, inventory, status,
//! quest log, journal, map and help.

use wc_core::Catalog;

use crate::state::GameState;

/// Lines shown by JOURNAL.
const JOURNAL_LINES: usize = 10;

fn names<'a>(ids: &[String], lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    ids.iter()
        .filter_map(|id| lookup(id.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn item_names(catalog: &Catalog, ids: &[String]) -> String {
    names(ids, |id| catalog.item(id).map(|i| i.name.as_str()))
}

impl GameState {
    /// Describe the current room.
    pub fn look(&self) -> String {
        let Some(room) = self.here() else {
            return "You see nothing but mist.".to_string();
        };
        let catalog = self.catalog();
        let contents = self.contents();

        let mut lines = vec![
            format!("{} - {}", room.name, catalog.island_name(room)),
            room.description.clone(),
        ];
        if !contents.items.is_empty() {
            lines.push(format!("You see: {}", item_names(catalog, &contents.items)));
        }
        if !room.npcs.is_empty() {
            let people = names(&room.npcs, |id| catalog.npc(id).map(|n| n.name.as_str()));
            lines.push(format!("People here: {people}"));
        }
        if !contents.enemies.is_empty() {
            let threats = names(&contents.enemies, |id| catalog.enemy(id).map(|e| e.name.as_str()));
            lines.push(format!("Threats: {threats}"));
        }
        let exits: Vec<&str> = room.exits.keys().map(|d| d.name()).collect();
        if exits.is_empty() {
            lines.push("Exits: none".to_string());
        } else {
            lines.push(format!("Exits: {}", exits.join(", ")));
        }
        lines.join("\n")
    }

    /// List carried items and slot usage.
    pub fn inventory_text(&self) -> String {
        if self.player.inventory.is_empty() {
            return "Your pockets are empty.".to_string();
        }
        let mut lines = vec!["Inventory:".to_string()];
        for id in &self.player.inventory {
            if let Some(item) = self.catalog().item(id) {
                lines.push(format!("- {}", item.name));
            }
        }
        lines.push(format!("Slots used: {}/{}", self.slots_used(), self.player.max_slots));
        lines.join("\n")
    }

    /// HP, purse, reputation, time and power.
    pub fn status_text(&self) -> String {
        let fruit = self
            .player
            .active_fruit
            .as_deref()
            .and_then(|id| self.catalog().item(id))
            .map_or("none", |i| i.name.as_str());
        [
            format!("HP: {}/{}", self.player.hp, self.player.max_hp),
            format!("Coins: {}", self.money),
            format!("Wanted: {}", self.wanted),
            format!("Morale: {}", self.morale),
            format!("Time: {}", self.clock),
            format!("Fruit: {fruit}"),
        ]
        .join("\n")
    }

    /// Every quest with its state.
    pub fn quests_text(&self) -> String {
        let mut lines = vec!["Quests:".to_string()];
        for quest in self.quests.values() {
            if quest.done {
                lines.push(format!("- {} [done] {}", quest.name, quest.outcome));
            } else if quest.active {
                lines.push(format!("- {} [active] {}", quest.name, quest.description));
            }
        }
        lines.join("\n")
    }

    /// The last few narration lines, oldest first.
    pub fn journal_text(&self) -> String {
        let mut recent: Vec<String> = self
            .log
            .recent(JOURNAL_LINES)
            .map(|entry| format!("[{}] {}", entry.time, entry.text))
            .collect();
        if recent.is_empty() {
            return "The journal is blank.".to_string();
        }
        recent.reverse();
        recent.insert(0, "Journal:".to_string());
        recent.join("\n")
    }

    /// Charted rooms grouped by island, with the current room marked.
    pub fn map_text(&self) -> String {
        let catalog = self.catalog();
        let mut lines = vec!["Charted waters:".to_string()];
        for island in catalog.islands.values() {
            let charted: Vec<String> = island
                .rooms
                .iter()
                .filter(|id| self.discovered.contains(*id))
                .filter_map(|id| catalog.room(id))
                .map(|room| {
                    if room.id == self.player.location {
                        format!("[{}]", room.name)
                    } else {
                        room.name.clone()
                    }
                })
                .collect();
            if !charted.is_empty() {
                lines.push(format!("{}: {}", island.name, charted.join(", ")));
            }
        }
        lines.join("\n")
    }
}

/// The fixed command summary.
pub fn help_text() -> String {
    "\
Commands:
  Movement: GO NORTH, NORTH, N (all eight compass points)
  Actions: LOOK, EXAMINE <thing>, TAKE <item>, DROP <item>, INVENTORY
  Social: TALK <npc>, BRIBE <npc>, THREATEN <npc>
  Use: USE <item> [ON <target>]
  Combat: ATTACK <enemy>, then ATTACK to keep fighting
  Economy: BUY <item>, SELL <item>
  Charts: MAP, ROUTE <place>, TRAVEL <place>
  Utility: STATUS, QUESTS, JOURNAL, HELP, SAVE, LOAD, QUIT
Goal: Collect three Glyph Stone fragments and escape with the treasure core."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{LogKind, TurnLog};

    #[test]
    fn look_lists_room_contents() {
        let state = GameState::fresh();
        let text = state.look();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Rookie Deck - Ship");
        assert!(lines.contains(&"You see: Coil of Rope, Signal Flare"));
        assert!(lines.contains(&"People here: Ship Cook"));
        assert_eq!(lines.last(), Some(&"Exits: north, south"));
        assert!(!text.contains("Threats:"));
    }

    #[test]
    fn look_lists_threats() {
        let mut state = GameState::fresh();
        state.player.location = "reef_shallows".to_string();
        assert!(state.look().contains("Threats: Reef Beast"));
    }

    #[test]
    fn exits_follow_compass_order() {
        let mut state = GameState::fresh();
        state.player.location = "town_square".to_string();
        assert!(state.look().ends_with("Exits: north, south, east, west, northeast"));
    }

    #[test]
    fn empty_inventory() {
        let state = GameState::fresh();
        assert_eq!(state.inventory_text(), "Your pockets are empty.");
    }

    #[test]
    fn inventory_lists_names_and_slots() {
        let mut state = GameState::fresh();
        state.player.add_item("rope");
        state.player.add_item("cutlass");
        assert_eq!(
            state.inventory_text(),
            "Inventory:\n- Coil of Rope\n- Rusty Cutlass\nSlots used: 3/12"
        );
    }

    #[test]
    fn status_shows_time_and_fruit() {
        let mut state = GameState::fresh();
        assert!(state.status_text().contains("Time: Day 1 09:00"));
        assert!(state.status_text().contains("Fruit: none"));
        state.player.active_fruit = Some("gale_fruit".to_string());
        assert!(state.status_text().contains("Fruit: Gale Gale Fruit"));
    }

    #[test]
    fn journal_shows_recent_lines_oldest_first() {
        let mut state = GameState::fresh();
        let clock = state.clock;
        state.log.push(&clock, LogKind::Story, "Gulls circle.");
        let text = state.journal_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Journal:");
        assert!(lines[1].starts_with("[Day 1 09:00] You are a rookie captain"));
        assert_eq!(lines.last(), Some(&"[Day 1 09:00] Gulls circle."));

        state.log = TurnLog::new();
        assert_eq!(state.journal_text(), "The journal is blank.");
    }

    #[test]
    fn quests_show_state() {
        let mut state = GameState::fresh();
        state.complete_quest("broker", "Key delivered.");
        let text = state.quests_text();
        assert!(text.contains("- Rum for Keys [done] Key delivered."));
        assert!(text.contains("- Glyph Stone Hunt [active]"));
    }

    #[test]
    fn map_marks_current_room() {
        let state = GameState::fresh();
        assert_eq!(state.map_text(), "Charted waters:\nShip: [Rookie Deck], Captain's Cabin");
    }
}
