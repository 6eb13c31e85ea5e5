//! Verb operations on the game state.
//!
//! Every operation answers with narration. Expected failures (no such exit,
//! pockets full, not enough coin) are narration too, and leave the state
//! exactly as it was.

use wc_core::{CoreError, Direction, Disposition, RoomTag, find_route};
use wc_mechanics::{Combat, CombatEvent, CombatOutcome, Roller, Stat, skill_check};

use crate::gate::{self, Verdict};
use crate::rules::{
    BRIBE_COST, HARSH_TALK_WANTED, PATROL_CHANCE, PATROL_ENEMY, PATROL_WANTED, SAFE_ISLAND,
};
use crate::state::GameState;

/// Narration when a patrol spawns.
pub const PATROL_LINE: &str = "A Bluecoat patrol storms in, nets ready.";

const LOST: &str = "You are lost in the Wild Current.";
const HARSH_TALK: &str = "The Bluecoat glowers. 'Hands where I can see them.'";
const RIVAL_BOSS: &str = "rival_pirate";
const TREASURE: &str = "treasure_core";

/// Result of a single step along an exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// The player did not move. Carries the reason.
    Stayed(String),
    /// The player moved; `patrol` is set if a patrol spawned on arrival.
    Arrived { patrol: bool },
}

impl GameState {
    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Move along an exit and describe the arrival.
    pub fn go(&mut self, direction: Direction, roller: &mut dyn Roller) -> Vec<String> {
        match self.step(direction, roller) {
            Step::Stayed(text) => vec![text],
            Step::Arrived { patrol } => {
                let mut lines = vec![self.look()];
                if patrol {
                    lines.push(PATROL_LINE.to_string());
                }
                lines
            }
        }
    }

    pub(crate) fn step(&mut self, direction: Direction, roller: &mut dyn Roller) -> Step {
        let Some(room) = self.here() else {
            return Step::Stayed(LOST.to_string());
        };
        let Some(dest) = room.exits.get(&direction).cloned() else {
            return Step::Stayed("You can't go that way.".to_string());
        };

        match gate::check(self, &dest) {
            Verdict::Pass => {}
            Verdict::Block(text) => return Step::Stayed(text.to_string()),
            Verdict::Fatal { flag, text } => {
                self.flags.set(flag);
                tracing::debug!(room = %dest, %flag, "fatal gate");
                return Step::Stayed(text.to_string());
            }
        }

        self.player.location = dest;
        let here = self.player.location.clone();
        self.mark_discovered(&here);
        self.clock.advance();
        let patrol = self.maybe_patrol(roller);
        tracing::debug!(to = %here, time = %self.clock, patrol, "moved");
        Step::Arrived { patrol }
    }

    fn maybe_patrol(&mut self, roller: &mut dyn Roller) -> bool {
        if self.wanted < PATROL_WANTED {
            return false;
        }
        if self.here().is_none_or(|room| room.island == SAFE_ISLAND) {
            return false;
        }
        if !self.contents().enemies.is_empty() {
            return false;
        }
        if !roller.chance(PATROL_CHANCE) {
            return false;
        }
        self.contents_mut().enemies.push(PATROL_ENEMY.to_string());
        true
    }

    /// Resolve a place name to a charted room and the route there.
    fn plan(&self, place: &str) -> Result<(String, Vec<Direction>), String> {
        let Some(room) = self.catalog().find_room(place) else {
            return Err("No place by that name.".to_string());
        };
        if !self.discovered.contains(&room.id) {
            return Err("You haven't charted that place yet.".to_string());
        }
        if room.id == self.player.location {
            return Err("You're already there.".to_string());
        }
        match find_route(self.catalog(), &self.player.location, &room.id) {
            Ok(route) => Ok((room.id.clone(), route)),
            Err(CoreError::NoPath { .. }) => Err("No charted route leads there.".to_string()),
            Err(err) => Err(err.to_string()),
        }
    }

    /// Directions from here to a charted room.
    pub fn route_to(&self, place: &str) -> String {
        match self.plan(place) {
            Ok((dest, route)) => {
                let name = self.catalog().room(&dest).map_or(dest.as_str(), |r| r.name.as_str());
                let steps: Vec<&str> = route.iter().map(|d| d.name()).collect();
                format!("Route to {name}: {}", steps.join(", "))
            }
            Err(text) => text,
        }
    }

    /// Walk the route to a charted room one move at a time.
    ///
    /// Stops at the first step that does not move the player, and after a
    /// patrol appears.
    pub fn travel(&mut self, place: &str, roller: &mut dyn Roller) -> Vec<String> {
        let route = match self.plan(place) {
            Ok((_, route)) => route,
            Err(text) => return vec![text],
        };

        let mut lines = Vec::new();
        for (i, direction) in route.iter().enumerate() {
            match self.step(*direction, roller) {
                Step::Stayed(text) => {
                    lines.push(text);
                    break;
                }
                Step::Arrived { patrol } => {
                    if patrol || i + 1 == route.len() {
                        lines.push(self.look());
                    } else if let Some(room) = self.here() {
                        lines.push(format!("You pass through {}.", room.name));
                    }
                    if patrol {
                        lines.push(PATROL_LINE.to_string());
                        break;
                    }
                }
            }
        }
        lines
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Describe a carried item, or something in the room.
    pub fn examine(&self, name: &str) -> String {
        let catalog = self.catalog();
        let contents = self.contents();
        if let Some(id) = catalog.find_item(name, &self.player.inventory) {
            return describe(catalog.item(id).map(|i| i.description.as_str()));
        }
        if let Some(id) = catalog.find_item(name, &contents.items) {
            return describe(catalog.item(id).map(|i| i.description.as_str()));
        }
        if let Some(id) = catalog.find_npc(name, self.npcs_here()) {
            return describe(catalog.npc(id).map(|n| n.description.as_str()));
        }
        if let Some(id) = catalog.find_enemy(name, &contents.enemies) {
            return describe(catalog.enemy(id).map(|e| e.description.as_str()));
        }
        "You find nothing like that to examine.".to_string()
    }

    /// Pick up an item lying in the room.
    pub fn take(&mut self, name: &str) -> String {
        let catalog = self.catalog_handle();
        let Some(item) = catalog
            .find_item(name, &self.contents().items)
            .and_then(|id| catalog.item(id))
        else {
            return "You don't see that here.".to_string();
        };
        if !self.fits(item, None) {
            return "You're carrying too much already.".to_string();
        }

        remove_one(&mut self.contents_mut().items, &item.id);
        self.player.add_item(item.id.clone());
        if item.contraband {
            self.wanted += 1;
        }
        tracing::debug!(item = %item.id, wanted = self.wanted, "took item");
        format!("You take the {}.", item.name)
    }

    /// Put a carried item down in the room.
    pub fn drop_item(&mut self, name: &str) -> String {
        let catalog = self.catalog_handle();
        let Some(item) = catalog
            .find_item(name, &self.player.inventory)
            .and_then(|id| catalog.item(id))
        else {
            return "You don't have that.".to_string();
        };

        self.player.remove_item(&item.id);
        self.contents_mut().items.push(item.id.clone());
        format!("You drop the {}.", item.name)
    }

    // -----------------------------------------------------------------------
    // Social
    // -----------------------------------------------------------------------

    /// Talk to an NPC in the room.
    pub fn talk(&mut self, name: &str) -> String {
        let catalog = self.catalog_handle();
        let Some(npc) = catalog
            .find_npc(name, self.npcs_here())
            .and_then(|id| catalog.npc(id))
        else {
            return "No one like that is here.".to_string();
        };

        let current = self.disposition(&npc.id);
        if current == Disposition::Hostile {
            return "They glare and refuse to speak.".to_string();
        }
        let response = if self.wanted >= HARSH_TALK_WANTED && npc.disposition == Disposition::Hostile {
            HARSH_TALK.to_string()
        } else {
            npc.talk.clone()
        };
        if current == Disposition::Neutral {
            self.dispositions.insert(npc.id.clone(), Disposition::Met);
        }
        response
    }

    /// Pay an NPC to look the other way.
    pub fn bribe(&mut self, name: &str) -> String {
        let Some(npc_id) = self
            .catalog()
            .find_npc(name, self.npcs_here())
            .map(str::to_string)
        else {
            return "There's no one here to bribe.".to_string();
        };
        if self.money < BRIBE_COST {
            return "You don't have enough coin to bribe convincingly.".to_string();
        }

        self.money -= BRIBE_COST;
        self.wanted = self.wanted.saturating_sub(1);
        self.flags.set(wc_core::Flag::Bribed);
        self.dispositions.insert(npc_id, Disposition::Friendly);
        "The bribe slips into a pocket. The way is suddenly less guarded.".to_string()
    }

    /// Lean on an NPC. The wanted level rises and the NPC turns hostile
    /// whether or not the threat lands; the check only picks the narration.
    pub fn threaten(&mut self, name: &str, roller: &mut dyn Roller) -> String {
        let Some(npc_id) = self
            .catalog()
            .find_npc(name, self.npcs_here())
            .map(str::to_string)
        else {
            return "No one here looks threatened.".to_string();
        };

        let check = skill_check(roller, self.player.stat(Stat::Grit), self.morale);
        self.wanted += 1;
        self.dispositions.insert(npc_id, Disposition::Hostile);
        if check.passed {
            "Your threat lands. People scatter and the wanted posters multiply.".to_string()
        } else {
            "Your threat falls flat. Someone laughs.".to_string()
        }
    }

    // -----------------------------------------------------------------------
    // Trade
    // -----------------------------------------------------------------------

    fn in_shop(&self) -> bool {
        self.here().is_some_and(|room| room.has_tag(RoomTag::Shop))
    }

    /// Buy an item from the room's stock.
    pub fn buy(&mut self, name: &str) -> String {
        if !self.in_shop() {
            return "There's nothing for sale here.".to_string();
        }
        let catalog = self.catalog_handle();
        let Some(item) = catalog
            .find_item(name, &self.contents().items)
            .and_then(|id| catalog.item(id))
        else {
            return "That item isn't for sale here.".to_string();
        };

        let price = self.price(item.value);
        if self.money < price {
            return "You can't afford that.".to_string();
        }
        if !self.fits(item, None) {
            return "You're carrying too much already.".to_string();
        }

        self.money -= price;
        remove_one(&mut self.contents_mut().items, &item.id);
        self.player.add_item(item.id.clone());
        tracing::debug!(item = %item.id, price, money = self.money, "bought");
        format!("You buy {} for {price} coins.", item.name)
    }

    /// Sell a carried item into the room's stock at half value.
    pub fn sell(&mut self, name: &str) -> String {
        if !self.in_shop() {
            return "No one is buying here.".to_string();
        }
        let catalog = self.catalog_handle();
        let Some(item) = catalog
            .find_item(name, &self.player.inventory)
            .and_then(|id| catalog.item(id))
        else {
            return "You don't have that to sell.".to_string();
        };

        let sale = self.price(item.value / 2);
        self.money += sale;
        self.player.remove_item(&item.id);
        self.contents_mut().items.push(item.id.clone());
        tracing::debug!(item = %item.id, sale, money = self.money, "sold");
        format!("You sell {} for {sale} coins.", item.name)
    }

    // -----------------------------------------------------------------------
    // Combat
    // -----------------------------------------------------------------------

    /// Open an encounter with an enemy in the room.
    pub fn start_combat(&mut self, name: &str) -> String {
        let catalog = self.catalog_handle();
        let Some(enemy) = catalog
            .find_enemy(name, &self.contents().enemies)
            .and_then(|id| catalog.enemy(id))
        else {
            return "No enemy by that name is here.".to_string();
        };

        self.combat = Some(Combat::new(enemy));
        tracing::debug!(enemy = %enemy.id, "combat started");
        format!("Combat begins with {}!", enemy.name)
    }

    /// Apply the mechanical effects of a combat event to the player.
    pub fn apply_combat_event(&mut self, event: &CombatEvent) {
        self.player.hp -= event.hp_loss();
        self.wanted += event.wanted_gain();
    }

    /// Settle a finished encounter.
    pub fn resolve_combat(&mut self, combat: &Combat) -> Vec<String> {
        let mut lines = Vec::new();
        if combat.outcome == CombatOutcome::EnemyDown {
            let enemy_id = combat.enemy.id.clone();
            remove_one(&mut self.contents_mut().enemies, &enemy_id);
            if enemy_id == RIVAL_BOSS {
                if self.player.has_item(TREASURE) {
                    self.flags.set(wc_core::Flag::TreasureLost);
                } else if let Some(line) = self.complete_quest("rival", "You bested the rival pirate.") {
                    lines.push(line);
                }
            }
        }
        self.combat = None;
        lines
    }
}

fn describe(text: Option<&str>) -> String {
    text.map_or_else(
        || "You find nothing like that to examine.".to_string(),
        str::to_string,
    )
}

/// Remove the first occurrence of `id`, keeping order.
fn remove_one(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|x| x == id) {
        ids.remove(pos);
    }
}
