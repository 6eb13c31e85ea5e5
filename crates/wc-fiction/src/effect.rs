//! Item use.
//!
//! `USE` is dispatched through a [`UseRegistry`]: a table from item id to a
//! handler, assembled once per session. Fruits are handled generically. A
//! handler returns `None` when its item does nothing in the current
//! situation; it must leave the state untouched in that case.

use std::collections::BTreeMap;

use wc_core::Flag;

use crate::quest::GLYPH_FRAGMENTS;
use crate::rules::{BALM_HEAL, FRUIT_MORALE, MEDKIT_HEAL, NOTORIOUS_WANTED};
use crate::state::GameState;

/// Answer when nothing matches.
pub const NOTHING_HAPPENS: &str = "Nothing happens.";
const TOO_FULL: &str = "Your pockets are too full to accept it.";

/// The item being used and what it is being used on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseContext {
    /// Catalog id of the carried item.
    pub item: String,
    /// Lowercased text after " on ", if any.
    pub target: Option<String>,
}

/// A use handler. `None` means nothing happens.
pub type UseHandler = fn(&mut GameState, &UseContext) -> Option<Vec<String>>;

/// Item-id keyed table of use handlers.
#[derive(Debug, Clone, Default)]
pub struct UseRegistry {
    handlers: BTreeMap<String, UseHandler>,
}

impl UseRegistry {
    /// An empty registry. Only fruits do anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The handlers for the built-in content.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("cipher_lens", cipher_lens);
        registry.register("stone_key", stone_key);
        registry.register("storm_lantern", storm_lantern);
        registry.register("gadget_gull", gadget_gull);
        registry.register("rum", rum);
        registry.register("medkit", medkit);
        registry.register("balm", balm);
        registry.register("sun_coin", sun_coin);
        registry.register("bribe", bribe_pouch);
        registry.register("spice", spice);
        registry.register("repair_kit", repair_kit);
        registry.register("treasure_core", treasure_core);
        registry
    }

    /// Add or replace the handler for an item.
    pub fn register(&mut self, item: impl Into<String>, handler: UseHandler) {
        self.handlers.insert(item.into(), handler);
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Use a carried item, optionally on a target.
    pub fn apply(&self, state: &mut GameState, item_name: &str, target: Option<&str>) -> Vec<String> {
        let catalog = state.catalog_handle();
        let Some(item) = catalog
            .find_item(item_name, &state.player.inventory)
            .and_then(|id| catalog.item(id))
        else {
            return vec!["You don't have that to use.".to_string()];
        };

        if item.is_fruit() {
            return vec![eat_fruit(state, &item.id)];
        }

        let ctx = UseContext {
            item: item.id.clone(),
            target: target.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty()),
        };
        let outcome = self
            .handlers
            .get(&item.id)
            .and_then(|handler| handler(state, &ctx));
        tracing::debug!(item = %ctx.item, target = ?ctx.target, matched = outcome.is_some(), "use");
        outcome.unwrap_or_else(|| vec![NOTHING_HAPPENS.to_string()])
    }
}

fn eat_fruit(state: &mut GameState, fruit: &str) -> String {
    if state.player.active_fruit.is_some() {
        return "Only one cursed fruit at a time. The sea insists.".to_string();
    }
    state.player.remove_item(fruit);
    state.player.active_fruit = Some(fruit.to_string());
    state.morale += FRUIT_MORALE;
    "Power surges through you. The sea now resents you.".to_string()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn at(state: &GameState, room: &str) -> bool {
    state.player.location == room
}

/// The target names `npc` and that NPC is in the room.
fn aimed_at(state: &GameState, ctx: &UseContext, npc: &str) -> bool {
    ctx.target
        .as_deref()
        .and_then(|t| state.catalog().find_npc(t, state.npcs_here()))
        == Some(npc)
}

/// Hand the player `get`, taking it out of whichever room holds it, in
/// exchange for the carried `give` if any. Refused when `get` is already
/// carried or would not fit.
fn grant(state: &mut GameState, give: Option<&str>, get: &str) -> Result<(), String> {
    let catalog = state.catalog_handle();
    let Some(item) = catalog.item(get) else {
        return Err(NOTHING_HAPPENS.to_string());
    };
    if state.player.has_item(get) {
        return Err(format!("You already carry the {}.", item.name));
    }
    if !state.fits(item, give) {
        return Err(TOO_FULL.to_string());
    }
    if let Some(give) = give {
        state.player.remove_item(give);
    }
    let from = state.take_from_rooms(get);
    state.player.add_item(get);
    tracing::debug!(item = get, from = ?from, "granted");
    Ok(())
}

fn say(lines: &[&str]) -> Option<Vec<String>> {
    Some(lines.iter().map(|l| l.to_string()).collect())
}

/// A trade-in: narration plus a quest announcement on first completion.
fn trade(
    state: &mut GameState,
    ctx: &UseContext,
    get: &str,
    quest: (&str, &str),
    text: &str,
) -> Option<Vec<String>> {
    if let Err(refusal) = grant(state, Some(&ctx.item), get) {
        return Some(vec![refusal]);
    }
    let mut lines = vec![text.to_string()];
    lines.extend(state.complete_quest(quest.0, quest.1));
    Some(lines)
}

fn heal(state: &mut GameState, ctx: &UseContext, amount: i32, text: &str) -> Option<Vec<String>> {
    if state.player.hp >= state.player.max_hp {
        return say(&["You're already in one piece."]);
    }
    state.player.heal(amount);
    state.player.remove_item(&ctx.item);
    say(&[text])
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn cipher_lens(state: &mut GameState, _ctx: &UseContext) -> Option<Vec<String>> {
    if !at(state, "mist_library") {
        return say(&["The lens needs a quiet library to read the glyphs."]);
    }
    if state.flags.has(Flag::CoordsDecoded) {
        return say(&["The glyphs have already given up their secret."]);
    }
    if !GLYPH_FRAGMENTS.iter().all(|f| state.player.has_item(f)) {
        return say(&["The lens reveals hints, but you need all fragments."]);
    }
    if let Err(refusal) = grant(state, None, "treasure_core") {
        return Some(vec![refusal]);
    }
    state.flags.set(Flag::CoordsDecoded);
    say(&["The lens reveals the Treasure Coordinate Core within the fragments."])
}

fn stone_key(state: &mut GameState, _ctx: &UseContext) -> Option<Vec<String>> {
    if !at(state, "ruins_gate") {
        return None;
    }
    state.flags.set(Flag::RuinUnlocked);
    say(&["The stone key turns. The gate groans open."])
}

fn storm_lantern(state: &mut GameState, _ctx: &UseContext) -> Option<Vec<String>> {
    if !at(state, "ruins_hall") {
        return None;
    }
    state.flags.set(Flag::InnerUnlocked);
    say(&["The lantern's glow wakes hidden runes. The inner door opens."])
}

fn gadget_gull(state: &mut GameState, _ctx: &UseContext) -> Option<Vec<String>> {
    state.morale += 1;
    say(&["The gull chirps. Your crew laughs. Morale rises."])
}

fn rum(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    if aimed_at(state, ctx, "broker") {
        return trade(
            state,
            ctx,
            "stone_key",
            ("broker", "The broker traded a stone key."),
            "The broker trades the rum for a stone key.",
        );
    }
    state.morale += 1;
    say(&["You take a sip. Courage bubbles up."])
}

fn medkit(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    if aimed_at(state, ctx, "dockhand") {
        return trade(
            state,
            ctx,
            "sun_coin",
            ("dockhand", "The dockhand repaid your kindness."),
            "You patch the dockhand. They slip you a sun coin.",
        );
    }
    if ctx.target.is_some() {
        return None;
    }
    heal(state, ctx, MEDKIT_HEAL, "You patch yourself up.")
}

fn balm(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    if ctx.target.is_some() {
        return None;
    }
    heal(state, ctx, BALM_HEAL, "The balm cools your bruises.")
}

fn sun_coin(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    let offered = ctx.target.as_deref() == Some("shrine")
        || aimed_at(state, ctx, "priest")
        || at(state, "sky_shrine");
    if !offered {
        return None;
    }
    state.player.remove_item(&ctx.item);
    state.morale += 2;
    state.flags.set(Flag::ShrineBlessing);
    let mut lines = vec!["The shrine hums. The storm calms for now.".to_string()];
    lines.extend(state.complete_quest("priest", "The shrine accepted your offering."));
    Some(lines)
}

fn bribe_pouch(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    if !aimed_at(state, ctx, "officer") {
        return None;
    }
    state.player.remove_item(&ctx.item);
    state.flags.set(Flag::Bribed);
    say(&["The officer pockets the coins and steps aside."])
}

fn spice(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    if !aimed_at(state, ctx, "gadgeteer") {
        return None;
    }
    trade(
        state,
        ctx,
        "cipher_lens",
        ("gadgeteer", "Spice traded for a cipher lens."),
        "The gadgeteer trades a cipher lens for the spice.",
    )
}

fn repair_kit(state: &mut GameState, ctx: &UseContext) -> Option<Vec<String>> {
    if !aimed_at(state, ctx, "shipwright") {
        return None;
    }
    if let Err(refusal) = grant(state, Some(&ctx.item), "dock_pass") {
        return Some(vec![refusal]);
    }
    state.morale += 1;
    let mut lines = vec!["The shipwright hands you a dock pass.".to_string()];
    lines.extend(state.complete_quest("shipwright", "The shipwright granted you a dock pass."));
    Some(lines)
}

fn treasure_core(state: &mut GameState, _ctx: &UseContext) -> Option<Vec<String>> {
    if !at(state, "ship_deck") {
        return None;
    }
    state.flags.set(Flag::TreasureEscaped);
    let text = if state.player.active_fruit.is_some() {
        "You set the coordinates and cut the sails. The cursed power hums against the wind."
    } else if state.wanted >= NOTORIOUS_WANTED {
        "You set the coordinates and cut the sails. Bluecoat sails crowd the horizon."
    } else {
        "You set the coordinates and cut the sails. The Wild Current opens before you."
    };
    say(&[text])
}
