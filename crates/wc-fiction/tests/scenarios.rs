//! Integration tests: scenarios.
use wc_core::{Catalog, Direction, Flag, find_route};
use wc_fiction::{Ending, GameSession, SessionConfig};
use wc_mechanics::{Combat, CombatOutcome, FixedRoller};

fn session_with(roller: FixedRoller) -> GameSession {
    GameSession::with_roller(Catalog::wild_current(), SessionConfig::default(), Box::new(roller))
        .unwrap()
}

fn session() -> GameSession {
    session_with(FixedRoller::new())
}

#[test]
fn moving_north_describes_the_dock() {
    let mut game = session();
    let lines = game.process("go north");
    let text = lines.join("\n");

    assert!(text.starts_with("Harbor Dock - Harbor Isle"));
    assert!(text.contains("You see: Grappling Hook"));
    assert!(text.contains("People here: Dockhand"));
    assert!(text.contains("Exits: north, south, east, west"));
    assert_eq!(game.state().wanted, 0);
    assert!(game.state().discovered.contains("dock"));
}

#[test]
fn buying_at_a_markup_with_too_little_coin() {
    let mut game = session();
    let state = game.state_mut();
    state.player.location = "market_lane".to_string();
    state.wanted = 2;
    state.money = 20;

    assert_eq!(game.process("buy storm lantern"), vec!["You can't afford that."]);
    assert_eq!(game.state().money, 20);
    assert!(!game.state().player.has_item("storm_lantern"));

    game.state_mut().money = 22;
    assert_eq!(game.process("buy storm lantern"), vec!["You buy Storm Lantern for 22 coins."]);
    assert_eq!(game.state().money, 0);
}

#[test]
fn forced_hit_downs_a_one_hp_enemy() {
    let mut game = session_with(FixedRoller::new().with_chances([true]).with_values([3]));
    let state = game.state_mut();
    state.player.location = "ember_forge".to_string();
    let smuggler = state.catalog().enemy("smuggler").unwrap().clone();
    let mut combat = Combat::new(&smuggler);
    combat.enemy.hp = 1;
    state.combat = Some(combat);

    let lines = game.process("attack");
    assert_eq!(lines, vec!["You strike true for 5 damage. Spice Smuggler collapses."]);
    let state = game.state();
    assert!(!state.in_combat());
    assert_eq!(state.wanted, 1);
    assert!(state.rooms["ember_forge"].enemies.is_empty());
}

#[test]
fn resolved_combat_is_cleared_once() {
    let mut roller = FixedRoller::new().with_chances([true]).with_values([6]);
    let smuggler = Catalog::wild_current().enemy("smuggler").unwrap().clone();
    let mut combat = Combat::new(&smuggler);
    combat.enemy.hp = 2;
    let fighter = wc_mechanics::Fighter { grit: 2, power: None };

    let events = combat.exchange(&fighter, &mut roller);
    assert_eq!(events.len(), 1);
    assert_eq!(combat.outcome, CombatOutcome::EnemyDown);
    assert!(combat.exchange(&fighter, &mut roller).iter().all(|e| e.hp_loss() == 0 && e.wanted_gain() == 0));
}

#[test]
fn fled_enemy_stays_in_the_room() {
    // Miss, then the beast flees.
    let mut game = session_with(FixedRoller::new().with_chances([false, true]));
    game.state_mut().player.location = "reef_shallows".to_string();
    let lines = game.process("attack reef beast");
    assert_eq!(lines[0], "Combat begins with Reef Beast!");
    assert!(!game.state().in_combat());
    assert_eq!(game.state().rooms["reef_shallows"].enemies, vec!["reef_beast".to_string()]);
}

#[test]
fn dying_ends_the_game() {
    // Miss, no flee, hit for the maximum.
    let mut game = session_with(FixedRoller::new().with_chances([false, false, true]).with_values([5]));
    let state = game.state_mut();
    state.player.location = "reef_shallows".to_string();
    state.player.hp = 3;

    let lines = game.process("attack reef beast");
    assert_eq!(lines.last().map(String::as_str), Some(Ending::Defeated.text()));
    assert_eq!(game.ending(), Some(Ending::Defeated));
}

#[test]
fn fruit_in_cursed_water_drowns() {
    let mut game = session();
    let state = game.state_mut();
    state.player.location = "dock".to_string();
    state.player.add_item("spark_fruit");

    game.process("use spark fruit");
    assert_eq!(game.state().player.active_fruit.as_deref(), Some("spark_fruit"));

    let lines = game.process("west");
    assert_eq!(lines.last().map(String::as_str), Some(Ending::Drowned.text()));
    assert!(game.state().flags.has(Flag::Drowned));
    assert_eq!(game.state().player.location, "dock");
    assert_eq!(game.process("look"), vec!["The tale is over."]);
}

#[test]
fn bribing_opens_the_outpost() {
    let mut game = session();
    game.state_mut().player.location = "navy_gate".to_string();

    let lines = game.process("north");
    assert_eq!(lines, vec!["The Bluecoat officer blocks the way. A donation might help."]);

    game.process("bribe officer");
    assert!(game.state().flags.has(Flag::Bribed));
    assert_eq!(game.state().money, 55);

    let lines = game.process("north");
    assert!(lines[0].starts_with("Bluecoat Outpost - Navy Bastion"));
}

#[test]
fn key_and_lantern_open_the_ruins() {
    let mut game = session();
    let state = game.state_mut();
    state.player.location = "ruins_gate".to_string();
    state.player.add_item("stone_key");
    state.player.add_item("storm_lantern");

    assert_eq!(game.process("north"), vec!["The stone gate is locked."]);
    let lines = game.process("use stone key");
    assert_eq!(lines, vec!["The stone key turns. The gate groans open.", "Quest complete: Rum for Keys."]);

    assert!(game.process("north")[0].starts_with("Glyph Hall"));
    assert_eq!(game.process("north"), vec!["A sealed door bars the way. The sea must hear your call."]);
    game.process("use storm lantern");
    assert!(game.process("north")[0].starts_with("Glyph Core"));
}

#[test]
fn route_and_travel_between_charted_rooms() {
    let mut game = session();
    for step in ["north", "north", "east", "west", "south", "south"] {
        game.process(step);
    }
    assert_eq!(game.state().player.location, "ship_deck");

    assert_eq!(game.process("route to tavern"), vec!["Route to Tidal Tavern: north, north, east"]);
    let lines = game.process("travel tavern");
    assert_eq!(lines[0], "You pass through Harbor Dock.");
    assert_eq!(lines[1], "You pass through Town Square.");
    assert!(lines[2].starts_with("Tidal Tavern - Harbor Isle"));
    assert_eq!(game.state().player.location, "tavern");
}

#[test]
fn uncharted_places_cannot_be_routed() {
    let mut game = session();
    assert_eq!(game.process("route sky shrine"), vec!["You haven't charted that place yet."]);
    assert_eq!(game.process("travel atlantis"), vec!["No place by that name."]);
}

#[test]
fn pathfinder_edges() {
    let catalog = Catalog::wild_current();
    assert_eq!(find_route(&catalog, "dock", "dock").unwrap(), Vec::<Direction>::new());
    assert!(find_route(&catalog, "dock", "atlantis").is_err());
}

#[test]
fn full_treasure_run() {
    let mut game = session();
    let state = game.state_mut();
    state.player.location = "mist_library".to_string();
    for item in ["glyph_frag_1", "glyph_frag_2", "cipher_lens"] {
        state.player.add_item(item);
    }

    let lines = game.process("take glyph fragment c");
    assert!(lines.contains(&"Quest complete: Glyph Stone Hunt.".to_string()));

    let lines = game.process("use cipher lens");
    assert_eq!(lines, vec!["The lens reveals the Treasure Coordinate Core within the fragments."]);

    game.state_mut().player.location = "ship_deck".to_string();
    let lines = game.process("use treasure core");
    assert_eq!(lines.last().map(String::as_str), Some(Ending::CleanEscape.text()));
    assert!(game.ending().is_some_and(|e| e.is_victory()));
}

#[test]
fn capture_at_seven_wanted() {
    let mut game = session();
    game.state_mut().wanted = 6;
    game.state_mut().player.location = "dock".to_string();
    let lines = game.process("threaten dockhand");
    assert_eq!(game.state().wanted, 7);
    assert_eq!(lines.last().map(String::as_str), Some(Ending::Captured.text()));
}

#[test]
fn trade_ins_never_duplicate_items() {
    let mut game = session();
    let state = game.state_mut();
    state.player.location = "ruins_gate".to_string();
    assert_eq!(game.process("take sun coin"), vec!["You take the Sun Coin."]);

    let state = game.state_mut();
    state.player.location = "dock".to_string();
    state.player.add_item("medkit");
    assert_eq!(game.process("use medkit on dockhand"), vec!["You already carry the Sun Coin."]);

    let state = game.state_mut();
    state.player.location = "tavern".to_string();
    state.player.add_item("rum");
    game.process("use rum on broker");

    let state = game.state();
    for id in ["sun_coin", "stone_key"] {
        let in_rooms = state.rooms.values().flat_map(|r| &r.items).filter(|i| *i == id).count();
        let carried = state.player.inventory.iter().filter(|i| *i == id).count();
        assert_eq!((in_rooms, carried), (0, 1), "{id}");
    }
}
