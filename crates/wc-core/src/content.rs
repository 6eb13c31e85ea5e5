//! The built-in Wild Current content set.

use crate::catalog::Catalog;
use crate::direction::Direction::{self, *};
use crate::entity::{Disposition, Enemy, FruitPower, Island, Item, ItemKind, Npc, Quest, Room, RoomTag};

/// Id of the room every new game starts in.
pub const START_ROOM: &str = "ship_deck";

impl Catalog {
    /// Build the built-in Wild Current world.
    pub fn wild_current() -> Self {
        let mut catalog = Catalog::new("Wild Current", START_ROOM);
        items().into_iter().for_each(|i| catalog.add_item(i));
        npcs().into_iter().for_each(|n| catalog.add_npc(n));
        enemies().into_iter().for_each(|e| catalog.add_enemy(e));
        rooms().into_iter().for_each(|r| catalog.add_room(r));
        quests().into_iter().for_each(|q| catalog.add_quest(q));
        islands().into_iter().for_each(|i| catalog.add_island(i));
        catalog
    }
}

#[rustfmt::skip]
fn items() -> Vec<Item> {
    use ItemKind::{Consumable, Contraband, Fruit, Lore, Tool, Trade, Weapon};
    vec![
        Item::new("rope", "Coil of Rope", "A trusty coil for daring entrances.", Tool, 1, 15),
        Item::new("flare", "Signal Flare", "A flare for emergencies or dramatic exits.", Tool, 1, 12),
        Item::new("nav_log", "Navigation Log", "A logbook full of winds, tides, and doodles.", ItemKind::Quest, 1, 35),
        Item::new("compass", "Brass Compass", "Points north and occasionally to snacks.", Tool, 1, 20),
        Item::new("grappling", "Grappling Hook", "Hooky. Grippy. Dramatic.", Tool, 1, 25),
        Item::new("rum", "Bottle of Rum", "Liquid courage, corked tight.", Consumable, 1, 10),
        Item::new("spice", "Island Spice", "A pouch of spice with a fizzing aroma.", Trade, 1, 22),
        Item::new("bribe", "Bribe Pouch", "Coins that clink with opportunity.", Trade, 1, 30).contraband(),
        Item::new("gadget_gull", "Wind-up Gull", "A mechanical gull that chirps on command.", Tool, 1, 28),
        Item::new("bounty_poster", "Bounty Poster", "Someone else is wanted. That's reassuring.", Lore, 1, 5),
        Item::new("navy_badge", "Bluecoat Badge", "A badge that screams 'confiscated'.", Contraband, 1, 40).contraband(),
        Item::new("cutlass", "Rusty Cutlass", "Seen more onions than battles.", Weapon, 2, 35),
        Item::new("flintlock", "Flintlock", "Old, loud, and still dangerous.", Weapon, 2, 60).contraband(),
        Item::new("chart", "Wild Current Chart", "A chart of the Wild Current routes.", ItemKind::Quest, 1, 40),
        Item::new("medkit", "Med Kit", "Bandages, salve, and a lollipop.", Consumable, 1, 18),
        Item::new("balm", "Herbal Balm", "Smells like a forest after rain.", Consumable, 1, 15),
        Item::new("sun_coin", "Sun Coin", "An ancient coin etched with a rising tide.", ItemKind::Quest, 1, 50),
        Item::new("stone_key", "Stone Key", "Heavy, carved with sea runes.", ItemKind::Quest, 2, 45),
        Item::new("cipher_lens", "Cipher Lens", "Reveals hidden script on Glyph Stones.", Tool, 1, 55),
        Item::new("glyph_frag_1", "Glyph Fragment A", "A fragment humming with old power.", ItemKind::Quest, 1, 0),
        Item::new("glyph_frag_2", "Glyph Fragment B", "A shard of carved stone.", ItemKind::Quest, 1, 0),
        Item::new("glyph_frag_3", "Glyph Fragment C", "The last fragment, warm to the touch.", ItemKind::Quest, 1, 0),
        Item::new("treasure_core", "Treasure Coordinate Core", "The legendary coordinates glow within.", ItemKind::Quest, 1, 0),
        Item::new("map_scrap", "Map Scrap", "A torn scrap pointing inland.", Lore, 1, 8),
        Item::new("storm_lantern", "Storm Lantern", "Refuses to go out, even in heavy rain.", Tool, 1, 20),
        Item::new("smoke_bomb", "Smoke Bomb", "Great for exits. Also for excuses.", Tool, 1, 25),
        Item::new("sea_boots", "Sea Boots", "Boots with weighted soles and great grip.", Tool, 1, 18),
        Item::new("pearl", "Moon Pearl", "A luminous pearl with a cold glow.", Trade, 1, 45),
        Item::new("dock_pass", "Dock Pass", "Lets you slip past port checks.", ItemKind::Quest, 1, 0),
        Item::new("repair_kit", "Repair Kit", "Patchwork supplies for ship or gear.", Tool, 1, 20),
        Item::new("gale_fruit", "Gale Gale Fruit", "Swirls like a storm cloud.", Fruit, 1, 0)
            .fruit(FruitPower::Gale),
        Item::new("stone_fruit", "Stonewave Fruit", "Rumbles softly, like distant thunder.", Fruit, 1, 0)
            .fruit(FruitPower::Stone),
        Item::new("spark_fruit", "Sparkstep Fruit", "A crackling fruit that smells of rain.", Fruit, 1, 0)
            .fruit(FruitPower::Spark),
    ]
}

#[rustfmt::skip]
fn npcs() -> Vec<Npc> {
    use Disposition::*;
    vec![
        Npc::new("cook", "Ship Cook", "A cook with a ladle like a sword.", "Keep your hands busy and your belly fuller.", Friendly),
        Npc::new("dockhand", "Dockhand", "A dockhand with a bandaged arm.", "Got any supplies? This arm's itching.", Neutral),
        Npc::new("officer", "Bluecoat Officer", "A stern officer guarding the gate.", "Outpost access is restricted.", Hostile),
        Npc::new("bartender", "Tavern Bartender", "Polishing a mug with style.", "Rum loosens tongues and contracts.", Neutral)
            .with_shop(&["rum", "smoke_bomb"]),
        Npc::new("broker", "Shady Broker", "A broker with a grin that costs extra.", "Secrets are cheaper than anchors.", Neutral)
            .with_shop(&["stone_key", "cipher_lens"]),
        Npc::new("gadgeteer", "Gadgeteer", "Covered in soot and glitter.", "Spice makes my lenses sing.", Neutral)
            .with_shop(&["gadget_gull", "storm_lantern"]),
        Npc::new("herbalist", "Herbalist", "Sorting leaves with a smile.", "The jungle speaks if you listen.", Friendly)
            .with_shop(&["balm", "medkit"]),
        Npc::new("librarian", "Mist Librarian", "A librarian with fog in her hair.", "Knowledge is safer when shared.", Friendly),
        Npc::new("shipwright", "Shipwright", "Wearing a belt of tools and sea salt.", "Fix the hull, fix the fate.", Neutral)
            .with_shop(&["repair_kit", "sea_boots"]),
        Npc::new("rival", "Rival Pirate", "A flashy pirate with a louder hat.", "The Wild Current has room for one legend.", Hostile),
        Npc::new("priest", "Shrine Keeper", "Keeper of the storm shrine.", "Offerings calm the sky.", Neutral),
    ]
}

#[rustfmt::skip]
fn enemies() -> Vec<Enemy> {
    vec![
        Enemy::new("reef_beast", "Reef Beast", "A coral-covered brute with too many teeth.", 14, (2, 5), 0, 0.1),
        Enemy::new("navy_patrol", "Bluecoat Patrol", "Two Bluecoats with nets and attitude.", 12, (2, 4), 2, 0.2),
        Enemy::new("smuggler", "Spice Smuggler", "A smuggler guarding hidden crates.", 10, (1, 4), 1, 0.3),
        Enemy::new("rival_pirate", "Rival Pirate", "A rival captain with a sharp grin.", 16, (3, 6), 2, 0.05).boss(),
        Enemy::new("navy_captain", "Bluecoat Captain", "A Navy captain with a polished saber.", 18, (3, 6), 3, 0.1).boss(),
    ]
}

fn room(id: &str, name: &str, island: &str, description: &str, exits: &[(Direction, &str)]) -> Room {
    exits
        .iter()
        .fold(Room::new(id, name, island, description), |room, (dir, to)| room.exit(*dir, *to))
}

#[rustfmt::skip]
fn rooms() -> Vec<Room> {
    use RoomTag::{Danger, Dock, Shop};
    vec![
        room("ship_deck", "Rookie Deck", "ship",
            "Your scrappy ship bobs in the harbor. A note says: 'Try LOOK, INVENTORY, then GO NORTH.'",
            &[(North, "dock"), (South, "ship_cabin")])
            .items(&["rope", "flare"]).npcs(&["cook"]).tags(&[Dock]).at(2, 2),
        room("ship_cabin", "Captain's Cabin", "ship", "A cramped cabin with maps and ambition.",
            &[(North, "ship_deck")])
            .items(&["nav_log", "compass"]).at(2, 3),
        room("dock", "Harbor Dock", "harbor_isle", "Workers shout over gulls. The island town sprawls north.",
            &[(South, "ship_deck"), (North, "town_square"), (East, "market_lane"), (West, "reef_shallows")])
            .items(&["grappling"]).npcs(&["dockhand"]).tags(&[Dock]).at(2, 1),
        room("town_square", "Town Square", "harbor_isle", "A plaza of stalls and gossip. A Bluecoat watches the gate.",
            &[(South, "dock"), (East, "tavern"), (West, "market_lane"), (North, "navy_gate"), (Northeast, "shipyard")])
            .items(&["bounty_poster"]).npcs(&["officer"]).at(2, 0),
        room("tavern", "Tidal Tavern", "harbor_isle", "Sticky tables and loud rumors.",
            &[(West, "town_square")])
            .items(&["rum"]).npcs(&["bartender", "broker"]).tags(&[Shop]).at(3, 0),
        room("market_lane", "Market Lane", "harbor_isle", "Lanterns sway over traders hawking gizmos.",
            &[(East, "town_square"), (South, "dock"), (West, "reef_shallows"), (North, "jungle_path")])
            .items(&["spice", "bribe", "gadget_gull", "storm_lantern"]).npcs(&["gadgeteer"]).tags(&[Shop]).at(1, 0),
        room("navy_gate", "Bluecoat Gate", "harbor_isle", "A guarded gate leading to the Navy outpost.",
            &[(South, "town_square"), (North, "navy_outpost")])
            .npcs(&["officer"]).at(2, -1),
        room("navy_outpost", "Bluecoat Outpost", "navy_bastion", "A stiff post of polished boots and judgment.",
            &[(South, "navy_gate")])
            .items(&["navy_badge", "flintlock"]).enemies(&["navy_captain"]).tags(&[Danger]).at(2, -2),
        room("shipyard", "Shipyard", "harbor_isle", "Hull frames and resin scents fill the air.",
            &[(Southwest, "town_square")])
            .items(&["repair_kit", "sea_boots"]).npcs(&["shipwright"]).tags(&[Shop]).at(3, -1),
        room("reef_shallows", "Reef Shallows", "harbor_isle", "Reefs glitter under the waves. The water looks deceptively calm.",
            &[(East, "dock"), (North, "mist_pier")])
            .items(&["gale_fruit"]).enemies(&["reef_beast"]).tags(&[Danger]).at(0, 1),
        room("jungle_path", "Jungle Path", "ember_isle", "Vines twist like ropes. The ruins lie somewhere north.",
            &[(South, "market_lane"), (North, "jungle_grove"), (East, "ember_beach")])
            .items(&["map_scrap"]).at(1, -1),
        room("jungle_grove", "Jungle Grove", "ember_isle", "A grove with glowing fungus and a gentle breeze.",
            &[(South, "jungle_path"), (North, "ruins_gate"), (East, "ember_village")])
            .items(&["medkit", "balm"]).npcs(&["herbalist"]).at(1, -2),
        room("ember_beach", "Ember Beach", "ember_isle", "Black sand sparkles with heat.",
            &[(West, "jungle_path"), (North, "ember_forge")])
            .items(&["stone_fruit"]).tags(&[Danger]).at(2, -1),
        room("ember_village", "Ember Village", "ember_isle", "A village of smokehouses and laughter.",
            &[(West, "jungle_grove"), (East, "ember_forge")])
            .items(&["pearl"]).npcs(&["priest"]).tags(&[Shop]).at(2, -2),
        room("ember_forge", "Ember Forge", "ember_isle", "A forge that never cools, guarded by a smuggler.",
            &[(South, "ember_beach"), (West, "ember_village"), (North, "ruins_gate")])
            .items(&["glyph_frag_1", "cutlass"]).enemies(&["smuggler"]).tags(&[RoomTag::Quest, Danger]).at(2, -3),
        room("ruins_gate", "Ruins Gate", "ember_isle", "A stone gate carved with a riddle: 'Speak the sea and the stone will hear.'",
            &[(South, "jungle_grove"), (North, "ruins_hall")])
            .items(&["sun_coin"]).tags(&[RoomTag::Quest]).at(1, -3),
        room("ruins_hall", "Glyph Hall", "ember_isle", "Dusty pillars and faded carvings.",
            &[(South, "ruins_gate"), (North, "ruins_core")])
            .items(&["glyph_frag_2"]).tags(&[RoomTag::Quest]).at(1, -4),
        room("ruins_core", "Glyph Core", "ember_isle", "A sealed chamber humming with the ocean's memory.",
            &[(South, "ruins_hall")])
            .enemies(&["rival_pirate"]).tags(&[RoomTag::Quest, Danger]).at(1, -5),
        room("mist_pier", "Mist Pier", "mist_isle", "Fog rolls off the pier like breath.",
            &[(South, "reef_shallows"), (North, "mist_library"), (East, "mist_market"), (West, "sky_lift")])
            .items(&["spark_fruit"]).tags(&[Dock]).at(-1, 1),
        room("mist_library", "Mist Library", "mist_isle", "Shelves of scrolls whisper in the fog.",
            &[(South, "mist_pier")])
            .items(&["glyph_frag_3"]).npcs(&["librarian"]).tags(&[RoomTag::Quest]).at(-1, 0),
        room("mist_market", "Mist Market", "mist_isle", "Stalls glow with bioluminescent wares.",
            &[(West, "mist_pier")])
            .items(&["smoke_bomb"]).tags(&[Shop]).at(0, 1),
        room("sky_lift", "Sky Lift", "skyline_atoll", "A lift platform rising toward the clouds.",
            &[(South, "mist_pier"), (North, "sky_shrine")])
            .items(&["chart"]).tags(&[RoomTag::Quest]).at(-2, 0),
        room("sky_shrine", "Sky Shrine", "skyline_atoll", "A shrine in the clouds, lightning crackling nearby.",
            &[(South, "sky_lift")])
            .items(&["stone_key"]).npcs(&["priest"]).tags(&[RoomTag::Quest]).at(-2, -1),
    ]
}

#[rustfmt::skip]
fn quests() -> Vec<Quest> {
    vec![
        Quest::new("main", "Glyph Stone Hunt", "Collect three Glyph Stone fragments and decipher their coordinates."),
        Quest::new("dockhand", "Bandaged Dockhand", "Help the dockhand and earn their trust."),
        Quest::new("gadgeteer", "Spice for Gadgets", "Trade spice for a cipher lens."),
        Quest::new("broker", "Rum for Keys", "Trade rum for a stone key."),
        Quest::new("priest", "Shrine Offering", "Bring a sun coin to the shrine keeper."),
        Quest::new("shipwright", "Hull Repairs", "Deliver a repair kit for a dock pass."),
        Quest::new("rival", "Rival Showdown", "Defeat the rival pirate in the ruins."),
    ]
}

#[rustfmt::skip]
fn islands() -> Vec<Island> {
    vec![
        Island::new("ship", "Ship", "Your vessel and home.", &["ship_deck", "ship_cabin"]),
        Island::new("harbor_isle", "Harbor Isle", "A bustling island of trade and gossip.", &[
            "dock", "town_square", "tavern", "market_lane", "navy_gate", "shipyard", "reef_shallows",
        ]),
        Island::new("ember_isle", "Ember Isle", "A volcanic island with ancient ruins.", &[
            "jungle_path", "jungle_grove", "ember_beach", "ember_village", "ember_forge",
            "ruins_gate", "ruins_hall", "ruins_core",
        ]),
        Island::new("mist_isle", "Mist Isle", "An island cloaked in gentle fog.", &["mist_pier", "mist_library", "mist_market"]),
        Island::new("skyline_atoll", "Skyline Atoll", "A cloud-touched atoll of storms.", &["sky_lift", "sky_shrine"]),
        Island::new("navy_bastion", "Navy Bastion", "The Bluecoat Navy stronghold.", &["navy_outpost"]),
    ]
}
