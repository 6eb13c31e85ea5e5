//! Tunable rule constants and the price formula.

/// Hit points a new player starts with (and their maximum).
pub const START_HP: i32 = 24;
/// Inventory capacity in slots.
pub const MAX_SLOTS: u32 = 12;
/// Starting value of Grit, Charm and Wits.
pub const START_STAT: i32 = 2;
/// Coins in a new player's purse.
pub const START_MONEY: u32 = 80;
/// First day on the clock.
pub const START_DAY: u32 = 1;
/// Hour of day a new game starts at.
pub const START_HOUR: u32 = 9;

/// Coins a bribe costs.
pub const BRIBE_COST: u32 = 25;
/// Wanted level at which a hostile-born NPC only snarls.
pub const HARSH_TALK_WANTED: u32 = 4;

/// Wanted level from which patrols may appear.
pub const PATROL_WANTED: u32 = 3;
/// Chance of a patrol on entering a quiet room.
pub const PATROL_CHANCE: f64 = 0.3;
/// Enemy template a patrol spawns.
pub const PATROL_ENEMY: &str = "navy_patrol";
/// Island patrols never reach.
pub const SAFE_ISLAND: &str = "ship";

/// Wanted level at which the outpost is sealed.
pub const OUTPOST_SEAL_WANTED: u32 = 5;
/// Wanted level at which the Navy closes in for good.
pub const CAPTURE_WANTED: u32 = 7;
/// Wanted level that makes an escape a notorious one.
pub const NOTORIOUS_WANTED: u32 = 4;

/// Price increase per wanted level.
pub const WANTED_MARKUP: f64 = 0.05;
/// Price reduction for good morale.
pub const MORALE_DISCOUNT: f64 = 0.10;
/// Morale needed for the discount.
pub const MORALE_DISCOUNT_AT: i32 = 3;

/// Morale gained from eating a cursed fruit.
pub const FRUIT_MORALE: i32 = 1;
/// Hit points a med kit restores.
pub const MEDKIT_HEAL: i32 = 6;
/// Hit points herbal balm restores.
pub const BALM_HEAL: i32 = 4;

/// Trade price for an item of `base` value, truncated to whole coins.
pub fn price(base: u32, wanted: u32, morale: i32) -> u32 {
    let mut modifier = 1.0 + f64::from(wanted) * WANTED_MARKUP;
    if morale >= MORALE_DISCOUNT_AT {
        modifier -= MORALE_DISCOUNT;
    }
    (f64::from(base) * modifier) as u32
}
