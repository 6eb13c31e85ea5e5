//! Core types for Wild Current: the world catalog, the direction and flag
//! vocabularies, and route search over the room graph.
//!
//! Nothing here changes during play. The simulation engine in
//! `wc-fiction` copies what it needs out of a [`Catalog`].

/// The catalog of static content and its validation.
pub mod catalog;
/// The built-in Wild Current content set.
pub mod content;
/// Compass directions and their abbreviations.
pub mod direction;
/// Rooms, items, NPCs, enemies, quests and islands.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The closed vocabulary of world-progress flags.
pub mod flag;
/// Shortest-route search between rooms.
pub mod route;

pub use catalog::Catalog;
pub use content::START_ROOM;
pub use direction::Direction;
pub use entity::{
    Disposition, Enemy, EnemyId, FruitPower, Island, IslandId, Item, ItemId, ItemKind, Npc, NpcId,
    Quest, QuestId, Room, RoomId, RoomTag,
};
pub use error::{CoreError, CoreResult};
pub use flag::{Flag, FlagSet};
pub use route::find_route;
