//! Route planning over the room graph.
//!
//! Routes follow exits only. Whether a gate lets the player through is the
//! game state's business, not the planner's.

use std::collections::{BTreeMap, VecDeque};

use crate::catalog::Catalog;
use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};

/// Breadth-first shortest route over the room graph.
///
/// Returns the direction labels to follow from `from` to reach `to`. Exits
/// are expanded in compass order, so among equally short routes the one
/// returned is always the same. Gates are not considered; this is the
/// geography only.
pub fn find_route(catalog: &Catalog, from: &str, to: &str) -> CoreResult<Vec<Direction>> {
    catalog.require_room(from)?;
    catalog.require_room(to)?;

    if from == to {
        return Ok(Vec::new());
    }

    // room -> (previous room, direction taken from it)
    let mut visited: BTreeMap<&str, Option<(&str, Direction)>> = BTreeMap::new();
    let mut queue = VecDeque::new();

    visited.insert(from, None);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let Some(room) = catalog.room(current) else {
            continue;
        };
        for (direction, next) in &room.exits {
            let next = next.as_str();
            if visited.contains_key(next) {
                continue;
            }
            visited.insert(next, Some((current, *direction)));
            if next == to {
                return Ok(reconstruct(&visited, to));
            }
            queue.push_back(next);
        }
    }

    Err(CoreError::NoPath {
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn reconstruct(visited: &BTreeMap<&str, Option<(&str, Direction)>>, to: &str) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut node = to;
    while let Some(Some((prev, direction))) = visited.get(node) {
        path.push(*direction);
        node = *prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction::*;

    /// Room ids reached by following `route` from `from`, excluding the start.
    ///
    /// Stops early if a step names an exit the room does not have.
    fn walk<'a>(catalog: &'a Catalog, from: &str, route: &[Direction]) -> Vec<&'a str> {
        let mut rooms = Vec::with_capacity(route.len());
        let mut current = catalog.room(from);
        for direction in route {
            let Some(next) = current.and_then(|room| room.exits.get(direction)) else {
                break;
            };
            rooms.push(next.as_str());
            current = catalog.room(next);
        }
        rooms
    }

    #[test]
    fn same_room_is_empty_route() {
        let catalog = Catalog::wild_current();
        assert!(find_route(&catalog, "dock", "dock").unwrap().is_empty());
    }

    #[test]
    fn deck_to_tavern() {
        let catalog = Catalog::wild_current();
        let route = find_route(&catalog, "ship_deck", "tavern").unwrap();
        assert_eq!(route, vec![North, North, East]);
        assert_eq!(walk(&catalog, "ship_deck", &route), vec!["dock", "town_square", "tavern"]);
    }

    #[test]
    fn routes_are_shortest() {
        let catalog = Catalog::wild_current();
        // dock -> market_lane directly east, never via the square
        assert_eq!(find_route(&catalog, "dock", "market_lane").unwrap(), vec![East]);
        let route = find_route(&catalog, "ship_cabin", "mist_library").unwrap();
        assert_eq!(route, vec![North, North, West, North, North]);
    }

    #[test]
    fn ties_resolve_in_compass_order() {
        let catalog = Catalog::wild_current();
        // west via the grove and east via the forge are both two steps
        let route = find_route(&catalog, "ember_village", "ruins_gate").unwrap();
        assert_eq!(route, vec![East, North]);
    }

    #[test]
    fn unreachable_is_no_path() {
        let mut catalog = Catalog::wild_current();
        // cut the only way back from the shrine
        if let Some(shrine) = catalog.rooms.get_mut("sky_shrine") {
            shrine.exits.clear();
        }
        let err = find_route(&catalog, "sky_shrine", "dock").unwrap_err();
        assert!(matches!(err, CoreError::NoPath { .. }));
        assert_eq!(err.to_string(), "no path found from sky_shrine to dock");
    }

    #[test]
    fn unknown_room_is_reported() {
        let catalog = Catalog::wild_current();
        assert!(matches!(
            find_route(&catalog, "dock", "atlantis"),
            Err(CoreError::UnknownRoom(id)) if id == "atlantis"
        ));
    }

    #[test]
    fn every_room_reachable_from_start() {
        let catalog = Catalog::wild_current();
        for id in catalog.rooms.keys() {
            let route = find_route(&catalog, "ship_deck", id).unwrap();
            let reached = walk(&catalog, "ship_deck", &route);
            assert_eq!(reached.last().copied().unwrap_or("ship_deck"), id.as_str());
        }
    }
}
