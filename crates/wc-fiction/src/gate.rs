//! Entry gates: the ordered checks a move must pass before the player
//! steps into a room.

use wc_core::{Flag, FruitPower};

use crate::condition::Condition;
use crate::rules::OUTPOST_SEAL_WANTED;
use crate::state::GameState;

/// What a gate does to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The move goes ahead.
    Pass,
    /// The move is refused with this narration.
    Block(&'static str),
    /// The move is refused and the flag is raised, ending the game.
    Fatal {
        /// Flag raised by the attempt.
        flag: Flag,
        /// Narration for the attempt.
        text: &'static str,
    },
}

/// One named gate on a destination room.
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    /// Short name for diagnostics.
    pub name: &'static str,
    /// Destination room id.
    pub room: &'static str,
    /// The gate closes when this holds.
    pub closed_when: Condition,
    /// Verdict when closed.
    pub verdict: Verdict,
}

/// Gates in evaluation order. The first closed gate decides.
pub const GATES: &[Gate] = &[
    Gate {
        name: "outpost_bribe",
        room: "navy_outpost",
        closed_when: Condition::Not(&Condition::Flag(Flag::Bribed)),
        verdict: Verdict::Block("The Bluecoat officer blocks the way. A donation might help."),
    },
    Gate {
        name: "ruin_gate",
        room: "ruins_hall",
        closed_when: Condition::Not(&Condition::Flag(Flag::RuinUnlocked)),
        verdict: Verdict::Block("The stone gate is locked."),
    },
    Gate {
        name: "inner_door",
        room: "ruins_core",
        closed_when: Condition::Not(&Condition::Flag(Flag::InnerUnlocked)),
        verdict: Verdict::Block("A sealed door bars the way. The sea must hear your call."),
    },
    Gate {
        name: "cursed_water",
        room: "reef_shallows",
        closed_when: Condition::AnyFruit,
        verdict: Verdict::Fatal {
            flag: Flag::Drowned,
            text: "The cursed power drags you under the waves. The sea refuses you.",
        },
    },
    Gate {
        name: "stone_weight",
        room: "sky_shrine",
        closed_when: Condition::Power(FruitPower::Stone),
        verdict: Verdict::Block("The stone curse makes the storm lift impossible. You're too heavy."),
    },
    Gate {
        name: "storm_route",
        room: "sky_lift",
        closed_when: Condition::Not(&Condition::Carrying("storm_lantern")),
        verdict: Verdict::Block("Fog swallows the lift platform. You'd need a light that refuses the storm."),
    },
    Gate {
        name: "outpost_seal",
        room: "navy_outpost",
        closed_when: Condition::WantedAtLeast(OUTPOST_SEAL_WANTED),
        verdict: Verdict::Block("Bluecoat Navy seals the outpost. You're turned away."),
    },
];

/// Run the gate table for a move into `dest`.
pub fn check(state: &GameState, dest: &str) -> Verdict {
    for gate in GATES.iter().filter(|g| g.room == dest) {
        if gate.closed_when.evaluate(state) {
            tracing::debug!(gate = gate.name, room = dest, "gate closed");
            return gate.verdict;
        }
    }
    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rooms_pass() {
        let state = GameState::fresh();
        assert_eq!(check(&state, "dock"), Verdict::Pass);
        assert_eq!(check(&state, "reef_shallows"), Verdict::Pass);
    }

    #[test]
    fn outpost_needs_bribe_then_low_wanted() {
        let mut state = GameState::fresh();
        assert!(matches!(check(&state, "navy_outpost"), Verdict::Block(t) if t.contains("donation")));

        state.flags.set(Flag::Bribed);
        assert_eq!(check(&state, "navy_outpost"), Verdict::Pass);

        state.wanted = 5;
        assert!(matches!(check(&state, "navy_outpost"), Verdict::Block(t) if t.contains("seals")));
    }

    #[test]
    fn bribe_gate_is_checked_before_the_seal() {
        let mut state = GameState::fresh();
        state.wanted = 6;
        assert!(matches!(check(&state, "navy_outpost"), Verdict::Block(t) if t.contains("donation")));
    }

    #[test]
    fn ruins_unlock_in_sequence() {
        let mut state = GameState::fresh();
        assert_eq!(check(&state, "ruins_hall"), Verdict::Block("The stone gate is locked."));
        state.flags.set(Flag::RuinUnlocked);
        assert_eq!(check(&state, "ruins_hall"), Verdict::Pass);
        assert!(matches!(check(&state, "ruins_core"), Verdict::Block(_)));
        state.flags.set(Flag::InnerUnlocked);
        assert_eq!(check(&state, "ruins_core"), Verdict::Pass);
    }

    #[test]
    fn any_fruit_drowns_at_the_reef() {
        let mut state = GameState::fresh();
        state.player.active_fruit = Some("spark_fruit".to_string());
        assert!(matches!(
            check(&state, "reef_shallows"),
            Verdict::Fatal {
                flag: Flag::Drowned,
                ..
            }
        ));
    }

    #[test]
    fn stone_fruit_is_too_heavy_for_the_shrine() {
        let mut state = GameState::fresh();
        state.player.active_fruit = Some("gale_fruit".to_string());
        assert_eq!(check(&state, "sky_shrine"), Verdict::Pass);
        state.player.active_fruit = Some("stone_fruit".to_string());
        assert!(matches!(check(&state, "sky_shrine"), Verdict::Block(t) if t.contains("too heavy")));
    }

    #[test]
    fn lift_needs_the_lantern() {
        let mut state = GameState::fresh();
        assert!(matches!(check(&state, "sky_lift"), Verdict::Block(_)));
        state.player.add_item("storm_lantern");
        assert_eq!(check(&state, "sky_lift"), Verdict::Pass);
    }
}
