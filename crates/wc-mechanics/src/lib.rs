//! Game mechanics for Wild Current: random sources, skill checks, and the
//! combat resolver.

pub mod check;
pub mod combat;
pub mod dice;

pub use check::{CHECK_TARGET, CheckResult, Stat, skill_check};
pub use combat::{Combat, CombatEvent, CombatOutcome, EnemySnapshot, Fighter};
pub use dice::{FixedRoller, Roller};
