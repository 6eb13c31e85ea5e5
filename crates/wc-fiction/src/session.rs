//! Game session management.
//!
//! `GameSession` owns the state, the random source and the use registry.
//! It turns one line of input into narration: parse, dispatch (through the
//! combat gate when an encounter is live), then quest and ending checks.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use wc_core::{Catalog, Flag};
use wc_mechanics::Roller;

use crate::config::SessionConfig;
use crate::describe::help_text;
use crate::effect::UseRegistry;
use crate::error::{FictionError, FictionResult};
use crate::journal::LogKind;
use crate::parser::{Command, parse_command, suggest_verb};
use crate::quest::{Ending, check_ending, evaluate_quests};
use crate::save::{load_from, restore, save_to, snapshot};
use crate::state::{GameState, INTRO};

/// Answer to any input after the game ended.
pub const TALE_OVER: &str = "The tale is over.";
const LOCKED_IN_COMBAT: &str = "You're locked in combat!";
const FAREWELL: &str = "You lower the sails and end your tale... for now.";

/// An interactive Wild Current session.
pub struct GameSession {
    state: GameState,
    config: SessionConfig,
    roller: Box<dyn Roller>,
    uses: UseRegistry,
    ending: Option<Ending>,
    over: bool,
}

impl GameSession {
    /// Start a new game on `catalog`, rolling with a generator seeded from
    /// the config.
    pub fn new(catalog: Catalog, config: SessionConfig) -> FictionResult<Self> {
        let roller = StdRng::seed_from_u64(config.seed);
        Self::with_roller(catalog, config, Box::new(roller))
    }

    /// Start a new game with an explicit random source.
    pub fn with_roller(
        catalog: Catalog,
        config: SessionConfig,
        roller: Box<dyn Roller>,
    ) -> FictionResult<Self> {
        catalog.validate()?;
        let state = GameState::new(Arc::new(catalog), &config.start_room)?;
        let uses = UseRegistry::standard();
        tracing::debug!(
            seed = config.seed,
            start = %config.start_room,
            use_handlers = uses.len(),
            "session started"
        );
        Ok(Self {
            state,
            config,
            roller,
            uses,
            ending: None,
            over: false,
        })
    }

    /// The live game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the game state, for tooling and scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// How the game ended, if it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether no further turns will be played.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Opening narration: the intro and the first room.
    pub fn intro(&self) -> Vec<String> {
        let mut lines: Vec<String> = INTRO.iter().map(|l| l.to_string()).collect();
        lines.push(self.state.look());
        lines
    }

    /// Process one line of input and return the narration lines.
    pub fn process(&mut self, input: &str) -> Vec<String> {
        if self.over {
            return vec![TALE_OVER.to_string()];
        }
        let Some(command) = parse_command(input) else {
            return Vec::new();
        };

        let combat_turn = self.state.in_combat();
        let kind = log_kind(&command, combat_turn);
        tracing::debug!(?command, combat_turn, "turn");

        let mut lines = if combat_turn {
            self.do_combat_turn(command)
        } else {
            self.execute(command)
        };
        self.record(kind, &lines);

        let mut events = Vec::new();
        if !combat_turn {
            events.extend(evaluate_quests(&mut self.state));
        }
        if let Some(ending) = check_ending(&self.state) {
            tracing::info!(%ending, "game over");
            self.ending = Some(ending);
            self.over = true;
            events.push(ending.text().to_string());
        }
        if self.state.flags.has(Flag::Quit) {
            self.over = true;
        }
        self.record(LogKind::Event, &events);

        lines.extend(events);
        lines
    }

    fn execute(&mut self, command: Command) -> Vec<String> {
        let state = &mut self.state;
        let roller = self.roller.as_mut();
        match command {
            Command::Move { direction } => state.go(direction, roller),
            Command::Look => vec![state.look()],
            Command::Examine { target } => vec![state.examine(&target)],
            Command::Take { item } => vec![state.take(&item)],
            Command::Drop { item } => vec![state.drop_item(&item)],
            Command::Inventory => vec![state.inventory_text()],
            Command::Talk { npc } => vec![state.talk(&npc)],
            Command::Bribe { npc } => vec![state.bribe(&npc)],
            Command::Threaten { npc } => vec![state.threaten(&npc, roller)],
            Command::Use { item, target } => self.uses.apply(state, &item, target.as_deref()),
            Command::Attack { enemy: None } => vec!["Attack whom?".to_string()],
            Command::Attack { enemy: Some(name) } => self.do_attack(&name),
            Command::Buy { item } => vec![state.buy(&item)],
            Command::Sell { item } => vec![state.sell(&item)],
            Command::Status => vec![state.status_text()],
            Command::Quests => vec![state.quests_text()],
            Command::Journal => vec![state.journal_text()],
            Command::Map => vec![state.map_text()],
            Command::Route { place } => vec![state.route_to(&place)],
            Command::Travel { place } => state.travel(&place, roller),
            Command::Help => vec![help_text()],
            Command::Save => vec![self.do_save()],
            Command::Load => self.do_load(),
            Command::Quit => {
                state.flags.set(Flag::Quit);
                vec![FAREWELL.to_string()]
            }
            Command::Prompt(prompt) => vec![prompt.to_string()],
            Command::Unknown { verb } => do_unknown(&verb),
        }
    }

    fn do_combat_turn(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Attack { .. } => self.do_fight(),
            Command::Look
            | Command::Inventory
            | Command::Status
            | Command::Journal
            | Command::Help => {
                self.execute(command)
            }
            _ => vec![LOCKED_IN_COMBAT.to_string()],
        }
    }

    fn do_attack(&mut self, name: &str) -> Vec<String> {
        let mut lines = vec![self.state.start_combat(name)];
        if self.state.in_combat() {
            lines.extend(self.do_fight());
        }
        lines
    }

    /// One exchange of blows.
    fn do_fight(&mut self) -> Vec<String> {
        let Some(mut combat) = self.state.combat.take() else {
            return Vec::new();
        };
        let fighter = self.state.fighter();
        let events = combat.exchange(&fighter, self.roller.as_mut());

        let mut lines = Vec::with_capacity(events.len());
        for event in &events {
            self.state.apply_combat_event(event);
            lines.push(event.to_string());
        }
        if combat.resolved {
            lines.extend(self.state.resolve_combat(&combat));
        } else {
            self.state.combat = Some(combat);
        }
        lines
    }

    fn do_save(&self) -> String {
        let path = &self.config.save_path;
        match save_to(path, &snapshot(&self.state)) {
            Ok(()) => format!("Game saved to {}", path.display()),
            Err(FictionError::Json(err)) => {
                tracing::warn!(%err, "could not encode save");
                "Could not save game.".to_string()
            }
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "could not write save");
                "Could not write save file.".to_string()
            }
        }
    }

    fn do_load(&mut self) -> Vec<String> {
        let path = &self.config.save_path;
        let data = match load_from(path) {
            Ok(data) => data,
            Err(FictionError::Io(err)) => {
                tracing::warn!(%err, path = %path.display(), "could not read save");
                return vec!["Could not load save file.".to_string()];
            }
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "corrupt save");
                return vec!["Save file corrupted.".to_string()];
            }
        };
        match restore(self.state.catalog_handle(), data) {
            Ok(mut state) => {
                state.log = std::mem::take(&mut self.state.log);
                self.state = state;
                vec!["Game loaded.".to_string(), self.state.look()]
            }
            Err(err) => {
                tracing::warn!(%err, "save does not fit the catalog");
                vec!["Save file corrupted.".to_string()]
            }
        }
    }

    fn record(&mut self, kind: LogKind, lines: &[String]) {
        for line in lines {
            self.state.log.push(&self.state.clock, kind, line.clone());
        }
    }
}

fn do_unknown(verb: &str) -> Vec<String> {
    let mut lines = vec!["Unknown command. Type HELP for options.".to_string()];
    if let Some(guess) = suggest_verb(verb) {
        lines.push(format!("Did you mean {}?", guess.to_uppercase()));
    }
    lines
}

fn log_kind(command: &Command, combat_turn: bool) -> LogKind {
    match command {
        Command::Attack { .. } => LogKind::Combat,
        _ if combat_turn => LogKind::Combat,
        Command::Help | Command::Journal | Command::Prompt(_) | Command::Unknown { .. } => {
            LogKind::Hint
        }
        Command::Save | Command::Load | Command::Quit => LogKind::System,
        _ => LogKind::Story,
    }
}
