//! Command parsing for player input.

use wc_core::Direction;

/// A parsed player command.
///
/// All argument text is lowercased. Commands missing a required argument
/// parse to [`Command::Prompt`] carrying the question to ask back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move along an exit.
    Move {
        /// The exit to take.
        direction: Direction,
    },
    /// Describe the current room.
    Look,
    /// Describe a carried item or something in the room.
    Examine {
        /// What to examine.
        target: String,
    },
    /// Pick up an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Put down an item.
    Drop {
        /// The item name.
        item: String,
    },
    /// List carried items.
    Inventory,
    /// Talk to an NPC.
    Talk {
        /// The NPC name.
        npc: String,
    },
    /// Pay an NPC off.
    Bribe {
        /// The NPC name.
        npc: String,
    },
    /// Lean on an NPC.
    Threaten {
        /// The NPC name.
        npc: String,
    },
    /// Use an item, optionally on a target.
    Use {
        /// The item name.
        item: String,
        /// Text after " on ", if any.
        target: Option<String>,
    },
    /// Start a fight, or keep one going.
    Attack {
        /// The enemy name. Optional once a fight is live.
        enemy: Option<String>,
    },
    /// Buy from the room's stock.
    Buy {
        /// The item name.
        item: String,
    },
    /// Sell to the room's stock.
    Sell {
        /// The item name.
        item: String,
    },
    /// Show HP, purse, wanted level and the rest.
    Status,
    /// List quests.
    Quests,
    /// Show the most recent log lines.
    Journal,
    /// Show the discovered map.
    Map,
    /// Plan a route to a discovered room.
    Route {
        /// Room name or id.
        place: String,
    },
    /// Walk the planned route to a discovered room.
    Travel {
        /// Room name or id.
        place: String,
    },
    /// Show help.
    Help,
    /// Save the game.
    Save,
    /// Load the saved game.
    Load,
    /// Quit the game.
    Quit,
    /// A verb was recognized but its argument is missing or unusable.
    Prompt(&'static str),
    /// Unknown verb.
    Unknown {
        /// The verb as typed, lowercased.
        verb: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "enter", "dock"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const EXAMINE_VERBS: &[&str] = &["examine", "x"];
const TAKE_VERBS: &[&str] = &["take", "get"];
const INVENTORY_VERBS: &[&str] = &["inventory", "i"];
const QUIT_VERBS: &[&str] = &["quit", "exit"];

/// Every verb the parser knows, for suggestions.
pub(crate) const KNOWN_VERBS: &[&str] = &[
    "go", "move", "enter", "dock", "look", "examine", "take", "get", "drop", "inventory", "talk",
    "bribe", "threaten", "use", "attack", "buy", "sell", "status", "quests", "journal", "map", "route",
    "travel", "help", "save", "load", "quit", "exit",
];

/// Parse a player input line. Blank input yields `None`.
pub fn parse_command(input: &str) -> Option<Command> {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let (&verb, rest) = words.split_first()?;

    // Bare direction
    if let Some(direction) = Direction::parse(verb) {
        return Some(Command::Move { direction });
    }

    if MOVE_VERBS.contains(&verb) {
        return Some(parse_move(rest));
    }
    if LOOK_VERBS.contains(&verb) {
        return Some(Command::Look);
    }
    if EXAMINE_VERBS.contains(&verb) {
        return Some(with_arg(rest, "Examine what?", |target| Command::Examine { target }));
    }
    if TAKE_VERBS.contains(&verb) {
        return Some(with_arg(rest, "Take what?", |item| Command::Take { item }));
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Some(Command::Inventory);
    }
    if QUIT_VERBS.contains(&verb) {
        return Some(Command::Quit);
    }

    let command = match verb {
        "drop" => with_arg(rest, "Drop what?", |item| Command::Drop { item }),
        "talk" => parse_talk(rest),
        "bribe" => with_arg(rest, "Bribe whom?", |npc| Command::Bribe { npc }),
        "threaten" => with_arg(rest, "Threaten whom?", |npc| Command::Threaten { npc }),
        "use" => parse_use(rest),
        "attack" => Command::Attack {
            enemy: (!rest.is_empty()).then(|| rest.join(" ")),
        },
        "buy" => with_arg(rest, "Buy what?", |item| Command::Buy { item }),
        "sell" => with_arg(rest, "Sell what?", |item| Command::Sell { item }),
        "status" => Command::Status,
        "quests" => Command::Quests,
        "journal" => Command::Journal,
        "map" => Command::Map,
        "route" => with_arg(strip_to(rest), "Route to where?", |place| Command::Route { place }),
        "travel" => with_arg(strip_to(rest), "Travel where?", |place| Command::Travel { place }),
        "help" => Command::Help,
        "save" => Command::Save,
        "load" => Command::Load,
        other => Command::Unknown {
            verb: other.to_string(),
        },
    };
    Some(command)
}

fn with_arg(rest: &[&str], prompt: &'static str, build: impl FnOnce(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::Prompt(prompt)
    } else {
        build(rest.join(" "))
    }
}

fn strip_to<'a, 'b>(rest: &'a [&'b str]) -> &'a [&'b str] {
    match rest.split_first() {
        Some((&"to", tail)) => tail,
        _ => rest,
    }
}

fn parse_move(rest: &[&str]) -> Command {
    let Some(word) = rest.first() else {
        return Command::Prompt("Go where?");
    };
    match Direction::parse(word) {
        Some(direction) => Command::Move { direction },
        None => Command::Prompt("That direction makes no sense."),
    }
}

fn parse_talk(rest: &[&str]) -> Command {
    // Skip "to" or "with" if present
    let remaining = match rest.split_first() {
        Some((&("to" | "with"), tail)) => tail,
        _ => rest,
    };
    with_arg(remaining, "Talk to whom?", |npc| Command::Talk { npc })
}

fn parse_use(rest: &[&str]) -> Command {
    // Split on the first standalone "on"
    let (item_words, target) = match rest.iter().position(|w| *w == "on") {
        Some(pos) => {
            let target = rest[pos + 1..].join(" ");
            (&rest[..pos], (!target.is_empty()).then_some(target))
        }
        None => (rest, None),
    };
    with_arg(item_words, "Use what?", |item| Command::Use { item, target })
}
