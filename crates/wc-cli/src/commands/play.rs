use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use wc_fiction::{GameSession, SessionConfig};

pub fn run(catalog: Option<&Path>, seed: u64, save: PathBuf, start: Option<String>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let start = start.unwrap_or_else(|| catalog.start_room.clone());
    let config = SessionConfig::default()
        .with_seed(seed)
        .with_save_path(save)
        .with_start_room(start);

    let mut session =
        GameSession::new(catalog, config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Wild Current", "Setting sail:".bold());
    println!("  Seed: {seed} | Type 'help' for commands, 'quit' to exit.\n");
    for line in session.intro() {
        println!("{line}");
    }
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_over() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let output = session.process(&line);
        if output.is_empty() {
            continue;
        }

        let ending = session.ending();
        let last = output.len() - 1;
        for (i, text) in output.iter().enumerate() {
            match ending {
                Some(end) if i == last && end.is_victory() => println!("{}", text.green().bold()),
                Some(_) if i == last => println!("{}", text.red().bold()),
                _ => println!("{text}"),
            }
        }
        println!();
    }

    if let Some(ending) = session.ending() {
        println!("  {} {ending}", "The End:".bold());
    }
    Ok(())
}
