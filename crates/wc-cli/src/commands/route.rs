use std::path::Path;

use colored::Colorize;
use wc_core::{CoreError, find_route};

pub fn run(catalog: Option<&Path>, from: &str, to: &str) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let start = catalog
        .find_room(from)
        .ok_or_else(|| format!("unknown room: {from}"))?;
    let goal = catalog
        .find_room(to)
        .ok_or_else(|| format!("unknown room: {to}"))?;

    match find_route(&catalog, &start.id, &goal.id) {
        Ok(route) if route.is_empty() => {
            println!("  {} is where you already are.", start.name.bold());
        }
        Ok(route) => {
            let steps: Vec<&str> = route.iter().map(|d| d.name()).collect();
            println!("  {} -> {}", start.name.bold(), goal.name.bold());
            println!("  {}", steps.join(", "));
            println!("  {} moves", route.len());
        }
        Err(CoreError::NoPath { .. }) => {
            println!("  {}", "no route".yellow());
        }
        Err(e) => return Err(e.to_string()),
    }
    Ok(())
}
