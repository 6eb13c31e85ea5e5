use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    catalog.validate().map_err(|e| e.to_string())?;

    let title = if catalog.title.is_empty() {
        "untitled"
    } else {
        catalog.title.as_str()
    };
    println!("  All checks passed for '{title}'.");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Count"]);
    let counts = [
        ("Rooms", catalog.rooms.len()),
        ("Items", catalog.items.len()),
        ("NPCs", catalog.npcs.len()),
        ("Enemies", catalog.enemies.len()),
        ("Quests", catalog.quests.len()),
        ("Islands", catalog.islands.len()),
    ];
    for (kind, count) in counts {
        table.add_row(vec![kind.to_string(), count.to_string()]);
    }
    println!("{table}");
    println!("  Start room: {}", catalog.start_room);

    Ok(())
}
