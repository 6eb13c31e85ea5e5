use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    if catalog.rooms.is_empty() {
        println!("  No rooms found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Island", "Exits"]);

    // Island order, then the island's own room order.
    let mut listed = 0;
    for island in catalog.islands.values() {
        for room in island.rooms.iter().filter_map(|id| catalog.room(id)) {
            let exits: Vec<String> = room
                .exits
                .iter()
                .map(|(dir, to)| format!("{} -> {to}", dir.name()))
                .collect();
            let exits = if exits.is_empty() {
                "—".to_string()
            } else {
                exits.join(", ")
            };
            table.add_row(vec![room.id.clone(), room.name.clone(), island.name.clone(), exits]);
            listed += 1;
        }
    }

    println!("{table}");
    println!();
    println!("  {listed} rooms");

    Ok(())
}
