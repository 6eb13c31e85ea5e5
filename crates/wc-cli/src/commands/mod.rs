pub mod check;
pub mod play;
pub mod rooms;
pub mod route;

use std::fs;
use std::path::Path;

use wc_core::Catalog;

/// Load a catalog from a JSON file, or the built-in content when no path
/// is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    let Some(path) = path else {
        return Ok(Catalog::wild_current());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read catalog {}: {e}", path.display()))?;
    let catalog = Catalog::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), rooms = catalog.rooms.len(), "catalog loaded");
    Ok(catalog)
}
