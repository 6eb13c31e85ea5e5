//! "Did you mean" hints for mistyped verbs.

use strsim::levenshtein;

use super::command::KNOWN_VERBS;

/// Largest edit distance still worth suggesting.
const MAX_DISTANCE: usize = 2;

/// The closest known verb to `verb`, if one is near enough.
pub fn suggest_verb(verb: &str) -> Option<&'static str> {
    KNOWN_VERBS
        .iter()
        .map(|known| (*known, levenshtein(verb, known)))
        .filter(|(_, distance)| *distance <= MAX_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(known, _)| known)
}
