/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building, validating, or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A room id that the catalog does not define.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// An id referenced from another definition does not resolve.
    #[error("invalid reference: {kind} \"{id}\" referenced from {from}")]
    InvalidReference {
        /// What kind of definition was expected (room, item, npc, ...).
        kind: &'static str,
        /// The unresolved id.
        id: String,
        /// The definition holding the reference.
        from: String,
    },

    /// No sequence of exits leads from one room to the other.
    #[error("no path found from {from} to {to}")]
    NoPath {
        /// Starting room id.
        from: String,
        /// Target room id.
        to: String,
    },

    /// A catalog invariant does not hold.
    #[error("validation error: {0}")]
    Validation(String),

    /// Catalog JSON could not be decoded.
    #[error("catalog decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
