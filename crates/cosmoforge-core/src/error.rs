use crate::id::{EntityId, Level, UniverseSpeed};

/// Precondition violations surfaced by the calculators. All are detected
/// before any arithmetic runs; nothing is clamped or defaulted, and there is
/// no partial output to roll back -- a query either fully succeeds or fails
/// atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Cost and time are defined for target levels >= 1.
    #[error("invalid target level {level}: levels start at 1")]
    InvalidLevel { level: Level },

    /// Universe speed must be a positive multiplier.
    #[error("invalid universe speed {speed}: must be >= 1")]
    InvalidSpeed { speed: UniverseSpeed },

    /// The queried id is not registered in the catalog.
    #[error("unknown entity id {}", .id.0)]
    UnknownEntity { id: EntityId },
}
