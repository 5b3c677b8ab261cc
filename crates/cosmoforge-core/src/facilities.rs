use crate::id::Level;
use crate::requirements::LevelMap;
use serde::{Deserialize, Serialize};

/// Snapshot of the four facility levels that divide construction time.
/// Supplied fresh by the caller on every query (typically refreshed from a
/// poll of live account state); the engine never retains it across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Facilities {
    /// Divides research time.
    pub research_lab: Level,
    /// Divides building time.
    pub robotics_factory: Level,
    /// Halves building/ship/defense time once per level. Does not affect
    /// research.
    pub nanite_factory: Level,
    /// Divides ship and defense time.
    pub shipyard: Level,
}

impl Facilities {
    /// Extract the facility snapshot from an entity level map, reading the
    /// four facility buildings' entries (absent = level 0).
    pub fn from_levels(levels: &LevelMap) -> Self {
        Self {
            research_lab: levels.get(crate::standard::RESEARCH_LAB),
            robotics_factory: levels.get(crate::standard::ROBOTICS_FACTORY),
            nanite_factory: levels.get(crate::standard::NANITE_FACTORY),
            shipyard: levels.get(crate::standard::SHIPYARD),
        }
    }
}
