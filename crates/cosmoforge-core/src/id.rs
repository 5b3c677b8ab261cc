use serde::{Deserialize, Serialize};

/// Identifies an entity (building, research, ship, or defense unit) in the
/// catalog. Values are the reference server's published numeric ids, so they
/// are stable across processes and catalog rebuilds. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Progression counter for an entity. Level 0 means "not yet built"; cost and
/// time queries are defined for target levels >= 1.
pub type Level = u32;

/// Server-wide integer multiplier that uniformly compresses construction
/// time. Always >= 1 on real servers; 0 is rejected as invalid input.
pub type UniverseSpeed = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_equality() {
        let a = EntityId(1);
        let b = EntityId(1);
        let c = EntityId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn entity_id_copy() {
        let a = EntityId(113);
        let b = a; // Copy
        assert_eq!(a, b);
    }

    #[test]
    fn entity_ids_are_hashable() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(EntityId(1), "metal_mine");
        map.insert(EntityId(31), "research_lab");
        assert_eq!(map[&EntityId(1)], "metal_mine");
    }

    #[test]
    fn entity_id_ordering_follows_numeric_value() {
        assert!(EntityId(1) < EntityId(106));
        assert!(EntityId(202) < EntityId(401));
    }

    #[test]
    fn entity_id_serde_round_trip() {
        let id = EntityId(215);
        let json = serde_json::to_string(&id).unwrap();
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
