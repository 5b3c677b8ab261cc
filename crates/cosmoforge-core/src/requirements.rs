//! Requirement resolution: which entities an empire may build next.
//!
//! The resolver reports only an entity's *direct* declared requirements, in
//! the order the catalog declares them. It never expands transitively; a
//! caller that wants the full unlock path recurses on each shortfall itself
//! (see the examples crate), which keeps hidden cycles impossible here and
//! the cost of every call O(direct requirements).

use crate::catalog::Catalog;
use crate::error::CalcError;
use crate::id::{EntityId, Level};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-owned map of current entity levels. Absent entries are level 0
/// (not yet built/researched). The engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMap(HashMap<EntityId, Level>);

impl LevelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of `entity`; 0 when absent.
    pub fn get(&self, entity: EntityId) -> Level {
        self.0.get(&entity).copied().unwrap_or(0)
    }

    pub fn set(&mut self, entity: EntityId, level: Level) {
        self.0.insert(entity, level);
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, Level)> {
        self.0.iter().map(|(&id, &level)| (id, level))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(EntityId, Level)> for LevelMap {
    fn from_iter<I: IntoIterator<Item = (EntityId, Level)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One unmet requirement of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub entity: EntityId,
    pub required: Level,
    pub current: Level,
}

/// Whether all of `entity`'s direct requirements are met by `levels`.
pub fn is_satisfied_in(
    catalog: &Catalog,
    entity: EntityId,
    levels: &LevelMap,
) -> Result<bool, CalcError> {
    let def = catalog.lookup(entity)?;
    Ok(def
        .requirements
        .iter()
        .all(|req| levels.get(req.entity) >= req.level))
}

/// The unmet requirements of `entity`, in declared order. Empty exactly when
/// [`is_satisfied_in`] returns true.
pub fn unmet_requirements_in(
    catalog: &Catalog,
    entity: EntityId,
    levels: &LevelMap,
) -> Result<Vec<Shortfall>, CalcError> {
    let def = catalog.lookup(entity)?;
    Ok(def
        .requirements
        .iter()
        .filter_map(|req| {
            let current = levels.get(req.entity);
            (current < req.level).then_some(Shortfall {
                entity: req.entity,
                required: req.level,
                current,
            })
        })
        .collect())
}

/// [`is_satisfied_in`] against the standard catalog.
pub fn is_satisfied(entity: EntityId, levels: &LevelMap) -> Result<bool, CalcError> {
    is_satisfied_in(Catalog::standard(), entity, levels)
}

/// [`unmet_requirements_in`] against the standard catalog.
pub fn unmet_requirements(entity: EntityId, levels: &LevelMap) -> Result<Vec<Shortfall>, CalcError> {
    unmet_requirements_in(Catalog::standard(), entity, levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard;
    use crate::test_utils;
    // is_satisfied/unmet_requirements without a catalog argument run against
    // the standard catalog.

    // -----------------------------------------------------------------------
    // LevelMap
    // -----------------------------------------------------------------------

    #[test]
    fn level_map_absent_is_zero() {
        let levels = LevelMap::new();
        assert_eq!(levels.get(standard::SHIPYARD), 0);
    }

    #[test]
    fn level_map_set_then_get() {
        let mut levels = LevelMap::new();
        levels.set(standard::SHIPYARD, 4);
        assert_eq!(levels.get(standard::SHIPYARD), 4);
        assert_eq!(levels.len(), 1);
    }

    #[test]
    fn level_map_from_iterator() {
        let levels: LevelMap = [(standard::SHIPYARD, 4), (standard::RESEARCH_LAB, 3)]
            .into_iter()
            .collect();
        assert_eq!(levels.get(standard::SHIPYARD), 4);
        assert_eq!(levels.get(standard::RESEARCH_LAB), 3);
    }

    // -----------------------------------------------------------------------
    // Satisfaction
    // -----------------------------------------------------------------------

    #[test]
    fn no_requirements_always_satisfied() {
        let levels = LevelMap::new();
        assert!(is_satisfied(standard::METAL_MINE, &levels).unwrap());
        assert!(
            unmet_requirements(standard::METAL_MINE, &levels)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn unmet_at_level_zero() {
        // Shipyard requires robotics factory 2.
        let levels = LevelMap::new();
        assert!(!is_satisfied(standard::SHIPYARD, &levels).unwrap());

        let missing = unmet_requirements(standard::SHIPYARD, &levels).unwrap();
        assert_eq!(
            missing,
            vec![Shortfall {
                entity: standard::ROBOTICS_FACTORY,
                required: 2,
                current: 0,
            }]
        );
    }

    #[test]
    fn met_exactly_at_threshold() {
        let levels: LevelMap = [(standard::ROBOTICS_FACTORY, 2)].into_iter().collect();
        assert!(is_satisfied(standard::SHIPYARD, &levels).unwrap());
    }

    #[test]
    fn one_below_threshold_is_unmet() {
        let levels: LevelMap = [(standard::ROBOTICS_FACTORY, 1)].into_iter().collect();
        assert!(!is_satisfied(standard::SHIPYARD, &levels).unwrap());

        let missing = unmet_requirements(standard::SHIPYARD, &levels).unwrap();
        assert_eq!(missing[0].current, 1);
        assert_eq!(missing[0].required, 2);
    }

    #[test]
    fn shortfalls_keep_declared_order() {
        // Cruiser declares shipyard 5, impulse drive 4, ion technology 2 in
        // that order; with nothing built, all three come back in order.
        let levels = LevelMap::new();
        let missing = unmet_requirements(standard::CRUISER, &levels).unwrap();
        let ids: Vec<_> = missing.iter().map(|s| s.entity).collect();
        assert_eq!(
            ids,
            vec![
                standard::SHIPYARD,
                standard::IMPULSE_DRIVE,
                standard::ION_TECHNOLOGY,
            ]
        );
    }

    #[test]
    fn partially_met_reports_only_shortfalls() {
        let levels: LevelMap = [
            (standard::SHIPYARD, 5),
            (standard::IMPULSE_DRIVE, 4),
            (standard::ION_TECHNOLOGY, 1),
        ]
        .into_iter()
        .collect();

        let missing = unmet_requirements(standard::CRUISER, &levels).unwrap();
        assert_eq!(
            missing,
            vec![Shortfall {
                entity: standard::ION_TECHNOLOGY,
                required: 2,
                current: 1,
            }]
        );
        assert!(!is_satisfied(standard::CRUISER, &levels).unwrap());
    }

    #[test]
    fn overshooting_levels_still_satisfy() {
        let levels: LevelMap = [(standard::ROBOTICS_FACTORY, 10)].into_iter().collect();
        assert!(is_satisfied(standard::SHIPYARD, &levels).unwrap());
    }

    #[test]
    fn empty_shortfalls_iff_satisfied() {
        // Spot-check the equivalence on a handful of entities and level maps.
        let maps = [
            LevelMap::new(),
            [(standard::ROBOTICS_FACTORY, 2)].into_iter().collect(),
            [(standard::SHIPYARD, 12), (standard::RESEARCH_LAB, 12)]
                .into_iter()
                .collect(),
        ];
        for levels in &maps {
            for def in Catalog::standard().all() {
                let satisfied = is_satisfied(def.id, levels).unwrap();
                let missing = unmet_requirements(def.id, levels).unwrap();
                assert_eq!(satisfied, missing.is_empty(), "entity {:?}", def.id);
            }
        }
    }

    #[test]
    fn unknown_entity_is_rejected() {
        let levels = LevelMap::new();
        assert!(matches!(
            is_satisfied(EntityId(999), &levels),
            Err(CalcError::UnknownEntity { .. })
        ));
        assert!(matches!(
            unmet_requirements(EntityId(999), &levels),
            Err(CalcError::UnknownEntity { .. })
        ));
    }

    #[test]
    fn direct_requirements_only_no_transitive_expansion() {
        // Nanite factory requires robotics 10 and computer tech 10; computer
        // tech itself requires a research lab, but that indirect dependency
        // must not appear in the nanite factory's shortfalls.
        let levels = LevelMap::new();
        let missing = unmet_requirements(standard::NANITE_FACTORY, &levels).unwrap();
        let ids: Vec<_> = missing.iter().map(|s| s.entity).collect();
        assert_eq!(
            ids,
            vec![standard::ROBOTICS_FACTORY, standard::COMPUTER_TECHNOLOGY]
        );
        assert!(!ids.contains(&standard::RESEARCH_LAB));
    }

    #[test]
    fn synthetic_catalog_resolution() {
        // Same contract holds for a non-standard catalog.
        let catalog = test_utils::tiny_catalog();
        let probe = catalog.id_by_name("probe").unwrap();
        let lab = catalog.id_by_name("lab").unwrap();

        let levels = LevelMap::new();
        assert!(!is_satisfied_in(&catalog, probe, &levels).unwrap());

        let levels: LevelMap = [(lab, 2)].into_iter().collect();
        assert!(is_satisfied_in(&catalog, probe, &levels).unwrap());
    }
}
