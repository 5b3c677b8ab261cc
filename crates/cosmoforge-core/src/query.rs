//! Aggregated upgrade evaluation.
//!
//! Combines the cost, time, and requirement modules into one report per
//! entry, computed against an account snapshot. All types are owned copies --
//! no references into catalog storage -- so reports can cross thread and
//! serialization boundaries freely.

use crate::catalog::{Catalog, Category};
use crate::cost;
use crate::error::CalcError;
use crate::facilities::Facilities;
use crate::id::{EntityId, Level, UniverseSpeed};
use crate::requirements::{self, LevelMap, Shortfall};
use crate::resources::Resources;
use crate::time;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Account snapshot
// ---------------------------------------------------------------------------

/// Everything the formulas need to know about one account: owned levels,
/// the four divisor facilities, and the universe speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpireSnapshot {
    /// Current level of every owned entry. Absent entries are level 0.
    pub levels: LevelMap,
    /// Facility levels feeding the time divisor.
    pub facilities: Facilities,
    /// Server speed multiplier, at least 1.
    pub universe_speed: UniverseSpeed,
}

impl EmpireSnapshot {
    /// An empty account in a universe running at `universe_speed`.
    pub fn new(universe_speed: UniverseSpeed) -> Self {
        Self {
            levels: LevelMap::new(),
            facilities: Facilities::default(),
            universe_speed,
        }
    }
}

// ---------------------------------------------------------------------------
// Upgrade report
// ---------------------------------------------------------------------------

/// The full picture for one prospective purchase: what the next step is,
/// what it costs, how long it takes, and which prerequisites still block it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeReport {
    /// The entry the report describes.
    pub entity: EntityId,
    /// The evaluated target level: current + 1 for buildings and research,
    /// always 1 for ships and defense (units repeat at flat price).
    pub level: Level,
    /// Price of the target level.
    pub cost: Resources,
    /// Construction time of the target level under the snapshot's
    /// facilities and universe speed.
    pub time: Duration,
    /// Whether every direct requirement is met.
    pub satisfied: bool,
    /// Direct requirements still unmet, in the entry's declared order.
    /// Empty exactly when `satisfied` is true.
    pub missing: Vec<Shortfall>,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate the next purchase of `entity` against `snapshot`.
pub fn evaluate_in(
    catalog: &Catalog,
    entity: EntityId,
    snapshot: &EmpireSnapshot,
) -> Result<UpgradeReport, CalcError> {
    let def = catalog.lookup(entity)?;
    let level = match def.category {
        Category::Ship | Category::Defense => 1,
        Category::Building | Category::Research => snapshot.levels.get(entity).saturating_add(1),
    };
    let cost = cost::cost_of(def, level)?;
    let time = time::construction_time_of(def, level, snapshot.universe_speed, &snapshot.facilities)?;
    let missing = requirements::unmet_requirements_in(catalog, entity, &snapshot.levels)?;
    Ok(UpgradeReport {
        entity,
        level,
        cost,
        time,
        satisfied: missing.is_empty(),
        missing,
    })
}

/// Evaluate a list of entries in order. Fails on the first unknown id.
pub fn evaluate_batch_in(
    catalog: &Catalog,
    entities: &[EntityId],
    snapshot: &EmpireSnapshot,
) -> Result<Vec<UpgradeReport>, CalcError> {
    entities
        .iter()
        .map(|&entity| evaluate_in(catalog, entity, snapshot))
        .collect()
}

/// [`evaluate_batch_in`] across a rayon thread pool. Report order still
/// matches input order.
#[cfg(feature = "parallel")]
pub fn evaluate_batch_parallel_in(
    catalog: &Catalog,
    entities: &[EntityId],
    snapshot: &EmpireSnapshot,
) -> Result<Vec<UpgradeReport>, CalcError> {
    entities
        .par_iter()
        .map(|&entity| evaluate_in(catalog, entity, snapshot))
        .collect()
}

/// [`evaluate_in`] against the standard catalog.
pub fn evaluate(entity: EntityId, snapshot: &EmpireSnapshot) -> Result<UpgradeReport, CalcError> {
    evaluate_in(Catalog::standard(), entity, snapshot)
}

/// [`evaluate_batch_in`] against the standard catalog.
pub fn evaluate_batch(
    entities: &[EntityId],
    snapshot: &EmpireSnapshot,
) -> Result<Vec<UpgradeReport>, CalcError> {
    evaluate_batch_in(Catalog::standard(), entities, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard;
    use crate::test_utils::{developed_account, facilities};

    fn developed_snapshot() -> EmpireSnapshot {
        EmpireSnapshot {
            levels: developed_account(),
            facilities: facilities(7, 4, 0, 6),
            universe_speed: 7,
        }
    }

    #[test]
    fn report_targets_the_next_level() {
        let snapshot = developed_snapshot();
        let report = evaluate(standard::METAL_MINE, &snapshot).unwrap();
        assert_eq!(report.level, 13); // developed account holds level 12
        assert_eq!(report.cost, crate::cost::cost(standard::METAL_MINE, 13).unwrap());
    }

    #[test]
    fn unowned_entries_start_at_level_one() {
        let snapshot = EmpireSnapshot::new(1);
        let report = evaluate(standard::METAL_MINE, &snapshot).unwrap();
        assert_eq!(report.level, 1);
        assert_eq!(report.cost, Resources::new(60, 15, 0));
        assert_eq!(report.time, Duration::from_secs(108));
    }

    #[test]
    fn units_always_evaluate_at_flat_price() {
        let mut snapshot = developed_snapshot();
        snapshot.levels.set(standard::LIGHT_FIGHTER, 250);

        let report = evaluate(standard::LIGHT_FIGHTER, &snapshot).unwrap();
        assert_eq!(report.level, 1);
        assert_eq!(report.cost, Resources::new(3000, 1000, 0));
    }

    #[test]
    fn satisfied_mirrors_missing() {
        let snapshot = developed_snapshot();

        // Impulse 4 and ion 2 sit exactly at the cruiser's gate.
        let report = evaluate(standard::CRUISER, &snapshot).unwrap();
        assert!(report.satisfied);
        assert!(report.missing.is_empty());

        // Bomber wants shipyard 8, impulse 6, plasma 5; the account has
        // shipyard 6, impulse 4, and no plasma at all.
        let report = evaluate(standard::BOMBER, &snapshot).unwrap();
        assert!(!report.satisfied);
        let ids: Vec<EntityId> = report.missing.iter().map(|s| s.entity).collect();
        assert_eq!(
            ids,
            vec![
                standard::SHIPYARD,
                standard::IMPULSE_DRIVE,
                standard::PLASMA_TECHNOLOGY,
            ]
        );
    }

    #[test]
    fn batch_preserves_input_order() {
        let snapshot = developed_snapshot();
        let wanted = [
            standard::CRUISER,
            standard::METAL_MINE,
            standard::ENERGY_TECHNOLOGY,
        ];
        let reports = evaluate_batch(&wanted, &snapshot).unwrap();
        let ids: Vec<EntityId> = reports.iter().map(|r| r.entity).collect();
        assert_eq!(ids, wanted);
    }

    #[test]
    fn batch_fails_on_unknown_ids() {
        let snapshot = developed_snapshot();
        let result = evaluate_batch(&[standard::METAL_MINE, EntityId(777)], &snapshot);
        assert_eq!(result, Err(CalcError::UnknownEntity { id: EntityId(777) }));
    }

    #[test]
    fn zero_speed_snapshot_is_rejected() {
        let snapshot = EmpireSnapshot::new(0);
        let result = evaluate(standard::METAL_MINE, &snapshot);
        assert_eq!(result, Err(CalcError::InvalidSpeed { speed: 0 }));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batch_matches_serial() {
        let snapshot = developed_snapshot();
        let all: Vec<EntityId> = Catalog::standard().all().iter().map(|d| d.id).collect();
        let serial = evaluate_batch(&all, &snapshot).unwrap();
        let parallel =
            evaluate_batch_parallel_in(Catalog::standard(), &all, &snapshot).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn snapshot_survives_json() {
        let snapshot = developed_snapshot();
        let text = serde_json::to_string(&snapshot).unwrap();
        let back: EmpireSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snapshot);
    }
}
