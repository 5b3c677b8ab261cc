//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::catalog::{Catalog, CatalogBuilder, Category, EntityDef, Requirement};
use crate::facilities::Facilities;
use crate::id::{EntityId, Level};
use crate::requirements::LevelMap;
use crate::resources::Resources;
use crate::standard;

// ===========================================================================
// Facility snapshots
// ===========================================================================

/// Facility levels in formula order: lab, robotics, nanite, shipyard.
pub fn facilities(
    research_lab: Level,
    robotics_factory: Level,
    nanite_factory: Level,
    shipyard: Level,
) -> Facilities {
    Facilities {
        research_lab,
        robotics_factory,
        nanite_factory,
        shipyard,
    }
}

// ===========================================================================
// Account fixtures
// ===========================================================================

/// An account that owns nothing. Only requirement-free entries are
/// satisfied against it.
pub fn empty_account() -> LevelMap {
    LevelMap::new()
}

/// An account holding every entry of `catalog` at `level`.
pub fn uniform_account(catalog: &Catalog, level: Level) -> LevelMap {
    catalog.all().iter().map(|def| (def.id, level)).collect()
}

/// A mid-game account: mines and core facilities developed, the lower
/// research branch unlocked, no hyperspace yet.
pub fn developed_account() -> LevelMap {
    [
        (standard::METAL_MINE, 12),
        (standard::CRYSTAL_MINE, 10),
        (standard::DEUTERIUM_SYNTHESIZER, 8),
        (standard::SOLAR_PLANT, 12),
        (standard::ROBOTICS_FACTORY, 4),
        (standard::SHIPYARD, 6),
        (standard::RESEARCH_LAB, 7),
        (standard::ENERGY_TECHNOLOGY, 6),
        (standard::COMBUSTION_DRIVE, 5),
        (standard::IMPULSE_DRIVE, 4),
        (standard::COMPUTER_TECHNOLOGY, 5),
        (standard::ESPIONAGE_TECHNOLOGY, 4),
        (standard::WEAPONS_TECHNOLOGY, 4),
        (standard::SHIELDING_TECHNOLOGY, 3),
        (standard::ARMOUR_TECHNOLOGY, 4),
        (standard::LASER_TECHNOLOGY, 5),
        (standard::ION_TECHNOLOGY, 2),
    ]
    .into_iter()
    .collect()
}

// ===========================================================================
// Synthetic catalogs
// ===========================================================================

/// A two-entry catalog for tests that must not depend on the standard
/// table: a "probe" ship requiring "lab" level 2. The probe is registered
/// first, so building it also exercises forward requirement references.
pub fn tiny_catalog() -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder
        .register(EntityDef {
            id: EntityId(1),
            name: "probe".into(),
            category: Category::Ship,
            base_cost: Resources::new(400, 100, 0),
            growth_factor: 1.0,
            time_constant: 2500,
            requirements: vec![Requirement {
                entity: EntityId(2),
                level: 2,
            }],
        })
        .unwrap();
    builder
        .register(EntityDef {
            id: EntityId(2),
            name: "lab".into(),
            category: Category::Building,
            base_cost: Resources::new(200, 400, 200),
            growth_factor: 2.0,
            time_constant: 1000,
            requirements: Vec::new(),
        })
        .unwrap();
    builder.build().unwrap()
}

/// A single requirement-free building with the given growth factor, for
/// pinning arithmetic without the standard table.
pub fn lone_building(growth_factor: f64) -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder
        .register(EntityDef {
            id: EntityId(1),
            name: "extractor".into(),
            category: Category::Building,
            base_cost: Resources::new(60, 15, 0),
            growth_factor,
            time_constant: 2500,
            requirements: Vec::new(),
        })
        .unwrap();
    builder.build().unwrap()
}
