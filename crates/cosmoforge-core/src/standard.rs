//! The reference server's standard entity table.
//!
//! Base costs, growth factors, and requirement chains mirror the server's
//! published values, keyed by its numeric id scheme (buildings 1-44,
//! research 106-199, ships 202-215, defense 401-503). The table is
//! hand-verified against recorded server samples; the integration tests pin
//! several of them. Change a value here only with a recorded sample proving
//! the server changed first.

use crate::catalog::{Catalog, CatalogBuilder, CatalogError, Category, EntityDef, Requirement};
use crate::id::{EntityId, Level};
use crate::resources::Resources;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Entity ids (the server's published numbering)
// ---------------------------------------------------------------------------

pub const METAL_MINE: EntityId = EntityId(1);
pub const CRYSTAL_MINE: EntityId = EntityId(2);
pub const DEUTERIUM_SYNTHESIZER: EntityId = EntityId(3);
pub const SOLAR_PLANT: EntityId = EntityId(4);
pub const FUSION_REACTOR: EntityId = EntityId(12);
pub const ROBOTICS_FACTORY: EntityId = EntityId(14);
pub const NANITE_FACTORY: EntityId = EntityId(15);
pub const SHIPYARD: EntityId = EntityId(21);
pub const METAL_STORAGE: EntityId = EntityId(22);
pub const CRYSTAL_STORAGE: EntityId = EntityId(23);
pub const DEUTERIUM_TANK: EntityId = EntityId(24);
pub const RESEARCH_LAB: EntityId = EntityId(31);
pub const TERRAFORMER: EntityId = EntityId(33);
pub const ALLIANCE_DEPOT: EntityId = EntityId(34);
pub const SPACE_DOCK: EntityId = EntityId(36);
pub const LUNAR_BASE: EntityId = EntityId(41);
pub const SENSOR_PHALANX: EntityId = EntityId(42);
pub const JUMP_GATE: EntityId = EntityId(43);
pub const MISSILE_SILO: EntityId = EntityId(44);

pub const ESPIONAGE_TECHNOLOGY: EntityId = EntityId(106);
pub const COMPUTER_TECHNOLOGY: EntityId = EntityId(108);
pub const WEAPONS_TECHNOLOGY: EntityId = EntityId(109);
pub const SHIELDING_TECHNOLOGY: EntityId = EntityId(110);
pub const ARMOUR_TECHNOLOGY: EntityId = EntityId(111);
pub const ENERGY_TECHNOLOGY: EntityId = EntityId(113);
pub const HYPERSPACE_TECHNOLOGY: EntityId = EntityId(114);
pub const COMBUSTION_DRIVE: EntityId = EntityId(115);
pub const IMPULSE_DRIVE: EntityId = EntityId(117);
pub const HYPERSPACE_DRIVE: EntityId = EntityId(118);
pub const LASER_TECHNOLOGY: EntityId = EntityId(120);
pub const ION_TECHNOLOGY: EntityId = EntityId(121);
pub const PLASMA_TECHNOLOGY: EntityId = EntityId(122);
pub const INTERGALACTIC_RESEARCH_NETWORK: EntityId = EntityId(123);
pub const ASTROPHYSICS: EntityId = EntityId(124);
pub const GRAVITON_TECHNOLOGY: EntityId = EntityId(199);

pub const SMALL_CARGO: EntityId = EntityId(202);
pub const LARGE_CARGO: EntityId = EntityId(203);
pub const LIGHT_FIGHTER: EntityId = EntityId(204);
pub const HEAVY_FIGHTER: EntityId = EntityId(205);
pub const CRUISER: EntityId = EntityId(206);
pub const BATTLESHIP: EntityId = EntityId(207);
pub const COLONY_SHIP: EntityId = EntityId(208);
pub const RECYCLER: EntityId = EntityId(209);
pub const ESPIONAGE_PROBE: EntityId = EntityId(210);
pub const BOMBER: EntityId = EntityId(211);
pub const SOLAR_SATELLITE: EntityId = EntityId(212);
pub const DESTROYER: EntityId = EntityId(213);
pub const DEATHSTAR: EntityId = EntityId(214);
pub const BATTLECRUISER: EntityId = EntityId(215);

pub const ROCKET_LAUNCHER: EntityId = EntityId(401);
pub const LIGHT_LASER: EntityId = EntityId(402);
pub const HEAVY_LASER: EntityId = EntityId(403);
pub const GAUSS_CANNON: EntityId = EntityId(404);
pub const ION_CANNON: EntityId = EntityId(405);
pub const PLASMA_TURRET: EntityId = EntityId(406);
pub const SMALL_SHIELD_DOME: EntityId = EntityId(407);
pub const LARGE_SHIELD_DOME: EntityId = EntityId(408);
pub const ANTI_BALLISTIC_MISSILES: EntityId = EntityId(502);
pub const INTERPLANETARY_MISSILES: EntityId = EntityId(503);

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

fn entry(
    id: EntityId,
    name: &str,
    category: Category,
    base_cost: Resources,
    growth_factor: f64,
    requirements: &[(EntityId, Level)],
) -> EntityDef {
    EntityDef {
        id,
        name: name.to_string(),
        category,
        base_cost,
        growth_factor,
        time_constant: category.default_time_constant(),
        requirements: requirements
            .iter()
            .map(|&(entity, level)| Requirement { entity, level })
            .collect(),
    }
}

/// Build a fresh copy of the standard catalog. Most callers want the shared
/// [`Catalog::standard`] instance instead; this exists for tests and for
/// tools that mutate a copy of the table before freezing their own.
#[rustfmt::skip]
pub fn build_standard() -> Result<Catalog, CatalogError> {
    use Category::{Building, Defense, Research, Ship};

    let mut b = CatalogBuilder::new();

    // Buildings. Requirement references to research resolve at build().
    b.register(entry(METAL_MINE, "metal_mine", Building, Resources::new(60, 15, 0), 1.5, &[]))?;
    b.register(entry(CRYSTAL_MINE, "crystal_mine", Building, Resources::new(48, 24, 0), 1.6, &[]))?;
    b.register(entry(DEUTERIUM_SYNTHESIZER, "deuterium_synthesizer", Building, Resources::new(225, 75, 0), 1.5, &[]))?;
    b.register(entry(SOLAR_PLANT, "solar_plant", Building, Resources::new(75, 30, 0), 1.5, &[]))?;
    b.register(entry(FUSION_REACTOR, "fusion_reactor", Building, Resources::new(900, 360, 180), 1.8, &[
        (DEUTERIUM_SYNTHESIZER, 5),
        (ENERGY_TECHNOLOGY, 3),
    ]))?;
    b.register(entry(ROBOTICS_FACTORY, "robotics_factory", Building, Resources::new(400, 120, 200), 2.0, &[]))?;
    b.register(entry(NANITE_FACTORY, "nanite_factory", Building, Resources::new(1_000_000, 500_000, 100_000), 2.0, &[
        (ROBOTICS_FACTORY, 10),
        (COMPUTER_TECHNOLOGY, 10),
    ]))?;
    b.register(entry(SHIPYARD, "shipyard", Building, Resources::new(400, 200, 100), 2.0, &[
        (ROBOTICS_FACTORY, 2),
    ]))?;
    b.register(entry(METAL_STORAGE, "metal_storage", Building, Resources::new(1000, 0, 0), 2.0, &[]))?;
    b.register(entry(CRYSTAL_STORAGE, "crystal_storage", Building, Resources::new(1000, 500, 0), 2.0, &[]))?;
    b.register(entry(DEUTERIUM_TANK, "deuterium_tank", Building, Resources::new(1000, 1000, 0), 2.0, &[]))?;
    b.register(entry(RESEARCH_LAB, "research_lab", Building, Resources::new(200, 400, 200), 2.0, &[]))?;
    b.register(entry(TERRAFORMER, "terraformer", Building, Resources::new(0, 50_000, 100_000).with_energy(1000), 2.0, &[
        (NANITE_FACTORY, 1),
        (ENERGY_TECHNOLOGY, 12),
    ]))?;
    b.register(entry(ALLIANCE_DEPOT, "alliance_depot", Building, Resources::new(20_000, 40_000, 0), 2.0, &[]))?;
    b.register(entry(SPACE_DOCK, "space_dock", Building, Resources::new(200, 0, 50).with_energy(50), 5.0, &[
        (SHIPYARD, 2),
    ]))?;
    b.register(entry(LUNAR_BASE, "lunar_base", Building, Resources::new(20_000, 40_000, 20_000), 2.0, &[]))?;
    b.register(entry(SENSOR_PHALANX, "sensor_phalanx", Building, Resources::new(20_000, 40_000, 20_000), 2.0, &[
        (LUNAR_BASE, 1),
    ]))?;
    b.register(entry(JUMP_GATE, "jump_gate", Building, Resources::new(2_000_000, 4_000_000, 2_000_000), 2.0, &[
        (LUNAR_BASE, 1),
        (HYPERSPACE_TECHNOLOGY, 7),
    ]))?;
    b.register(entry(MISSILE_SILO, "missile_silo", Building, Resources::new(20_000, 20_000, 1000), 2.0, &[
        (SHIPYARD, 1),
    ]))?;

    // Research.
    b.register(entry(ESPIONAGE_TECHNOLOGY, "espionage_technology", Research, Resources::new(200, 1000, 200), 2.0, &[
        (RESEARCH_LAB, 3),
    ]))?;
    b.register(entry(COMPUTER_TECHNOLOGY, "computer_technology", Research, Resources::new(0, 400, 600), 2.0, &[
        (RESEARCH_LAB, 1),
    ]))?;
    b.register(entry(WEAPONS_TECHNOLOGY, "weapons_technology", Research, Resources::new(800, 200, 0), 2.0, &[
        (RESEARCH_LAB, 4),
    ]))?;
    b.register(entry(SHIELDING_TECHNOLOGY, "shielding_technology", Research, Resources::new(200, 600, 0), 2.0, &[
        (RESEARCH_LAB, 6),
        (ENERGY_TECHNOLOGY, 3),
    ]))?;
    b.register(entry(ARMOUR_TECHNOLOGY, "armour_technology", Research, Resources::new(1000, 0, 0), 2.0, &[
        (RESEARCH_LAB, 2),
    ]))?;
    b.register(entry(ENERGY_TECHNOLOGY, "energy_technology", Research, Resources::new(0, 800, 400), 2.0, &[
        (RESEARCH_LAB, 1),
    ]))?;
    b.register(entry(HYPERSPACE_TECHNOLOGY, "hyperspace_technology", Research, Resources::new(0, 4000, 2000), 2.0, &[
        (RESEARCH_LAB, 7),
        (ENERGY_TECHNOLOGY, 5),
        (SHIELDING_TECHNOLOGY, 5),
    ]))?;
    b.register(entry(COMBUSTION_DRIVE, "combustion_drive", Research, Resources::new(400, 0, 600), 2.0, &[
        (RESEARCH_LAB, 1),
        (ENERGY_TECHNOLOGY, 1),
    ]))?;
    b.register(entry(IMPULSE_DRIVE, "impulse_drive", Research, Resources::new(2000, 4000, 600), 2.0, &[
        (RESEARCH_LAB, 2),
        (ENERGY_TECHNOLOGY, 1),
    ]))?;
    b.register(entry(HYPERSPACE_DRIVE, "hyperspace_drive", Research, Resources::new(10_000, 20_000, 6000), 2.0, &[
        (RESEARCH_LAB, 7),
        (HYPERSPACE_TECHNOLOGY, 3),
    ]))?;
    b.register(entry(LASER_TECHNOLOGY, "laser_technology", Research, Resources::new(200, 100, 0), 2.0, &[
        (RESEARCH_LAB, 1),
        (ENERGY_TECHNOLOGY, 2),
    ]))?;
    b.register(entry(ION_TECHNOLOGY, "ion_technology", Research, Resources::new(1000, 300, 100), 2.0, &[
        (RESEARCH_LAB, 4),
        (ENERGY_TECHNOLOGY, 4),
        (LASER_TECHNOLOGY, 5),
    ]))?;
    b.register(entry(PLASMA_TECHNOLOGY, "plasma_technology", Research, Resources::new(2000, 4000, 1000), 2.0, &[
        (RESEARCH_LAB, 4),
        (ENERGY_TECHNOLOGY, 8),
        (LASER_TECHNOLOGY, 10),
        (ION_TECHNOLOGY, 5),
    ]))?;
    b.register(entry(INTERGALACTIC_RESEARCH_NETWORK, "intergalactic_research_network", Research, Resources::new(240_000, 400_000, 160_000), 2.0, &[
        (RESEARCH_LAB, 10),
        (COMPUTER_TECHNOLOGY, 8),
        (HYPERSPACE_TECHNOLOGY, 8),
    ]))?;
    b.register(entry(ASTROPHYSICS, "astrophysics", Research, Resources::new(4000, 8000, 4000), 1.75, &[
        (ESPIONAGE_TECHNOLOGY, 4),
        (IMPULSE_DRIVE, 3),
    ]))?;
    b.register(entry(GRAVITON_TECHNOLOGY, "graviton_technology", Research, Resources::ZERO.with_energy(300_000), 3.0, &[
        (RESEARCH_LAB, 12),
    ]))?;

    // Ships. Unit prices, so growth factor 1.
    b.register(entry(SMALL_CARGO, "small_cargo", Ship, Resources::new(2000, 2000, 0), 1.0, &[
        (SHIPYARD, 2),
        (COMBUSTION_DRIVE, 2),
    ]))?;
    b.register(entry(LARGE_CARGO, "large_cargo", Ship, Resources::new(6000, 6000, 0), 1.0, &[
        (SHIPYARD, 4),
        (COMBUSTION_DRIVE, 6),
    ]))?;
    b.register(entry(LIGHT_FIGHTER, "light_fighter", Ship, Resources::new(3000, 1000, 0), 1.0, &[
        (SHIPYARD, 1),
        (COMBUSTION_DRIVE, 1),
    ]))?;
    b.register(entry(HEAVY_FIGHTER, "heavy_fighter", Ship, Resources::new(6000, 4000, 0), 1.0, &[
        (SHIPYARD, 3),
        (ARMOUR_TECHNOLOGY, 2),
        (IMPULSE_DRIVE, 2),
    ]))?;
    b.register(entry(CRUISER, "cruiser", Ship, Resources::new(20_000, 7000, 2000), 1.0, &[
        (SHIPYARD, 5),
        (IMPULSE_DRIVE, 4),
        (ION_TECHNOLOGY, 2),
    ]))?;
    b.register(entry(BATTLESHIP, "battleship", Ship, Resources::new(45_000, 15_000, 0), 1.0, &[
        (SHIPYARD, 7),
        (HYPERSPACE_DRIVE, 4),
    ]))?;
    b.register(entry(COLONY_SHIP, "colony_ship", Ship, Resources::new(10_000, 20_000, 10_000), 1.0, &[
        (SHIPYARD, 4),
        (IMPULSE_DRIVE, 3),
    ]))?;
    b.register(entry(RECYCLER, "recycler", Ship, Resources::new(10_000, 6000, 2000), 1.0, &[
        (SHIPYARD, 4),
        (COMBUSTION_DRIVE, 6),
        (SHIELDING_TECHNOLOGY, 2),
    ]))?;
    b.register(entry(ESPIONAGE_PROBE, "espionage_probe", Ship, Resources::new(0, 1000, 0), 1.0, &[
        (SHIPYARD, 3),
        (COMBUSTION_DRIVE, 3),
        (ESPIONAGE_TECHNOLOGY, 2),
    ]))?;
    b.register(entry(BOMBER, "bomber", Ship, Resources::new(50_000, 25_000, 15_000), 1.0, &[
        (SHIPYARD, 8),
        (IMPULSE_DRIVE, 6),
        (PLASMA_TECHNOLOGY, 5),
    ]))?;
    b.register(entry(SOLAR_SATELLITE, "solar_satellite", Ship, Resources::new(0, 2000, 500), 1.0, &[
        (SHIPYARD, 1),
    ]))?;
    b.register(entry(DESTROYER, "destroyer", Ship, Resources::new(60_000, 50_000, 15_000), 1.0, &[
        (SHIPYARD, 9),
        (HYPERSPACE_DRIVE, 6),
        (HYPERSPACE_TECHNOLOGY, 5),
    ]))?;
    b.register(entry(DEATHSTAR, "deathstar", Ship, Resources::new(5_000_000, 4_000_000, 1_000_000), 1.0, &[
        (SHIPYARD, 12),
        (HYPERSPACE_DRIVE, 7),
        (HYPERSPACE_TECHNOLOGY, 6),
        (GRAVITON_TECHNOLOGY, 1),
    ]))?;
    b.register(entry(BATTLECRUISER, "battlecruiser", Ship, Resources::new(30_000, 40_000, 15_000), 1.0, &[
        (SHIPYARD, 8),
        (HYPERSPACE_TECHNOLOGY, 5),
        (HYPERSPACE_DRIVE, 5),
        (LASER_TECHNOLOGY, 12),
    ]))?;

    // Defense. Unit prices like ships.
    b.register(entry(ROCKET_LAUNCHER, "rocket_launcher", Defense, Resources::new(2000, 0, 0), 1.0, &[
        (SHIPYARD, 1),
    ]))?;
    b.register(entry(LIGHT_LASER, "light_laser", Defense, Resources::new(1500, 500, 0), 1.0, &[
        (SHIPYARD, 2),
        (LASER_TECHNOLOGY, 3),
    ]))?;
    b.register(entry(HEAVY_LASER, "heavy_laser", Defense, Resources::new(6000, 2000, 0), 1.0, &[
        (SHIPYARD, 4),
        (ENERGY_TECHNOLOGY, 3),
        (LASER_TECHNOLOGY, 6),
    ]))?;
    b.register(entry(GAUSS_CANNON, "gauss_cannon", Defense, Resources::new(20_000, 15_000, 2000), 1.0, &[
        (SHIPYARD, 6),
        (ENERGY_TECHNOLOGY, 6),
        (WEAPONS_TECHNOLOGY, 3),
        (SHIELDING_TECHNOLOGY, 1),
    ]))?;
    b.register(entry(ION_CANNON, "ion_cannon", Defense, Resources::new(2000, 6000, 0), 1.0, &[
        (SHIPYARD, 4),
        (ION_TECHNOLOGY, 4),
    ]))?;
    b.register(entry(PLASMA_TURRET, "plasma_turret", Defense, Resources::new(50_000, 50_000, 30_000), 1.0, &[
        (SHIPYARD, 8),
        (PLASMA_TECHNOLOGY, 7),
    ]))?;
    b.register(entry(SMALL_SHIELD_DOME, "small_shield_dome", Defense, Resources::new(10_000, 10_000, 0), 1.0, &[
        (SHIPYARD, 1),
        (SHIELDING_TECHNOLOGY, 2),
    ]))?;
    b.register(entry(LARGE_SHIELD_DOME, "large_shield_dome", Defense, Resources::new(50_000, 50_000, 0), 1.0, &[
        (SHIPYARD, 6),
        (SHIELDING_TECHNOLOGY, 6),
    ]))?;
    b.register(entry(ANTI_BALLISTIC_MISSILES, "anti_ballistic_missiles", Defense, Resources::new(8000, 0, 2000), 1.0, &[
        (MISSILE_SILO, 2),
    ]))?;
    b.register(entry(INTERPLANETARY_MISSILES, "interplanetary_missiles", Defense, Resources::new(12_500, 2500, 10_000), 1.0, &[
        (MISSILE_SILO, 4),
        (IMPULSE_DRIVE, 1),
    ]))?;

    b.build()
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| {
    // The table above fails to build only if it was edited inconsistently;
    // build_standard() is under test.
    build_standard().expect("standard entity table must build")
});

impl Catalog {
    /// The process-wide standard catalog, built lazily on first access and
    /// read-only thereafter. Safe to hand to any number of threads.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_builds() {
        assert!(build_standard().is_ok());
    }

    #[test]
    fn global_accessor_returns_one_shared_instance() {
        let a: *const Catalog = Catalog::standard();
        let b: *const Catalog = Catalog::standard();
        assert_eq!(a, b);
    }

    #[test]
    fn category_counts() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.buildings().count(), 19);
        assert_eq!(catalog.research().count(), 16);
        assert_eq!(catalog.ships().count(), 14);
        assert_eq!(catalog.defenses().count(), 10);
        assert_eq!(catalog.len(), 59);
    }

    #[test]
    fn ids_resolve_to_their_names() {
        let catalog = Catalog::standard();
        for (id, name) in [
            (METAL_MINE, "metal_mine"),
            (RESEARCH_LAB, "research_lab"),
            (ENERGY_TECHNOLOGY, "energy_technology"),
            (SMALL_CARGO, "small_cargo"),
            (DEATHSTAR, "deathstar"),
            (INTERPLANETARY_MISSILES, "interplanetary_missiles"),
        ] {
            let def = catalog.lookup(id).unwrap();
            assert_eq!(def.id, id);
            assert_eq!(def.name, name);
            assert_eq!(catalog.id_by_name(name), Some(id));
        }
    }

    #[test]
    fn known_base_costs() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.lookup(METAL_MINE).unwrap().base_cost,
            Resources::new(60, 15, 0)
        );
        assert_eq!(
            catalog.lookup(ENERGY_TECHNOLOGY).unwrap().base_cost,
            Resources::new(0, 800, 400)
        );
        assert_eq!(
            catalog.lookup(DEATHSTAR).unwrap().base_cost,
            Resources::new(5_000_000, 4_000_000, 1_000_000)
        );
    }

    #[test]
    fn time_constants_by_category() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.lookup(ENERGY_TECHNOLOGY).unwrap().time_constant, 1000);
        assert_eq!(catalog.lookup(METAL_MINE).unwrap().time_constant, 2500);
        assert_eq!(catalog.lookup(SMALL_CARGO).unwrap().time_constant, 2500);
        assert_eq!(catalog.lookup(ROCKET_LAUNCHER).unwrap().time_constant, 2500);
    }

    #[test]
    fn ships_and_defense_have_flat_growth() {
        let catalog = Catalog::standard();
        for def in catalog.ships().chain(catalog.defenses()) {
            assert_eq!(def.growth_factor, 1.0, "{} should be flat-priced", def.name);
        }
    }

    #[test]
    fn leveled_categories_have_growth_above_one() {
        let catalog = Catalog::standard();
        for def in catalog.buildings().chain(catalog.research()) {
            assert!(def.growth_factor > 1.0, "{} should grow per level", def.name);
        }
    }

    #[test]
    fn graviton_is_priced_in_energy_only() {
        let def = Catalog::standard().lookup(GRAVITON_TECHNOLOGY).unwrap();
        assert_eq!(def.base_cost.metal, 0);
        assert_eq!(def.base_cost.crystal, 0);
        assert_eq!(def.base_cost.deuterium, 0);
        assert_eq!(def.base_cost.energy, 300_000);
    }

    #[test]
    fn requirement_chains_in_declared_order() {
        let catalog = Catalog::standard();

        let nanite = catalog.lookup(NANITE_FACTORY).unwrap();
        let reqs: Vec<_> = nanite
            .requirements
            .iter()
            .map(|r| (r.entity, r.level))
            .collect();
        assert_eq!(reqs, vec![(ROBOTICS_FACTORY, 10), (COMPUTER_TECHNOLOGY, 10)]);

        let deathstar = catalog.lookup(DEATHSTAR).unwrap();
        let reqs: Vec<_> = deathstar
            .requirements
            .iter()
            .map(|r| (r.entity, r.level))
            .collect();
        assert_eq!(
            reqs,
            vec![
                (SHIPYARD, 12),
                (HYPERSPACE_DRIVE, 7),
                (HYPERSPACE_TECHNOLOGY, 6),
                (GRAVITON_TECHNOLOGY, 1),
            ]
        );
    }

    #[test]
    fn base_buildings_have_no_requirements() {
        let catalog = Catalog::standard();
        for id in [METAL_MINE, CRYSTAL_MINE, SOLAR_PLANT, RESEARCH_LAB, ROBOTICS_FACTORY] {
            assert!(catalog.lookup(id).unwrap().requirements.is_empty());
        }
    }

    #[test]
    fn registration_order_groups_categories() {
        // Buildings first, then research, ships, defense; consumers rely on
        // this order being stable.
        let catalog = Catalog::standard();
        let first_research = catalog
            .all()
            .iter()
            .position(|e| e.category == Category::Research)
            .unwrap();
        assert!(
            catalog.all()[..first_research]
                .iter()
                .all(|e| e.category == Category::Building)
        );
        assert_eq!(catalog.all()[0].id, METAL_MINE);
        assert_eq!(catalog.all()[catalog.len() - 1].id, INTERPLANETARY_MISSILES);
    }
}
