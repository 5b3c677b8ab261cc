//! Serde data file structs for catalog definitions.
//!
//! These structs define the on-disk format for entity tables. They are
//! deserialized from RON, JSON, or TOML data files and then resolved into
//! catalog types by the loader. Files reference requirements by entity
//! *name*, not id, so tables stay readable and renumbering-safe.

use cosmoforge_core::catalog::Category;
use cosmoforge_core::id::Level;
use cosmoforge_core::resources::Resources;
use serde::Deserialize;

// ===========================================================================
// Entities
// ===========================================================================

/// One entity definition in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityData {
    /// The server's numeric id for this entity.
    pub id: u32,
    pub name: String,
    pub category: Category,
    /// Cost of level 1 (or of one unit). Omitted components are zero.
    #[serde(default)]
    pub cost: CostData,
    /// Per-level cost multiplier. Defaults to 1 (flat pricing).
    #[serde(default = "default_growth")]
    pub growth: f64,
    /// Time-formula divisor constant. Omitted means the category default.
    #[serde(default)]
    pub time_constant: Option<u64>,
    /// Direct requirements as `(name, minimum_level)` pairs.
    #[serde(default)]
    pub requires: Vec<(String, Level)>,
}

fn default_growth() -> f64 {
    1.0
}

/// A resource amount in a data file. Every component is optional.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CostData {
    #[serde(default)]
    pub metal: u64,
    #[serde(default)]
    pub crystal: u64,
    #[serde(default)]
    pub deuterium: u64,
    #[serde(default)]
    pub energy: u64,
}

impl From<CostData> for Resources {
    fn from(cost: CostData) -> Self {
        Resources::new(cost.metal, cost.crystal, cost.deuterium).with_energy(cost.energy)
    }
}

// ===========================================================================
// TOML wrappers (TOML does not support top-level arrays)
// ===========================================================================

/// Wrapper for a list of entities in TOML format.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlEntities {
    pub entities: Vec<EntityData>,
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // RON deserialization
    // -----------------------------------------------------------------------

    #[test]
    fn entity_data_from_ron() {
        let ron = r#"
            (
                id: 1,
                name: "metal_mine",
                category: building,
                cost: (metal: 60, crystal: 15),
                growth: 1.5,
            )
        "#;
        let entity: EntityData = ron::from_str(ron).unwrap();
        assert_eq!(entity.id, 1);
        assert_eq!(entity.name, "metal_mine");
        assert_eq!(entity.category, Category::Building);
        assert_eq!(entity.cost.metal, 60);
        assert_eq!(entity.cost.deuterium, 0);
        assert!((entity.growth - 1.5).abs() < f64::EPSILON);
        assert_eq!(entity.time_constant, None);
        assert!(entity.requires.is_empty());
    }

    #[test]
    fn entity_data_with_requirements_from_ron() {
        let ron = r#"
            (
                id: 21,
                name: "shipyard",
                category: building,
                cost: (metal: 400, crystal: 200, deuterium: 100),
                growth: 2.0,
                requires: [("robotics_factory", 2)],
            )
        "#;
        let entity: EntityData = ron::from_str(ron).unwrap();
        assert_eq!(entity.requires, vec![("robotics_factory".to_string(), 2)]);
    }

    #[test]
    fn entity_data_energy_priced_from_ron() {
        let ron = r#"
            (
                id: 199,
                name: "graviton_technology",
                category: research,
                cost: (energy: 300000),
                growth: 3.0,
            )
        "#;
        let entity: EntityData = ron::from_str(ron).unwrap();
        assert_eq!(entity.cost.energy, 300_000);
        assert_eq!(entity.cost.metal, 0);
        let resources: Resources = entity.cost.into();
        assert_eq!(resources, Resources::ZERO.with_energy(300_000));
    }

    #[test]
    fn entity_data_defaults_from_ron() {
        // A bare unit: flat pricing, no requirements, category time constant.
        let ron = r#"(id: 401, name: "rocket_launcher", category: defense, cost: (metal: 2000))"#;
        let entity: EntityData = ron::from_str(ron).unwrap();
        assert!((entity.growth - 1.0).abs() < f64::EPSILON);
        assert_eq!(entity.time_constant, None);
        assert!(entity.requires.is_empty());
    }

    // -----------------------------------------------------------------------
    // JSON deserialization
    // -----------------------------------------------------------------------

    #[test]
    fn entity_data_from_json() {
        let json = r#"{
            "id": 113,
            "name": "energy_technology",
            "category": "research",
            "cost": {"crystal": 800, "deuterium": 400},
            "growth": 2.0,
            "requires": [["research_lab", 1]]
        }"#;
        let entity: EntityData = serde_json::from_str(json).unwrap();
        assert_eq!(entity.category, Category::Research);
        assert_eq!(entity.cost.crystal, 800);
        assert_eq!(entity.requires[0].0, "research_lab");
    }

    // -----------------------------------------------------------------------
    // TOML deserialization (requires wrapper struct)
    // -----------------------------------------------------------------------

    #[test]
    fn entities_from_toml() {
        let toml_str = r#"
            [[entities]]
            id = 1
            name = "metal_mine"
            category = "building"
            growth = 1.5

            [entities.cost]
            metal = 60
            crystal = 15

            [[entities]]
            id = 14
            name = "robotics_factory"
            category = "building"
            growth = 2.0
        "#;
        let wrapper: TomlEntities = toml::from_str(toml_str).unwrap();
        assert_eq!(wrapper.entities.len(), 2);
        assert_eq!(wrapper.entities[0].name, "metal_mine");
        assert_eq!(wrapper.entities[1].cost.metal, 0);
    }

    #[test]
    fn explicit_time_constant_overrides_from_toml() {
        let toml_str = r#"
            [[entities]]
            id = 90
            name = "prototype_dock"
            category = "building"
            time_constant = 4000
        "#;
        let wrapper: TomlEntities = toml::from_str(toml_str).unwrap();
        assert_eq!(wrapper.entities[0].time_constant, Some(4000));
    }
}
