use crate::error::CalcError;
use crate::id::{EntityId, Level};
use crate::resources::Resources;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four entity categories. Each picks its own time-formula divisor, so
/// the set is a closed enum matched exhaustively at the single dispatch point
/// in the time calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Research,
    Building,
    Ship,
    Defense,
}

impl Category {
    /// The reference server's time-formula constant for entries of this
    /// category. Entries carry the resolved value so a future server-side
    /// rebalance can override it per entry.
    pub fn default_time_constant(self) -> u64 {
        match self {
            Category::Research => 1000,
            Category::Building | Category::Ship | Category::Defense => 2500,
        }
    }
}

/// A declared prerequisite: `entity` must be at least at `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub entity: EntityId,
    pub level: Level,
}

/// One catalog entry. Immutable once registered; shared by reference across
/// all calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    pub id: EntityId,
    pub name: String,
    pub category: Category,
    /// Cost of level 1 (or of one unit, for ships and defense).
    pub base_cost: Resources,
    /// Per-level cost multiplier, >= 1. Exactly 1 for ships and defense,
    /// whose units always cost the base amount.
    pub growth_factor: f64,
    /// Divisor constant of the time formula.
    pub time_constant: u64,
    /// Direct declared prerequisites, in the server's published order.
    pub requirements: Vec<Requirement>,
}

/// Builder for constructing an immutable [`Catalog`].
/// Register all entries, then freeze with [`build`](CatalogBuilder::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<EntityDef>,
    id_to_index: HashMap<EntityId, usize>,
    name_to_id: HashMap<String, EntityId>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry. Per-entry invariants (unique id and name, growth
    /// factor >= 1, requirement levels >= 1, no self-requirement) are checked
    /// here; cross-entry requirement references are checked at
    /// [`build`](CatalogBuilder::build) so entries may be registered in any
    /// order.
    pub fn register(&mut self, def: EntityDef) -> Result<EntityId, CatalogError> {
        if self.id_to_index.contains_key(&def.id) {
            return Err(CatalogError::DuplicateId {
                id: def.id,
                name: def.name,
            });
        }
        if self.name_to_id.contains_key(&def.name) {
            return Err(CatalogError::DuplicateName { name: def.name });
        }
        if !def.growth_factor.is_finite() || def.growth_factor < 1.0 {
            return Err(CatalogError::GrowthBelowOne {
                name: def.name,
                growth: def.growth_factor,
            });
        }
        if def.time_constant == 0 {
            return Err(CatalogError::ZeroTimeConstant { name: def.name });
        }
        for req in &def.requirements {
            if req.level < 1 {
                return Err(CatalogError::ZeroRequirementLevel { name: def.name });
            }
            if req.entity == def.id {
                return Err(CatalogError::SelfRequirement { name: def.name });
            }
        }

        let id = def.id;
        self.id_to_index.insert(id, self.entries.len());
        self.name_to_id.insert(def.name.clone(), id);
        self.entries.push(def);
        Ok(id)
    }

    /// Lookup an already-registered id by name.
    pub fn id_by_name(&self, name: &str) -> Option<EntityId> {
        self.name_to_id.get(name).copied()
    }

    /// Freeze the catalog. Validates that every requirement references a
    /// registered entity. Requirement sets must be acyclic; that is a
    /// property of the registered table (hand-verified for the standard
    /// table and exercised by the progression tests), not a runtime check.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        for def in &self.entries {
            for req in &def.requirements {
                if !self.id_to_index.contains_key(&req.entity) {
                    return Err(CatalogError::UnknownRequirement {
                        name: def.name.clone(),
                        requirement: req.entity,
                    });
                }
            }
        }

        Ok(Catalog {
            entries: self.entries,
            id_to_index: self.id_to_index,
            name_to_id: self.name_to_id,
        })
    }
}

/// Immutable entity catalog. Frozen after build(); safe to share across
/// threads without synchronization (no `&mut self` methods exist).
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<EntityDef>,
    id_to_index: HashMap<EntityId, usize>,
    name_to_id: HashMap<String, EntityId>,
}

impl Catalog {
    /// Lookup an entry by id. Unregistered ids signal
    /// [`CalcError::UnknownEntity`].
    pub fn lookup(&self, id: EntityId) -> Result<&EntityDef, CalcError> {
        self.id_to_index
            .get(&id)
            .map(|&i| &self.entries[i])
            .ok_or(CalcError::UnknownEntity { id })
    }

    /// Lookup an id by entry name.
    pub fn id_by_name(&self, name: &str) -> Option<EntityId> {
        self.name_to_id.get(name).copied()
    }

    /// All entries in registration order. The order is stable and is the
    /// traversal order used by the requirement resolver and by consumers
    /// that need deterministic iteration.
    pub fn all(&self) -> &[EntityDef] {
        &self.entries
    }

    /// Entries of one category, in registration order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &EntityDef> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn research(&self) -> impl Iterator<Item = &EntityDef> {
        self.in_category(Category::Research)
    }

    pub fn buildings(&self) -> impl Iterator<Item = &EntityDef> {
        self.in_category(Category::Building)
    }

    pub fn ships(&self) -> impl Iterator<Item = &EntityDef> {
        self.in_category(Category::Ship)
    }

    pub fn defenses(&self) -> impl Iterator<Item = &EntityDef> {
        self.in_category(Category::Defense)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate entity id {} ('{name}')", .id.0)]
    DuplicateId { id: EntityId, name: String },
    #[error("duplicate entity name '{name}'")]
    DuplicateName { name: String },
    #[error("growth factor {growth} must be finite and >= 1 for '{name}'")]
    GrowthBelowOne { name: String, growth: f64 },
    #[error("time constant 0 for '{name}': would divide by zero")]
    ZeroTimeConstant { name: String },
    #[error("requirement with level 0 on '{name}': minimum levels start at 1")]
    ZeroRequirementLevel { name: String },
    #[error("'{name}' declares itself as a requirement")]
    SelfRequirement { name: String },
    #[error("'{name}' requires unregistered entity id {}", .requirement.0)]
    UnknownRequirement { name: String, requirement: EntityId },
}
