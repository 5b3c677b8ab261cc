//! Cost calculation: what a target level (or a batch of units) costs.
//!
//! `cost = base_cost * growth_factor^(level - 1)` per component, each
//! component rounded half-up to the nearest whole unit -- the reference
//! server accumulates fractional resource units upward, and the recorded
//! samples in the integration tests pin that rule. Components saturate at
//! `u64::MAX` instead of overflowing for absurd levels.

use crate::catalog::{Catalog, EntityDef};
use crate::error::CalcError;
use crate::id::{EntityId, Level};
use crate::resources::Resources;

/// Exponential growth with half-up rounding for one component.
fn component(base: u64, factor: f64, level: Level) -> u64 {
    if base == 0 {
        return 0;
    }
    // powi saturates the exponent; with factor >= 1 the result at i32::MAX
    // is +inf, which the float-to-int cast turns into u64::MAX.
    let exponent = (level - 1).min(i32::MAX as u32) as i32;
    let scaled = base as f64 * factor.powi(exponent);
    // For non-negative values, round() is exactly round-half-up.
    scaled.round() as u64
}

/// Cost of `level` for an already-resolved entry. `level` must be >= 1.
pub fn cost_of(def: &EntityDef, level: Level) -> Result<Resources, CalcError> {
    if level < 1 {
        return Err(CalcError::InvalidLevel { level });
    }
    Ok(Resources {
        metal: component(def.base_cost.metal, def.growth_factor, level),
        crystal: component(def.base_cost.crystal, def.growth_factor, level),
        deuterium: component(def.base_cost.deuterium, def.growth_factor, level),
        energy: component(def.base_cost.energy, def.growth_factor, level),
    })
}

/// Cost of raising `entity` to `level` in `catalog`.
pub fn cost_in(catalog: &Catalog, entity: EntityId, level: Level) -> Result<Resources, CalcError> {
    let def = catalog.lookup(entity)?;
    cost_of(def, level)
}

/// Cost of one unit of `entity`. For flat-priced categories (ships,
/// defense) this is the per-unit price; for leveled categories it equals
/// the level-1 cost. Exact -- no float arithmetic is involved.
pub fn unit_cost_in(catalog: &Catalog, entity: EntityId) -> Result<Resources, CalcError> {
    Ok(catalog.lookup(entity)?.base_cost)
}

/// Cost of a batch of `count` units of `entity`. A count of zero prices an
/// empty order: zero.
pub fn fleet_cost_in(
    catalog: &Catalog,
    entity: EntityId,
    count: u64,
) -> Result<Resources, CalcError> {
    Ok(unit_cost_in(catalog, entity)?.scaled(count))
}

/// [`cost_in`] against the standard catalog.
pub fn cost(entity: EntityId, level: Level) -> Result<Resources, CalcError> {
    cost_in(Catalog::standard(), entity, level)
}

/// [`unit_cost_in`] against the standard catalog.
pub fn unit_cost(entity: EntityId) -> Result<Resources, CalcError> {
    unit_cost_in(Catalog::standard(), entity)
}

/// [`fleet_cost_in`] against the standard catalog.
pub fn fleet_cost(entity: EntityId, count: u64) -> Result<Resources, CalcError> {
    fleet_cost_in(Catalog::standard(), entity, count)
}
