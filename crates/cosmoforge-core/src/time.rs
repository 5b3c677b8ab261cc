//! Construction time calculation.
//!
//! `time_hours = (metal + crystal) / (K * (1 + F) * 2^nanite * speed)`,
//! truncated down to whole seconds. `K` is the entry's time constant, `F`
//! the category-selected facility level (research lab for research,
//! robotics factory for buildings, shipyard for ships/defense), and the
//! `2^nanite` term applies to everything except research. Deuterium and
//! energy never enter the formula.
//!
//! The whole computation runs in wide integers so truncation boundaries are
//! exact; that also makes the speed-scaling identity
//! `t(k * speed) == t(speed) / k` hold exactly under floor division.

use crate::catalog::{Catalog, Category, EntityDef};
use crate::cost;
use crate::error::CalcError;
use crate::facilities::Facilities;
use crate::id::{EntityId, Level, UniverseSpeed};
use std::time::Duration;

/// The category dispatch: which facility divides, and whether the nanite
/// factory doubles the divisor per level.
fn divisor_facilities(category: Category, facilities: &Facilities) -> (Level, Level) {
    match category {
        Category::Research => (facilities.research_lab, 0),
        Category::Building => (facilities.robotics_factory, facilities.nanite_factory),
        Category::Ship | Category::Defense => (facilities.shipyard, facilities.nanite_factory),
    }
}

/// `build_mass * 3600 / (K * (1 + F) * 2^nanite * speed)`, floored.
///
/// The divisor is assembled with checked arithmetic: if it exceeds `u128`
/// (absurd nanite levels), the duration is below one second and truncates
/// to zero anyway.
fn divided_seconds(
    build_mass: u64,
    time_constant: u64,
    facility_level: Level,
    nanite_level: Level,
    speed: UniverseSpeed,
) -> u64 {
    let numerator = build_mass as u128 * 3600;
    let divisor = 1u128
        .checked_shl(nanite_level)
        .and_then(|pow2| (time_constant as u128).checked_mul(pow2))
        .and_then(|d| d.checked_mul(1 + facility_level as u128))
        .and_then(|d| d.checked_mul(speed as u128));
    match divisor {
        Some(d) => u64::try_from(numerator / d).unwrap_or(u64::MAX),
        None => 0,
    }
}

/// Construction time of `level` for an already-resolved entry.
pub fn construction_time_of(
    def: &EntityDef,
    level: Level,
    speed: UniverseSpeed,
    facilities: &Facilities,
) -> Result<Duration, CalcError> {
    if level < 1 {
        return Err(CalcError::InvalidLevel { level });
    }
    if speed == 0 {
        return Err(CalcError::InvalidSpeed { speed });
    }
    let price = cost::cost_of(def, level)?;
    let build_mass = price.metal.saturating_add(price.crystal);
    let (facility_level, nanite_level) = divisor_facilities(def.category, facilities);
    Ok(Duration::from_secs(divided_seconds(
        build_mass,
        def.time_constant,
        facility_level,
        nanite_level,
        speed,
    )))
}

/// Time to raise `entity` to `level` in `catalog`, at `speed`, with the
/// given facilities.
pub fn construction_time_in(
    catalog: &Catalog,
    entity: EntityId,
    level: Level,
    speed: UniverseSpeed,
    facilities: &Facilities,
) -> Result<Duration, CalcError> {
    let def = catalog.lookup(entity)?;
    construction_time_of(def, level, speed, facilities)
}

/// Time to build a batch of `count` units: the truncated per-unit time,
/// scaled by the count. The server schedules batches exactly this way, so
/// the per-unit truncation happens before the multiplication.
pub fn fleet_construction_time_in(
    catalog: &Catalog,
    entity: EntityId,
    count: u64,
    speed: UniverseSpeed,
    facilities: &Facilities,
) -> Result<Duration, CalcError> {
    let def = catalog.lookup(entity)?;
    if speed == 0 {
        return Err(CalcError::InvalidSpeed { speed });
    }
    let unit = def.base_cost;
    let build_mass = unit.metal.saturating_add(unit.crystal);
    let (facility_level, nanite_level) = divisor_facilities(def.category, facilities);
    let per_unit = divided_seconds(
        build_mass,
        def.time_constant,
        facility_level,
        nanite_level,
        speed,
    );
    Ok(Duration::from_secs(per_unit.saturating_mul(count)))
}

/// [`construction_time_in`] against the standard catalog.
pub fn construction_time(
    entity: EntityId,
    level: Level,
    speed: UniverseSpeed,
    facilities: &Facilities,
) -> Result<Duration, CalcError> {
    construction_time_in(Catalog::standard(), entity, level, speed, facilities)
}

/// [`fleet_construction_time_in`] against the standard catalog.
pub fn fleet_construction_time(
    entity: EntityId,
    count: u64,
    speed: UniverseSpeed,
    facilities: &Facilities,
) -> Result<Duration, CalcError> {
    fleet_construction_time_in(Catalog::standard(), entity, count, speed, facilities)
}
