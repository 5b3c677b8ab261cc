//! Unlock path example: expanding shortfalls into a full build plan.
//!
//! The requirement resolver reports only an entity's direct requirements;
//! this example shows the caller-side recursion that turns them into an
//! ordered plan. It walks the deathstar's chain from a young account down
//! to entries the account can already build, then prices the whole plan.
//!
//! Run with: `cargo run -p cosmoforge-examples --example unlock_path`

use cosmoforge_core::catalog::Catalog;
use cosmoforge_core::cost;
use cosmoforge_core::id::{EntityId, Level};
use cosmoforge_core::requirements::{is_satisfied_in, unmet_requirements_in, LevelMap};
use cosmoforge_core::resources::Resources;
use cosmoforge_core::standard;
use std::collections::HashMap;

/// One plan step: take `entity` from level `from` up to level `to`.
type Step = (EntityId, Level, Level);

/// Recursively plan `entity` up to `target`: prerequisites first, then the
/// entity itself. `planned` records the level each entity reaches once the
/// steps so far are done, so a requirement shared by two branches is only
/// planned once.
fn plan_unlock(
    catalog: &Catalog,
    entity: EntityId,
    target: Level,
    levels: &LevelMap,
    planned: &mut HashMap<EntityId, Level>,
    plan: &mut Vec<Step>,
) {
    let reached = planned
        .get(&entity)
        .copied()
        .unwrap_or_else(|| levels.get(entity));
    if reached >= target {
        return;
    }

    // Requirements gate an entity as a whole, so they only matter before
    // its first level.
    if reached == 0 {
        let missing = unmet_requirements_in(catalog, entity, levels).expect("known id");
        for shortfall in missing {
            plan_unlock(
                catalog,
                shortfall.entity,
                shortfall.required,
                levels,
                planned,
                plan,
            );
        }
    }

    plan.push((entity, reached + 1, target));
    planned.insert(entity, target);
}

/// Price every level from `from` to `to` inclusive.
fn price_span(catalog: &Catalog, entity: EntityId, from: Level, to: Level) -> Resources {
    let mut total = Resources::ZERO;
    for level in from..=to {
        total = total.saturating_add(cost::cost_in(catalog, entity, level).expect("known id"));
    }
    total
}

fn main() {
    let catalog = Catalog::standard();

    // --- The account we start from ---

    let levels: LevelMap = [
        (standard::ROBOTICS_FACTORY, 10),
        (standard::SHIPYARD, 4),
        (standard::RESEARCH_LAB, 7),
        (standard::ENERGY_TECHNOLOGY, 5),
        (standard::SHIELDING_TECHNOLOGY, 5),
        (standard::COMBUSTION_DRIVE, 5),
        (standard::IMPULSE_DRIVE, 3),
    ]
    .into_iter()
    .collect();

    // --- Expand the deathstar's requirement chain ---

    let mut planned = HashMap::new();
    let mut plan = Vec::new();
    plan_unlock(
        catalog,
        standard::DEATHSTAR,
        1,
        &levels,
        &mut planned,
        &mut plan,
    );

    println!("Unlock plan for the deathstar, {} steps:\n", plan.len());

    let mut total = Resources::ZERO;
    for &(entity, from, to) in &plan {
        let def = catalog.lookup(entity).expect("known id");
        let price = price_span(catalog, entity, from, to);
        total = total.saturating_add(price);

        let span = if from == to {
            format!("level {to}")
        } else {
            format!("levels {from} to {to}")
        };
        let energy = if price.energy > 0 {
            format!("  (+{} energy)", price.energy)
        } else {
            String::new()
        };
        println!(
            "  {:<28} {:<18} {:>12} m {:>12} c {:>12} d{}",
            def.name, span, price.metal, price.crystal, price.deuterium, energy
        );
    }

    println!(
        "\nTotal: {} metal, {} crystal, {} deuterium, {} energy",
        total.metal, total.crystal, total.deuterium, total.energy
    );

    // The plan ends with the target, and replaying it in order never hits a
    // step whose requirements the earlier steps have not met.
    assert_eq!(plan.last().map(|s| s.0), Some(standard::DEATHSTAR));
    let mut reached = levels.clone();
    for &(entity, _, to) in &plan {
        assert!(
            is_satisfied_in(catalog, entity, &reached).expect("known id"),
            "plan step out of order"
        );
        reached.set(entity, to);
    }

    println!("\nUnlock path demo complete.");
}
