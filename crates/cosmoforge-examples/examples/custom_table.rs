//! Custom table example: loading a house-rules entity table from disk.
//!
//! Writes a small modified table to a temporary directory, loads it through
//! the data pipeline, and evaluates against the loaded catalog instead of
//! the compiled-in standard one.
//!
//! Run with: `cargo run -p cosmoforge-examples --example custom_table`

use cosmoforge_core::catalog::Catalog;
use cosmoforge_core::cost;
use cosmoforge_core::query::{evaluate_in, EmpireSnapshot};
use cosmoforge_core::standard;
use cosmoforge_data::load_catalog;
use std::fs;

// House rules: mines grow gently (1.3 instead of 1.5) and a new orbital
// forge gates a custom interceptor ship. Requirement names may refer
// forward.
const HOUSE_RULES: &str = r#"[
    (
        id: 1,
        name: "metal_mine",
        category: building,
        cost: (metal: 60, crystal: 15),
        growth: 1.3,
    ),
    (
        id: 900,
        name: "interceptor",
        category: ship,
        cost: (metal: 4000, crystal: 2500),
        requires: [("orbital_forge", 2)],
    ),
    (
        id: 60,
        name: "orbital_forge",
        category: building,
        cost: (metal: 800, crystal: 400, deuterium: 150),
        growth: 2.0,
    ),
]"#;

fn main() {
    // --- Write and load the table ---

    let dir = std::env::temp_dir().join(format!("cosmoforge_house_rules_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create table dir");
    fs::write(dir.join("entities.ron"), HOUSE_RULES).expect("write table");

    let catalog = load_catalog(&dir).expect("load house rules");
    println!("Loaded {} house-rule entries.\n", catalog.len());

    // --- Compare against the standard table ---

    let house_mine = cost::cost_in(&catalog, standard::METAL_MINE, 10).expect("known id");
    let standard_mine = cost::cost(standard::METAL_MINE, 10).expect("known id");
    println!(
        "metal_mine level 10: {} metal under house rules, {} standard",
        house_mine.metal, standard_mine.metal
    );
    assert!(house_mine.metal < standard_mine.metal);

    // --- Evaluate a custom entry ---

    let forge = catalog.id_by_name("orbital_forge").expect("registered");
    let interceptor = catalog.id_by_name("interceptor").expect("registered");

    let mut snapshot = EmpireSnapshot::new(4);
    snapshot.facilities.robotics_factory = 3;

    let report = evaluate_in(&catalog, interceptor, &snapshot).expect("evaluate");
    println!(
        "\ninterceptor: {} metal, {} crystal, ready: {}",
        report.cost.metal, report.cost.crystal, report.satisfied
    );
    for shortfall in &report.missing {
        let blocked_on = catalog.lookup(shortfall.entity).expect("known id");
        println!(
            "  blocked on {} level {}",
            blocked_on.name, shortfall.required
        );
    }
    assert_eq!(report.missing[0].entity, forge);

    // The standard catalog is untouched by any of this.
    assert!(Catalog::standard().id_by_name("orbital_forge").is_none());

    let _ = fs::remove_dir_all(&dir);
    println!("\nCustom table demo complete.");
}
