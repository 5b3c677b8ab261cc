//! Upgrade planner example: evaluating candidate purchases for one account.
//!
//! Builds a snapshot of a mid-game empire, evaluates a shortlist of
//! candidates in one batch, and prints what each next step costs, how long
//! it takes under the account's facilities, and which prerequisites still
//! block it.
//!
//! Run with: `cargo run -p cosmoforge-examples --example upgrade_planner`

use cosmoforge_core::catalog::Catalog;
use cosmoforge_core::facilities::Facilities;
use cosmoforge_core::query::{evaluate_batch, EmpireSnapshot};
use cosmoforge_core::standard;
use std::time::Duration;

fn hms(d: Duration) -> String {
    let s = d.as_secs();
    format!("{}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

fn main() {
    let catalog = Catalog::standard();

    // --- Describe the account ---

    let mut snapshot = EmpireSnapshot::new(7);
    for (entity, level) in [
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
        (standard::ION_TECHNOLOGY, 2),
    ] {
        snapshot.levels.set(entity, level);
    }
    // The timing facilities come straight from the same building levels.
    snapshot.facilities = Facilities::from_levels(&snapshot.levels);

    println!(
        "Account: speed x{}, lab {}, robotics {}, shipyard {}\n",
        snapshot.universe_speed,
        snapshot.facilities.research_lab,
        snapshot.facilities.robotics_factory,
        snapshot.facilities.shipyard,
    );

    // --- Evaluate the shortlist ---

    let candidates = [
        standard::METAL_MINE,
        standard::CRYSTAL_MINE,
        standard::RESEARCH_LAB,
        standard::ENERGY_TECHNOLOGY,
        standard::PLASMA_TECHNOLOGY,
        standard::CRUISER,
        standard::BOMBER,
    ];

    let reports = evaluate_batch(&candidates, &snapshot).expect("evaluate candidates");

    println!(
        "{:<22} {:>5} {:>12} {:>12} {:>12} {:>10}  ready?",
        "entity", "level", "metal", "crystal", "deuterium", "time"
    );
    for report in &reports {
        let def = catalog.lookup(report.entity).expect("known id");
        println!(
            "{:<22} {:>5} {:>12} {:>12} {:>12} {:>10}  {}",
            def.name,
            report.level,
            report.cost.metal,
            report.cost.crystal,
            report.cost.deuterium,
            hms(report.time),
            if report.satisfied { "yes" } else { "no" },
        );
    }

    // --- Explain the blocked ones ---

    println!();
    for report in reports.iter().filter(|r| !r.satisfied) {
        let def = catalog.lookup(report.entity).expect("known id");
        println!("{} is blocked on:", def.name);
        for shortfall in &report.missing {
            let req = catalog.lookup(shortfall.entity).expect("known id");
            println!(
                "  {} level {} (currently {})",
                req.name, shortfall.required, shortfall.current
            );
        }
    }

    // Sanity: the cruiser line is buildable on this account.
    let cruiser = &reports[5];
    assert!(cruiser.satisfied);
    assert_eq!(cruiser.level, 1);

    println!("\nUpgrade planner demo complete.");
}
