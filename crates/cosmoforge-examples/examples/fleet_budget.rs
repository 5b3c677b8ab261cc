//! Fleet budget example: pricing a mixed order of units.
//!
//! Prices a fleet shopping list, times its construction on a given
//! shipyard, and checks the bill against the resources on hand.
//!
//! Run with: `cargo run -p cosmoforge-examples --example fleet_budget`

use cosmoforge_core::catalog::Catalog;
use cosmoforge_core::cost;
use cosmoforge_core::facilities::Facilities;
use cosmoforge_core::resources::Resources;
use cosmoforge_core::standard;
use cosmoforge_core::time;
use std::time::Duration;

fn hms(d: Duration) -> String {
    let s = d.as_secs();
    format!("{}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

fn main() {
    let catalog = Catalog::standard();

    let facilities = Facilities {
        shipyard: 6,
        nanite_factory: 1,
        ..Facilities::default()
    };
    let speed = 7;

    // --- The order ---

    let order = [
        (standard::SMALL_CARGO, 25u64),
        (standard::LIGHT_FIGHTER, 100),
        (standard::CRUISER, 15),
        (standard::ESPIONAGE_PROBE, 10),
    ];

    println!(
        "Shipyard {}, nanite {}, speed x{}\n",
        facilities.shipyard, facilities.nanite_factory, speed
    );
    println!(
        "{:<18} {:>6} {:>12} {:>12} {:>12} {:>12}",
        "unit", "count", "metal", "crystal", "deuterium", "time"
    );

    let mut bill = Resources::ZERO;
    let mut wait = Duration::ZERO;
    for &(unit, count) in &order {
        let def = catalog.lookup(unit).expect("known id");
        let line_cost = cost::fleet_cost(unit, count).expect("known id");
        let line_time =
            time::fleet_construction_time(unit, count, speed, &facilities).expect("known id");

        bill = bill.saturating_add(line_cost);
        wait += line_time;

        println!(
            "{:<18} {:>6} {:>12} {:>12} {:>12} {:>12}",
            def.name,
            count,
            line_cost.metal,
            line_cost.crystal,
            line_cost.deuterium,
            hms(line_time),
        );
    }

    println!(
        "\nBill:  {} metal, {} crystal, {} deuterium",
        bill.metal, bill.crystal, bill.deuterium
    );
    println!("Queue: {} ({} seconds)", hms(wait), wait.as_secs());

    // --- Check against the treasury ---

    let treasury = Resources::new(800_000, 400_000, 50_000);
    if treasury.covers(&bill) {
        let change = treasury.saturating_sub(bill);
        println!(
            "Affordable. Change: {} metal, {} crystal, {} deuterium",
            change.metal, change.crystal, change.deuterium
        );
    } else {
        let short = bill.saturating_sub(treasury);
        println!(
            "Short by {} metal, {} crystal, {} deuterium",
            short.metal, short.crystal, short.deuterium
        );
    }

    // A single unit line scales linearly with its count.
    let one = cost::unit_cost(standard::CRUISER).expect("known id");
    assert_eq!(one.scaled(15), cost::fleet_cost(standard::CRUISER, 15).expect("known id"));

    println!("\nFleet budget demo complete.");
}
